use crate::capability::{
    Arg, CloseFn, ConnectFn, NumericOutFn, PipeJsonFn, PipeSignalFn, PipeWaitFn, StatusFn,
    StringOutFn, TransformFn,
};
use crate::error::{Result, TableError};
use crate::ops;

/// The full set of native entry points this layer depends on.
///
/// Shared read-only across all operations; this layer never mutates it or
/// inspects it beyond invoking the registered closures. Completeness is
/// guaranteed by [`FunctionTableBuilder::build`] or by constructing the struct
/// literally (every field is required either way).
pub struct FunctionTable {
    pub set_product_data: StatusFn,
    pub set_product_id: StatusFn,
    pub set_data_directory: StatusFn,
    pub set_debug_mode: StatusFn,
    pub set_device_fingerprint: StatusFn,
    pub set_license_key: StatusFn,
    pub set_activation_metadata: StatusFn,

    pub get_license_expiry_date: NumericOutFn,
    pub get_activation_creation_date: NumericOutFn,
    pub get_activation_mode: StringOutFn,
    pub get_activation_id: StringOutFn,
    pub get_library_version: StringOutFn,

    pub activate_license: StatusFn,
    pub activate_license_offline: StatusFn,
    pub generate_offline_deactivation_request: StatusFn,
    pub is_license_genuine: StatusFn,
    pub is_license_valid: StatusFn,
    pub reset: StatusFn,

    pub json_to_canonical: TransformFn,

    pub connect: ConnectFn,
    pub close: CloseFn,
    pub check_for_updates: PipeJsonFn,
    pub download_update: PipeJsonFn,
    pub get_update_state: PipeJsonFn,
    pub wait_for_update_state_change: PipeWaitFn,
    pub quit_and_install: PipeSignalFn,
}

impl std::fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTable").finish_non_exhaustive()
    }
}

/// Incremental registration of native entry points, dlsym-style.
///
/// `build` fails with [`TableError::MissingCapability`] naming the first
/// operation that was never registered.
#[derive(Default)]
pub struct FunctionTableBuilder {
    set_product_data: Option<StatusFn>,
    set_product_id: Option<StatusFn>,
    set_data_directory: Option<StatusFn>,
    set_debug_mode: Option<StatusFn>,
    set_device_fingerprint: Option<StatusFn>,
    set_license_key: Option<StatusFn>,
    set_activation_metadata: Option<StatusFn>,

    get_license_expiry_date: Option<NumericOutFn>,
    get_activation_creation_date: Option<NumericOutFn>,
    get_activation_mode: Option<StringOutFn>,
    get_activation_id: Option<StringOutFn>,
    get_library_version: Option<StringOutFn>,

    activate_license: Option<StatusFn>,
    activate_license_offline: Option<StatusFn>,
    generate_offline_deactivation_request: Option<StatusFn>,
    is_license_genuine: Option<StatusFn>,
    is_license_valid: Option<StatusFn>,
    reset: Option<StatusFn>,

    json_to_canonical: Option<TransformFn>,

    connect: Option<ConnectFn>,
    close: Option<CloseFn>,
    check_for_updates: Option<PipeJsonFn>,
    download_update: Option<PipeJsonFn>,
    get_update_state: Option<PipeJsonFn>,
    wait_for_update_state_change: Option<PipeWaitFn>,
    quit_and_install: Option<PipeSignalFn>,
}

impl FunctionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_product_data(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.set_product_data = Some(Box::new(f));
        self
    }

    pub fn set_product_id(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.set_product_id = Some(Box::new(f));
        self
    }

    pub fn set_data_directory(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.set_data_directory = Some(Box::new(f));
        self
    }

    pub fn set_debug_mode(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.set_debug_mode = Some(Box::new(f));
        self
    }

    pub fn set_device_fingerprint(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.set_device_fingerprint = Some(Box::new(f));
        self
    }

    pub fn set_license_key(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.set_license_key = Some(Box::new(f));
        self
    }

    pub fn set_activation_metadata(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.set_activation_metadata = Some(Box::new(f));
        self
    }

    pub fn get_license_expiry_date(
        mut self,
        f: impl Fn(&mut [u8; 4]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.get_license_expiry_date = Some(Box::new(f));
        self
    }

    pub fn get_activation_creation_date(
        mut self,
        f: impl Fn(&mut [u8; 4]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.get_activation_creation_date = Some(Box::new(f));
        self
    }

    pub fn get_activation_mode(
        mut self,
        f: impl Fn(&mut [u8]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.get_activation_mode = Some(Box::new(f));
        self
    }

    pub fn get_activation_id(
        mut self,
        f: impl Fn(&mut [u8]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.get_activation_id = Some(Box::new(f));
        self
    }

    pub fn get_library_version(
        mut self,
        f: impl Fn(&mut [u8]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.get_library_version = Some(Box::new(f));
        self
    }

    pub fn activate_license(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.activate_license = Some(Box::new(f));
        self
    }

    pub fn activate_license_offline(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.activate_license_offline = Some(Box::new(f));
        self
    }

    pub fn generate_offline_deactivation_request(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.generate_offline_deactivation_request = Some(Box::new(f));
        self
    }

    pub fn is_license_genuine(
        mut self,
        f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.is_license_genuine = Some(Box::new(f));
        self
    }

    pub fn is_license_valid(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.is_license_valid = Some(Box::new(f));
        self
    }

    pub fn reset(mut self, f: impl Fn(&[Arg<'_>]) -> i32 + Send + Sync + 'static) -> Self {
        self.reset = Some(Box::new(f));
        self
    }

    pub fn json_to_canonical(
        mut self,
        f: impl Fn(&str, &mut [u8]) -> i32 + Send + Sync + 'static,
    ) -> Self {
        self.json_to_canonical = Some(Box::new(f));
        self
    }

    pub fn connect(mut self, f: impl Fn(&str, u64) -> i32 + Send + Sync + 'static) -> Self {
        self.connect = Some(Box::new(f));
        self
    }

    pub fn close(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.close = Some(Box::new(f));
        self
    }

    pub fn check_for_updates(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.check_for_updates = Some(Box::new(f));
        self
    }

    pub fn download_update(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.download_update = Some(Box::new(f));
        self
    }

    pub fn get_update_state(mut self, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.get_update_state = Some(Box::new(f));
        self
    }

    pub fn wait_for_update_state_change(
        mut self,
        f: impl Fn(u32, u64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.wait_for_update_state_change = Some(Box::new(f));
        self
    }

    pub fn quit_and_install(mut self, f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.quit_and_install = Some(Box::new(f));
        self
    }

    /// Assemble the table, failing on the first unregistered operation.
    pub fn build(self) -> Result<FunctionTable> {
        fn require<T>(slot: Option<T>, name: &'static str) -> Result<T> {
            slot.ok_or(TableError::MissingCapability(name))
        }

        Ok(FunctionTable {
            set_product_data: require(self.set_product_data, ops::SET_PRODUCT_DATA)?,
            set_product_id: require(self.set_product_id, ops::SET_PRODUCT_ID)?,
            set_data_directory: require(self.set_data_directory, ops::SET_DATA_DIRECTORY)?,
            set_debug_mode: require(self.set_debug_mode, ops::SET_DEBUG_MODE)?,
            set_device_fingerprint: require(self.set_device_fingerprint, ops::SET_DEVICE_FINGERPRINT)?,
            set_license_key: require(self.set_license_key, ops::SET_LICENSE_KEY)?,
            set_activation_metadata: require(
                self.set_activation_metadata,
                ops::SET_ACTIVATION_METADATA,
            )?,
            get_license_expiry_date: require(
                self.get_license_expiry_date,
                ops::GET_LICENSE_EXPIRY_DATE,
            )?,
            get_activation_creation_date: require(
                self.get_activation_creation_date,
                ops::GET_ACTIVATION_CREATION_DATE,
            )?,
            get_activation_mode: require(self.get_activation_mode, ops::GET_ACTIVATION_MODE)?,
            get_activation_id: require(self.get_activation_id, ops::GET_ACTIVATION_ID)?,
            get_library_version: require(self.get_library_version, ops::GET_LIBRARY_VERSION)?,
            activate_license: require(self.activate_license, ops::ACTIVATE_LICENSE)?,
            activate_license_offline: require(
                self.activate_license_offline,
                ops::ACTIVATE_LICENSE_OFFLINE,
            )?,
            generate_offline_deactivation_request: require(
                self.generate_offline_deactivation_request,
                ops::GENERATE_OFFLINE_DEACTIVATION_REQUEST,
            )?,
            is_license_genuine: require(self.is_license_genuine, ops::IS_LICENSE_GENUINE)?,
            is_license_valid: require(self.is_license_valid, ops::IS_LICENSE_VALID)?,
            reset: require(self.reset, ops::RESET)?,
            json_to_canonical: require(self.json_to_canonical, ops::JSON_TO_CANONICAL)?,
            connect: require(self.connect, ops::CONNECT)?,
            close: require(self.close, ops::CLOSE)?,
            check_for_updates: require(self.check_for_updates, ops::CHECK_FOR_UPDATES)?,
            download_update: require(self.download_update, ops::DOWNLOAD_UPDATE)?,
            get_update_state: require(self.get_update_state, ops::GET_UPDATE_STATE)?,
            wait_for_update_state_change: require(
                self.wait_for_update_state_change,
                ops::WAIT_FOR_UPDATE_STATE_CHANGE,
            )?,
            quit_and_install: require(self.quit_and_install, ops::QUIT_AND_INSTALL)?,
        })
    }
}

impl std::fmt::Debug for FunctionTableBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTableBuilder").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_builder() -> FunctionTableBuilder {
        FunctionTableBuilder::new()
            .set_product_data(|_| 0)
            .set_product_id(|_| 0)
            .set_data_directory(|_| 0)
            .set_debug_mode(|_| 0)
            .set_device_fingerprint(|_| 0)
            .set_license_key(|_| 0)
            .set_activation_metadata(|_| 0)
            .get_license_expiry_date(|_| 0)
            .get_activation_creation_date(|_| 0)
            .get_activation_mode(|_| 0)
            .get_activation_id(|_| 0)
            .get_library_version(|_| 0)
            .activate_license(|_| 0)
            .activate_license_offline(|_| 0)
            .generate_offline_deactivation_request(|_| 0)
            .is_license_genuine(|_| 0)
            .is_license_valid(|_| 0)
            .reset(|_| 0)
            .json_to_canonical(|_, _| 0)
            .connect(|_, _| 0)
            .close(|| {})
            .check_for_updates(|_| String::new())
            .download_update(|_| String::new())
            .get_update_state(|_| String::new())
            .wait_for_update_state_change(|_, _| String::new())
            .quit_and_install(String::new)
    }

    #[test]
    fn complete_builder_builds() {
        let table = complete_builder().build().expect("all capabilities registered");
        assert_eq!((table.set_license_key)(&[Arg::Str("KEY-1")]), 0);
        assert_eq!((table.connect)("/tmp/update.pipe", 1000), 0);
    }

    #[test]
    fn missing_capability_is_named() {
        let builder = FunctionTableBuilder::new().set_product_data(|_| 0);
        let err = builder.build().expect_err("builder is incomplete");
        assert!(matches!(
            err,
            TableError::MissingCapability(ops::SET_PRODUCT_ID)
        ));
    }

    #[test]
    fn status_args_carry_strings_and_flags() {
        let table = complete_builder()
            .set_product_id(|args| match args {
                [Arg::Str(id), Arg::U32(flags)] if *id == "prod-9" && *flags == 2 => 0,
                _ => 1,
            })
            .build()
            .expect("all capabilities registered");

        assert_eq!((table.set_product_id)(&[Arg::Str("prod-9"), Arg::U32(2)]), 0);
        assert_eq!((table.set_product_id)(&[Arg::Str("other")]), 1);
    }
}
