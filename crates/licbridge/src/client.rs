use licbridge_marshal::{numeric_call, status_call, string_call};
use licbridge_pipe::{decode_envelope, decode_value, encode_request, floor_timeout_ms, with_connection};
use licbridge_table::{Arg, FunctionTable, PipeJsonFn, StringOutFn};
use serde_json::Value;

use crate::config::ClientConfig;

/// Fallback capacity for string out-parameter buffers.
pub const DEFAULT_STRING_CAPACITY: usize = 256;

/// The public surface over the native function table.
///
/// Every operation is a blocking pass-through: state setters and lifecycle
/// actions map status codes to `bool`, getters surface out-parameters as
/// `Option` values, and the update family runs one scoped pipe session per
/// call. Nothing here returns an error or panics on native misbehavior —
/// "no result" is the single failure signal for each family.
pub struct LicenseClient {
    table: FunctionTable,
    config: ClientConfig,
}

impl LicenseClient {
    pub fn new(table: FunctionTable, config: ClientConfig) -> Self {
        Self { table, config }
    }

    // --- state setters ---

    pub fn set_product_data(&self, data: &str) -> bool {
        status_call(|| (self.table.set_product_data)(&[Arg::Str(data)]))
    }

    pub fn set_product_id(&self, id: &str, flags: u32) -> bool {
        status_call(|| (self.table.set_product_id)(&[Arg::Str(id), Arg::U32(flags)]))
    }

    pub fn set_data_directory(&self, path: &str) -> bool {
        status_call(|| (self.table.set_data_directory)(&[Arg::Str(path)]))
    }

    pub fn set_debug_mode(&self, mode: u32) -> bool {
        status_call(|| (self.table.set_debug_mode)(&[Arg::U32(mode)]))
    }

    pub fn set_device_fingerprint(&self, fingerprint: &str) -> bool {
        status_call(|| (self.table.set_device_fingerprint)(&[Arg::Str(fingerprint)]))
    }

    pub fn set_license_key(&self, key: &str) -> bool {
        status_call(|| (self.table.set_license_key)(&[Arg::Str(key)]))
    }

    pub fn set_activation_metadata(&self, key: &str, value: &str) -> bool {
        status_call(|| (self.table.set_activation_metadata)(&[Arg::Str(key), Arg::Str(value)]))
    }

    // --- state getters ---

    pub fn get_license_expiry_date(&self) -> Option<u32> {
        numeric_call(|out| (self.table.get_license_expiry_date)(out))
    }

    pub fn get_activation_creation_date(&self) -> Option<u32> {
        numeric_call(|out| (self.table.get_activation_creation_date)(out))
    }

    pub fn get_activation_mode(&self) -> Option<String> {
        self.read_string(&self.table.get_activation_mode)
    }

    pub fn get_activation_id(&self) -> Option<String> {
        self.read_string(&self.table.get_activation_id)
    }

    pub fn get_library_version(&self) -> Option<String> {
        self.read_string(&self.table.get_library_version)
    }

    // --- lifecycle actions ---

    pub fn activate_license(&self) -> bool {
        status_call(|| (self.table.activate_license)(&[]))
    }

    pub fn activate_license_offline(&self, path: &str) -> bool {
        status_call(|| (self.table.activate_license_offline)(&[Arg::Str(path)]))
    }

    pub fn generate_offline_deactivation_request(&self, path: &str) -> bool {
        status_call(|| (self.table.generate_offline_deactivation_request)(&[Arg::Str(path)]))
    }

    /// `false` covers both "not genuine" and "the call failed"; the native
    /// convention cannot tell them apart.
    pub fn is_license_genuine(&self) -> bool {
        status_call(|| (self.table.is_license_genuine)(&[]))
    }

    pub fn is_license_valid(&self) -> bool {
        status_call(|| (self.table.is_license_valid)(&[]))
    }

    pub fn reset(&self) -> bool {
        status_call(|| (self.table.reset)(&[]))
    }

    // --- pipe-proxied update operations ---

    pub fn check_for_updates(&self, options: Option<&Value>) -> Option<Value> {
        self.update_call(&self.table.check_for_updates, options)
    }

    pub fn download_update(&self, options: Option<&Value>) -> Option<Value> {
        self.update_call(&self.table.download_update, options)
    }

    pub fn get_update_state(&self, options: Option<&Value>) -> Option<Value> {
        self.update_call(&self.table.get_update_state, options)
    }

    /// Block until the update state moves past `sequence` or the timeout
    /// elapses. The timeout is floored to non-negative milliseconds.
    pub fn wait_for_update_state_change(&self, sequence: u32, timeout_ms: f64) -> Option<Value> {
        let endpoint = self.config.pipe_endpoint();
        let timeout = floor_timeout_ms(timeout_ms);
        with_connection(
            endpoint.as_ref(),
            |ep| (self.table.connect)(&ep.path, ep.timeout_ms()),
            || (self.table.close)(),
            || decode_envelope(&(self.table.wait_for_update_state_change)(sequence, timeout)),
        )
        .flatten()
    }

    /// `true` iff the pipe responded with the literal success marker `1`.
    /// Any other response, a malformed response, or an unavailable/failed
    /// connection collapses to `false`.
    pub fn quit_and_install(&self) -> bool {
        let endpoint = self.config.pipe_endpoint();
        let outcome = with_connection(
            endpoint.as_ref(),
            |ep| (self.table.connect)(&ep.path, ep.timeout_ms()),
            || (self.table.close)(),
            || decode_value(&(self.table.quit_and_install)()),
        )
        .flatten();
        outcome == Some(Value::from(1))
    }

    // --- canonicalization ---

    pub fn json_to_canonical(&self, input: &str) -> Option<String> {
        string_call(
            self.config.string_buffer_capacity,
            DEFAULT_STRING_CAPACITY,
            |buf| (self.table.json_to_canonical)(input, buf),
        )
    }

    fn read_string(&self, op: &StringOutFn) -> Option<String> {
        string_call(
            self.config.string_buffer_capacity,
            DEFAULT_STRING_CAPACITY,
            |buf| op(buf),
        )
    }

    fn update_call(&self, op: &PipeJsonFn, options: Option<&Value>) -> Option<Value> {
        let endpoint = self.config.pipe_endpoint();
        let request = encode_request(options);
        with_connection(
            endpoint.as_ref(),
            |ep| (self.table.connect)(&ep.path, ep.timeout_ms()),
            || (self.table.close)(),
            || decode_envelope(&op(&request)),
        )
        .flatten()
    }
}

/// Canonicalize a JSON string with a function table loaded on demand.
///
/// The standalone counterpart to [`LicenseClient::json_to_canonical`] for
/// callers with no long-lived client; a load failure yields `None`.
pub fn json_to_canonical_with<F>(load: F, input: &str) -> Option<String>
where
    F: FnOnce() -> licbridge_table::Result<FunctionTable>,
{
    let table = load().ok()?;
    LicenseClient::new(table, ClientConfig::default()).json_to_canonical(input)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use licbridge_table::FunctionTableBuilder;
    use serde_json::json;

    use super::*;

    /// Every capability registered, every call failing, so individual tests
    /// only override the operations they exercise.
    fn stub_builder() -> FunctionTableBuilder {
        FunctionTableBuilder::new()
            .set_product_data(|_| 1)
            .set_product_id(|_| 1)
            .set_data_directory(|_| 1)
            .set_debug_mode(|_| 1)
            .set_device_fingerprint(|_| 1)
            .set_license_key(|_| 1)
            .set_activation_metadata(|_| 1)
            .get_license_expiry_date(|_| 1)
            .get_activation_creation_date(|_| 1)
            .get_activation_mode(|_| 1)
            .get_activation_id(|_| 1)
            .get_library_version(|_| 1)
            .activate_license(|_| 1)
            .activate_license_offline(|_| 1)
            .generate_offline_deactivation_request(|_| 1)
            .is_license_genuine(|_| 1)
            .is_license_valid(|_| 1)
            .reset(|_| 1)
            .json_to_canonical(|_, _| 1)
            .connect(|_, _| 1)
            .close(|| {})
            .check_for_updates(|_| String::new())
            .download_update(|_| String::new())
            .get_update_state(|_| String::new())
            .wait_for_update_state_change(|_, _| String::new())
            .quit_and_install(String::new)
    }

    fn client(builder: FunctionTableBuilder, config: ClientConfig) -> LicenseClient {
        LicenseClient::new(builder.build().expect("stub table is complete"), config)
    }

    fn piped_config() -> ClientConfig {
        ClientConfig {
            pipe_path: Some("/tmp/update.pipe".to_string()),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn setters_map_status_to_bool() {
        let client = client(
            stub_builder().set_license_key(|args| match args {
                [Arg::Str(key)] if *key == "KEY-1" => 0,
                _ => 1,
            }),
            ClientConfig::default(),
        );

        assert!(client.set_license_key("KEY-1"));
        assert!(!client.set_license_key("KEY-2"));
        assert!(!client.set_product_data("anything"));
    }

    #[test]
    fn product_id_carries_flags() {
        let client = client(
            stub_builder().set_product_id(|args| match args {
                [Arg::Str(id), Arg::U32(flags)] if *id == "prod" && *flags == 3 => 0,
                _ => 1,
            }),
            ClientConfig::default(),
        );

        assert!(client.set_product_id("prod", 3));
        assert!(!client.set_product_id("prod", 4));
    }

    #[test]
    fn numeric_getter_decodes_on_success_only() {
        let client = client(
            stub_builder().get_license_expiry_date(|out| {
                out.copy_from_slice(&1_735_689_600u32.to_le_bytes());
                0
            }),
            ClientConfig::default(),
        );

        assert_eq!(client.get_license_expiry_date(), Some(1_735_689_600));
        assert_eq!(client.get_activation_creation_date(), None);
    }

    #[test]
    fn string_getter_extracts_terminated_text() {
        let client = client(
            stub_builder().get_library_version(|buf| {
                buf[..6].copy_from_slice(b"4.1.0\0");
                0
            }),
            ClientConfig::default(),
        );

        assert_eq!(client.get_library_version().as_deref(), Some("4.1.0"));
        assert_eq!(client.get_activation_id(), None);
    }

    #[test]
    fn lifecycle_actions_are_status_calls() {
        let client = client(
            stub_builder()
                .activate_license(|_| 0)
                .activate_license_offline(|args| match args {
                    [Arg::Str(path)] if *path == "/tmp/resp.dat" => 0,
                    _ => 1,
                }),
            ClientConfig::default(),
        );

        assert!(client.activate_license());
        assert!(client.activate_license_offline("/tmp/resp.dat"));
        assert!(!client.is_license_genuine());
        assert!(!client.reset());
    }

    #[test]
    fn check_for_updates_returns_envelope_data() {
        let client = client(
            stub_builder().connect(|_, _| 0).check_for_updates(|request| {
                assert_eq!(request, r#"{"channel":"stable"}"#);
                r#"{"data":{"version":"2.0"}}"#.to_string()
            }),
            piped_config(),
        );

        let options = json!({"channel": "stable"});
        assert_eq!(
            client.check_for_updates(Some(&options)),
            Some(json!({"version": "2.0"}))
        );
    }

    #[test]
    fn absent_options_send_empty_object() {
        let client = client(
            stub_builder().connect(|_, _| 0).get_update_state(|request| {
                assert_eq!(request, "{}");
                r#"{"data":"idle"}"#.to_string()
            }),
            piped_config(),
        );

        assert_eq!(client.get_update_state(None), Some(json!("idle")));
    }

    #[test]
    fn envelope_without_data_yields_null_result() {
        let client = client(
            stub_builder()
                .connect(|_, _| 0)
                .download_update(|_| r#"{"ok":true}"#.to_string()),
            piped_config(),
        );

        assert_eq!(client.download_update(None), Some(Value::Null));
    }

    #[test]
    fn malformed_response_yields_none() {
        let client = client(
            stub_builder()
                .connect(|_, _| 0)
                .download_update(|_| "{not json".to_string()),
            piped_config(),
        );

        assert_eq!(client.download_update(None), None);
    }

    #[test]
    fn wait_without_endpoint_never_connects() {
        let connects = Arc::new(Mutex::new(0u32));
        let seen = Arc::clone(&connects);

        let client = client(
            stub_builder().connect(move |_, _| {
                *seen.lock().expect("connect counter lock") += 1;
                0
            }),
            ClientConfig::default(),
        );

        assert_eq!(client.wait_for_update_state_change(5, 1000.0), None);
        assert_eq!(*connects.lock().expect("connect counter lock"), 0);
    }

    #[test]
    fn wait_floors_timeout_and_passes_sequence() {
        let client = client(
            stub_builder()
                .connect(|_, _| 0)
                .wait_for_update_state_change(|sequence, timeout| {
                    assert_eq!(sequence, 5);
                    assert_eq!(timeout, 1000);
                    r#"{"data":{"sequence":6}}"#.to_string()
                }),
            piped_config(),
        );

        assert_eq!(
            client.wait_for_update_state_change(5, 1000.9),
            Some(json!({"sequence": 6}))
        );
    }

    #[test]
    fn session_runs_connect_call_close_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let connect_log = Arc::clone(&log);
        let call_log = Arc::clone(&log);
        let close_log = Arc::clone(&log);

        let client = client(
            stub_builder()
                .connect(move |path, timeout| {
                    connect_log
                        .lock()
                        .expect("event log lock")
                        .push(format!("connect {path} {timeout}"));
                    0
                })
                .check_for_updates(move |_| {
                    call_log.lock().expect("event log lock").push("call".to_string());
                    r#"{"data":null}"#.to_string()
                })
                .close(move || {
                    close_log.lock().expect("event log lock").push("close".to_string());
                }),
            piped_config(),
        );

        assert_eq!(client.check_for_updates(None), Some(Value::Null));
        assert_eq!(
            *log.lock().expect("event log lock"),
            vec!["connect /tmp/update.pipe 5000", "call", "close"]
        );
    }

    #[test]
    fn failed_connect_yields_none_without_close() {
        let closes = Arc::new(Mutex::new(0u32));
        let seen = Arc::clone(&closes);

        let client = client(
            stub_builder().connect(|_, _| 9).close(move || {
                *seen.lock().expect("close counter lock") += 1;
            }),
            piped_config(),
        );

        assert_eq!(client.check_for_updates(None), None);
        assert_eq!(*closes.lock().expect("close counter lock"), 0);
    }

    #[test]
    fn quit_and_install_requires_literal_one() {
        let ok = client(
            stub_builder().connect(|_, _| 0).quit_and_install(|| "1".to_string()),
            piped_config(),
        );
        assert!(ok.quit_and_install());

        let zero = client(
            stub_builder().connect(|_, _| 0).quit_and_install(|| "0".to_string()),
            piped_config(),
        );
        assert!(!zero.quit_and_install());

        let garbage = client(
            stub_builder().connect(|_, _| 0).quit_and_install(|| "{oops".to_string()),
            piped_config(),
        );
        assert!(!garbage.quit_and_install());

        let unavailable = client(
            stub_builder().quit_and_install(|| "1".to_string()),
            ClientConfig::default(),
        );
        assert!(!unavailable.quit_and_install());
    }

    #[test]
    fn json_to_canonical_round_trips_through_buffer() {
        let client = client(
            stub_builder().json_to_canonical(|input, buf| {
                assert_eq!(input, r#"{"b":1,"a":2}"#);
                let canonical = br#"{"a":2,"b":1}"#;
                buf[..canonical.len()].copy_from_slice(canonical);
                buf[canonical.len()] = 0;
                0
            }),
            ClientConfig::default(),
        );

        assert_eq!(
            client.json_to_canonical(r#"{"b":1,"a":2}"#).as_deref(),
            Some(r#"{"a":2,"b":1}"#)
        );
    }

    #[test]
    fn standalone_canonicalization_loads_on_demand() {
        let result = json_to_canonical_with(
            || {
                stub_builder()
                    .json_to_canonical(|_, buf| {
                        buf[..3].copy_from_slice(b"{}\0");
                        0
                    })
                    .build()
            },
            "{ }",
        );
        assert_eq!(result.as_deref(), Some("{}"));

        let failed_load = json_to_canonical_with(|| FunctionTableBuilder::new().build(), "{}");
        assert_eq!(failed_load, None);
    }
}
