//! Canonical operation names, used for builder diagnostics and logging.

pub const SET_PRODUCT_DATA: &str = "SetProductData";
pub const SET_PRODUCT_ID: &str = "SetProductId";
pub const SET_DATA_DIRECTORY: &str = "SetDataDirectory";
pub const SET_DEBUG_MODE: &str = "SetDebugMode";
pub const SET_DEVICE_FINGERPRINT: &str = "SetDeviceFingerprint";
pub const SET_LICENSE_KEY: &str = "SetLicenseKey";
pub const SET_ACTIVATION_METADATA: &str = "SetActivationMetadata";

pub const GET_LICENSE_EXPIRY_DATE: &str = "GetLicenseExpiryDate";
pub const GET_ACTIVATION_CREATION_DATE: &str = "GetActivationCreationDate";
pub const GET_ACTIVATION_MODE: &str = "GetActivationMode";
pub const GET_ACTIVATION_ID: &str = "GetActivationId";
pub const GET_LIBRARY_VERSION: &str = "GetLibraryVersion";

pub const ACTIVATE_LICENSE: &str = "ActivateLicense";
pub const ACTIVATE_LICENSE_OFFLINE: &str = "ActivateLicenseOffline";
pub const GENERATE_OFFLINE_DEACTIVATION_REQUEST: &str = "GenerateOfflineDeactivationRequest";
pub const IS_LICENSE_GENUINE: &str = "IsLicenseGenuine";
pub const IS_LICENSE_VALID: &str = "IsLicenseValid";
pub const RESET: &str = "Reset";

pub const JSON_TO_CANONICAL: &str = "JsonToCanonical";

pub const CONNECT: &str = "Connect";
pub const CLOSE: &str = "Close";
pub const CHECK_FOR_UPDATES: &str = "CheckForUpdates";
pub const DOWNLOAD_UPDATE: &str = "DownloadUpdate";
pub const GET_UPDATE_STATE: &str = "GetUpdateState";
pub const WAIT_FOR_UPDATE_STATE_CHANGE: &str = "WaitForUpdateStateChange";
pub const QUIT_AND_INSTALL: &str = "QuitAndInstall";
