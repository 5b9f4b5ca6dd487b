use std::fmt;

use licbridge::bypass::BypassError;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
#[allow(dead_code)]
pub const FAILURE: i32 = 1;
pub const LICENSE_INVALID: i32 = 30;
#[allow(dead_code)]
pub const PERMISSION_DENIED: i32 = 50;
pub const USAGE: i32 = 64;
#[allow(dead_code)]
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn bypass_error(err: BypassError) -> CliError {
    let code = match err {
        BypassError::IdentityRequired => USAGE,
        BypassError::LicenseMismatch { .. } => LICENSE_INVALID,
    };
    CliError::new(code, err.to_string())
}
