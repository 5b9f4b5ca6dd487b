use std::path::PathBuf;

use licbridge_pipe::PipeEndpoint;
use serde::Deserialize;

/// Runtime configuration for [`crate::client::LicenseClient`].
///
/// Launcher configs arrive as JSON, so the numeric knobs are `f64` and pass
/// through the sanitizing paths in the marshal and pipe layers.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Pipe address for the update operations. Absence makes the whole pipe
    /// family unavailable (operations degrade to no result, not an error).
    pub pipe_path: Option<String>,
    /// Connect timeout for pipe sessions, in milliseconds.
    pub pipe_timeout_ms: f64,
    /// Capacity for string out-parameter buffers.
    pub string_buffer_capacity: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pipe_path: None,
            pipe_timeout_ms: 5000.0,
            string_buffer_capacity: 256.0,
        }
    }
}

impl ClientConfig {
    pub const ENV_PIPE_PATH: &'static str = "LICBRIDGE_PIPE_PATH";

    /// Read the environment once at process startup. Only the startup shell
    /// calls this; the core never consults the environment ad hoc.
    pub fn from_env() -> Self {
        Self {
            pipe_path: std::env::var(Self::ENV_PIPE_PATH).ok(),
            ..Self::default()
        }
    }

    /// Resolve the pipe endpoint for one operation. Resolved fresh per call,
    /// never cached.
    pub fn pipe_endpoint(&self) -> Option<PipeEndpoint> {
        self.pipe_path
            .as_deref()
            .map(|path| PipeEndpoint::new(path, self.pipe_timeout_ms))
    }
}

/// Identity values consulted by the dev-license bypass check.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Application identity the stored key is filed under.
    pub app_id: Option<String>,
    /// Expected public key text.
    pub public_key: Option<String>,
    /// Directory holding stored public-key files, one per application id.
    pub key_dir: PathBuf,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            public_key: None,
            key_dir: PathBuf::from("."),
        }
    }
}

impl IdentityConfig {
    pub const ENV_APP_ID: &'static str = "LICBRIDGE_APP_ID";
    pub const ENV_PUBLIC_KEY: &'static str = "LICBRIDGE_PUBLIC_KEY";
    pub const ENV_KEY_DIR: &'static str = "LICBRIDGE_KEY_DIR";

    /// Read the environment once at process startup. Only the startup shell
    /// calls this; the core never consults the environment ad hoc.
    pub fn from_env() -> Self {
        Self {
            app_id: std::env::var(Self::ENV_APP_ID).ok(),
            public_key: std::env::var(Self::ENV_PUBLIC_KEY).ok(),
            key_dir: std::env::var(Self::ENV_KEY_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }
}
