//! Dev-license bypass check: the one place in this layer where failure is a
//! hard error rather than an absent result, because it gates startup.

use tracing::debug;

use crate::config::IdentityConfig;

/// Errors raised by the dev-license bypass check.
#[derive(Debug, thiserror::Error)]
pub enum BypassError {
    /// No application identity or no public key could be resolved.
    #[error("application identity and public key are required for the dev-license check")]
    IdentityRequired,

    /// The stored key for this application is missing or does not match.
    #[error("stored dev-license key for {app_id} is missing or does not match")]
    LicenseMismatch { app_id: String },
}

/// Verify the locally stored dev-license key for an application.
///
/// Explicit overrides take precedence over the injected (environment-sourced)
/// config values. The check needs both an application id and a public key;
/// the stored key file is `<key_dir>/<app_id>.pub`, compared after trimming.
pub fn verify_dev_license(
    config: &IdentityConfig,
    app_id_override: Option<&str>,
    public_key_override: Option<&str>,
) -> Result<(), BypassError> {
    let app_id = app_id_override
        .or(config.app_id.as_deref())
        .ok_or(BypassError::IdentityRequired)?;
    let public_key = public_key_override
        .or(config.public_key.as_deref())
        .ok_or(BypassError::IdentityRequired)?;

    let key_path = config.key_dir.join(format!("{app_id}.pub"));
    debug!(path = ?key_path, "checking stored dev-license key");

    let stored = std::fs::read_to_string(&key_path).map_err(|_| BypassError::LicenseMismatch {
        app_id: app_id.to_string(),
    })?;

    if stored.trim() != public_key.trim() {
        return Err(BypassError::LicenseMismatch {
            app_id: app_id.to_string(),
        });
    }

    debug!(app_id, "dev-license key verified");
    Ok(())
}
