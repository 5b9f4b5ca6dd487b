use licbridge::bypass::verify_dev_license;
use licbridge::config::IdentityConfig;
use serde::Serialize;
use tracing::info;

use crate::cmd::VerifyArgs;
use crate::exit::{bypass_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

#[derive(Serialize)]
struct VerifyOutput {
    schema_id: &'static str,
    app_id: String,
    key_dir: String,
    verified: bool,
}

pub fn run(args: VerifyArgs, format: OutputFormat) -> CliResult<i32> {
    // Environment is read exactly once, here at the outer shell.
    let mut config = IdentityConfig::from_env();
    if let Some(dir) = args.key_dir {
        config.key_dir = dir;
    }

    verify_dev_license(
        &config,
        args.app_id.as_deref(),
        args.public_key.as_deref(),
    )
    .map_err(bypass_error)?;

    let app_id = args
        .app_id
        .or(config.app_id)
        .unwrap_or_default();
    info!(%app_id, "dev license verified");

    let output = VerifyOutput {
        schema_id: "https://schemas.3leaps.dev/licbridge/cli/v1/verify.schema.json",
        key_dir: config.key_dir.display().to_string(),
        verified: true,
        app_id,
    };
    let rows = vec![
        ("app_id", output.app_id.clone()),
        ("key_dir", output.key_dir.clone()),
        ("verified", output.verified.to_string()),
    ];

    print_report(&output, &rows, format);
    Ok(SUCCESS)
}
