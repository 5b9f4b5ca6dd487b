use std::collections::BTreeMap;

use licbridge::config::{ClientConfig, IdentityConfig};
use serde::Serialize;

use crate::cmd::EnvinfoArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

#[derive(Serialize)]
struct PlatformInfo {
    os: String,
    arch: String,
}

#[derive(Serialize)]
struct EnvInfoOutput {
    schema_id: &'static str,
    version: String,
    platform: PlatformInfo,
    environment: BTreeMap<String, Option<String>>,
}

pub fn run(_args: EnvinfoArgs, format: OutputFormat) -> CliResult<i32> {
    let mut env = BTreeMap::new();
    for key in [
        IdentityConfig::ENV_APP_ID,
        IdentityConfig::ENV_PUBLIC_KEY,
        IdentityConfig::ENV_KEY_DIR,
        ClientConfig::ENV_PIPE_PATH,
        "RUST_LOG",
    ] {
        env.insert(key.to_string(), std::env::var(key).ok());
    }

    let output = EnvInfoOutput {
        schema_id: "https://schemas.3leaps.dev/licbridge/cli/v1/envinfo.schema.json",
        version: env!("CARGO_PKG_VERSION").to_string(),
        platform: PlatformInfo {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        },
        environment: env,
    };

    let mut rows = vec![
        ("version", output.version.clone()),
        (
            "platform",
            format!("{} ({})", output.platform.os, output.platform.arch),
        ),
    ];
    for (key, value) in &output.environment {
        rows.push((
            key.as_str(),
            value.clone().unwrap_or_else(|| "(not set)".to_string()),
        ));
    }

    print_report(&output, &rows, format);
    Ok(SUCCESS)
}
