use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod envinfo;
pub mod verify;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
    /// Run the dev-license bypass check.
    Verify(VerifyArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
        Command::Verify(args) => verify::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

#[derive(Args, Debug, Default)]
pub struct VerifyArgs {
    /// Application identity; overrides LICBRIDGE_APP_ID.
    #[arg(long, value_name = "ID")]
    pub app_id: Option<String>,
    /// Expected public key text; overrides LICBRIDGE_PUBLIC_KEY.
    #[arg(long, value_name = "KEY")]
    pub public_key: Option<String>,
    /// Directory holding stored public-key files; overrides LICBRIDGE_KEY_DIR.
    #[arg(long, value_name = "DIR")]
    pub key_dir: Option<PathBuf>,
}
