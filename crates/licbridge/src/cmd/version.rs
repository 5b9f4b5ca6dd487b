use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("licbridge {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: licbridge");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target: {}", build_target());
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("features: cli=true");

    Ok(SUCCESS)
}

fn build_target() -> &'static str {
    option_env!("LICBRIDGE_BUILD_TARGET").unwrap_or("unknown")
}
