use irdata_frame::{timing, PROTOCOL_ID};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("irdata {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: irdata");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "build_target: {}",
        option_env!("IRDATA_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("protocol: {PROTOCOL_ID}");
    println!(
        "timing_us: header={}/{} one={}/{} zero={}/{} end={} min_gap={}",
        timing::HEADER_MARK,
        timing::HEADER_SPACE,
        timing::ONE_MARK,
        timing::ONE_SPACE,
        timing::ZERO_MARK,
        timing::ZERO_SPACE,
        timing::END_MARK,
        timing::MIN_GAP
    );
    println!("tolerance: {}%", timing::TOLERANCE_PERCENT);

    Ok(SUCCESS)
}
