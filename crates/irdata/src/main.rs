mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use irdata_frame::{FrameConfig, Tolerance, MIN_GAP};

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "irdata", version, about = "IR pulse-distance data protocol tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Timing tolerance in percent of each expected duration.
    #[arg(
        long,
        value_name = "PERCENT",
        default_value_t = 25,
        env = "IRDATA_TOLERANCE",
        global = true
    )]
    tolerance: u32,

    /// Fail on payload pulse pairs that match neither bit timing.
    #[arg(long, env = "IRDATA_STRICT", global = true)]
    strict: bool,

    /// Shortest space (µs) treated as a gap between frames.
    #[arg(
        long,
        value_name = "MICROS",
        default_value_t = MIN_GAP,
        env = "IRDATA_MIN_GAP",
        global = true
    )]
    min_gap: u32,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn frame_config(&self) -> FrameConfig {
        FrameConfig {
            tolerance: Tolerance::percent(self.tolerance),
            strict_bits: self.strict,
            min_gap: self.min_gap,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = cli.frame_config();
    let result = cmd::run(cli.command, format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
