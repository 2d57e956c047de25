use clap::{Args, Subcommand, ValueEnum};
use irdata_frame::{ControlCode, FrameConfig};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a message into a pulse listing.
    Encode(EncodeArgs),
    /// Decode a captured pulse listing.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: FrameConfig) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format, config),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub message: EncodeMessage,
}

#[derive(Subcommand, Debug)]
pub enum EncodeMessage {
    /// An 8-bit control frame.
    Control {
        /// Control code to send.
        code: ControlArg,
    },
    /// A 0-64 bit data frame.
    Data {
        /// Payload value: decimal, 0x hex or 0b binary.
        value: String,
        /// Number of payload bits to send (0-64).
        #[arg(long, short = 'b')]
        bits: u8,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ControlArg {
    Start,
    End,
    Ack,
    Nack,
}

impl From<ControlArg> for ControlCode {
    fn from(arg: ControlArg) -> Self {
        match arg {
            ControlArg::Start => ControlCode::Start,
            ControlArg::End => ControlCode::End,
            ControlArg::Ack => ControlCode::Ack,
            ControlArg::Nack => ControlCode::Nack,
        }
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Pulse samples in µs (`+` mark, `-` space). Reads stdin when omitted.
    #[arg(allow_negative_numbers = true, conflicts_with = "file")]
    pub samples: Vec<String>,
    /// Read the pulse listing from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
