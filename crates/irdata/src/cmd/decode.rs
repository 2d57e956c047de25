use std::fs;
use std::io::Read;

use irdata_frame::{CaptureReader, FrameConfig, FrameDecoder};
use irdata_pulse::{parse_timeline, ReadCapture};
use tracing::{debug, info};

use crate::cmd::DecodeArgs;
use crate::exit::{
    decode_error, io_error, pulse_error, CliError, CliResult, DATA_INVALID, SUCCESS,
};
use crate::output::{print_decoded, DecodeOutput, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat, config: FrameConfig) -> CliResult<i32> {
    let listing = resolve_listing(&args)?;
    let timeline =
        parse_timeline(&listing, config.min_gap).map_err(|err| pulse_error("bad listing", err))?;
    debug!(samples = timeline.len(), "read pulse listing");

    let decoder = FrameDecoder::with_config(config);
    let mut outputs = Vec::new();
    let mut first_error = None;

    for (index, capture) in CaptureReader::with_config(timeline, config).enumerate() {
        let result = decoder.decode(&capture);
        if let Err(err) = &result {
            info!(frame = index, %err, "frame rejected");
            first_error.get_or_insert_with(|| decode_error(&format!("frame {index}"), err));
        }
        outputs.push(DecodeOutput::new(index, capture.len(), &result));
    }

    if outputs.is_empty() {
        return Err(CliError::new(DATA_INVALID, "listing holds no frames"));
    }
    print_decoded(&outputs, format);

    match first_error {
        Some(err) => Err(err),
        None => Ok(SUCCESS),
    }
}

fn resolve_listing(args: &DecodeArgs) -> CliResult<String> {
    if !args.samples.is_empty() {
        return Ok(args.samples.join(" "));
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(buf)
}
