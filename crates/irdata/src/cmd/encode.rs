use irdata_frame::{encode_control, encode_data, ControlCode, DataFrame, MAX_DATA_BITS};
use tracing::debug;

use crate::cmd::{EncodeArgs, EncodeMessage};
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{data_text, print_encoded, EncodeOutput, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let mut pulses = Vec::new();
    let out = match args.message {
        EncodeMessage::Control { code } => {
            let code = ControlCode::from(code);
            encode_control(code, &mut pulses);
            EncodeOutput::new(
                "control",
                code.name().to_string(),
                irdata_frame::CONTROL_BITS,
                u64::from(code.wire_byte()),
                &pulses,
            )
        }
        EncodeMessage::Data { value, bits } => {
            let frame = resolve_frame(&value, bits)?;
            encode_data(&frame, &mut pulses);
            EncodeOutput::new("data", data_text(&frame), frame.len(), frame.value(), &pulses)
        }
    };
    debug!(pulses = pulses.len(), "encoded frame");

    print_encoded(&out, format);
    Ok(SUCCESS)
}

// The library drops oversized payloads silently, so the bound is checked here.
fn resolve_frame(value: &str, bits: u8) -> CliResult<DataFrame> {
    let value = parse_value(value)?;
    if bits > MAX_DATA_BITS {
        return Err(CliError::new(
            USAGE,
            format!("--bits must be at most {MAX_DATA_BITS} (got {bits})"),
        ));
    }
    if bits < 64 && value >> bits != 0 {
        return Err(CliError::new(
            USAGE,
            format!("value {value:#x} does not fit in {bits} bits"),
        ));
    }
    DataFrame::new(value, bits)
        .ok_or_else(|| CliError::new(USAGE, format!("invalid frame length {bits}")))
}

fn parse_value(input: &str) -> CliResult<u64> {
    let cleaned = input.trim().replace('_', "");
    let lower = cleaned.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse::<u64>()
    };
    parsed.map_err(|_| CliError::new(USAGE, format!("invalid payload value: {input}")))
}
