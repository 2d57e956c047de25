use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use irdata_frame::{DataFrame, DecodeError, DecodedMessage, Message};
use irdata_pulse::Pulse;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct EncodeOutput {
    pub kind: &'static str,
    pub message: String,
    pub bits: u8,
    pub value: u64,
    pub pulse_count: usize,
    pub timings: String,
    /// Marks positive, spaces negative.
    pub pulses: Vec<i64>,
}

impl EncodeOutput {
    pub fn new(
        kind: &'static str,
        message: String,
        bits: u8,
        value: u64,
        pulses: &[Pulse],
    ) -> Self {
        Self {
            kind,
            message,
            bits,
            value,
            pulse_count: pulses.len(),
            timings: format_listing(pulses),
            pulses: pulses.iter().map(signed_micros).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct DecodeOutput {
    pub frame: usize,
    pub samples: usize,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeOutput {
    pub fn new(
        frame: usize,
        samples: usize,
        result: &std::result::Result<DecodedMessage, DecodeError>,
    ) -> Self {
        match result {
            Ok(decoded) => Self {
                frame,
                samples,
                ok: true,
                kind: Some(message_kind(&decoded.message)),
                message: Some(message_text(&decoded.message)),
                protocol: Some(decoded.protocol),
                bits: Some(decoded.bits),
                value: Some(decoded.value),
                error: None,
            },
            Err(err) => Self {
                frame,
                samples,
                ok: false,
                kind: None,
                message: None,
                protocol: None,
                bits: None,
                value: None,
                error: Some(err.to_string()),
            },
        }
    }
}

pub fn print_encoded(out: &EncodeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "MESSAGE", "BITS", "PULSES", "TIMINGS"])
                .add_row(vec![
                    out.kind.to_string(),
                    out.message.clone(),
                    out.bits.to_string(),
                    out.pulse_count.to_string(),
                    out.timings.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "kind={} message={} bits={} pulses={}",
                out.kind, out.message, out.bits, out.pulse_count
            );
            println!("{}", out.timings);
        }
        OutputFormat::Raw => {
            println!("{}", out.timings);
        }
    }
}

pub fn print_decoded(outputs: &[DecodeOutput], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for out in outputs {
                println!(
                    "{}",
                    serde_json::to_string(out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FRAME", "SAMPLES", "KIND", "MESSAGE", "BITS", "ERROR"]);
            for out in outputs {
                table.add_row(vec![
                    out.frame.to_string(),
                    out.samples.to_string(),
                    out.kind.unwrap_or("-").to_string(),
                    out.message.clone().unwrap_or_else(|| "-".to_string()),
                    out.bits.map_or_else(|| "-".to_string(), |b| b.to_string()),
                    out.error.clone().unwrap_or_default(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for out in outputs {
                match (&out.message, &out.error) {
                    (Some(message), _) => println!(
                        "frame={} kind={} message={} bits={} protocol={}",
                        out.frame,
                        out.kind.unwrap_or("-"),
                        message,
                        out.bits.unwrap_or(0),
                        out.protocol.unwrap_or(0)
                    ),
                    (None, Some(error)) => println!("frame={} error={}", out.frame, error),
                    (None, None) => println!("frame={}", out.frame),
                }
            }
        }
        OutputFormat::Raw => {
            for out in outputs {
                println!("{}", out.message.as_deref().unwrap_or(""));
            }
        }
    }
}

/// Render pulses as `+mark -space ...`. Zero-length spaces only switch the
/// emitter off and are left out.
pub fn format_listing(pulses: &[Pulse]) -> String {
    pulses
        .iter()
        .filter(|p| p.is_mark() || p.duration() > 0)
        .map(|p| match p {
            Pulse::Mark(us) => format!("+{us}"),
            Pulse::Space(us) => format!("-{us}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn signed_micros(pulse: &Pulse) -> i64 {
    match *pulse {
        Pulse::Mark(us) => i64::from(us),
        Pulse::Space(us) => -i64::from(us),
    }
}

fn message_kind(message: &Message) -> &'static str {
    match message {
        Message::Control(_) => "control",
        Message::Data(_) => "data",
    }
}

fn message_text(message: &Message) -> String {
    match message {
        Message::Control(code) => code.name().to_string(),
        Message::Data(frame) => data_text(frame),
    }
}

/// `0b` followed by the frame's bits, leading zeros included.
pub fn data_text(frame: &DataFrame) -> String {
    if frame.is_empty() {
        return "0b".to_string();
    }
    format!("0b{frame}")
}

#[cfg(test)]
mod tests {
    use irdata_frame::ControlCode;

    use super::*;

    #[test]
    fn listing_skips_zero_spaces() {
        let pulses = [Pulse::Mark(9000), Pulse::Space(4500), Pulse::Mark(560), Pulse::Space(0)];
        assert_eq!(format_listing(&pulses), "+9000 -4500 +560");
    }

    #[test]
    fn decode_output_for_data_and_error() {
        let ok = DecodeOutput::new(
            0,
            14,
            &Ok(DecodedMessage::data(DataFrame::new(0b0011, 4).unwrap())),
        );
        assert_eq!(ok.message.as_deref(), Some("0b0011"));
        assert_eq!(ok.kind, Some("data"));

        let failed = DecodeOutput::new(1, 3, &Err(DecodeError::BufferTooShort { len: 3 }));
        assert!(!failed.ok);
        let json = serde_json::to_string(&failed).unwrap();
        assert!(json.contains("\"ok\":false"));
        assert!(!json.contains("\"bits\""));
    }

    #[test]
    fn control_message_text() {
        let out = DecodeOutput::new(0, 20, &Ok(DecodedMessage::control(ControlCode::Ack)));
        assert_eq!(out.message.as_deref(), Some("ack"));
        assert_eq!(out.value, Some(3));
    }
}
