use irdata_pulse::Pulse;

use crate::bits::DataFrame;
use crate::control::ControlCode;
use crate::timing::{
    bit_timings, Tolerance, END_MARK, HEADER_MARK, HEADER_SPACE, MIN_GAP, PROTOCOL_ID,
};

/// Payload bits in a control frame.
pub const CONTROL_BITS: u8 = 8;

/// Frame-type bit opening every data frame. Control bytes open with a one.
pub const DATA_FRAME_BIT: bool = false;

/// Pulses in a control frame: header, 8 bit pairs, end mark.
pub const CONTROL_FRAME_PULSES: usize = 2 + 2 * CONTROL_BITS as usize + 2;

/// Append the mark/space pair for one bit.
pub fn encode_bit(bit: bool, dst: &mut Vec<Pulse>) {
    let (mark, space) = bit_timings(bit);
    dst.push(Pulse::Mark(mark));
    dst.push(Pulse::Space(space));
}

/// Append the frame header.
pub fn encode_header(dst: &mut Vec<Pulse>) {
    dst.push(Pulse::Mark(HEADER_MARK));
    dst.push(Pulse::Space(HEADER_SPACE));
}

/// Append the end mark and switch the emitter off.
pub fn encode_end_mark(dst: &mut Vec<Pulse>) {
    dst.push(Pulse::Mark(END_MARK));
    dst.push(Pulse::Space(0));
}

/// Encode a control frame.
///
/// Wire format:
/// ```text
/// ┌─────────────┬──────────────────────────────┬──────────┐
/// │ Header      │ 1 1 1 1 1 t t t  (MSB first) │ End mark │
/// │ 9000 / 4500 │ 560 / 1690 or 560 / 560 each │ 560 / 0  │
/// └─────────────┴──────────────────────────────┴──────────┘
/// ```
pub fn encode_control(code: ControlCode, dst: &mut Vec<Pulse>) {
    dst.reserve(CONTROL_FRAME_PULSES);
    encode_header(dst);
    let byte = code.wire_byte();
    for shift in (0..CONTROL_BITS).rev() {
        encode_bit((byte >> shift) & 1 == 1, dst);
    }
    encode_end_mark(dst);
}

/// Encode a data frame.
///
/// Wire format:
/// ```text
/// ┌─────────────┬────────────┬──────────────────────┬──────────┐
/// │ Header      │ Frame type │ 0-64 bits, MSB first │ End mark │
/// │ 9000 / 4500 │ 0          │                      │ 560 / 0  │
/// └─────────────┴────────────┴──────────────────────┴──────────┘
/// ```
pub fn encode_data(frame: &DataFrame, dst: &mut Vec<Pulse>) {
    dst.reserve(2 + 2 * (usize::from(frame.len()) + 1) + 2);
    encode_header(dst);
    encode_bit(DATA_FRAME_BIT, dst);
    for bit in frame.bits() {
        encode_bit(bit, dst);
    }
    encode_end_mark(dst);
}

/// What a frame carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An 8-bit control frame.
    Control(ControlCode),
    /// A 0-64 bit data frame.
    Data(DataFrame),
}

/// A successfully decoded frame plus the metadata higher layers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMessage {
    /// Protocol identifier, always [`PROTOCOL_ID`].
    pub protocol: u16,
    /// Payload bits decoded (8 for control frames).
    pub bits: u8,
    /// Raw decoded value: the control type, or the data payload.
    pub value: u64,
    /// The decoded message itself.
    pub message: Message,
}

impl DecodedMessage {
    /// Wrap a decoded control code.
    pub fn control(code: ControlCode) -> Self {
        Self {
            protocol: PROTOCOL_ID,
            bits: CONTROL_BITS,
            value: u64::from(code.type_bits()),
            message: Message::Control(code),
        }
    }

    /// Wrap a decoded data frame.
    pub fn data(frame: DataFrame) -> Self {
        Self {
            protocol: PROTOCOL_ID,
            bits: frame.len(),
            value: frame.value(),
            message: Message::Data(frame),
        }
    }

    /// The control code, if this was a control frame.
    pub fn as_control(&self) -> Option<ControlCode> {
        match self.message {
            Message::Control(code) => Some(code),
            Message::Data(_) => None,
        }
    }

    /// The data frame, if this was a data frame.
    pub fn as_data(&self) -> Option<&DataFrame> {
        match &self.message {
            Message::Data(frame) => Some(frame),
            Message::Control(_) => None,
        }
    }
}

/// Configuration for decoding and capture splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Timing tolerance applied to every duration. Default: 25%.
    pub tolerance: Tolerance,
    /// Reject payload pairs matching neither bit timing instead of reading
    /// them as zero. Default: `false`.
    pub strict_bits: bool,
    /// Shortest space that ends a frame, in µs. Default: 25000.
    pub min_gap: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            strict_bits: false,
            min_gap: MIN_GAP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(bits: &[bool]) -> Vec<Pulse> {
        let mut out = Vec::new();
        for bit in bits {
            encode_bit(*bit, &mut out);
        }
        out
    }

    #[test]
    fn ack_frame_layout() {
        let mut wire = Vec::new();
        encode_control(ControlCode::Ack, &mut wire);

        let mut expected = vec![Pulse::Mark(9000), Pulse::Space(4500)];
        expected.extend(pairs(&[true, true, true, true, true, false, true, true]));
        expected.extend([Pulse::Mark(560), Pulse::Space(0)]);

        assert_eq!(wire, expected);
        assert_eq!(wire.len(), CONTROL_FRAME_PULSES);
    }

    #[test]
    fn data_frame_layout() {
        let mut wire = Vec::new();
        encode_data(&DataFrame::new(0b1011, 4).unwrap(), &mut wire);

        let mut expected = vec![Pulse::Mark(9000), Pulse::Space(4500)];
        expected.extend(pairs(&[false, true, false, true, true]));
        expected.extend([Pulse::Mark(560), Pulse::Space(0)]);

        assert_eq!(wire, expected);
    }

    #[test]
    fn empty_data_frame_still_carries_frame_type() {
        let mut wire = Vec::new();
        encode_data(&DataFrame::empty(), &mut wire);
        assert_eq!(
            wire,
            vec![
                Pulse::Mark(9000),
                Pulse::Space(4500),
                Pulse::Mark(560),
                Pulse::Space(560),
                Pulse::Mark(560),
                Pulse::Space(0),
            ]
        );
    }

    #[test]
    fn encoders_append() {
        let mut wire = vec![Pulse::Space(25000)];
        encode_header(&mut wire);
        assert_eq!(wire.len(), 3);
        assert_eq!(wire[0], Pulse::Space(25000));
    }

    #[test]
    fn decoded_message_metadata() {
        let control = DecodedMessage::control(ControlCode::Nack);
        assert_eq!(control.protocol, 99);
        assert_eq!(control.bits, 8);
        assert_eq!(control.value, 4);
        assert_eq!(control.as_control(), Some(ControlCode::Nack));
        assert!(control.as_data().is_none());

        let data = DecodedMessage::data(DataFrame::new(0xABCD, 16).unwrap());
        assert_eq!(data.bits, 16);
        assert_eq!(data.value, 0xABCD);
        assert!(data.as_control().is_none());
    }

    #[test]
    fn default_config() {
        let cfg = FrameConfig::default();
        assert_eq!(cfg.tolerance.as_percent(), 25);
        assert!(!cfg.strict_bits);
        assert_eq!(cfg.min_gap, 25000);
    }
}
