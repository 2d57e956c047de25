/// Reasons a capture could not be decoded into a message.
///
/// Every variant is a clean rejection: nothing is retained from the capture
/// and the caller is free to re-arm the receiver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The capture cannot hold a header, one bit and an end mark.
    #[error("capture too short ({len} samples, need at least 6)")]
    BufferTooShort { len: usize },

    /// The first mark/space pair is not a 9000/4500µs header.
    #[error("header mismatch (got mark {mark}µs, space {space}µs)")]
    HeaderMismatch { mark: u32, space: u32 },

    /// A control frame whose high bits are not the control prefix.
    #[error("control prefix mismatch (byte 0b{byte:08b})")]
    PrefixMismatch { byte: u8 },

    /// A control frame with a valid prefix but an unassigned type.
    #[error("unknown control type {value}")]
    UnknownControlType { value: u8 },

    /// A payload pulse pair matches neither bit timing (strict mode only).
    #[error("pulse pair at sample {index} is not a bit (mark {mark}µs, space {space}µs)")]
    BitMismatch { index: usize, mark: u32, space: u32 },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
