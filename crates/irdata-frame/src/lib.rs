//! Pulse-distance framing for short IR messages.
//!
//! This is the core of irdata. Every transmission is one frame:
//! - a 9000µs mark / 4500µs space header
//! - the payload, one 560µs mark per bit with the space carrying the value
//!   (1690µs for a one, 560µs for a zero)
//! - a 560µs end mark
//!
//! A frame is either an 8-bit control frame (start/end/ack/nack) or a data
//! frame of 0-64 bits. The first payload bit tells them apart: control bytes
//! open with a one, data frames with a zero frame-type bit.
//!
//! The frame-type bit is not part of the classic pulse-distance data
//! layout. Data frames from a sender that puts its payload directly after
//! the header are not compatible: a leading one is read as a control byte,
//! and a leading zero is taken as the frame-type bit, so `0b0101` over 4
//! bits decodes as `0b101` over 3 bits.

pub mod bits;
pub mod codec;
pub mod control;
pub mod decoder;
pub mod error;
pub mod reader;
pub mod sender;
pub mod timing;

pub use bits::DataFrame;
pub use codec::{encode_control, encode_data, DecodedMessage, FrameConfig, Message, CONTROL_BITS};
pub use control::ControlCode;
pub use decoder::FrameDecoder;
pub use error::{DecodeError, Result};
pub use reader::CaptureReader;
pub use sender::FrameSender;
pub use timing::{within_tolerance, Tolerance, MAX_DATA_BITS, MIN_GAP, PROTOCOL_ID};
