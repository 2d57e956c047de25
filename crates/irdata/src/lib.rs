//! Short binary messages over infrared pulse-distance signals.
//!
//! irdata frames a control code or a 0-64 bit payload as timed IR pulses and
//! decodes captured pulse timings back into messages, with ±25% proportional
//! timing tolerance.
//!
//! # Crate Structure
//!
//! - [`pulse`]: Pulse emit/capture capability interface and an in-memory substrate
//! - [`frame`]: Timing vocabulary, frame sender, frame decoder, capture splitting
//!
//! # Example
//!
//! ```
//! use irdata::frame::{ControlCode, FrameDecoder, FrameSender, MIN_GAP};
//! use irdata::pulse::PulseRecorder;
//!
//! let mut sender = FrameSender::new(PulseRecorder::new(MIN_GAP));
//! sender.send_control(ControlCode::Ack);
//! let capture = sender.into_inner().into_capture();
//!
//! let msg = FrameDecoder::new().decode(&capture).unwrap();
//! assert_eq!(msg.as_control(), Some(ControlCode::Ack));
//! ```

/// Re-export pulse substrate types.
pub mod pulse {
    pub use irdata_pulse::*;
}

/// Re-export frame types.
pub mod frame {
    pub use irdata_frame::*;
}
