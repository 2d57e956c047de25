//! Pulse-timing substrate for the irdata infrared protocol.
//!
//! The protocol layer never touches hardware. It talks to whatever drives the
//! LED through [`PulseEmitter`] and reads whatever the receiver captured
//! through [`ReadCapture`]:
//! - a *mark* is an interval with the emitter on
//! - a *space* is an interval with the emitter off
//! - a capture is the alternating space/mark durations seen by the receiver,
//!   index 0 holding the idle gap before the first mark
//!
//! This is the lowest layer of irdata. [`PulseRecorder`] is an in-memory
//! substrate used for loopback testing and offline tooling.

pub mod capture;
pub mod error;
pub mod recorder;
pub mod traits;

pub use capture::{parse_timeline, RawCapture};
pub use error::{PulseError, Result};
pub use recorder::PulseRecorder;
pub use traits::{Pulse, PulseEmitter, ReadCapture};
