use tracing::trace;

use crate::capture::RawCapture;
use crate::traits::{Pulse, PulseEmitter};

/// In-memory pulse substrate.
///
/// Records every emitter call in order and, alongside, the timeline an ideal
/// receiver would capture. Feeding [`PulseRecorder::capture`] to a decoder
/// closes the loop without hardware.
#[derive(Debug, Clone)]
pub struct PulseRecorder {
    pulses: Vec<Pulse>,
    timeline: RawCapture,
    leading_gap: u32,
}

impl PulseRecorder {
    /// Create a recorder whose timeline starts with `leading_gap` of idle.
    pub fn new(leading_gap: u32) -> Self {
        Self {
            pulses: Vec::new(),
            timeline: RawCapture::new(leading_gap),
            leading_gap,
        }
    }

    /// Exact emitter calls, zero-length spaces included.
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// The receiver-side view of everything emitted so far.
    pub fn capture(&self) -> &RawCapture {
        &self.timeline
    }

    /// Consume the recorder and return the receiver-side timeline.
    pub fn into_capture(self) -> RawCapture {
        self.timeline
    }

    /// Forget everything recorded and start a fresh timeline.
    pub fn clear(&mut self) {
        self.pulses.clear();
        self.timeline = RawCapture::new(self.leading_gap);
    }
}

impl Default for PulseRecorder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PulseEmitter for PulseRecorder {
    fn mark(&mut self, micros: u32) {
        trace!(micros, "mark");
        self.pulses.push(Pulse::Mark(micros));
        self.timeline.push_mark(micros);
    }

    fn space(&mut self, micros: u32) {
        trace!(micros, "space");
        self.pulses.push(Pulse::Space(micros));
        self.timeline.push_space(micros);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ReadCapture;

    #[test]
    fn records_calls_and_timeline() {
        let mut recorder = PulseRecorder::new(40000);
        recorder.mark(9000);
        recorder.space(4500);
        recorder.mark(560);
        recorder.space(0);

        assert_eq!(
            recorder.pulses(),
            &[
                Pulse::Mark(9000),
                Pulse::Space(4500),
                Pulse::Mark(560),
                Pulse::Space(0)
            ]
        );
        assert_eq!(recorder.capture().samples(), &[40000, 9000, 4500, 560]);
    }

    #[test]
    fn idle_between_frames_lands_in_timeline() {
        let mut recorder = PulseRecorder::new(30000);
        recorder.mark(560);
        recorder.space(0);
        recorder.space(25000);
        recorder.mark(560);

        let capture = recorder.into_capture();
        assert_eq!(capture.into_inner(), vec![30000, 560, 25000, 560]);
    }

    #[test]
    fn clear_resets_to_leading_gap() {
        let mut recorder = PulseRecorder::new(123);
        recorder.mark(560);
        recorder.clear();
        assert!(recorder.pulses().is_empty());
        assert_eq!(recorder.capture().samples(), &[123]);
    }
}
