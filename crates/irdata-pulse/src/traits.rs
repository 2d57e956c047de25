/// A single timed interval on the IR link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pulse {
    /// Emitter on for the given number of microseconds.
    Mark(u32),
    /// Emitter off for the given number of microseconds. A zero-length space
    /// just switches the emitter off.
    Space(u32),
}

impl Pulse {
    /// Duration in microseconds.
    pub fn duration(&self) -> u32 {
        match *self {
            Pulse::Mark(us) | Pulse::Space(us) => us,
        }
    }

    /// True for a mark.
    pub fn is_mark(&self) -> bool {
        matches!(self, Pulse::Mark(_))
    }
}

/// Something that can drive an IR emitter.
///
/// Both primitives block for their real-world duration on hardware; there is
/// no queueing, pulses go out in call order.
pub trait PulseEmitter {
    /// Switch the emitter on for `micros`.
    fn mark(&mut self, micros: u32);

    /// Switch the emitter off for `micros`. `space(0)` leaves the emitter off.
    fn space(&mut self, micros: u32);

    /// Emit one [`Pulse`].
    fn emit(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Mark(us) => self.mark(us),
            Pulse::Space(us) => self.space(us),
        }
    }
}

impl<E: PulseEmitter + ?Sized> PulseEmitter for &mut E {
    fn mark(&mut self, micros: u32) {
        (**self).mark(micros);
    }

    fn space(&mut self, micros: u32) {
        (**self).space(micros);
    }
}

/// Read-only access to a captured pulse buffer.
///
/// Index 0 is the leading gap, odd indices are marks and even indices from 2
/// on are spaces. Implementors never hand out mutable access.
pub trait ReadCapture {
    /// All captured durations in microseconds.
    fn samples(&self) -> &[u32];

    /// Number of captured durations.
    fn len(&self) -> usize {
        self.samples().len()
    }

    /// True when nothing was captured.
    fn is_empty(&self) -> bool {
        self.samples().is_empty()
    }

    /// Duration at `index`, or `None` past the end.
    fn sample(&self, index: usize) -> Option<u32> {
        self.samples().get(index).copied()
    }
}

impl ReadCapture for [u32] {
    fn samples(&self) -> &[u32] {
        self
    }
}

impl<const N: usize> ReadCapture for [u32; N] {
    fn samples(&self) -> &[u32] {
        self
    }
}

impl ReadCapture for Vec<u32> {
    fn samples(&self) -> &[u32] {
        self
    }
}

impl<C: ReadCapture + ?Sized> ReadCapture for &C {
    fn samples(&self) -> &[u32] {
        (**self).samples()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log(Vec<Pulse>);

    impl PulseEmitter for Log {
        fn mark(&mut self, micros: u32) {
            self.0.push(Pulse::Mark(micros));
        }

        fn space(&mut self, micros: u32) {
            self.0.push(Pulse::Space(micros));
        }
    }

    #[test]
    fn emit_dispatches_on_kind() {
        let mut log = Log::default();
        log.emit(Pulse::Mark(560));
        log.emit(Pulse::Space(1690));
        assert_eq!(log.0, vec![Pulse::Mark(560), Pulse::Space(1690)]);
    }

    #[test]
    fn emitter_through_mut_reference() {
        fn header<E: PulseEmitter>(mut emitter: E) {
            emitter.mark(9000);
            emitter.space(4500);
        }

        let mut log = Log::default();
        header(&mut log);
        assert_eq!(log.0, vec![Pulse::Mark(9000), Pulse::Space(4500)]);
    }

    #[test]
    fn read_capture_for_slices_and_arrays() {
        let array = [100u32, 9000, 4500];
        assert_eq!(array.len(), 3);
        assert_eq!(ReadCapture::sample(&array, 1), Some(9000));
        assert_eq!(ReadCapture::sample(&array, 3), None);

        let vec = vec![1u32, 2];
        let slice: &[u32] = &vec;
        assert_eq!(slice.samples(), &[1, 2]);
        assert!(!ReadCapture::is_empty(&vec));
    }

    #[test]
    fn pulse_accessors() {
        assert_eq!(Pulse::Mark(560).duration(), 560);
        assert!(Pulse::Mark(560).is_mark());
        assert!(!Pulse::Space(0).is_mark());
    }
}
