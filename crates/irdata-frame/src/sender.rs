use irdata_pulse::{Pulse, PulseEmitter};
use tracing::{debug, trace};

use crate::bits::DataFrame;
use crate::codec::{encode_bit, encode_control, encode_data, encode_end_mark, encode_header};
use crate::control::ControlCode;
use crate::timing::MAX_DATA_BITS;

const INITIAL_BUFFER_CAPACITY: usize = 2 + 2 * (MAX_DATA_BITS as usize + 1) + 2;

/// Sends complete frames through any [`PulseEmitter`].
///
/// Each call encodes one frame and plays it out synchronously, in order.
/// Nothing is held back between calls.
pub struct FrameSender<E> {
    inner: E,
    buf: Vec<Pulse>,
}

impl<E: PulseEmitter> FrameSender<E> {
    /// Create a sender driving `inner`.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Emit one bit: a 560µs mark, then a 1690µs (one) or 560µs (zero) space.
    pub fn send_bit(&mut self, bit: bool) {
        self.buf.clear();
        encode_bit(bit, &mut self.buf);
        self.flush();
    }

    /// Emit the 9000/4500µs header.
    pub fn send_header(&mut self) {
        self.buf.clear();
        encode_header(&mut self.buf);
        self.flush();
    }

    /// Emit the 560µs end mark and switch the emitter off.
    pub fn send_end_mark(&mut self) {
        self.buf.clear();
        encode_end_mark(&mut self.buf);
        self.flush();
    }

    /// Send a complete control frame.
    pub fn send_control(&mut self, code: ControlCode) {
        self.buf.clear();
        encode_control(code, &mut self.buf);
        trace!(%code, "sending control frame");
        self.flush();
    }

    /// Send the low `bit_count` bits of `value` as a data frame.
    ///
    /// More than 64 bits is silently ignored: nothing is emitted and nothing
    /// is reported. Callers must check the bound themselves.
    pub fn send_data(&mut self, value: u64, bit_count: u8) {
        match DataFrame::new(value, bit_count) {
            Some(frame) => self.send_frame(&frame),
            None => debug!(bit_count, "data frame too long, not sending"),
        }
    }

    /// Send a data frame.
    pub fn send_frame(&mut self, frame: &DataFrame) {
        self.buf.clear();
        encode_data(frame, &mut self.buf);
        trace!(bits = frame.len(), "sending data frame");
        self.flush();
    }

    /// Borrow the underlying emitter.
    pub fn get_ref(&self) -> &E {
        &self.inner
    }

    /// Mutably borrow the underlying emitter.
    pub fn get_mut(&mut self) -> &mut E {
        &mut self.inner
    }

    /// Consume the sender and return the emitter.
    pub fn into_inner(self) -> E {
        self.inner
    }

    fn flush(&mut self) {
        for pulse in self.buf.drain(..) {
            self.inner.emit(pulse);
        }
    }
}
