use irdata_pulse::ReadCapture;
use tracing::{debug, trace};

use crate::bits::DataFrame;
use crate::codec::{DecodedMessage, FrameConfig, CONTROL_BITS};
use crate::control::{ControlCode, CONTROL_PREFIX, CONTROL_TYPE_MASK};
use crate::error::{DecodeError, Result};
use crate::timing::{HEADER_MARK, HEADER_SPACE, ONE_MARK, ONE_SPACE, ZERO_MARK, ZERO_SPACE};

/// Gap, header mark, header space, one bit pair, end mark.
pub const MIN_CAPTURE_LEN: usize = 6;

/// Index of the first payload mark.
const PAYLOAD_START: usize = 3;

/// Decodes one captured frame at a time.
///
/// The decoder only holds configuration. Every call works on its own
/// context, so a single instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    config: FrameConfig,
}

impl FrameDecoder {
    /// Create a decoder with default configuration.
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create a decoder with explicit configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Current decoder configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Decode one captured frame.
    ///
    /// Fails on a short capture, a bad header, or a control frame with a bad
    /// prefix or type. Data frames never fail unless `strict_bits` is set.
    pub fn decode<C: ReadCapture + ?Sized>(&self, capture: &C) -> Result<DecodedMessage> {
        let samples = capture.samples();
        if samples.len() < MIN_CAPTURE_LEN {
            debug!(len = samples.len(), "capture too short");
            return Err(DecodeError::BufferTooShort { len: samples.len() });
        }

        let mut ctx = DecodeContext::new(samples, &self.config);
        ctx.expect_header()?;

        let message = if ctx.next_pair_is_one() {
            ctx.decode_control()?
        } else {
            ctx.decode_data()?
        };
        trace!(bits = message.bits, value = message.value, "decoded frame");
        Ok(message)
    }
}

/// Cursor over one capture for the duration of one decode call.
struct DecodeContext<'a> {
    samples: &'a [u32],
    cursor: usize,
    config: &'a FrameConfig,
}

impl<'a> DecodeContext<'a> {
    fn new(samples: &'a [u32], config: &'a FrameConfig) -> Self {
        Self {
            samples,
            cursor: 0,
            config,
        }
    }

    fn matches(&self, actual: u32, expected: u32) -> bool {
        self.config.tolerance.matches(actual, expected)
    }

    fn expect_header(&mut self) -> Result<()> {
        let (mark, space) = (self.samples[1], self.samples[2]);
        if !self.matches(mark, HEADER_MARK) || !self.matches(space, HEADER_SPACE) {
            debug!(mark, space, "header mismatch");
            return Err(DecodeError::HeaderMismatch { mark, space });
        }
        self.cursor = PAYLOAD_START;
        Ok(())
    }

    /// Peek at the pair under the cursor without consuming it.
    fn next_pair_is_one(&self) -> bool {
        match self.pair_at(self.cursor) {
            Some((mark, space)) => self.matches(mark, ONE_MARK) && self.matches(space, ONE_SPACE),
            None => false,
        }
    }

    fn pair_at(&self, index: usize) -> Option<(u32, u32)> {
        Some((*self.samples.get(index)?, *self.samples.get(index + 1)?))
    }

    /// True when the pair under the cursor is followed by at least one more
    /// sample, i.e. it is a bit and not the end mark.
    fn has_payload_pair(&self) -> bool {
        self.cursor + 2 < self.samples.len()
    }

    /// Consume one mark/space pair. Reads past the end of the capture yield
    /// zero; so do pairs matching neither timing unless `strict_bits` is set.
    fn read_bit(&mut self) -> Result<bool> {
        let index = self.cursor;
        self.cursor += 2;
        let Some((mark, space)) = self.pair_at(index) else {
            return Ok(false);
        };

        if self.matches(mark, ONE_MARK) && self.matches(space, ONE_SPACE) {
            return Ok(true);
        }
        if self.matches(mark, ZERO_MARK) && self.matches(space, ZERO_SPACE) {
            return Ok(false);
        }
        if self.config.strict_bits {
            debug!(index, mark, space, "pulse pair is not a bit");
            return Err(DecodeError::BitMismatch { index, mark, space });
        }
        Ok(false)
    }

    fn decode_control(&mut self) -> Result<DecodedMessage> {
        let mut byte = 0u8;
        for _ in 0..CONTROL_BITS {
            byte = (byte << 1) | u8::from(self.read_bit()?);
        }

        if byte & CONTROL_PREFIX != CONTROL_PREFIX {
            debug!(byte, "control prefix mismatch");
            return Err(DecodeError::PrefixMismatch { byte });
        }
        let value = byte & CONTROL_TYPE_MASK;
        let code = ControlCode::from_type(value).ok_or_else(|| {
            debug!(value, "unknown control type");
            DecodeError::UnknownControlType { value }
        })?;
        Ok(DecodedMessage::control(code))
    }

    fn decode_data(&mut self) -> Result<DecodedMessage> {
        // Frame-type bit; anything but a one lands here.
        self.read_bit()?;

        let mut frame = DataFrame::empty();
        while !frame.is_full() && self.has_payload_pair() {
            let bit = self.read_bit()?;
            frame.push(bit);
        }
        Ok(DecodedMessage::data(frame))
    }
}
