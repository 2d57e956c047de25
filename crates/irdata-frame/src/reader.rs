use irdata_pulse::RawCapture;
use tracing::trace;

use crate::codec::FrameConfig;

/// Splits a continuous pulse timeline into per-frame captures.
///
/// The timeline alternates space, mark, space, ... starting with the idle
/// interval before the first mark. Any space of at least `min_gap` ends the
/// current frame and becomes the leading gap of the next one, which is what
/// a receiver's gap detector does before handing a buffer to the decoder.
pub struct CaptureReader<I> {
    inner: I,
    pending_gap: Option<u32>,
    config: FrameConfig,
}

impl<I: Iterator<Item = u32>> CaptureReader<I> {
    /// Create a reader with default configuration.
    pub fn new(inner: impl IntoIterator<IntoIter = I>) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a reader with explicit configuration.
    pub fn with_config(inner: impl IntoIterator<IntoIter = I>, config: FrameConfig) -> Self {
        Self {
            inner: inner.into_iter(),
            pending_gap: None,
            config,
        }
    }

    /// Next frame's capture, or `None` once the timeline holds no more marks.
    pub fn read_capture(&mut self) -> Option<RawCapture> {
        let leading_gap = match self.pending_gap.take() {
            Some(gap) => gap,
            None => self.inner.next()?,
        };
        let mut samples = vec![leading_gap];

        while let Some(mark) = self.inner.next() {
            samples.push(mark);
            match self.inner.next() {
                Some(space) if space >= self.config.min_gap => {
                    self.pending_gap = Some(space);
                    break;
                }
                Some(space) => samples.push(space),
                None => break,
            }
        }

        // A lone gap is trailing idle, not a frame.
        if samples.len() < 2 {
            return None;
        }
        trace!(samples = samples.len(), "split capture");
        Some(RawCapture::from_samples(samples))
    }

    /// Consume the reader and return the remaining timeline.
    pub fn into_inner(self) -> I {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl<I: Iterator<Item = u32>> Iterator for CaptureReader<I> {
    type Item = RawCapture;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_capture()
    }
}
