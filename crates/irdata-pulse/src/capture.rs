use tracing::trace;

use crate::error::{PulseError, Result};
use crate::traits::{Pulse, ReadCapture};

/// An owned capture buffer: the leading gap followed by alternating
/// mark/space durations in microseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCapture {
    samples: Vec<u32>,
}

impl RawCapture {
    /// Start a capture with the idle gap that preceded the first mark.
    pub fn new(leading_gap: u32) -> Self {
        Self {
            samples: vec![leading_gap],
        }
    }

    /// Wrap samples exactly as the receiver recorded them.
    pub fn from_samples(samples: impl Into<Vec<u32>>) -> Self {
        Self {
            samples: samples.into(),
        }
    }

    /// Build the capture a receiver would record for `pulses`.
    ///
    /// Zero-length pulses leave no trace on the receiver and adjacent pulses
    /// of the same kind blur into one interval, so both are folded here.
    pub fn from_pulses(leading_gap: u32, pulses: &[Pulse]) -> Self {
        let mut capture = Self::new(leading_gap);
        for pulse in pulses {
            match *pulse {
                Pulse::Mark(us) => capture.push_mark(us),
                Pulse::Space(us) => capture.push_space(us),
            }
        }
        capture
    }

    /// Record a mark, extending the previous one if the last sample was a mark.
    pub fn push_mark(&mut self, micros: u32) {
        if micros == 0 {
            return;
        }
        if self.last_is_mark() {
            self.extend_last(micros);
        } else {
            self.samples.push(micros);
        }
    }

    /// Record a space, extending the previous one if the last sample was a
    /// space (including the leading gap).
    pub fn push_space(&mut self, micros: u32) {
        if micros == 0 {
            return;
        }
        if self.samples.is_empty() || self.last_is_mark() {
            self.samples.push(micros);
        } else {
            self.extend_last(micros);
        }
    }

    /// Borrow the raw samples.
    pub fn as_slice(&self) -> &[u32] {
        &self.samples
    }

    /// Consume the capture and return the samples.
    pub fn into_inner(self) -> Vec<u32> {
        self.samples
    }

    // Odd lengths end on a space (index 0 is the leading gap).
    fn last_is_mark(&self) -> bool {
        self.samples.len() % 2 == 0 && !self.samples.is_empty()
    }

    fn extend_last(&mut self, micros: u32) {
        if let Some(last) = self.samples.last_mut() {
            *last = last.saturating_add(micros);
        }
    }
}

impl ReadCapture for RawCapture {
    fn samples(&self) -> &[u32] {
        &self.samples
    }
}

impl From<Vec<u32>> for RawCapture {
    fn from(samples: Vec<u32>) -> Self {
        Self::from_samples(samples)
    }
}

impl AsRef<[u32]> for RawCapture {
    fn as_ref(&self) -> &[u32] {
        &self.samples
    }
}

/// Parse a textual pulse listing into a space-first timeline.
///
/// Tokens are separated by whitespace or commas. `+` marks a mark and `-` a
/// space; unsigned tokens take whatever kind comes next in the alternation.
/// When the listing opens with an explicit mark, `leading_gap` is inserted
/// in front so index 0 is always a space. After that, even indices are
/// spaces and odd indices marks, and a signed token that disagrees is
/// rejected.
pub fn parse_timeline(text: &str, leading_gap: u32) -> Result<Vec<u32>> {
    let mut timeline = Vec::new();
    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let (sign, digits) = match token.as_bytes()[0] {
            b'+' => (Some(true), &token[1..]),
            b'-' => (Some(false), &token[1..]),
            _ => (None, token),
        };
        let micros: u32 = digits.parse().map_err(|_| PulseError::InvalidSample {
            token: token.to_string(),
        })?;

        if timeline.is_empty() && sign == Some(true) {
            timeline.push(leading_gap);
        }
        let index = timeline.len();
        let expect_mark = index % 2 == 1;
        if sign.is_some_and(|is_mark| is_mark != expect_mark) {
            return Err(PulseError::OutOfOrder {
                token: token.to_string(),
                index,
                expected: if expect_mark { "mark" } else { "space" },
            });
        }
        timeline.push(micros);
    }

    if timeline.is_empty() {
        return Err(PulseError::Empty);
    }
    trace!(samples = timeline.len(), "parsed pulse listing");
    Ok(timeline)
}
