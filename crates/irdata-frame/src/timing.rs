//! Timing vocabulary shared by the sender and the decoder.
//!
//! All durations are microseconds.

/// Header mark.
pub const HEADER_MARK: u32 = 9000;
/// Header space.
pub const HEADER_SPACE: u32 = 4500;

/// Mark preceding a logical one.
pub const ONE_MARK: u32 = 560;
/// Space carrying a logical one.
pub const ONE_SPACE: u32 = 1690;

/// Mark preceding a logical zero.
pub const ZERO_MARK: u32 = 560;
/// Space carrying a logical zero.
pub const ZERO_SPACE: u32 = 560;

/// Mark closing every frame. It is followed by a zero space (emitter off).
pub const END_MARK: u32 = 560;

/// Shortest idle interval that separates two frames.
pub const MIN_GAP: u32 = 25000;

/// Default timing tolerance, in percent of the expected duration.
pub const TOLERANCE_PERCENT: u32 = 25;

/// Protocol identifier reported with every decoded message.
pub const PROTOCOL_ID: u16 = 99;

/// Longest data payload in bits.
pub const MAX_DATA_BITS: u8 = 64;

/// A proportional timing tolerance.
///
/// The allowed deviation scales with the expected duration, so the header
/// absorbs far more absolute jitter than a bit pulse does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance(u32);

impl Tolerance {
    /// Tolerance of `percent` percent.
    pub const fn percent(percent: u32) -> Self {
        Self(percent)
    }

    /// The percentage this tolerance allows.
    pub const fn as_percent(self) -> u32 {
        self.0
    }

    /// True iff `|actual - expected| <= expected * percent / 100`.
    pub fn matches(self, actual: u32, expected: u32) -> bool {
        within_tolerance_percent(actual, expected, self.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(TOLERANCE_PERCENT)
    }
}

/// Tolerant equality at the protocol's ±25%.
pub fn within_tolerance(actual: u32, expected: u32) -> bool {
    within_tolerance_percent(actual, expected, TOLERANCE_PERCENT)
}

/// Tolerant equality at an arbitrary percentage.
///
/// Evaluated as `|actual - expected| * 100 <= expected * percent` in 64-bit
/// integers, so the boundary itself is accepted exactly.
pub fn within_tolerance_percent(actual: u32, expected: u32, percent: u32) -> bool {
    let diff = u64::from(actual.abs_diff(expected));
    diff * 100 <= u64::from(expected) * u64::from(percent)
}

/// Mark and space durations encoding `bit`.
pub fn bit_timings(bit: bool) -> (u32, u32) {
    if bit {
        (ONE_MARK, ONE_SPACE)
    } else {
        (ZERO_MARK, ZERO_SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_value_matches() {
        assert!(within_tolerance(560, 560));
        assert!(within_tolerance(9000, 9000));
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(within_tolerance(420, 560));
        assert!(within_tolerance(700, 560));
        assert!(!within_tolerance(419, 560));
        assert!(!within_tolerance(701, 560));
    }

    #[test]
    fn tolerance_is_proportional() {
        // 2000µs of jitter is fine on the header, fatal on a bit.
        assert!(within_tolerance(HEADER_MARK + 2000, HEADER_MARK));
        assert!(!within_tolerance(ONE_SPACE + 2000, ONE_SPACE));
        assert!(within_tolerance(6750, HEADER_MARK));
        assert!(!within_tolerance(6749, HEADER_MARK));
    }

    #[test]
    fn zero_expected_only_matches_zero() {
        assert!(within_tolerance(0, 0));
        assert!(!within_tolerance(1, 0));
    }

    #[test]
    fn extreme_durations_do_not_overflow() {
        assert!(!within_tolerance(u32::MAX, 560));
        assert!(within_tolerance(u32::MAX, u32::MAX));
    }

    #[test]
    fn custom_tolerance() {
        let tight = Tolerance::percent(10);
        assert!(tight.matches(616, 560));
        assert!(!tight.matches(617, 560));
        assert_eq!(Tolerance::default().as_percent(), 25);
    }

    #[test]
    fn bit_timings_share_the_mark() {
        assert_eq!(bit_timings(true), (560, 1690));
        assert_eq!(bit_timings(false), (560, 560));
    }
}
