use crate::timing::MAX_DATA_BITS;

/// A data payload: up to 64 bits, most significant first on the wire.
///
/// The bit count, not the value, decides how many bits are significant.
/// Bits above the count are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DataFrame {
    value: u64,
    len: u8,
}

impl DataFrame {
    /// Keep the low `len` bits of `value`. `None` if `len` exceeds 64.
    pub fn new(value: u64, len: u8) -> Option<Self> {
        if len > MAX_DATA_BITS {
            return None;
        }
        Some(Self {
            value: value & low_mask(len),
            len,
        })
    }

    /// The zero-length frame.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The significant bits, right-aligned.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Number of significant bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// True for a zero-length frame.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when no more bits fit.
    pub fn is_full(&self) -> bool {
        self.len == MAX_DATA_BITS
    }

    /// Bit `index` counted from the most significant end, `None` past the end.
    pub fn bit(&self, index: u8) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let shift = self.len - 1 - index;
        Some((self.value >> shift) & 1 == 1)
    }

    /// Bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(move |i| self.bit(i))
    }

    /// Append `bit` as the new least significant bit. Returns `false`, leaving
    /// the frame untouched, when it already holds 64 bits.
    pub fn push(&mut self, bit: bool) -> bool {
        if self.is_full() {
            return false;
        }
        // len < 64 here, so the shift is in range.
        self.value = (self.value << 1) | u64::from(bit);
        self.len += 1;
        true
    }
}

impl std::fmt::Display for DataFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("<empty>");
        }
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

fn low_mask(len: u8) -> u64 {
    if len >= MAX_DATA_BITS {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_masks_to_len() {
        let frame = DataFrame::new(0xFF, 4).unwrap();
        assert_eq!(frame.value(), 0xF);
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn new_rejects_more_than_64_bits() {
        assert!(DataFrame::new(1, 65).is_none());
        assert!(DataFrame::new(u64::MAX, 64).is_some());
    }

    #[test]
    fn bits_are_msb_first() {
        let frame = DataFrame::new(0b1011, 4).unwrap();
        let bits: Vec<bool> = frame.bits().collect();
        assert_eq!(bits, vec![true, false, true, true]);
        assert_eq!(frame.bit(4), None);
    }

    #[test]
    fn leading_zeros_are_significant() {
        let frame = DataFrame::new(0b0001, 4).unwrap();
        assert_eq!(frame.to_string(), "0001");
    }

    #[test]
    fn full_width_frame() {
        let frame = DataFrame::new(1u64 << 63, 64).unwrap();
        assert_eq!(frame.bit(0), Some(true));
        assert_eq!(frame.bits().filter(|b| *b).count(), 1);
    }

    #[test]
    fn push_builds_value_and_stops_at_64() {
        let mut frame = DataFrame::empty();
        for bit in [true, false, true, true] {
            assert!(frame.push(bit));
        }
        assert_eq!(frame, DataFrame::new(0b1011, 4).unwrap());

        let mut full = DataFrame::new(u64::MAX, 64).unwrap();
        assert!(full.is_full());
        assert!(!full.push(false));
        assert_eq!(full.value(), u64::MAX);
    }

    #[test]
    fn empty_frame() {
        let frame = DataFrame::empty();
        assert!(frame.is_empty());
        assert_eq!(frame.bits().count(), 0);
        assert_eq!(frame.to_string(), "<empty>");
    }
}
