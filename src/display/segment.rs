//! Seven-segment mask constants.
//!
//! Each display position is driven by an 8-bit mask: bits 0..=6 light
//! segments a..g, bit 7 lights the decimal point. The digit patterns
//! are fixed hardware constants, never computed at runtime.

use crate::decimal::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A seven-segment display mask (plus decimal point in bit 7).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SegmentMask(u8);

impl SegmentMask {
    /// Nothing lit (also a masked position).
    pub const BLANK: SegmentMask = SegmentMask(0b0000_0000);

    /// The decimal point alone.
    pub const POINT: SegmentMask = SegmentMask(0b1000_0000);

    /// The minus sign (segment g alone).
    pub const MINUS: SegmentMask = SegmentMask(0b0100_0000);

    /// Digit patterns, indexed by digit value.
    ///
    /// Each is unique and non-zero.
    pub const DIGITS: [SegmentMask; 10] = [
        SegmentMask(0b0011_1111), // 0
        SegmentMask(0b0000_0110), // 1
        SegmentMask(0b0101_1011), // 2
        SegmentMask(0b0100_1111), // 3
        SegmentMask(0b0110_0110), // 4
        SegmentMask(0b0110_1101), // 5
        SegmentMask(0b0111_1101), // 6
        SegmentMask(0b0000_0111), // 7
        SegmentMask(0b0111_1111), // 8
        SegmentMask(0b0110_1111), // 9
    ];

    /// The mask for a digit.
    #[inline]
    pub const fn for_digit(digit: Digit) -> SegmentMask {
        Self::DIGITS[digit.to_u8() as usize]
    }

    /// This mask with the decimal point lit as well.
    #[inline]
    pub const fn with_point(self) -> SegmentMask {
        SegmentMask(self.0 | Self::POINT.0)
    }

    /// The raw mask byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if the decimal-point bit is lit.
    #[inline]
    pub const fn has_point(self) -> bool {
        self.0 & Self::POINT.0 != 0
    }
}

impl fmt::Debug for SegmentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentMask({:#010b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_masks_unique_and_nonzero() {
        for (i, a) in SegmentMask::DIGITS.iter().enumerate() {
            assert_ne!(a.bits(), 0, "digit {} mask is blank", i);
            for (j, b) in SegmentMask::DIGITS.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "digits {} and {} share a mask", i, j);
                }
            }
        }
    }

    #[test]
    fn test_for_digit() {
        for d in Digit::ALL {
            assert_eq!(
                SegmentMask::for_digit(d),
                SegmentMask::DIGITS[d.to_u8() as usize]
            );
        }
        assert_eq!(SegmentMask::for_digit(Digit::ZERO).bits(), 0b0011_1111);
        assert_eq!(SegmentMask::for_digit(Digit::NINE).bits(), 0b0110_1111);
    }

    #[test]
    fn test_with_point() {
        let one = SegmentMask::for_digit(Digit::from_u8(1));
        assert!(!one.has_point());
        assert!(one.with_point().has_point());
        assert_eq!(one.with_point().bits(), 0b1000_0110);
        assert!(SegmentMask::POINT.has_point());
    }

    #[test]
    fn test_special_masks() {
        assert_eq!(SegmentMask::BLANK.bits(), 0);
        assert_eq!(SegmentMask::MINUS.bits(), 0b0100_0000);
        assert_eq!(SegmentMask::POINT.bits(), 0b1000_0000);
    }
}
