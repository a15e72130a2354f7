//! Single binary-coded decimal digit (nibble).
//!
//! A digit holds one of the values 0 through 9. The HP-35 stores four
//! bits per digit; two positions per register reuse the digit 9 as a
//! sign sentinel (9 = negative), so 9 gets its own named constant.

use crate::decimal::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single BCD digit.
///
/// The wrapped value is always in 0..=9. Constructors enforce the range;
/// everything downstream relies on it without re-checking.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The digit 0 (also the positive sign marker).
    pub const ZERO: Digit = Digit(0);

    /// The digit 9 (also the negative sign marker and the display
    /// stop mask in register B).
    pub const NINE: Digit = Digit(9);

    /// All ten digit values in order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Create a digit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not in 0..=9.
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        assert!(value <= 9, "Invalid digit value: {} (must be 0-9)", value);
        Digit(value)
    }

    /// Get the integer value.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Create a digit from an ASCII character, if it is one of '0'..='9'.
    #[inline]
    pub fn from_ascii(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Digit(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Get the ASCII character for this digit.
    #[inline]
    pub const fn to_ascii(self) -> char {
        (b'0' + self.0) as char
    }

    /// Ten's complement: `(10 - d) mod 10`.
    ///
    /// This is the low-digit step of decimal negation; zero maps to zero
    /// so an exact multiple of ten produces no spurious nonzero digit.
    #[inline]
    pub const fn tens_complement(self) -> Self {
        Digit((10 - self.0) % 10)
    }

    /// Nine's complement: `9 - d`.
    ///
    /// Used for the digit above a position that produced a borrow.
    #[inline]
    pub const fn nines_complement(self) -> Self {
        Digit(9 - self.0)
    }

    /// Returns true if this digit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this digit is nine.
    #[inline]
    pub const fn is_nine(self) -> bool {
        self.0 == 9
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(FormatError::DigitRange(value))
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.to_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_roundtrip() {
        for d in Digit::ALL {
            assert_eq!(Digit::from_u8(d.to_u8()), d);
        }
    }

    #[test]
    fn test_ascii_roundtrip() {
        for d in Digit::ALL {
            assert_eq!(Digit::from_ascii(d.to_ascii()), Some(d));
        }
        assert_eq!(Digit::from_ascii('x'), None);
        assert_eq!(Digit::from_ascii(' '), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value")]
    fn test_from_u8_rejects_out_of_range() {
        let _ = Digit::from_u8(10);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert!(Digit::try_from(9).is_ok());
        assert_eq!(Digit::try_from(10), Err(FormatError::DigitRange(10)));
    }

    #[test]
    fn test_tens_complement() {
        // d + tens_complement(d) ≡ 0 (mod 10) for every digit
        for d in Digit::ALL {
            let sum = d.to_u8() + d.tens_complement().to_u8();
            assert_eq!(sum % 10, 0, "tens_complement({}) broke the identity", d);
        }
        assert_eq!(Digit::ZERO.tens_complement(), Digit::ZERO);
        assert_eq!(Digit::from_u8(2).tens_complement(), Digit::from_u8(8));
        assert_eq!(Digit::NINE.tens_complement(), Digit::from_u8(1));
    }

    #[test]
    fn test_nines_complement() {
        for d in Digit::ALL {
            assert_eq!(d.to_u8() + d.nines_complement().to_u8(), 9);
        }
    }

    #[test]
    fn test_sign_sentinels() {
        assert!(Digit::ZERO.is_zero());
        assert!(Digit::NINE.is_nine());
        assert!(!Digit::NINE.is_zero());
        assert_eq!(Digit::default(), Digit::ZERO);
    }
}
