//! Fixed-width BCD registers.
//!
//! Every HP-35 register is 14 digits (56 bits) with a fixed field layout,
//! low index to high:
//! - indices 0-2: exponent (index 2 is the exponent sign digit,
//!   indices 1-0 the two-digit magnitude)
//! - indices 3-12: ten mantissa digits, most significant at index 12
//! - index 13: mantissa sign digit
//!
//! Sign digits are 0 (positive) or 9 (negative).

use crate::decimal::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A 14-digit calculator register.
///
/// Registers are plain values: copies flow between components, never
/// aliases. The 14-character decimal string (most significant digit
/// first) is the sole textual interchange format, including serde.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Register {
    /// Digits stored from least significant (index 0, exponent ones)
    /// to most significant (index 13, mantissa sign)
    digits: [Digit; 14],
}

impl Register {
    /// Number of digits in a register.
    pub const WIDTH: usize = 14;

    /// Exponent ones digit.
    pub const EXP_ONES: usize = 0;

    /// Exponent tens digit.
    pub const EXP_TENS: usize = 1;

    /// Exponent sign digit (0 = positive, 9 = negative).
    pub const EXP_SIGN: usize = 2;

    /// Least significant mantissa digit.
    pub const MANT_LOW: usize = 3;

    /// Most significant mantissa digit.
    pub const MANT_HIGH: usize = 12;

    /// Mantissa sign digit (0 = positive, 9 = negative).
    pub const MANT_SIGN: usize = 13;

    /// Create a new register with all digits zero.
    #[inline]
    pub const fn zero() -> Self {
        Self { digits: [Digit::ZERO; 14] }
    }

    /// Create a register from an array of digits (least significant first).
    #[inline]
    pub const fn from_digits(digits: [Digit; 14]) -> Self {
        Self { digits }
    }

    /// Get the underlying digit array.
    #[inline]
    pub const fn digits(&self) -> &[Digit; 14] {
        &self.digits
    }

    /// Get a mutable reference to the digit array.
    #[inline]
    pub fn digits_mut(&mut self) -> &mut [Digit; 14] {
        &mut self.digits
    }

    /// Get a single digit by index (0 = exponent ones).
    #[inline]
    pub const fn get(&self, index: usize) -> Digit {
        self.digits[index]
    }

    /// Set a single digit by index (0 = exponent ones).
    #[inline]
    pub fn set(&mut self, index: usize, digit: Digit) {
        self.digits[index] = digit;
    }

    /// Check if every digit of this register is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.is_zero())
    }

    /// Parse from a decimal string like "01000000000002".
    ///
    /// The string must be exactly 14 ASCII decimal digits; the leftmost
    /// character maps to index 13 (mantissa sign) down to the rightmost
    /// at index 0 (exponent ones).
    pub fn from_decimal_string(s: &str) -> Result<Self, FormatError> {
        if s.len() != Self::WIDTH {
            return Err(FormatError::WrongLength { expected: Self::WIDTH, got: s.len() });
        }

        let mut digits = [Digit::ZERO; 14];
        for (i, c) in s.chars().rev().enumerate() {
            digits[i] = Digit::from_ascii(c).ok_or(FormatError::InvalidChar(c))?;
        }

        Ok(Self { digits })
    }

    /// Render as a 14-character decimal string, most significant digit
    /// first. Inverse of [`Register::from_decimal_string`].
    pub fn to_decimal_string(&self) -> String {
        self.digits.iter().rev().map(|d| d.to_ascii()).collect()
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Register({:?} ", self.digits[Self::MANT_SIGN])?;
        for i in (Self::MANT_LOW..=Self::MANT_HIGH).rev() {
            write!(f, "{:?}", self.digits[i])?;
        }
        write!(f, " ")?;
        for i in (Self::EXP_ONES..=Self::EXP_SIGN).rev() {
            write!(f, "{:?}", self.digits[i])?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..Self::WIDTH).rev() {
            write!(f, "{}", self.digits[i])?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Register {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_decimal_string(&s)
    }
}

impl From<Register> for String {
    fn from(register: Register) -> Self {
        register.to_decimal_string()
    }
}

/// Errors that can occur when constructing registers or digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input string was the wrong length.
    #[error("expected {expected} digits, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// A non-digit character was encountered.
    #[error("invalid digit character: '{0}' (expected 0-9)")]
    InvalidChar(char),

    /// A raw digit value outside 0..=9 was encountered.
    #[error("digit value {0} out of range (expected 0-9)")]
    DigitRange(u8),
}
