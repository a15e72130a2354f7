//! Binary-coded decimal number-system primitives.
//!
//! This module provides the core types for working with the HP-35's
//! decimal hardware format:
//! - [`Digit`] - A single BCD digit (0-9)
//! - [`Register`] - A 14-digit register (sign, mantissa, exponent fields)

mod digit;
mod register;

pub use digit::Digit;
pub use register::{FormatError, Register};
