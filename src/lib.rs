//! # HP-35 Simulator
//!
//! A binary-coded decimal simulator of the HP-35 (1972) scientific
//! calculator's register and display-formatting core.
//!
//! The HP-35 stores every value as 14 packed decimal digits: a mantissa
//! sign digit, ten mantissa digits, and a signed two-digit exponent.
//! This crate recreates that register format, the canonicalization
//! algorithm that derives the display register from the raw A/B pair,
//! and the seven-segment decoding of the result.

pub mod cpu;
pub mod decimal;
pub mod display;
pub mod regfile;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use cpu::{canonicalize, CanonCase, CpuState, DisplayLayout, RegId, Status, DOCUMENTED_CASES};
pub use decimal::{Digit, FormatError, Register};
pub use display::SegmentMask;
pub use regfile::{load_regfile, save_regfile, RegFile, RegFileError};

#[cfg(feature = "tui")]
pub use tui::run_panel;
