//! Processor state and the output-formatting algorithm.
//!
//! This module implements the HP-35's register architecture:
//! - 7 registers of 14 BCD digits (A, B, X display, Y, Z, T stack, M)
//! - the pointer register and twelve status flags
//! - canonicalization: the digit-serial derivation of the display
//!   register from the A/B pair

pub mod canonicalize;
pub mod state;

pub use canonicalize::{canonicalize, CanonCase, DisplayLayout, DOCUMENTED_CASES};
pub use state::{CpuState, RegId, Status};
