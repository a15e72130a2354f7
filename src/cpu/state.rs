//! HP-35 processor state.
//!
//! The HP-35 has 7 registers of 14 BCD digits each:
//! - A, B: general purpose (the output-format pair: A holds the raw
//!   mantissa, B the display mask)
//! - X: the display register, derived by canonicalization
//! - Y, Z, T: the operational stack
//! - M: scratchpad (like A and B, but no math)
//!
//! plus a one-digit pointer register P and twelve status flags.

use crate::cpu::DisplayLayout;
use crate::decimal::{Digit, Register};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the seven registers.
///
/// The set is closed: there is no way to address a register outside
/// this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegId {
    /// General purpose (raw mantissa input to canonicalization).
    A,
    /// General purpose (display mask input to canonicalization).
    B,
    /// The display register, overwritten by canonicalization.
    X,
    /// Stack register Y.
    Y,
    /// Stack register Z.
    Z,
    /// Stack register T (top).
    T,
    /// Scratchpad.
    M,
}

impl RegId {
    /// Number of registers.
    pub const COUNT: usize = 7;

    /// All seven register identifiers in slot order.
    pub const ALL: [RegId; 7] = [
        RegId::A,
        RegId::B,
        RegId::X,
        RegId::Y,
        RegId::Z,
        RegId::T,
        RegId::M,
    ];

    /// Slot index of this register (0..=6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The register letter, as used in register files and the CLI.
    pub const fn letter(self) -> char {
        match self {
            RegId::A => 'A',
            RegId::B => 'B',
            RegId::X => 'X',
            RegId::Y => 'Y',
            RegId::Z => 'Z',
            RegId::T => 'T',
            RegId::M => 'M',
        }
    }

    /// Parse a register letter (case-insensitive).
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(RegId::A),
            'B' => Some(RegId::B),
            'X' => Some(RegId::X),
            'Y' => Some(RegId::Y),
            'Z' => Some(RegId::Z),
            'T' => Some(RegId::T),
            'M' => Some(RegId::M),
            _ => None,
        }
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The twelve hardware status flags.
///
/// Canonicalization never consults these; they are part of the power-on
/// processor surface for the (external) arithmetic engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Status {
    flags: [bool; 12],
}

impl Status {
    /// Number of status flags.
    pub const COUNT: usize = 12;

    /// Create a status word with all flags clear.
    pub const fn clear() -> Self {
        Self { flags: [false; 12] }
    }

    /// Read flag `n`.
    ///
    /// # Panics
    /// Panics if `n` is not in 0..=11.
    #[inline]
    pub const fn get(&self, n: usize) -> bool {
        self.flags[n]
    }

    /// Set or clear flag `n`.
    ///
    /// # Panics
    /// Panics if `n` is not in 0..=11.
    #[inline]
    pub fn set(&mut self, n: usize, value: bool) {
        assert!(n < Self::COUNT, "Invalid status flag: {} (must be 0-11)", n);
        self.flags[n] = value;
    }

    /// Clear every flag.
    pub fn clear_all(&mut self) {
        self.flags = [false; 12];
    }

    /// True if every flag is clear.
    pub fn is_clear(&self) -> bool {
        self.flags.iter().all(|f| !f)
    }
}

/// The complete processor state.
///
/// Owned by a single control flow; registers are mutated in place and
/// never destroyed individually. Construction performs no
/// canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuState {
    /// Register slots, indexed by [`RegId::index`].
    regs: [Register; 7],
    /// P register: which nibble a hardware operation addresses.
    pointer: Digit,
    /// The twelve status flags.
    status: Status,
    /// Display metadata derived by the last canonicalization.
    layout: DisplayLayout,
}

impl CpuState {
    /// Create the power-on state.
    ///
    /// A is all zeros (value 0, positive signs). B is the sentinel whose
    /// exponent-magnitude digits are both 9: mask nothing in the
    /// mantissa, never show the exponent. Everything else is zero/clear.
    pub fn new() -> Self {
        let mut regs = [Register::zero(); 7];
        regs[RegId::B.index()] = Self::power_on_b();
        Self {
            regs,
            pointer: Digit::ZERO,
            status: Status::clear(),
            layout: DisplayLayout::blank(),
        }
    }

    /// The power-on value of register B ("00000000000099").
    pub fn power_on_b() -> Register {
        let mut b = Register::zero();
        b.set(Register::EXP_ONES, Digit::NINE);
        b.set(Register::EXP_TENS, Digit::NINE);
        b
    }

    /// Restore the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Get a copy of a register.
    #[inline]
    pub fn get(&self, id: RegId) -> Register {
        self.regs[id.index()]
    }

    /// Replace a register's value.
    #[inline]
    pub fn set(&mut self, id: RegId, register: Register) {
        self.regs[id.index()] = register;
    }

    /// The pointer (P) register.
    #[inline]
    pub fn pointer(&self) -> Digit {
        self.pointer
    }

    /// Set the pointer (P) register.
    #[inline]
    pub fn set_pointer(&mut self, digit: Digit) {
        self.pointer = digit;
    }

    /// The status flags.
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Mutable access to the status flags.
    #[inline]
    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Display metadata from the last canonicalization.
    #[inline]
    pub fn layout(&self) -> DisplayLayout {
        self.layout
    }

    /// Store display metadata (set by canonicalization; public for
    /// test setup, like direct writes to X).
    #[inline]
    pub fn set_layout(&mut self, layout: DisplayLayout) {
        self.layout = layout;
    }
}

impl Default for CpuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_values() {
        let state = CpuState::new();
        assert_eq!(state.get(RegId::A), Register::zero());
        assert_eq!(state.get(RegId::B).to_decimal_string(), "00000000000099");
        for id in [RegId::X, RegId::Y, RegId::Z, RegId::T, RegId::M] {
            assert_eq!(state.get(id), Register::zero());
        }
        assert_eq!(state.pointer(), Digit::ZERO);
        assert!(state.status().is_clear());
        assert_eq!(state.layout(), DisplayLayout::blank());
    }

    #[test]
    fn test_get_returns_copy() {
        let mut state = CpuState::new();
        let mut r = state.get(RegId::Y);
        r.set(Register::MANT_HIGH, Digit::from_u8(5));
        // Mutating the copy must not touch the slot.
        assert_eq!(state.get(RegId::Y), Register::zero());

        state.set(RegId::Y, r);
        assert_eq!(state.get(RegId::Y).to_decimal_string(), "05000000000000");
    }

    #[test]
    fn test_reset_restores_power_on() {
        let mut state = CpuState::new();
        state.set(RegId::B, Register::zero());
        state.set_pointer(Digit::from_u8(7));
        state.status_mut().set(3, true);

        state.reset();
        assert_eq!(state, CpuState::new());
    }

    #[test]
    fn test_regid_letters() {
        for id in RegId::ALL {
            assert_eq!(RegId::from_letter(id.letter()), Some(id));
            assert_eq!(RegId::from_letter(id.letter().to_ascii_lowercase()), Some(id));
        }
        assert_eq!(RegId::from_letter('Q'), None);
    }

    #[test]
    fn test_status_flags() {
        let mut status = Status::clear();
        assert!(status.is_clear());

        status.set(0, true);
        status.set(11, true);
        assert!(status.get(0));
        assert!(!status.get(5));
        assert!(status.get(11));

        status.clear_all();
        assert!(status.is_clear());
    }

    #[test]
    #[should_panic(expected = "Invalid status flag")]
    fn test_status_set_rejects_out_of_range() {
        let mut status = Status::clear();
        status.set(Status::COUNT, true);
    }
}
