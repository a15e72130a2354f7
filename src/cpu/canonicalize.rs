//! The HP-35 output-formatting algorithm.
//!
//! After every operation the arithmetic unit leaves the raw mantissa in
//! register A and a display mask in register B, then derives register C,
//! the value the display hardware actually shows. Jacques Laporte's
//! hardware reference documents the four format cases this covers:
//!
//! 1. plain integer, `100.`:  A=01000000000002 B=00029999999999 C=01000000000002
//! 2. plain fraction, `.01`:  A=00100000000902 B=20099999999999 C=01000000000998
//! 3. scientific, `1 10^12`:  A=01000000000012 B=02999999999000 C=01000000000012
//! 4. scientific, `1 10^-12`: A=01000000000912 B=02999999999000 C=01000000000988
//!
//! The derivation walks the registers digit-serially, exactly as the
//! hardware does: propagate the mantissa sign, skip leading mantissa
//! zeros, copy digits until B's stop mask (the digit 9) says to stop,
//! then copy or ten's-complement-negate the exponent field.

use crate::cpu::{CpuState, RegId};
use crate::decimal::{Digit, Register};
use serde::{Deserialize, Serialize};

/// Display metadata derived alongside register C.
///
/// The decoder consumes this instead of re-deriving the decimal point
/// and exponent visibility from B after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLayout {
    /// How many mantissa digits the copy loop placed (0..=10), i.e. how
    /// many display digit cells are live.
    pub mantissa_digits: u8,
    /// How many visible mantissa digits precede the decimal point
    /// (0 = point immediately after the sign cell). `None` when B
    /// carries no point marker.
    pub point: Option<u8>,
    /// True iff neither exponent-magnitude digit of B is the masking 9.
    pub exponent_visible: bool,
}

impl DisplayLayout {
    /// The power-on layout: nothing to display yet.
    pub const fn blank() -> Self {
        Self {
            mantissa_digits: 0,
            point: None,
            exponent_visible: false,
        }
    }
}

impl Default for DisplayLayout {
    fn default() -> Self {
        Self::blank()
    }
}

/// Phase of the digit-serial scan.
///
/// The scan runs `Mantissa` until B's stop mask or the field boundary
/// ends the copy loop, then takes one exponent step (sign-dependent)
/// and finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanPhase {
    /// Copying mantissa digits under B's stop mask.
    Mantissa,
    /// Copying the exponent field verbatim (A[2] == 0).
    ExponentPositive,
    /// Negating the exponent magnitude by ten's complement (A[2] != 0).
    ExponentNegative,
    /// Scan complete.
    Done,
}

/// Derive the display register from A and B and store it in X, along
/// with the display layout.
///
/// This is the only way X is written in normal operation; the previous
/// display value is always replaced whole.
pub fn canonicalize(state: &mut CpuState) {
    let a = state.get(RegId::A);
    let b = state.get(RegId::B);
    let (c, layout) = derive(&a, &b);
    state.set(RegId::X, c);
    state.set_layout(layout);
}

/// The pure A,B -> C derivation.
pub(crate) fn derive(a: &Register, b: &Register) -> (Register, DisplayLayout) {
    let mut c = Register::zero();

    let mantissa_positive = a.get(Register::MANT_SIGN).is_zero();
    let exponent_positive = a.get(Register::EXP_SIGN).is_zero();

    c.set(
        Register::MANT_SIGN,
        if mantissa_positive { Digit::ZERO } else { Digit::NINE },
    );

    // Leading-zero skip: the read cursor must never leave the mantissa
    // field, even when every mantissa digit is zero.
    let mut read = Register::MANT_HIGH;
    while read > Register::MANT_LOW && a.get(read).is_zero() {
        read -= 1;
    }

    let mut write = Register::MANT_HIGH;
    let mut copied: u8 = 0;

    let mut phase = ScanPhase::Mantissa;
    while phase != ScanPhase::Done {
        phase = match phase {
            ScanPhase::Mantissa => {
                // B is consulted at the source position: a 9 there means
                // "do not display this and further digits".
                if read < Register::MANT_LOW || b.get(read).is_nine() {
                    if exponent_positive {
                        ScanPhase::ExponentPositive
                    } else {
                        ScanPhase::ExponentNegative
                    }
                } else {
                    c.set(write, a.get(read));
                    copied += 1;
                    read -= 1;
                    write -= 1;
                    ScanPhase::Mantissa
                }
            }
            ScanPhase::ExponentPositive => {
                c.set(Register::EXP_SIGN, a.get(Register::EXP_SIGN));
                c.set(Register::EXP_TENS, a.get(Register::EXP_TENS));
                c.set(Register::EXP_ONES, a.get(Register::EXP_ONES));
                ScanPhase::Done
            }
            ScanPhase::ExponentNegative => {
                c.set(Register::EXP_SIGN, a.get(Register::EXP_SIGN));
                let (tens, ones) =
                    negate_exponent(a.get(Register::EXP_TENS), a.get(Register::EXP_ONES));
                c.set(Register::EXP_TENS, tens);
                c.set(Register::EXP_ONES, ones);
                ScanPhase::Done
            }
            ScanPhase::Done => unreachable!(),
        };
    }

    let layout = DisplayLayout {
        mantissa_digits: copied,
        point: point_ordinal(b),
        exponent_visible: !b.get(Register::EXP_TENS).is_nine()
            && !b.get(Register::EXP_ONES).is_nine(),
    };

    (c, layout)
}

/// Ten's-complement a two-digit exponent magnitude, digit-serially.
///
/// Every intermediate stays in 0..=9: the ones place is complemented
/// first, and a nonzero result there borrows from the tens place
/// (nine's complement); an exact multiple of ten leaves the ones place
/// at 0 with no borrow, so the tens place takes the full ten's
/// complement and a magnitude of exactly zero stays all zero rather
/// than producing a spurious nonzero digit.
pub(crate) fn negate_exponent(tens: Digit, ones: Digit) -> (Digit, Digit) {
    if ones.is_zero() {
        (tens.tens_complement(), Digit::ZERO)
    } else {
        (tens.nines_complement(), ones.tens_complement())
    }
}

/// Ordinal of the decimal point: B marks it with the digit 2.
///
/// The marker's distance from the mantissa-sign position is how many
/// visible digits precede the point. Scans high to low so the leftmost
/// marker wins.
fn point_ordinal(b: &Register) -> Option<u8> {
    for index in (Register::MANT_LOW..=Register::MANT_SIGN).rev() {
        if b.get(index).to_u8() == 2 {
            return Some((Register::MANT_SIGN - index) as u8);
        }
    }
    None
}

/// One documented output-format case: register pair in, display
/// register out, per the hardware reference.
#[derive(Debug, Clone, Copy)]
pub struct CanonCase {
    /// Short description of what the display shows.
    pub name: &'static str,
    /// Register A on entry.
    pub a: &'static str,
    /// Register B on entry.
    pub b: &'static str,
    /// Expected register C.
    pub c: &'static str,
}

/// The four documented format cases (integer, fraction, scientific with
/// positive and negative exponent).
pub const DOCUMENTED_CASES: [CanonCase; 4] = [
    CanonCase {
        name: "100. (integer)",
        a: "01000000000002",
        b: "00029999999999",
        c: "01000000000002",
    },
    CanonCase {
        name: ".01 (fraction)",
        a: "00100000000902",
        b: "20099999999999",
        c: "01000000000998",
    },
    CanonCase {
        name: "1 10^12 (scientific)",
        a: "01000000000012",
        b: "02999999999000",
        c: "01000000000012",
    },
    CanonCase {
        name: "1 10^-12 (scientific)",
        a: "01000000000912",
        b: "02999999999000",
        c: "01000000000988",
    },
];
