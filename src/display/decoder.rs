//! Register-to-segment decoding.
//!
//! The display has 15 positions, left to right: the mantissa sign cell,
//! an 11-cell mantissa window (up to ten digits plus the decimal point,
//! which occupies a cell of its own), the exponent sign cell, and two
//! exponent digit cells. [`get_masks`] maps the display register X and
//! the layout derived by canonicalization onto those positions;
//! everything unused is blank.

use crate::cpu::{CpuState, RegId};
use crate::decimal::Register;
use crate::display::SegmentMask;

/// Number of physical display positions.
pub const POSITIONS: usize = 15;

/// First and last cell of the mantissa window.
const WINDOW_FIRST: usize = 1;
const WINDOW_LAST: usize = 11;

/// Exponent cells: sign, tens, ones.
const EXP_SIGN_CELL: usize = 12;
const EXP_TENS_CELL: usize = 13;
const EXP_ONES_CELL: usize = 14;

/// Decode the processor state into one segment mask per display
/// position. Pure function of X and the display layout.
pub fn get_masks(state: &CpuState) -> [SegmentMask; POSITIONS] {
    let x = state.get(RegId::X);
    let layout = state.layout();

    let mut masks = [SegmentMask::BLANK; POSITIONS];

    masks[0] = if x.get(Register::MANT_SIGN).is_nine() {
        SegmentMask::MINUS
    } else {
        SegmentMask::BLANK
    };

    let mut cell = WINDOW_FIRST;
    for ordinal in 0..layout.mantissa_digits {
        if layout.point == Some(ordinal) && cell <= WINDOW_LAST {
            masks[cell] = SegmentMask::POINT;
            cell += 1;
        }
        if cell > WINDOW_LAST {
            break;
        }
        masks[cell] = SegmentMask::for_digit(x.get(Register::MANT_HIGH - ordinal as usize));
        cell += 1;
    }
    // A point that trails every visible digit ("100.") still gets its
    // own cell.
    if let Some(point) = layout.point {
        if point >= layout.mantissa_digits && cell <= WINDOW_LAST {
            masks[cell] = SegmentMask::POINT;
        }
    }

    if layout.exponent_visible {
        masks[EXP_SIGN_CELL] = if x.get(Register::EXP_SIGN).is_nine() {
            SegmentMask::MINUS
        } else {
            SegmentMask::BLANK
        };
        masks[EXP_TENS_CELL] = SegmentMask::for_digit(x.get(Register::EXP_TENS));
        masks[EXP_ONES_CELL] = SegmentMask::for_digit(x.get(Register::EXP_ONES));
    }

    masks
}

/// The original fixed decoder output, kept as a fixture: the display
/// reading "-1.234567890 99".
pub fn test_pattern() -> [SegmentMask; POSITIONS] {
    let d = |n: u8| SegmentMask::DIGITS[n as usize];
    [
        SegmentMask::MINUS,
        d(1),
        SegmentMask::POINT,
        d(2),
        d(3),
        d(4),
        d(5),
        d(6),
        d(7),
        d(8),
        d(9),
        d(0),
        SegmentMask::BLANK,
        d(9),
        d(9),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{canonicalize, DisplayLayout, DOCUMENTED_CASES};
    use crate::decimal::Digit;

    fn state_with(x: &str, layout: DisplayLayout) -> CpuState {
        let mut state = CpuState::new();
        state.set(RegId::X, Register::from_decimal_string(x).unwrap());
        state.set_layout(layout);
        state
    }

    #[test]
    fn test_reproduces_fixture() {
        let state = state_with(
            "91234567890099",
            DisplayLayout {
                mantissa_digits: 10,
                point: Some(1),
                exponent_visible: true,
            },
        );
        assert_eq!(get_masks(&state), test_pattern());
    }

    #[test]
    fn test_fixture_shape() {
        let pattern = test_pattern();
        assert_eq!(pattern.len(), POSITIONS);
        assert_eq!(pattern[0], SegmentMask::MINUS);
        assert_eq!(pattern[2], SegmentMask::POINT);
        assert_eq!(pattern[12], SegmentMask::BLANK);
        // Fixture bytes as the hardware reference lists them.
        let bytes: Vec<u8> = pattern.iter().map(|m| m.bits()).collect();
        assert_eq!(
            bytes,
            [
                0b0100_0000,
                0b0000_0110,
                0b1000_0000,
                0b0101_1011,
                0b0100_1111,
                0b0110_0110,
                0b0110_1101,
                0b0111_1101,
                0b0000_0111,
                0b0111_1111,
                0b0110_1111,
                0b0011_1111,
                0b0000_0000,
                0b0110_1111,
                0b0110_1111,
            ]
        );
    }

    #[test]
    fn test_integer_case() {
        // "100." -- blank sign, three digits, trailing point, blank
        // exponent cells.
        let mut state = CpuState::new();
        let case = DOCUMENTED_CASES[0];
        state.set(RegId::A, Register::from_decimal_string(case.a).unwrap());
        state.set(RegId::B, Register::from_decimal_string(case.b).unwrap());
        canonicalize(&mut state);

        let masks = get_masks(&state);
        assert_eq!(masks[0], SegmentMask::BLANK);
        assert_eq!(masks[1], SegmentMask::for_digit(Digit::from_u8(1)));
        assert_eq!(masks[2], SegmentMask::for_digit(Digit::ZERO));
        assert_eq!(masks[3], SegmentMask::for_digit(Digit::ZERO));
        assert_eq!(masks[4], SegmentMask::POINT);
        for mask in &masks[5..POSITIONS] {
            assert_eq!(*mask, SegmentMask::BLANK);
        }
    }

    #[test]
    fn test_fraction_case() {
        // ".1" -- point cell first, then the lone digit.
        let mut state = CpuState::new();
        let case = DOCUMENTED_CASES[1];
        state.set(RegId::A, Register::from_decimal_string(case.a).unwrap());
        state.set(RegId::B, Register::from_decimal_string(case.b).unwrap());
        canonicalize(&mut state);

        let masks = get_masks(&state);
        assert_eq!(masks[0], SegmentMask::BLANK);
        assert_eq!(masks[1], SegmentMask::POINT);
        assert_eq!(masks[2], SegmentMask::for_digit(Digit::from_u8(1)));
        for mask in &masks[3..POSITIONS] {
            assert_eq!(*mask, SegmentMask::BLANK);
        }
    }

    #[test]
    fn test_negative_scientific_case() {
        // "1. -88" after ten's-complement: minus on the exponent sign
        // cell, exponent digits decoded from X.
        let mut state = CpuState::new();
        let case = DOCUMENTED_CASES[3];
        state.set(RegId::A, Register::from_decimal_string(case.a).unwrap());
        state.set(RegId::B, Register::from_decimal_string(case.b).unwrap());
        canonicalize(&mut state);

        let masks = get_masks(&state);
        assert_eq!(masks[0], SegmentMask::BLANK);
        assert_eq!(masks[1], SegmentMask::for_digit(Digit::from_u8(1)));
        assert_eq!(masks[2], SegmentMask::POINT);
        assert_eq!(masks[12], SegmentMask::MINUS);
        assert_eq!(masks[13], SegmentMask::for_digit(Digit::from_u8(8)));
        assert_eq!(masks[14], SegmentMask::for_digit(Digit::from_u8(8)));
    }

    #[test]
    fn test_power_on_shows_single_zero() {
        let mut state = CpuState::new();
        canonicalize(&mut state);

        let masks = get_masks(&state);
        assert_eq!(masks[1], SegmentMask::for_digit(Digit::ZERO));
        for (i, mask) in masks.iter().enumerate() {
            if i != 1 {
                assert_eq!(*mask, SegmentMask::BLANK, "cell {} not blank", i);
            }
        }
    }

    #[test]
    fn test_blank_layout_is_all_blank() {
        let state = state_with("00000000000000", DisplayLayout::blank());
        assert_eq!(get_masks(&state), [SegmentMask::BLANK; POSITIONS]);
    }
}
