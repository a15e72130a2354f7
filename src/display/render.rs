//! ASCII rendering of segment-mask sequences.
//!
//! Shared by the CLI `render` command, the bare demo, and the TUI front
//! panel. Each position becomes a 4-column cell across three text rows:
//!
//! ```text
//!  _
//! | |
//! |_|.
//! ```
//!
//! with the decimal point in the cell's rightmost column.

use crate::display::SegmentMask;

// Segment bit assignments (bit 7 is the point).
const SEG_A: u8 = 0b0000_0001;
const SEG_B: u8 = 0b0000_0010;
const SEG_C: u8 = 0b0000_0100;
const SEG_D: u8 = 0b0000_1000;
const SEG_E: u8 = 0b0001_0000;
const SEG_F: u8 = 0b0010_0000;
const SEG_G: u8 = 0b0100_0000;
const SEG_POINT: u8 = 0b1000_0000;

/// Render a mask sequence as three rows of ASCII art.
pub fn render_masks(masks: &[SegmentMask]) -> String {
    let mut top = String::new();
    let mut mid = String::new();
    let mut bot = String::new();

    for mask in masks {
        let bits = mask.bits();

        top.push(' ');
        top.push(if bits & SEG_A != 0 { '_' } else { ' ' });
        top.push(' ');
        top.push(' ');

        mid.push(if bits & SEG_F != 0 { '|' } else { ' ' });
        mid.push(if bits & SEG_G != 0 { '_' } else { ' ' });
        mid.push(if bits & SEG_B != 0 { '|' } else { ' ' });
        mid.push(' ');

        bot.push(if bits & SEG_E != 0 { '|' } else { ' ' });
        bot.push(if bits & SEG_D != 0 { '_' } else { ' ' });
        bot.push(if bits & SEG_C != 0 { '|' } else { ' ' });
        bot.push(if bits & SEG_POINT != 0 { '.' } else { ' ' });
    }

    format!("{}\n{}\n{}", top, mid, bot)
}

/// Render a mask sequence as a single line of text, one character per
/// position ("-1.234567890 99" for the fixture).
pub fn display_text(masks: &[SegmentMask]) -> String {
    masks.iter().map(|m| mask_char(*m)).collect()
}

fn mask_char(mask: SegmentMask) -> char {
    if mask == SegmentMask::BLANK {
        return ' ';
    }
    if mask == SegmentMask::MINUS {
        return '-';
    }
    if mask == SegmentMask::POINT {
        return '.';
    }
    for (value, digit_mask) in SegmentMask::DIGITS.iter().enumerate() {
        if mask == *digit_mask || mask == digit_mask.with_point() {
            return (b'0' + value as u8) as char;
        }
    }
    '?'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::decoder::test_pattern;

    #[test]
    fn test_fixture_text() {
        assert_eq!(display_text(&test_pattern()), "-1.234567890 99");
    }

    #[test]
    fn test_render_shape() {
        let art = render_masks(&test_pattern());
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(line.len(), 15 * 4);
        }
    }

    #[test]
    fn test_render_single_digit() {
        // "1" lights only the two right-hand verticals.
        let art = render_masks(&[SegmentMask::DIGITS[1]]);
        assert_eq!(art, "    \n  | \n  | ");
    }

    #[test]
    fn test_render_minus_and_point() {
        let art = render_masks(&[SegmentMask::MINUS, SegmentMask::POINT]);
        assert_eq!(art, "        \n _      \n       .");
    }

    #[test]
    fn test_mask_char_covers_digits() {
        for (value, mask) in SegmentMask::DIGITS.iter().enumerate() {
            assert_eq!(mask_char(*mask), (b'0' + value as u8) as char);
            assert_eq!(mask_char(mask.with_point()), (b'0' + value as u8) as char);
        }
    }
}
