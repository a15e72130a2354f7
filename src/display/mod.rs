//! Seven-segment display decoding.
//!
//! This module maps the display register onto the 15 physical display
//! positions:
//! - [`SegmentMask`] - the 8-bit per-position segment patterns
//! - [`get_masks`] - processor state to mask sequence
//! - [`render_masks`] / [`display_text`] - ASCII renderings for hosts
//!   without real segments

pub mod decoder;
pub mod render;
pub mod segment;

pub use decoder::{get_masks, test_pattern, POSITIONS};
pub use render::{display_text, render_masks};
pub use segment::SegmentMask;
