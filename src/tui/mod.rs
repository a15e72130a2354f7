//! TUI front panel for the calculator core.
//!
//! Provides an interactive terminal-based panel with:
//! - Live seven-segment display
//! - Register, pointer, and status-flag inspection
//! - Key-driven canonicalization of the documented cases

mod app;
mod ui;

pub use app::{run_panel, PanelApp};
