//! Front-panel application state and logic.

use crate::cpu::{canonicalize, CpuState, RegId, DOCUMENTED_CASES};
use crate::decimal::Register;
use crate::display::{self, SegmentMask};
use crate::regfile::RegFile;

/// Front-panel application state.
pub struct PanelApp {
    /// The processor state being inspected.
    pub state: CpuState,
    /// Current display content, one mask per position.
    pub masks: [SegmentMask; display::POSITIONS],
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl PanelApp {
    /// Create a panel at power-on, optionally pre-loading registers.
    pub fn new(initial: Option<RegFile>) -> Self {
        let mut state = CpuState::new();
        let status = match &initial {
            Some(regfile) => {
                regfile.apply(&mut state);
                format!("Loaded {} registers. Press 'c' to canonicalize.", regfile.len())
            }
            None => "Power on. Press 1-4 for the documented cases, 'c' to canonicalize.".into(),
        };

        let mut app = Self {
            state,
            masks: [SegmentMask::BLANK; display::POSITIONS],
            should_quit: false,
            status,
        };
        app.refresh();
        app
    }

    /// Load one of the four documented A/B register pairs.
    ///
    /// # Panics
    /// Panics if `n` is not in 0..=3.
    pub fn load_case(&mut self, n: usize) {
        assert!(
            n < DOCUMENTED_CASES.len(),
            "Invalid case number: {} (must be 0-3)",
            n
        );
        let case = DOCUMENTED_CASES[n];
        // The case strings are well-formed by construction.
        self.state
            .set(RegId::A, Register::from_decimal_string(case.a).unwrap());
        self.state
            .set(RegId::B, Register::from_decimal_string(case.b).unwrap());
        self.status = format!("Case {}: {}. Press 'c' to canonicalize.", n + 1, case.name);
    }

    /// Canonicalize A/B into X and refresh the display.
    ///
    /// Canonicalize-then-decode is one atomic step: the masks are
    /// refreshed in the same handler, so the panel never shows X
    /// mid-update.
    pub fn canonicalize(&mut self) {
        canonicalize(&mut self.state);
        self.refresh();
        self.status = format!("Canonicalized: X = {}", self.state.get(RegId::X));
    }

    /// Show the fixed test pattern instead of decoded state.
    pub fn show_test_pattern(&mut self) {
        self.masks = display::test_pattern();
        self.status = "Test pattern.".into();
    }

    /// Reset to power-on state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.refresh();
        self.status = "Reset to power-on state.".into();
    }

    /// Re-decode the display masks from the current state.
    fn refresh(&mut self) {
        self.masks = display::get_masks(&self.state);
    }
}

/// Run the front panel, optionally pre-loading a register file.
pub fn run_panel(initial: Option<RegFile>) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Create app
    let mut app = PanelApp::new(initial);

    // Main loop
    loop {
        // Draw
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char(c @ '1'..='4') => {
                            app.load_case(c as usize - '1' as usize);
                        }
                        KeyCode::Char('c') => app.canonicalize(),
                        KeyCode::Char('t') => app.show_test_pattern(),
                        KeyCode::Char('x') => app.reset(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_then_canonicalize() {
        let mut app = PanelApp::new(None);
        app.load_case(0);
        app.canonicalize();
        assert_eq!(app.state.get(RegId::X).to_decimal_string(), "01000000000002");
        assert_eq!(app.masks, display::get_masks(&app.state));
    }

    #[test]
    fn test_reset_after_test_pattern() {
        let mut app = PanelApp::new(None);
        app.show_test_pattern();
        assert_eq!(app.masks, display::test_pattern());

        app.reset();
        assert_eq!(app.state, CpuState::new());
        assert_eq!(app.masks, display::get_masks(&app.state));
    }

    #[test]
    #[should_panic(expected = "Invalid case number")]
    fn test_load_case_rejects_out_of_range() {
        let mut app = PanelApp::new(None);
        app.load_case(4);
    }
}
