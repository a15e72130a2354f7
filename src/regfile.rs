//! Register-image file format.
//!
//! A simple text format for loading register states from the CLI and
//! TUI:
//! - One assignment per line: a register letter, whitespace, 14 digits
//! - Register letters are case-insensitive (A B X Y Z T M)
//! - Anything after `;` is a comment
//! - Blank lines are ignored

use crate::cpu::{CpuState, RegId};
use crate::decimal::Register;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

/// A loaded register-image file.
#[derive(Debug, Clone, Default)]
pub struct RegFile {
    /// Register assignments in file order. Later entries for the same
    /// register overwrite earlier ones when applied.
    pub entries: Vec<(RegId, Register)>,
}

impl RegFile {
    /// Create a new empty register file.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add an assignment.
    pub fn push(&mut self, id: RegId, register: Register) {
        self.entries.push((id, register));
    }

    /// Get the number of assignments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every assignment into the processor state, in order.
    pub fn apply(&self, state: &mut CpuState) {
        for (id, register) in &self.entries {
            state.set(*id, *register);
        }
    }

    /// Parse register-file text.
    pub fn parse(source: &str) -> Result<Self, RegFileError> {
        let mut file = RegFile::new();

        for (line_num, line) in source.lines().enumerate() {
            // Strip comments, skip blank lines
            let content = line.split(';').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let mut parts = content.split_whitespace();
            let reg_part = parts.next().unwrap_or("");
            let digits_part = parts.next().unwrap_or("");

            let mut reg_chars = reg_part.chars();
            let id = match (reg_chars.next(), reg_chars.next()) {
                (Some(c), None) => RegId::from_letter(c),
                _ => None,
            }
            .ok_or_else(|| RegFileError::Parse {
                line: line_num + 1,
                message: format!("unknown register '{}' (expected one of A B X Y Z T M)", reg_part),
            })?;

            let register =
                Register::from_decimal_string(digits_part).map_err(|e| RegFileError::Parse {
                    line: line_num + 1,
                    message: format!("{}", e),
                })?;

            if parts.next().is_some() {
                return Err(RegFileError::Parse {
                    line: line_num + 1,
                    message: "trailing text after register value".to_string(),
                });
            }

            file.push(id, register);
        }

        Ok(file)
    }
}

/// Load a register file from disk.
pub fn load_regfile<P: AsRef<Path>>(path: P) -> Result<RegFile, RegFileError> {
    let file = std::fs::File::open(path.as_ref()).map_err(|e| RegFileError::Io(e.to_string()))?;
    let reader = BufReader::new(file);

    let mut source = String::new();
    for line_result in reader.lines() {
        let line = line_result.map_err(|e| RegFileError::Io(e.to_string()))?;
        source.push_str(&line);
        source.push('\n');
    }

    RegFile::parse(&source)
}

/// Save a register file to disk.
pub fn save_regfile<P: AsRef<Path>>(path: P, regfile: &RegFile) -> Result<(), RegFileError> {
    let mut file =
        std::fs::File::create(path.as_ref()).map_err(|e| RegFileError::Io(e.to_string()))?;

    writeln!(file, "; HP-35 register image").map_err(|e| RegFileError::Io(e.to_string()))?;
    writeln!(file, "; {} registers", regfile.len()).map_err(|e| RegFileError::Io(e.to_string()))?;
    writeln!(file).map_err(|e| RegFileError::Io(e.to_string()))?;

    for (id, register) in &regfile.entries {
        writeln!(file, "{} {}", id, register).map_err(|e| RegFileError::Io(e.to_string()))?;
    }

    Ok(())
}

/// Errors that can occur during register-file operations.
#[derive(Debug, Clone, Error)]
pub enum RegFileError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_apply() {
        let source = "\
; the integer case
A 01000000000002
b 00029999999999  ; lowercase letter is fine
";
        let regfile = RegFile::parse(source).unwrap();
        assert_eq!(regfile.len(), 2);

        let mut state = CpuState::new();
        regfile.apply(&mut state);
        assert_eq!(state.get(RegId::A).to_decimal_string(), "01000000000002");
        assert_eq!(state.get(RegId::B).to_decimal_string(), "00029999999999");
        // Untouched registers keep their power-on values.
        assert_eq!(state.get(RegId::X), Register::zero());
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let source = "\n; nothing here\n\n   \n";
        let regfile = RegFile::parse(source).unwrap();
        assert!(regfile.is_empty());
    }

    #[test]
    fn test_parse_error_unknown_register() {
        let err = RegFile::parse("Q 01000000000002").unwrap_err();
        match err {
            RegFileError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("unknown register"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_bad_digits() {
        let err = RegFile::parse("A 010000\nA 01000000000002").unwrap_err();
        match err {
            RegFileError::Parse { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_trailing_text() {
        let err = RegFile::parse("A 01000000000002 extra").unwrap_err();
        match err {
            RegFileError::Parse { line, message } => {
                assert_eq!(line, 1);
                assert!(message.contains("trailing"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_later_entries_win() {
        let source = "X 11111111111111\nX 22222222222222";
        let regfile = RegFile::parse(source).unwrap();
        let mut state = CpuState::new();
        regfile.apply(&mut state);
        assert_eq!(state.get(RegId::X).to_decimal_string(), "22222222222222");
    }
}
