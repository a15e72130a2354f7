//! WebAssembly bindings for the calculator core.
//!
//! This module provides JavaScript-friendly wrappers around the
//! register, canonicalization, and display-decoding operations.

use wasm_bindgen::prelude::*;

use crate::cpu::{canonicalize, CpuState, RegId};
use crate::decimal::Register;
use crate::display;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_reg_id(name: &str) -> Result<RegId, JsError> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => RegId::from_letter(c)
            .ok_or_else(|| JsError::new(&format!("unknown register '{}'", name))),
        _ => Err(JsError::new(&format!("unknown register '{}'", name))),
    }
}

/// WebAssembly-friendly wrapper around the processor state.
#[wasm_bindgen]
pub struct WasmCalculator {
    state: CpuState,
}

#[wasm_bindgen]
impl WasmCalculator {
    /// Create a calculator at power-on.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { state: CpuState::new() }
    }

    /// Reset to power-on state.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Set a register from a 14-digit decimal string. Register names
    /// are the letters A, B, X, Y, Z, T, M (case-insensitive).
    #[wasm_bindgen]
    pub fn set_register(&mut self, name: &str, digits: &str) -> Result<(), JsError> {
        let id = parse_reg_id(name)?;
        let register = Register::from_decimal_string(digits)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        self.state.set(id, register);
        Ok(())
    }

    /// Get a register as a 14-digit decimal string.
    #[wasm_bindgen]
    pub fn register(&self, name: &str) -> Result<String, JsError> {
        let id = parse_reg_id(name)?;
        Ok(self.state.get(id).to_decimal_string())
    }

    /// Derive the display register X from A and B.
    #[wasm_bindgen]
    pub fn canonicalize(&mut self) {
        canonicalize(&mut self.state);
    }

    /// Get the current display masks, one byte per position.
    #[wasm_bindgen]
    pub fn masks(&self) -> Vec<u8> {
        display::get_masks(&self.state)
            .iter()
            .map(|m| m.bits())
            .collect()
    }

    /// Get the display content as plain text ("-1.234567890 99").
    #[wasm_bindgen]
    pub fn display_text(&self) -> String {
        display::display_text(&display::get_masks(&self.state))
    }

    /// Get the complete processor state as JSON.
    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed test pattern, one mask byte per position.
#[wasm_bindgen]
pub fn test_pattern() -> Vec<u8> {
    display::test_pattern().iter().map(|m| m.bits()).collect()
}
