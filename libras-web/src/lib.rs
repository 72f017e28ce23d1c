//! Libras Web - fingerspelling recognition for the browser
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Hands runs in JavaScript; this crate receives its 21 hand
//! landmarks per frame and classifies them into Libras letters.

pub mod bridge;
pub mod capture;
pub mod hand;
pub mod recognizer;

#[cfg(test)]
mod test_utils;

use wasm_bindgen::prelude::*;

pub use bridge::recognize_letter;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log_str(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (console_log_str(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!(
        "✅ Libras recognizer loaded ({} letters)",
        recognizer::LETTERS.len()
    );
}

/// Letters the recognizer can report, as a single string ("ABCDEFGHILOUV")
#[wasm_bindgen]
pub fn available_letters() -> String {
    recognizer::LETTERS.iter().map(|l| l.as_str()).collect()
}
