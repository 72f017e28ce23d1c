//! Gesture capture tool bridge
//!
//! Quality gate and record building for the admin capture page. Saving
//! the record is left to the page's fetch call.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::capture::{hand_quality as score_hand, GestureRecord, QualityConfig};
use crate::hand::HandLandmarkSet;
use crate::recognizer::Letter;
use super::error::BridgeError;

thread_local! {
    static QUALITY_CONFIG: RefCell<QualityConfig> = RefCell::new(QualityConfig::default());
}

/// A selection counts only if it names a supported letter
fn letter_selected(letter: &str) -> bool {
    letter.parse::<Letter>().is_ok()
}

fn build_record(letter: &str, flat_data: &[f32], timestamp: String) -> Result<GestureRecord, BridgeError> {
    let letter = letter.parse::<Letter>()?;
    let hand = HandLandmarkSet::from_flat(flat_data)
        .ok_or(BridgeError::InvalidLandmarkLength(flat_data.len()))?;
    Ok(GestureRecord::new(letter, &hand, timestamp))
}

// ============================================================================
// WASM API
// ============================================================================

/// Quality percentage (0-100) of one hand given as 63 floats.
/// Returns 0 for incomplete data.
#[wasm_bindgen]
pub fn hand_quality(flat_data: &[f32]) -> u32 {
    HandLandmarkSet::from_flat(flat_data).map_or(0, |hand| score_hand(&hand))
}

#[wasm_bindgen]
pub fn set_quality_gate(gate: u32) {
    QUALITY_CONFIG.with(|config| config.borrow_mut().gate = gate);
}

/// True when a supported letter is selected, quality passes the gate
/// and no capture is already running
#[wasm_bindgen]
pub fn can_capture(letter: &str, quality: u32, is_capturing: bool) -> bool {
    let selected = letter_selected(letter);
    QUALITY_CONFIG.with(|config| config.borrow().can_capture(selected, quality, is_capturing))
}

/// Build the JSON payload for the save-gesture endpoint, stamped with
/// the current time
#[wasm_bindgen]
pub fn build_gesture_record(letter: &str, flat_data: &[f32]) -> Result<String, JsValue> {
    let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
    let record = build_record(letter, flat_data, timestamp)?;
    web_sys::console::log_1(
        &format!("📸 Captured {} (quality {}%)", record.letter, record.quality).into()
    );
    let json = record.to_json().map_err(BridgeError::from)?;
    Ok(json)
}
