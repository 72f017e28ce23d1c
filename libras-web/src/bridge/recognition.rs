//! Recognition session bridge
//!
//! Receives MediaPipe hand landmarks from JavaScript once per processed
//! frame and runs them through the session's letter recognizer.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::hand::{parse_hands, HandLandmarkSet, FLAT_LEN};
use crate::recognizer::{Letter, RecognitionSession, RecognizerConfig};
use super::error::BridgeError;

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<RecognitionSession> = RefCell::new(RecognitionSession::default());
}

// ============================================================================
// HELPERS (no JS types)
// ============================================================================

fn parse_target(letter: Option<String>) -> Result<Option<Letter>, BridgeError> {
    match letter.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.parse::<Letter>()?)),
    }
}

/// First whole hand in a flat buffer of 63 floats per hand
pub(super) fn first_hand(flat_data: &[f32]) -> Result<HandLandmarkSet, BridgeError> {
    parse_hands(flat_data)
        .into_iter()
        .next()
        .ok_or(BridgeError::InvalidLandmarkLength(flat_data.len()))
}

/// Classify the first hand and serialize the result, if any
fn recognize_flat(
    session: &mut RecognitionSession,
    flat_data: &[f32],
) -> Result<Option<String>, BridgeError> {
    let hand = first_hand(flat_data)?;
    match session.process(hand.points()) {
        Some(result) => Ok(Some(serde_json::to_string(&result)?)),
        None => Ok(None),
    }
}

fn apply_target(session: &mut RecognitionSession, letter: Option<String>) -> Result<(), BridgeError> {
    let target = parse_target(letter)?;
    session.set_target_letter(target);
    Ok(())
}

fn stats_json(session: &RecognitionSession) -> Result<String, BridgeError> {
    let json = serde_json::to_string(&session.recognizer().recognition_stats())?;
    Ok(json)
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values per hand
/// (21 landmarks × x, y, z). Only the first hand is classified.
///
/// Returns JSON `{letter, confidence, stable, matches_target}`, or
/// undefined when nothing was recognized or the buffer holds no whole hand.
#[wasm_bindgen]
pub fn recognize_letter(flat_data: &[f32]) -> Result<Option<String>, JsValue> {
    let outcome = SESSION.with(|session_cell| {
        recognize_flat(&mut session_cell.borrow_mut(), flat_data)
    });
    match outcome {
        Err(err @ BridgeError::InvalidLandmarkLength(len)) => {
            if len > 0 {
                web_sys::console::warn_1(&err.to_string().into());
            }
            Ok(None)
        }
        other => other.map_err(JsValue::from),
    }
}

/// Clear frame counters and the last recognized letter
#[wasm_bindgen]
pub fn reset_recognizer() {
    SESSION.with(|session_cell| session_cell.borrow_mut().restart());
}

/// Set the letter the learner is practicing (empty/undefined clears it).
/// Counters restart whenever the target changes.
#[wasm_bindgen]
pub fn set_target_letter(letter: Option<String>) -> Result<(), JsValue> {
    SESSION
        .with(|session_cell| apply_target(&mut session_cell.borrow_mut(), letter))
        .map_err(JsValue::from)
}

/// JSON `{last_letter, frame_counters, available_letters}`
#[wasm_bindgen]
pub fn get_recognition_stats() -> Result<String, JsValue> {
    SESSION
        .with(|session_cell| stats_json(&session_cell.borrow()))
        .map_err(JsValue::from)
}

/// Override recognizer settings from JSON; missing fields keep defaults.
/// Counters restart.
#[wasm_bindgen]
pub fn configure_recognizer(json: &str) -> Result<(), JsValue> {
    let config = RecognizerConfig::from_json(json)
        .map_err(|e| BridgeError::InvalidConfig(e.to_string()))?;
    SESSION.with(|session_cell| session_cell.borrow_mut().reconfigure(config));
    web_sys::console::log_1(&"⚙️ Recognizer reconfigured".into());
    Ok(())
}

/// Human-readable handshape description for a letter
#[wasm_bindgen]
pub fn letter_description(letter: &str) -> Result<String, JsValue> {
    let letter = letter.parse::<Letter>().map_err(BridgeError::from)?;
    Ok(letter.description().to_string())
}

/// Floats expected per hand
#[wasm_bindgen]
pub fn landmark_stride() -> usize {
    FLAT_LEN
}
