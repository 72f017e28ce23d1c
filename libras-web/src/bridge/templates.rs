//! Template matching bridge
//!
//! The page fetches stored gesture samples from the server and hands
//! them over as a JSON array; live frames are then matched against them.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::capture::GestureRecord;
use crate::recognizer::TemplateMatcher;
use super::error::BridgeError;
use super::recognition::first_hand;

thread_local! {
    static MATCHER: RefCell<TemplateMatcher> = RefCell::new(TemplateMatcher::default());
}

/// Replace the loaded templates with the records in `json`.
/// Returns how many were usable.
fn load_templates(matcher: &mut TemplateMatcher, json: &str) -> Result<usize, BridgeError> {
    let records: Vec<GestureRecord> = serde_json::from_str(json)?;
    matcher.clear();
    Ok(matcher.load(&records))
}

fn match_flat(matcher: &TemplateMatcher, flat_data: &[f32]) -> Result<Option<String>, BridgeError> {
    let hand = first_hand(flat_data)?;
    match matcher.best_match(&hand) {
        Some(found) => Ok(Some(serde_json::to_string(&found)?)),
        None => Ok(None),
    }
}

// ============================================================================
// WASM API
// ============================================================================

#[wasm_bindgen]
pub fn load_gesture_templates(json: &str) -> Result<usize, JsValue> {
    let loaded = MATCHER.with(|matcher| load_templates(&mut matcher.borrow_mut(), json))?;
    web_sys::console::log_1(&format!("📚 Loaded {} gesture templates", loaded).into());
    Ok(loaded)
}

/// Best template for the first hand, as `{"letter","similarity"}` JSON.
/// `None` when nothing clears the minimum similarity.
#[wasm_bindgen]
pub fn match_gesture_template(flat_data: &[f32]) -> Result<Option<String>, JsValue> {
    MATCHER
        .with(|matcher| match_flat(&matcher.borrow(), flat_data))
        .map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn clear_gesture_templates() {
    MATCHER.with(|matcher| matcher.borrow_mut().clear());
}

#[wasm_bindgen]
pub fn set_template_min_similarity(min_similarity: f32) {
    MATCHER.with(|matcher| matcher.borrow_mut().set_min_similarity(min_similarity));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Letter;
    use crate::test_utils::{fist_a, open_hand_b};

    fn records_json() -> String {
        let records = vec![
            GestureRecord::new(Letter::A, &fist_a(), "t0"),
            GestureRecord::new(Letter::B, &open_hand_b(), "t1"),
        ];
        serde_json::to_string(&records).unwrap()
    }

    #[test]
    fn test_load_replaces_templates() {
        let mut matcher = TemplateMatcher::new();
        assert_eq!(load_templates(&mut matcher, &records_json()), Ok(2));
        assert_eq!(load_templates(&mut matcher, &records_json()), Ok(2));
        assert_eq!(matcher.len(), 2);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let mut matcher = TemplateMatcher::new();
        assert!(matches!(
            load_templates(&mut matcher, "{\"letter\":\"A\"}"),
            Err(BridgeError::Serialization(_))
        ));
        assert!(matcher.is_empty());
    }

    #[test]
    fn test_match_flat() {
        let mut matcher = TemplateMatcher::new();
        load_templates(&mut matcher, &records_json()).unwrap();

        let json = match_flat(&matcher, &open_hand_b().to_flat()).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["letter"], "B");
        assert_eq!(value["similarity"], 1.0);

        assert_eq!(
            match_flat(&matcher, &[0.0; 62]),
            Err(BridgeError::InvalidLandmarkLength(62))
        );
    }

    #[test]
    fn test_no_templates_no_match() {
        let matcher = TemplateMatcher::new();
        assert_eq!(match_flat(&matcher, &fist_a().to_flat()), Ok(None));
    }
}
