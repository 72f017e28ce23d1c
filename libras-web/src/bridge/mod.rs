//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod capture;
mod error;
mod hands;
mod recognition;
mod templates;

pub use error::BridgeError;

pub use recognition::{
    recognize_letter,
    reset_recognizer,
    set_target_letter,
    get_recognition_stats,
    configure_recognizer,
    letter_description,
    landmark_stride,
};

pub use capture::{
    hand_quality,
    set_quality_gate,
    can_capture,
    build_gesture_record,
};

pub use templates::{
    load_gesture_templates,
    match_gesture_template,
    clear_gesture_templates,
    set_template_min_similarity,
};

pub use hands::{hand_skeleton, mirror_landmarks};
