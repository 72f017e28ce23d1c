//! Capture module - gesture capture tool support
//!
//! Re-exports only. All logic in submodules.

mod quality;
mod record;

pub use quality::{calculate_hand_quality, hand_quality, QualityConfig, DEFAULT_QUALITY_GATE};
pub use record::GestureRecord;
