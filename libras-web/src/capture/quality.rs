//! Capture readiness score for the gesture capture tool
//!
//! Mix of two 0-100 components: how many points are inside the frame and
//! how tightly the points cluster around their centroid.

use serde::{Deserialize, Serialize};
use crate::hand::{centroid, HandLandmarkSet, Landmark, LANDMARK_COUNT};

/// Minimum quality for a capture to be allowed
pub const DEFAULT_QUALITY_GATE: u32 = 70;

/// Per unit of distance from the centroid, a point loses this much score
const SPREAD_PENALTY: f32 = 5.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub gate: u32,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self { gate: DEFAULT_QUALITY_GATE }
    }
}

impl QualityConfig {
    pub fn passes(&self, quality: u32) -> bool {
        quality >= self.gate
    }

    /// Capture needs a chosen letter, enough quality and no capture running
    pub fn can_capture(&self, letter_selected: bool, quality: u32, is_capturing: bool) -> bool {
        letter_selected && self.passes(quality) && !is_capturing
    }
}

/// Quality percentage (0-100) of one hand.
///
/// Returns 0 for fewer than 21 points; only the first 21 are scored.
pub fn calculate_hand_quality(landmarks: &[Landmark]) -> u32 {
    match HandLandmarkSet::from_slice(landmarks) {
        Some(hand) => hand_quality(&hand),
        None => 0,
    }
}

pub fn hand_quality(hand: &HandLandmarkSet) -> u32 {
    let points = hand.points();
    let n = LANDMARK_COUNT as f32;

    let valid = points.iter().filter(|p| p.in_frame()).count() as f32;
    let validity_score = valid / n * 100.0;

    let center = centroid(points);
    let spread: f32 = points
        .iter()
        .map(|p| (1.0 - (p.xy() - center).norm() * SPREAD_PENALTY).max(0.0))
        .sum();
    let stability_score = spread / n * 100.0;

    ((validity_score + stability_score) / 2.0).round() as u32
}
