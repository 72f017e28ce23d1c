//! Recognizer tuning parameters
//!
//! Defaults reproduce the hand-picked cutoffs of the rule set. Any subset
//! can be overridden from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Minimum confidence a letter must strictly exceed to be reported
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Net frames a letter must win before it is reported stable
pub const DEFAULT_STABILITY_FRAMES: u32 = 5;

/// Classifier and stability filter settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    pub confidence_threshold: f32,
    pub stability_frames: u32,
    pub thresholds: PatternThresholds,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            stability_frames: DEFAULT_STABILITY_FRAMES,
            thresholds: PatternThresholds::default(),
        }
    }
}

impl RecognizerConfig {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Per-letter geometric cutoffs, in normalized image units
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternThresholds {
    /// B: neighbouring fingertips closer than this count as together
    pub b_fingers_together: f32,
    /// C: thumb-index gap must be strictly inside (min, max)
    pub c_gap_min: f32,
    pub c_gap_max: f32,
    /// F: thumb and index tips closer than this are touching
    pub f_touch: f32,
    /// G: max |index tip y - index mcp y| for a sideways index
    pub g_horizontal: f32,
    /// H: max |index tip y - middle tip y|
    pub h_tips_level: f32,
    /// L: thumb and index tips must be apart by more than this on both axes
    pub l_min_offset: f32,
    /// O: thumb and index tips closer than this close the ring
    pub o_touch: f32,
    /// U: index and middle tips closer than this are together
    pub u_together: f32,
    /// V: index and middle tips farther than this are apart
    pub v_separated: f32,
}

impl Default for PatternThresholds {
    fn default() -> Self {
        Self {
            b_fingers_together: 0.05,
            c_gap_min: 0.1,
            c_gap_max: 0.2,
            f_touch: 0.05,
            g_horizontal: 0.03,
            h_tips_level: 0.03,
            l_min_offset: 0.05,
            o_touch: 0.08,
            u_together: 0.04,
            v_separated: 0.06,
        }
    }
}
