//! Captured gesture sample, as sent to the save-gesture endpoint

use serde::{Deserialize, Serialize};
use crate::hand::{HandLandmarkSet, Landmark};
use crate::recognizer::Letter;
use super::quality::hand_quality;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureRecord {
    pub letter: Letter,
    pub landmarks: Vec<Landmark>,
    /// ISO-8601 capture time
    pub timestamp: String,
    pub quality: u32,
}

impl GestureRecord {
    pub fn new(letter: Letter, hand: &HandLandmarkSet, timestamp: impl Into<String>) -> Self {
        Self {
            letter,
            landmarks: hand.points().to_vec(),
            timestamp: timestamp.into(),
            quality: hand_quality(hand),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Landmarks as a hand, if the record holds at least 21 points
    pub fn hand(&self) -> Option<HandLandmarkSet> {
        HandLandmarkSet::from_slice(&self.landmarks)
    }
}
