//! Letter recognizer - pattern table + stability filter
//!
//! Per frame: score every letter, keep the best one strictly above the
//! confidence threshold, then feed it through the stability filter.

use std::collections::BTreeMap;
use log::{debug, warn};
use serde::Serialize;
use crate::hand::{HandLandmarkSet, Landmark};
use super::config::RecognizerConfig;
use super::letter::{Letter, LETTERS};
use super::patterns::LETTER_PATTERNS;
use super::stability::{ClassificationResult, StabilityFilter};

/// Snapshot of the recognizer state for debug displays
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecognitionStats {
    pub last_letter: Option<Letter>,
    pub frame_counters: BTreeMap<Letter, u32>,
    pub available_letters: Vec<Letter>,
}

/// Heuristic Libras letter recognizer for one session
pub struct LetterRecognizer {
    config: RecognizerConfig,
    filter: StabilityFilter,
}

impl LetterRecognizer {
    pub fn new() -> Self {
        Self::with_config(RecognizerConfig::default())
    }

    pub fn with_config(config: RecognizerConfig) -> Self {
        let filter = StabilityFilter::new(config.stability_frames);
        Self { config, filter }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Best-scoring letter above the threshold, without touching the
    /// frame counters.
    ///
    /// Ties keep the first letter in table (alphabetical) order.
    pub fn classify(&self, hand: &HandLandmarkSet) -> Option<(Letter, f32)> {
        let mut best: Option<(Letter, f32)> = None;
        let mut highest = 0.0;

        for pattern in LETTER_PATTERNS.iter() {
            let confidence = (pattern.score)(hand, &self.config.thresholds);
            if confidence > highest && confidence > self.config.confidence_threshold {
                highest = confidence;
                best = Some((pattern.letter, confidence));
            }
        }

        best
    }

    /// Classify one frame and update the stability counters.
    ///
    /// Returns None when fewer than 21 landmarks are given or when no
    /// letter clears the threshold. Counters are left untouched then.
    pub fn recognize_letter(&mut self, landmarks: &[Landmark]) -> Option<ClassificationResult> {
        let Some(hand) = HandLandmarkSet::from_slice(landmarks) else {
            if !landmarks.is_empty() {
                warn!("ignoring hand with {} landmarks", landmarks.len());
            }
            return None;
        };
        self.recognize_hand(&hand)
    }

    /// Same as `recognize_letter` for an already validated hand
    pub fn recognize_hand(&mut self, hand: &HandLandmarkSet) -> Option<ClassificationResult> {
        let (letter, confidence) = self.classify(hand)?;
        let result = self.confirm_recognition(letter, confidence);
        if result.stable {
            debug!("stable letter {} ({:.2})", result.letter, result.confidence);
        }
        Some(result)
    }

    /// Feed a detection straight into the stability filter
    pub fn confirm_recognition(&mut self, letter: Letter, confidence: f32) -> ClassificationResult {
        self.filter.confirm(letter, confidence)
    }

    pub fn frame_count(&self, letter: Letter) -> u32 {
        self.filter.count(letter)
    }

    pub fn last_recognized_letter(&self) -> Option<Letter> {
        self.filter.last_stable()
    }

    pub fn recognition_stats(&self) -> RecognitionStats {
        RecognitionStats {
            last_letter: self.filter.last_stable(),
            frame_counters: self.filter.counters().clone(),
            available_letters: LETTERS.to_vec(),
        }
    }

    /// Clear counters and the last recognized letter
    pub fn reset(&mut self) {
        debug!("recognizer reset");
        self.filter.reset();
    }
}

impl Default for LetterRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
