//! Stability filter - multi-frame confirmation of per-frame matches
//!
//! Leaky counter per letter: the winning letter gains one, every other
//! letter seen so far loses one (floored at zero). A letter is stable once
//! its counter reaches the configured frame count.

use std::collections::BTreeMap;
use serde::Serialize;
use super::config::DEFAULT_STABILITY_FRAMES;
use super::letter::Letter;

/// Outcome of one classification frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub letter: Letter,
    pub confidence: f32,
    pub stable: bool,
}

/// Per-letter frame counters plus the last confirmed letter.
///
/// Owned by one recognizer; not meant to be shared between sessions.
#[derive(Clone, Debug)]
pub struct StabilityFilter {
    counters: BTreeMap<Letter, u32>,
    last_stable: Option<Letter>,
    stability_frames: u32,
}

impl StabilityFilter {
    pub fn new(stability_frames: u32) -> Self {
        Self {
            counters: BTreeMap::new(),
            last_stable: None,
            stability_frames,
        }
    }

    /// Record one frame won by `letter`
    pub fn confirm(&mut self, letter: Letter, confidence: f32) -> ClassificationResult {
        for (other, count) in self.counters.iter_mut() {
            if *other != letter {
                *count = count.saturating_sub(1);
            }
        }

        let count = self.counters.entry(letter).or_insert(0);
        *count = count.saturating_add(1);

        let stable = *count >= self.stability_frames;
        if stable {
            self.last_stable = Some(letter);
        }

        ClassificationResult { letter, confidence, stable }
    }

    /// Current counter for a letter (0 if never seen)
    pub fn count(&self, letter: Letter) -> u32 {
        self.counters.get(&letter).copied().unwrap_or(0)
    }

    /// Snapshot of all counters, letters in alphabetical order
    pub fn counters(&self) -> &BTreeMap<Letter, u32> {
        &self.counters
    }

    /// Letter most recently reported stable
    pub fn last_stable(&self) -> Option<Letter> {
        self.last_stable
    }

    pub fn stability_frames(&self) -> u32 {
        self.stability_frames
    }

    /// Forget all counters and the last confirmed letter
    pub fn reset(&mut self) {
        self.counters.clear();
        self.last_stable = None;
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_STABILITY_FRAMES)
    }
}
