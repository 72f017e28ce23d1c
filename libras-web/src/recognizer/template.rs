//! Template matching against captured gesture samples
//!
//! Both hands are translated so the wrist sits at the origin, then
//! compared point by point in 3D. Similarity is one minus the summed
//! distance over the largest distance assumed possible (2.0 per point).

use log::debug;
use serde::Serialize;
use crate::capture::GestureRecord;
use crate::hand::{HandLandmarkSet, Landmark, LANDMARK_COUNT, WRIST};
use super::letter::Letter;

/// Best match must score strictly above this
pub const DEFAULT_MIN_SIMILARITY: f32 = 0.3;

/// Assumed upper bound on the distance between two matching points
const MAX_POINT_DISTANCE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemplateMatch {
    pub letter: Letter,
    pub similarity: f32,
}

/// Copy of the hand with the wrist moved to the origin (x, y and z)
pub fn normalize_to_wrist(hand: &HandLandmarkSet) -> HandLandmarkSet {
    let wrist = hand[WRIST];
    let mut points = *hand.points();
    for p in points.iter_mut() {
        *p = Landmark::new(p.x - wrist.x, p.y - wrist.y, p.z - wrist.z);
    }
    HandLandmarkSet::new(points)
}

/// Similarity in [0, 1] of two already normalized hands
pub fn similarity(a: &HandLandmarkSet, b: &HandLandmarkSet) -> f32 {
    let total: f32 = a
        .points()
        .iter()
        .zip(b.points())
        .map(|(p, q)| (p.xyz() - q.xyz()).norm())
        .sum();
    (1.0 - total / (LANDMARK_COUNT as f32 * MAX_POINT_DISTANCE)).max(0.0)
}

/// Matches a live hand against a set of captured samples
pub struct TemplateMatcher {
    templates: Vec<(Letter, HandLandmarkSet)>,
    min_similarity: f32,
}

impl TemplateMatcher {
    pub fn new() -> Self {
        Self {
            templates: Vec::new(),
            min_similarity: DEFAULT_MIN_SIMILARITY,
        }
    }

    pub fn set_min_similarity(&mut self, min_similarity: f32) {
        self.min_similarity = min_similarity;
    }

    /// Replace the templates. Records without exactly 21 landmarks are
    /// skipped; returns how many were kept.
    pub fn load(&mut self, records: &[GestureRecord]) -> usize {
        self.templates = records
            .iter()
            .filter(|r| r.landmarks.len() == LANDMARK_COUNT)
            .filter_map(|r| r.hand().map(|hand| (r.letter, normalize_to_wrist(&hand))))
            .collect();
        debug!("loaded {} of {} gesture templates", self.templates.len(), records.len());
        self.templates.len()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }

    /// Most similar template, if it clears the minimum similarity.
    /// On a tie the template loaded first wins.
    pub fn best_match(&self, hand: &HandLandmarkSet) -> Option<TemplateMatch> {
        let input = normalize_to_wrist(hand);
        let mut best: Option<TemplateMatch> = None;
        let mut best_similarity = 0.0;

        for (letter, template) in &self.templates {
            let s = similarity(&input, template);
            if s > best_similarity {
                best_similarity = s;
                best = Some(TemplateMatch { letter: *letter, similarity: s });
            }
        }

        best.filter(|m| m.similarity > self.min_similarity)
    }

    /// Same as `best_match` for raw input; anything but 21 points is no match
    pub fn match_landmarks(&self, landmarks: &[Landmark]) -> Option<TemplateMatch> {
        if landmarks.len() != LANDMARK_COUNT {
            return None;
        }
        HandLandmarkSet::from_slice(landmarks).and_then(|hand| self.best_match(&hand))
    }
}

impl Default for TemplateMatcher {
    fn default() -> Self {
        Self::new()
    }
}
