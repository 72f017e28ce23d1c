//! Practice session - recognizer bound to an expected letter
//!
//! Changing the expected letter restarts the stability counters so a
//! half-confirmed previous letter cannot carry over.

use log::debug;
use serde::Serialize;
use crate::hand::Landmark;
use super::classifier::LetterRecognizer;
use super::config::RecognizerConfig;
use super::letter::Letter;
use super::stability::ClassificationResult;

/// Classification result annotated against the practice target
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SessionResult {
    pub letter: Letter,
    pub confidence: f32,
    pub stable: bool,
    /// None when no target is set
    pub matches_target: Option<bool>,
}

pub struct RecognitionSession {
    recognizer: LetterRecognizer,
    target: Option<Letter>,
}

impl RecognitionSession {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            recognizer: LetterRecognizer::with_config(config),
            target: None,
        }
    }

    pub fn recognizer(&self) -> &LetterRecognizer {
        &self.recognizer
    }

    pub fn target(&self) -> Option<Letter> {
        self.target
    }

    /// Set the expected letter; resets counters only when it changes
    pub fn set_target_letter(&mut self, target: Option<Letter>) {
        if self.target != target {
            debug!("practice target {:?} -> {:?}", self.target, target);
            self.target = target;
            self.recognizer.reset();
        }
    }

    pub fn process(&mut self, landmarks: &[Landmark]) -> Option<SessionResult> {
        let result = self.recognizer.recognize_letter(landmarks)?;
        Some(self.annotate(result))
    }

    fn annotate(&self, result: ClassificationResult) -> SessionResult {
        SessionResult {
            letter: result.letter,
            confidence: result.confidence,
            stable: result.stable,
            matches_target: self.target.map(|t| t == result.letter),
        }
    }

    /// Start over: clear counters and the target
    pub fn restart(&mut self) {
        self.target = None;
        self.recognizer.reset();
    }

    /// Swap in a new configuration; counters start from zero
    pub fn reconfigure(&mut self, config: RecognizerConfig) {
        self.recognizer = LetterRecognizer::with_config(config);
    }
}

impl Default for RecognitionSession {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_no_target() {
        let mut session = RecognitionSession::default();
        let result = session.process(fist_a().points()).unwrap();
        assert_eq!(result.letter, Letter::A);
        assert_eq!(result.matches_target, None);
    }

    #[test]
    fn test_target_match() {
        let mut session = RecognitionSession::default();
        session.set_target_letter(Some(Letter::B));
        assert_eq!(session.process(open_hand_b().points()).unwrap().matches_target, Some(true));
        assert_eq!(session.process(fist_a().points()).unwrap().matches_target, Some(false));
    }

    #[test]
    fn test_target_change_resets_counters() {
        let mut session = RecognitionSession::default();
        session.set_target_letter(Some(Letter::V));
        for _ in 0..3 {
            session.process(two_fingers_v().points());
        }
        assert_eq!(session.recognizer().frame_count(Letter::V), 3);

        // same target again keeps progress
        session.set_target_letter(Some(Letter::V));
        assert_eq!(session.recognizer().frame_count(Letter::V), 3);

        session.set_target_letter(Some(Letter::I));
        assert_eq!(session.recognizer().frame_count(Letter::V), 0);
    }

    #[test]
    fn test_restart_and_reconfigure() {
        let mut session = RecognitionSession::default();
        session.set_target_letter(Some(Letter::D));
        session.process(index_only_d().points());
        session.restart();
        assert_eq!(session.target(), None);
        assert_eq!(session.recognizer().frame_count(Letter::D), 0);

        session.reconfigure(RecognizerConfig {
            stability_frames: 1,
            ..RecognizerConfig::default()
        });
        assert!(session.process(index_only_d().points()).unwrap().stable);
    }

    #[test]
    fn test_short_input() {
        let mut session = RecognitionSession::default();
        assert!(session.process(&[Landmark::default(); 5]).is_none());
    }
}
