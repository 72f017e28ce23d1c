//! Recognizer module - heuristic Libras letter classification
//!
//! Re-exports only. All logic in submodules.

mod classifier;
mod config;
mod letter;
mod patterns;
mod session;
mod stability;
mod template;

pub use classifier::{LetterRecognizer, RecognitionStats};
pub use config::{PatternThresholds, RecognizerConfig, DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_STABILITY_FRAMES};
pub use letter::{Letter, ParseLetterError, LETTERS};
pub use patterns::{pattern_for, score_letter, LetterPattern, ScoreFn, LETTER_PATTERNS};
pub use session::{RecognitionSession, SessionResult};
pub use stability::{ClassificationResult, StabilityFilter};
pub use template::{normalize_to_wrist, similarity, TemplateMatch, TemplateMatcher, DEFAULT_MIN_SIMILARITY};
