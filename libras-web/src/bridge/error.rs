//! Errors surfaced to JavaScript

use std::fmt;
use wasm_bindgen::prelude::*;
use crate::hand::FLAT_LEN;
use crate::recognizer::ParseLetterError;

/// Errors that can occur at the JS boundary
#[derive(Debug, PartialEq)]
pub enum BridgeError {
    InvalidLandmarkLength(usize),
    UnknownLetter(String),
    InvalidConfig(String),
    Serialization(String),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::InvalidLandmarkLength(len) => {
                write!(f, "Invalid landmark data length: {} (expected {})", len, FLAT_LEN)
            }
            BridgeError::UnknownLetter(s) => write!(f, "Unknown letter: {:?}", s),
            BridgeError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
            BridgeError::Serialization(e) => write!(f, "Serialization failed: {}", e),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<ParseLetterError> for BridgeError {
    fn from(err: ParseLetterError) -> Self {
        BridgeError::UnknownLetter(err.0)
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::Letter;

    #[test]
    fn test_messages() {
        assert_eq!(
            BridgeError::InvalidLandmarkLength(60).to_string(),
            "Invalid landmark data length: 60 (expected 63)"
        );
        let err: BridgeError = "Q".parse::<Letter>().unwrap_err().into();
        assert_eq!(err, BridgeError::UnknownLetter("Q".to_string()));
        assert_eq!(err.to_string(), "Unknown letter: \"Q\"");
    }
}
