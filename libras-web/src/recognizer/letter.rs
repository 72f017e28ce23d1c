//! Fingerspelled letters the heuristic rule set knows about
//!
//! Only static handshapes are covered. J, K, M, N, P, Q, R, S, T, W, X,
//! Y and Z have no rule and cannot be constructed.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use super::patterns::pattern_for;

/// Recognizable Libras letter
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    L,
    O,
    U,
    V,
}

/// Every letter, in alphabetical order
pub const LETTERS: [Letter; 13] = [
    Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F, Letter::G,
    Letter::H, Letter::I, Letter::L, Letter::O, Letter::U, Letter::V,
];

impl Letter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::H => "H",
            Letter::I => "I",
            Letter::L => "L",
            Letter::O => "O",
            Letter::U => "U",
            Letter::V => "V",
        }
    }

    /// Short description of the handshape, from the pattern table
    pub fn description(&self) -> &'static str {
        pattern_for(*self).map_or("", |p| p.description)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input does not name a supported letter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLetterError(pub String);

impl fmt::Display for ParseLetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported letter: {:?}", self.0)
    }
}

impl std::error::Error for ParseLetterError {}

impl FromStr for Letter {
    type Err = ParseLetterError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LETTERS
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseLetterError(s.to_string()))
    }
}
