//! Letter pattern table - one geometric rule per letter
//!
//! Each rule is a binary match over the 21 landmarks rendered as two
//! confidence tiers: a high value when every check holds, a low value
//! otherwise. Extension checks pair each fingertip with its pip joint;
//! curl checks use (tip, pip, mcp).

use crate::hand::*;
use super::config::PatternThresholds;
use super::letter::Letter;

/// Scoring rule: landmarks + cutoffs → confidence in [0, 1]
pub type ScoreFn = fn(&HandLandmarkSet, &PatternThresholds) -> f32;

/// One entry of the pattern table
pub struct LetterPattern {
    pub letter: Letter,
    /// Short description of the handshape
    pub description: &'static str,
    pub score: ScoreFn,
}

/// Pattern table in alphabetical order. Classification walks it in this
/// order, so on an exact confidence tie the earlier letter wins.
pub static LETTER_PATTERNS: [LetterPattern; 13] = [
    LetterPattern {
        letter: Letter::A,
        description: "Closed fist with the thumb at the side",
        score: score_a,
    },
    LetterPattern {
        letter: Letter::B,
        description: "Open hand, fingers extended and together",
        score: score_b,
    },
    LetterPattern {
        letter: Letter::C,
        description: "Hand curved into a C",
        score: score_c,
    },
    LetterPattern {
        letter: Letter::D,
        description: "Only the index finger extended",
        score: score_d,
    },
    LetterPattern {
        letter: Letter::E,
        description: "All fingers curled",
        score: score_e,
    },
    LetterPattern {
        letter: Letter::F,
        description: "Index and thumb touching, other fingers extended",
        score: score_f,
    },
    LetterPattern {
        letter: Letter::G,
        description: "Index finger pointing sideways",
        score: score_g,
    },
    LetterPattern {
        letter: Letter::H,
        description: "Index and middle extended side by side, tips level",
        score: score_h,
    },
    LetterPattern {
        letter: Letter::I,
        description: "Only the little finger extended",
        score: score_i,
    },
    LetterPattern {
        letter: Letter::L,
        description: "Thumb and index forming an L",
        score: score_l,
    },
    LetterPattern {
        letter: Letter::O,
        description: "Hand closed into an O",
        score: score_o,
    },
    LetterPattern {
        letter: Letter::U,
        description: "Index and middle extended together",
        score: score_u,
    },
    LetterPattern {
        letter: Letter::V,
        description: "Index and middle extended apart",
        score: score_v,
    },
];

/// Score a single letter against a hand
pub fn score_letter(letter: Letter, hand: &HandLandmarkSet, thresholds: &PatternThresholds) -> f32 {
    pattern_for(letter).map_or(0.0, |p| (p.score)(hand, thresholds))
}

/// Table entry for a letter
pub fn pattern_for(letter: Letter) -> Option<&'static LetterPattern> {
    LETTER_PATTERNS.iter().find(|p| p.letter == letter)
}

// ============================================================================
// HELPERS
// ============================================================================

#[inline]
fn tier(matched: bool, high: f32, low: f32) -> f32 {
    if matched { high } else { low }
}

fn index_up(h: &HandLandmarkSet) -> bool {
    is_finger_extended(h, INDEX_TIP, INDEX_PIP)
}

fn middle_up(h: &HandLandmarkSet) -> bool {
    is_finger_extended(h, MIDDLE_TIP, MIDDLE_PIP)
}

fn ring_up(h: &HandLandmarkSet) -> bool {
    is_finger_extended(h, RING_TIP, RING_PIP)
}

fn pinky_up(h: &HandLandmarkSet) -> bool {
    is_finger_extended(h, PINKY_TIP, PINKY_PIP)
}

fn index_curled(h: &HandLandmarkSet) -> bool {
    is_finger_curved(h, INDEX_TIP, INDEX_PIP, INDEX_MCP)
}

/// Middle, ring and pinky all hooked
fn outer_three_curled(h: &HandLandmarkSet) -> bool {
    is_finger_curved(h, MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP)
        && is_finger_curved(h, RING_TIP, RING_PIP, RING_MCP)
        && is_finger_curved(h, PINKY_TIP, PINKY_PIP, PINKY_MCP)
}

// ============================================================================
// LETTER RULES
// ============================================================================

fn score_a(h: &HandLandmarkSet, _t: &PatternThresholds) -> f32 {
    let fingers_closed = !index_up(h) && !middle_up(h) && !ring_up(h) && !pinky_up(h);
    let thumb_at_side = h[THUMB_TIP].x > h[THUMB_IP].x;
    tier(fingers_closed && thumb_at_side, 0.85, 0.3)
}

fn score_b(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let fingers_up = index_up(h) && middle_up(h) && ring_up(h) && pinky_up(h);
    let together = distance(&h[INDEX_TIP], &h[MIDDLE_TIP]) < t.b_fingers_together
        && distance(&h[MIDDLE_TIP], &h[RING_TIP]) < t.b_fingers_together
        && distance(&h[RING_TIP], &h[PINKY_TIP]) < t.b_fingers_together;
    let thumb_folded = h[THUMB_TIP].y > h[THUMB_IP].y;
    tier(fingers_up && together && thumb_folded, 0.9, 0.4)
}

fn score_c(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let curved = index_curled(h) && outer_three_curled(h);
    let gap = distance(&h[THUMB_TIP], &h[INDEX_TIP]);
    let c_shape = gap > t.c_gap_min && gap < t.c_gap_max;
    tier(curved && c_shape, 0.8, 0.3)
}

fn score_d(h: &HandLandmarkSet, _t: &PatternThresholds) -> f32 {
    // thumb position is not constrained
    let others_closed = !middle_up(h) && !ring_up(h) && !pinky_up(h);
    tier(index_up(h) && others_closed, 0.85, 0.4)
}

fn score_e(h: &HandLandmarkSet, _t: &PatternThresholds) -> f32 {
    let curved = index_curled(h) && outer_three_curled(h);
    let thumb_curled = h[THUMB_TIP].y > h[THUMB_MCP].y;
    tier(curved && thumb_curled, 0.8, 0.3)
}

fn score_f(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let touching = distance(&h[THUMB_TIP], &h[INDEX_TIP]) < t.f_touch;
    let others_up = middle_up(h) && ring_up(h) && pinky_up(h);
    tier(touching && others_up, 0.85, 0.4)
}

fn score_g(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let sideways = (h[INDEX_TIP].y - h[INDEX_MCP].y).abs() < t.g_horizontal;
    let others_closed = !middle_up(h) && !ring_up(h) && !pinky_up(h);
    tier(index_up(h) && sideways && others_closed, 0.8, 0.3)
}

fn score_h(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let level = (h[INDEX_TIP].y - h[MIDDLE_TIP].y).abs() < t.h_tips_level;
    let others_closed = !ring_up(h) && !pinky_up(h);
    tier(index_up(h) && middle_up(h) && level && others_closed, 0.85, 0.4)
}

fn score_i(h: &HandLandmarkSet, _t: &PatternThresholds) -> f32 {
    let others_closed = !index_up(h) && !middle_up(h) && !ring_up(h);
    tier(pinky_up(h) && others_closed, 0.85, 0.4)
}

fn score_l(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let thumb_out = h[THUMB_TIP].x > h[THUMB_IP].x;
    // rough right angle: tips apart on both axes
    let right_angle = (h[THUMB_TIP].x - h[INDEX_TIP].x).abs() > t.l_min_offset
        && (h[THUMB_TIP].y - h[INDEX_TIP].y).abs() > t.l_min_offset;
    let others_closed = !middle_up(h) && !ring_up(h) && !pinky_up(h);
    tier(thumb_out && index_up(h) && right_angle && others_closed, 0.85, 0.4)
}

fn score_o(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let touching = distance(&h[THUMB_TIP], &h[INDEX_TIP]) < t.o_touch;
    tier(touching && outer_three_curled(h), 0.8, 0.3)
}

fn score_u(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let together = distance(&h[INDEX_TIP], &h[MIDDLE_TIP]) < t.u_together;
    let others_closed = !ring_up(h) && !pinky_up(h);
    tier(index_up(h) && middle_up(h) && together && others_closed, 0.85, 0.4)
}

fn score_v(h: &HandLandmarkSet, t: &PatternThresholds) -> f32 {
    let apart = distance(&h[INDEX_TIP], &h[MIDDLE_TIP]) > t.v_separated;
    let others_closed = !ring_up(h) && !pinky_up(h);
    tier(index_up(h) && middle_up(h) && apart && others_closed, 0.85, 0.4)
}
