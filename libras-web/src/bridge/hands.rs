//! Hand overlay helpers for the page's canvas code

use wasm_bindgen::prelude::*;
use crate::hand::{parse_hands, HAND_SKELETON};

/// Skeleton connections flattened as [from, to, from, to, ...]
#[wasm_bindgen]
pub fn hand_skeleton() -> Vec<u32> {
    skeleton_pairs()
}

/// Mirror every whole hand in the buffer horizontally (x → 1 - x)
#[wasm_bindgen]
pub fn mirror_landmarks(flat_data: &[f32]) -> Vec<f32> {
    parse_hands(flat_data)
        .iter()
        .flat_map(|hand| hand.mirrored().to_flat())
        .collect()
}

fn skeleton_pairs() -> Vec<u32> {
    HAND_SKELETON
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}
