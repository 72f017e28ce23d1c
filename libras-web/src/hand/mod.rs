//! Hand module - landmark model and geometric feature tests
//!
//! Re-exports only. All logic in submodules.

mod geometry;
mod landmarks;

pub use geometry::{centroid, distance, is_finger_curved, is_finger_extended};
pub use landmarks::{
    parse_hands, HandLandmarkSet, Landmark,
    // Constants
    FLAT_LEN, HAND_SKELETON, LANDMARK_COUNT,
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
