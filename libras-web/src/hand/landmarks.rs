//! Hand landmark model for MediaPipe Hands output
//!
//! One detected hand is 21 points in normalized image coordinates
//! (x, y in 0..1, y grows downward) plus a relative depth z.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of points in one hand
pub const LANDMARK_COUNT: usize = 21;

/// Floats per hand in a flat `[x, y, z, x, y, z, ...]` buffer
pub const FLAT_LEN: usize = LANDMARK_COUNT * 3;

/// Hand skeleton connections for overlay drawing
pub const HAND_SKELETON: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (INDEX_MCP, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (MIDDLE_MCP, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (RING_MCP, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
    (WRIST, PINKY_MCP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single tracked keypoint
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized, grows downward
    pub z: f32,  // Relative depth
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Image-plane position, depth dropped
    pub fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    pub fn xyz(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// True when x and y both lie inside the video frame
    pub fn in_frame(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// The full 21-point skeleton of one hand for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarkSet {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarkSet {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build from a slice of landmarks.
    ///
    /// Returns None for fewer than 21 points. Extra points are ignored.
    pub fn from_slice(landmarks: &[Landmark]) -> Option<Self> {
        let head = landmarks.get(..LANDMARK_COUNT)?;
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points.copy_from_slice(head);
        Some(Self { points })
    }

    /// Build from a flat Float32Array layout: 21 × (x, y, z)
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() < FLAT_LEN {
            return None;
        }

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            *point = Landmark {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        Some(Self { points })
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Horizontally flipped copy (x → 1 - x), matching the selfie view
    pub fn mirrored(&self) -> Self {
        let mut points = self.points;
        for p in points.iter_mut() {
            p.x = 1.0 - p.x;
        }
        Self { points }
    }

    /// Flatten back to 63 floats
    pub fn to_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(FLAT_LEN);
        for p in &self.points {
            result.extend_from_slice(&[p.x, p.y, p.z]);
        }
        result
    }
}

impl std::ops::Index<usize> for HandLandmarkSet {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.points[index]
    }
}

/// Parse a flat buffer holding any number of whole hands
pub fn parse_hands(flat_data: &[f32]) -> Vec<HandLandmarkSet> {
    flat_data
        .chunks_exact(FLAT_LEN)
        .filter_map(HandLandmarkSet::from_flat)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_too_short() {
        let points = vec![Landmark::default(); 20];
        assert!(HandLandmarkSet::from_slice(&points).is_none());
        assert!(HandLandmarkSet::from_slice(&[]).is_none());
    }

    #[test]
    fn test_from_slice_ignores_extra_points() {
        let mut points = vec![Landmark::new(0.1, 0.2, 0.0); 22];
        points[21] = Landmark::new(9.0, 9.0, 9.0);
        let hand = HandLandmarkSet::from_slice(&points).unwrap();
        assert_eq!(hand[20], Landmark::new(0.1, 0.2, 0.0));
    }

    #[test]
    fn test_from_flat_layout() {
        let data: Vec<f32> = (0..FLAT_LEN).map(|i| i as f32).collect();
        let hand = HandLandmarkSet::from_flat(&data).unwrap();
        assert_eq!(hand[WRIST], Landmark::new(0.0, 1.0, 2.0));
        assert_eq!(hand[INDEX_TIP], Landmark::new(24.0, 25.0, 26.0));
        assert_eq!(hand.to_flat(), data);
        assert!(HandLandmarkSet::from_flat(&data[..FLAT_LEN - 1]).is_none());
    }

    #[test]
    fn test_parse_two_hands() {
        let mut data = vec![0.25; FLAT_LEN];
        data.extend(vec![0.75; FLAT_LEN]);
        data.push(0.5); // trailing partial hand is dropped
        let hands = parse_hands(&data);
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1][PINKY_TIP].x, 0.75);
    }

    #[test]
    fn test_mirrored() {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        points[THUMB_TIP] = Landmark::new(0.2, 0.3, -0.1);
        let mirrored = HandLandmarkSet::new(points).mirrored();
        assert!((mirrored[THUMB_TIP].x - 0.8).abs() < 1e-6);
        assert_eq!(mirrored[THUMB_TIP].y, 0.3);
        assert_eq!(mirrored[THUMB_TIP].z, -0.1);
    }

    #[test]
    fn test_in_frame() {
        assert!(Landmark::new(0.0, 1.0, 5.0).in_frame());
        assert!(!Landmark::new(-0.01, 0.5, 0.0).in_frame());
        assert!(!Landmark::new(0.5, 1.2, 0.0).in_frame());
    }
}
