//! Geometric feature tests over hand landmarks
//!
//! All tests work in the image plane. "Up" means smaller y, so the
//! extension and curl checks assume an upright hand facing the camera.

use nalgebra::Vector2;
use super::landmarks::{HandLandmarkSet, Landmark};

/// Euclidean distance in the (x, y) plane, z ignored
pub fn distance(p1: &Landmark, p2: &Landmark) -> f32 {
    (p1.xy() - p2.xy()).norm()
}

/// Finger is extended when its tip sits strictly above the given joint
pub fn is_finger_extended(landmarks: &HandLandmarkSet, tip: usize, joint: usize) -> bool {
    landmarks[tip].y < landmarks[joint].y
}

/// Finger is curled when y strictly descends tip → dip → pip.
///
/// Callers pass the joint one step down the chain for `dip` and `pip`,
/// so the letter rules use (tip, pip, mcp) triples.
pub fn is_finger_curved(landmarks: &HandLandmarkSet, tip: usize, dip: usize, pip: usize) -> bool {
    landmarks[tip].y > landmarks[dip].y && landmarks[dip].y > landmarks[pip].y
}

/// Mean (x, y) of a set of points
///
/// Returns the origin for an empty slice.
pub fn centroid(points: &[Landmark]) -> Vector2<f32> {
    if points.is_empty() {
        return Vector2::zeros();
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f32>, p| acc + p.xy());
    sum / points.len() as f32
}
