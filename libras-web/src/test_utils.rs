//! Synthetic hand poses for unit tests
//!
//! Fingers stand in fixed columns (index 0.44, middle 0.47, ring 0.50,
//! pinky 0.53) with the wrist below them at y = 0.85.

use crate::hand::*;

pub const INDEX: [usize; 4] = [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP];
pub const MIDDLE: [usize; 4] = [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP];
pub const RING: [usize; 4] = [RING_MCP, RING_PIP, RING_DIP, RING_TIP];
pub const PINKY: [usize; 4] = [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP];

const THUMB: [usize; 4] = [THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP];

#[derive(Clone, Copy)]
pub enum FingerPose {
    /// Pointing straight up
    Extended,
    /// Folded into the palm, tip below pip
    Folded,
    /// Hooked: y descends tip → pip → mcp
    Curled,
}

/// Thumb tucked across the palm: tip left of and below the ip joint
pub const THUMB_TUCKED: [(f32, f32); 4] = [(0.58, 0.75), (0.55, 0.70), (0.50, 0.68), (0.48, 0.72)];

/// Thumb out to the side: tip right of the ip joint
pub const THUMB_SIDE: [(f32, f32); 4] = [(0.58, 0.75), (0.60, 0.70), (0.58, 0.64), (0.62, 0.60)];

fn column(chain: [usize; 4]) -> f32 {
    match chain[0] {
        INDEX_MCP => 0.44,
        MIDDLE_MCP => 0.47,
        RING_MCP => 0.50,
        _ => 0.53,
    }
}

pub struct HandBuilder {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandBuilder {
    /// Fist with the thumb tucked
    pub fn new() -> Self {
        let mut builder = Self {
            points: [Landmark::default(); LANDMARK_COUNT],
        };
        builder.points[WRIST] = Landmark::new(0.50, 0.85, 0.0);
        builder
            .thumb(THUMB_TUCKED)
            .finger(INDEX, FingerPose::Folded)
            .finger(MIDDLE, FingerPose::Folded)
            .finger(RING, FingerPose::Folded)
            .finger(PINKY, FingerPose::Folded)
    }

    /// Start from an existing hand to tweak a few points
    pub fn from_hand(hand: &HandLandmarkSet) -> Self {
        Self { points: *hand.points() }
    }

    pub fn finger(mut self, chain: [usize; 4], pose: FingerPose) -> Self {
        let ys = match pose {
            FingerPose::Extended => [0.60, 0.50, 0.45, 0.40],
            FingerPose::Folded => [0.60, 0.55, 0.62, 0.65],
            FingerPose::Curled => [0.50, 0.55, 0.58, 0.60],
        };
        let x = column(chain);
        for (idx, y) in chain.iter().zip(ys) {
            self.points[*idx] = Landmark::new(x, y, 0.0);
        }
        self
    }

    pub fn all_fingers(self, pose: FingerPose) -> Self {
        self.finger(INDEX, pose)
            .finger(MIDDLE, pose)
            .finger(RING, pose)
            .finger(PINKY, pose)
    }

    /// Positions for cmc, mcp, ip, tip
    pub fn thumb(mut self, joints: [(f32, f32); 4]) -> Self {
        for (idx, (x, y)) in THUMB.iter().zip(joints) {
            self.points[*idx] = Landmark::new(x, y, 0.0);
        }
        self
    }

    pub fn point(mut self, idx: usize, x: f32, y: f32) -> Self {
        self.points[idx] = Landmark::new(x, y, 0.0);
        self
    }

    pub fn build(self) -> HandLandmarkSet {
        HandLandmarkSet::new(self.points)
    }
}

pub fn fist_a() -> HandLandmarkSet {
    HandBuilder::new().thumb(THUMB_SIDE).build()
}

pub fn open_hand_b() -> HandLandmarkSet {
    HandBuilder::new().all_fingers(FingerPose::Extended).build()
}

pub fn c_shape() -> HandLandmarkSet {
    HandBuilder::new()
        .all_fingers(FingerPose::Curled)
        .thumb([(0.60, 0.75), (0.58, 0.65), (0.62, 0.56), (0.60, 0.50)])
        .build()
}

pub fn index_only_d() -> HandLandmarkSet {
    HandBuilder::new().finger(INDEX, FingerPose::Extended).build()
}

pub fn curled_e() -> HandLandmarkSet {
    HandBuilder::new()
        .all_fingers(FingerPose::Curled)
        .thumb([(0.58, 0.70), (0.60, 0.55), (0.57, 0.57), (0.53, 0.60)])
        .build()
}

pub fn f_shape() -> HandLandmarkSet {
    HandBuilder::new()
        .finger(MIDDLE, FingerPose::Extended)
        .finger(RING, FingerPose::Extended)
        .finger(PINKY, FingerPose::Extended)
        .point(INDEX_PIP, 0.42, 0.52)
        .point(INDEX_DIP, 0.44, 0.56)
        .point(INDEX_TIP, 0.47, 0.60)
        .thumb([(0.58, 0.75), (0.56, 0.70), (0.53, 0.65), (0.49, 0.61)])
        .build()
}

pub fn sideways_index_g() -> HandLandmarkSet {
    HandBuilder::new()
        .point(INDEX_PIP, 0.40, 0.595)
        .point(INDEX_DIP, 0.37, 0.59)
        .point(INDEX_TIP, 0.34, 0.585)
        .build()
}

/// Index and middle up with tips level and 0.03 apart
pub fn two_fingers_h() -> HandLandmarkSet {
    HandBuilder::new()
        .finger(INDEX, FingerPose::Extended)
        .finger(MIDDLE, FingerPose::Extended)
        .build()
}

pub fn pinky_only_i() -> HandLandmarkSet {
    HandBuilder::new().finger(PINKY, FingerPose::Extended).build()
}

pub fn l_shape() -> HandLandmarkSet {
    HandBuilder::new()
        .finger(INDEX, FingerPose::Extended)
        .thumb([(0.58, 0.75), (0.60, 0.70), (0.58, 0.64), (0.66, 0.60)])
        .build()
}

pub fn o_shape() -> HandLandmarkSet {
    HandBuilder::new()
        .all_fingers(FingerPose::Curled)
        .thumb([(0.58, 0.75), (0.56, 0.70), (0.52, 0.66), (0.47, 0.62)])
        .build()
}

/// Index and middle up, tips touching but not level
pub fn two_fingers_u() -> HandLandmarkSet {
    HandBuilder::new()
        .finger(INDEX, FingerPose::Extended)
        .finger(MIDDLE, FingerPose::Extended)
        .point(INDEX_TIP, 0.465, 0.40)
        .point(MIDDLE_TIP, 0.47, 0.365)
        .build()
}

pub fn two_fingers_v() -> HandLandmarkSet {
    HandBuilder::new()
        .finger(INDEX, FingerPose::Extended)
        .finger(MIDDLE, FingerPose::Extended)
        .point(INDEX_TIP, 0.40, 0.40)
        .point(MIDDLE_TIP, 0.50, 0.35)
        .build()
}
