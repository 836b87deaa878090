//! Hand landmark geometry - fixed 21-point anatomical indexing
//!
//! MediaPipe Hands ordering: wrist first, then each digit
//! proximal→distal with the fingertip last.

/// A single 3D landmark point in image space (origin top-left, y down)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Relative depth, no fixed unit
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Number of landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// One detection tick's landmark set. A slot is `None` when the
/// detector produced no usable point for that index.
pub type Frame = [Option<Landmark>; LANDMARK_COUNT];

// ============================================================================
// HAND LANDMARK INDICES
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

/// Fingertip indices in digit order (thumb, index, middle, ring, pinky)
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// (tip, joint) pairs for the per-digit extension test, digit order
pub const DIGIT_TIP_PIP: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_IP),
    (INDEX_TIP, INDEX_DIP),
    (MIDDLE_TIP, MIDDLE_DIP),
    (RING_TIP, RING_DIP),
    (PINKY_TIP, PINKY_DIP),
];

/// Hand skeleton connections for rendering
pub const HAND_SKELETON: [(usize, usize); 20] = [
    (WRIST, THUMB_CMC), (THUMB_CMC, THUMB_MCP), (THUMB_MCP, THUMB_IP), (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_MCP), (INDEX_MCP, INDEX_PIP), (INDEX_PIP, INDEX_DIP), (INDEX_DIP, INDEX_TIP),
    (WRIST, MIDDLE_MCP), (MIDDLE_MCP, MIDDLE_PIP), (MIDDLE_PIP, MIDDLE_DIP), (MIDDLE_DIP, MIDDLE_TIP),
    (WRIST, RING_MCP), (RING_MCP, RING_PIP), (RING_PIP, RING_DIP), (RING_DIP, RING_TIP),
    (WRIST, PINKY_MCP), (PINKY_MCP, PINKY_PIP), (PINKY_PIP, PINKY_DIP), (PINKY_DIP, PINKY_TIP),
];

/// Arithmetic mean of all valid landmark positions.
///
/// Returns `None` when the frame carries no usable landmarks at all.
pub fn centroid(frame: &Frame) -> Option<(f32, f32)> {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0usize;

    for lm in frame.iter().flatten() {
        sum_x += lm.x;
        sum_y += lm.y;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some((sum_x / count as f32, sum_y / count as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_averages_valid_points() {
        let mut frame: Frame = [None; LANDMARK_COUNT];
        frame[WRIST] = Some(Landmark::new(0.0, 0.0, 0.0));
        frame[INDEX_TIP] = Some(Landmark::new(100.0, 50.0, 0.0));
        let (cx, cy) = centroid(&frame).unwrap();
        assert_eq!(cx, 50.0);
        assert_eq!(cy, 25.0);
    }

    #[test]
    fn centroid_of_empty_frame_is_none() {
        let frame: Frame = [None; LANDMARK_COUNT];
        assert!(centroid(&frame).is_none());
    }
}
