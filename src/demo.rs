//! Synthetic landmark generation for demo mode
//!
//! Produces a plausible open hand sweeping the frame so the demo runs
//! without a camera or detector. Pure function of the supplied time so
//! fixture frames stay deterministic; the per-tick presence coin flip
//! lives in the bridge, not here.

use crate::gesture::hand::{Frame, Landmark, LANDMARK_COUNT, WRIST};

/// Image space the demo hand moves in
pub const CANVAS_WIDTH: f32 = 640.0;
pub const CANVAS_HEIGHT: f32 = 480.0;

/// Per-digit layout: (base x offset, x step, y offset, y step, z step, wobble rate)
const DIGITS: [(f32, f32, f32, f32, f32, f64); 5] = [
    (-30.0, 15.0, 20.0, 14.0, 2.0, 1.0),  // thumb
    (-10.0, 8.0, -20.0, 25.0, 3.0, 1.2),  // index
    (5.0, 6.0, -15.0, 28.0, 3.0, 0.8),    // middle
    (20.0, 5.0, -10.0, 26.0, 3.0, 0.9),   // ring
    (35.0, 4.0, -5.0, 22.0, 2.0, 1.1),    // pinky
];

/// Generate one full 21-point frame for the given time in seconds.
pub fn synthetic_frame(time_s: f64) -> Frame {
    let center_x = CANVAS_WIDTH / 2.0 + ((time_s * 0.5).sin() as f32) * 100.0;
    let center_y = CANVAS_HEIGHT / 2.0 + ((time_s * 0.3).cos() as f32) * 50.0;

    let mut frame: Frame = [None; LANDMARK_COUNT];
    frame[WRIST] = Some(Landmark::new(center_x, center_y + 50.0, 0.0));

    for (digit, (x_base, x_step, y_base, y_step, z_step, wobble)) in
        DIGITS.iter().copied().enumerate()
    {
        for joint in 0..4 {
            let wobble_x = ((time_s * wobble + joint as f64).sin() as f32) * 6.0;
            let index = 1 + digit * 4 + joint;
            frame[index] = Some(Landmark::new(
                center_x + x_base + joint as f32 * x_step + wobble_x,
                center_y + y_base - joint as f32 * y_step,
                joint as f32 * z_step,
            ));
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{classify, GestureLabel};

    #[test]
    fn frame_is_complete_and_in_bounds() {
        for step in 0..50 {
            let frame = synthetic_frame(step as f64 * 0.37);
            for slot in frame.iter() {
                let lm = slot.expect("synthetic frames have all 21 landmarks");
                assert!((0.0..CANVAS_WIDTH).contains(&lm.x));
                assert!((0.0..CANVAS_HEIGHT).contains(&lm.y));
            }
        }
    }

    #[test]
    fn sweeping_hand_reads_as_open_palm() {
        let frame = synthetic_frame(2.0);
        let (result, _) = classify(&frame, None);
        assert_eq!(result.unwrap().label, GestureLabel::OpenPalm);
    }

    #[test]
    fn slow_sweep_does_not_trigger_the_motion_override() {
        // Consecutive 60Hz ticks move the centroid far less than the
        // swipe threshold
        let (_, c1) = classify(&synthetic_frame(1.000), None);
        let (result, _) = classify(&synthetic_frame(1.016), c1);
        assert_eq!(result.unwrap().label, GestureLabel::OpenPalm);
    }
}
