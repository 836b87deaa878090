//! Per-frame gesture classification from landmark geometry
//!
//! Static finger-extension counting first, then a motion-delta override
//! (swipe / point direction) when the hand centroid moved enough since
//! the previous frame. Stateless: the previous centroid is threaded
//! through the call instead of living inside a classifier object.

use super::hand::{
    centroid, Frame, DIGIT_TIP_PIP, INDEX_TIP, THUMB_TIP, WRIST,
};
use super::labels::GestureLabel;

/// A fingertip must sit this far above its joint to count as extended
pub const EXTENSION_MARGIN: f32 = 10.0;

/// Thumb tip right of the wrist by more than this reads as thumbs-up
pub const THUMB_X_OFFSET: f32 = 20.0;

/// Index tip above the wrist by more than this reads as pointing-up
pub const POINT_Y_OFFSET: f32 = 50.0;

/// Centroid shift between frames that triggers the motion override
pub const MOTION_DELTA: f32 = 30.0;

/// Lower bound of the confidence range for any emitted label
pub const CONFIDENCE_FLOOR: f32 = 0.7;

/// Geometry margin (px) that saturates the confidence score
const CONFIDENCE_SCALE: f32 = 50.0;

/// A classified gesture with its confidence score in [0.7, 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub label: GestureLabel,
    pub confidence: f32,
}

/// Classify one frame of landmarks.
///
/// Returns the classification (if any) and the frame's centroid, which
/// the caller stores and passes back on the next invocation. A frame
/// with no usable landmarks yields neither.
pub fn classify(
    frame: &Frame,
    prev_centroid: Option<(f32, f32)>,
) -> (Option<Classification>, Option<(f32, f32)>) {
    let current = centroid(frame);
    if current.is_none() {
        return (None, None);
    }

    let mut labeled = static_label(frame);

    // Motion override: a large enough centroid shift replaces whatever
    // static label applied. Horizontal is checked before vertical.
    if let (Some(prev), Some(cur), Some(_)) = (prev_centroid, current, labeled) {
        let dx = cur.0 - prev.0;
        let dy = cur.1 - prev.1;
        if dx.abs() > MOTION_DELTA {
            let label = if dx > 0.0 { GestureLabel::SwipeRight } else { GestureLabel::SwipeLeft };
            labeled = Some((label, dx.abs() - MOTION_DELTA));
        } else if dy.abs() > MOTION_DELTA {
            let label = if dy > 0.0 { GestureLabel::PointingDown } else { GestureLabel::PointingUp };
            labeled = Some((label, dy.abs() - MOTION_DELTA));
        }
    }

    let result = labeled.map(|(label, margin)| Classification {
        label,
        confidence: confidence_from_margin(margin),
    });
    (result, current)
}

/// Map the geometry margin that decided a label onto [0.7, 1.0).
/// Deterministic: a more decisive pose scores higher.
fn confidence_from_margin(margin: f32) -> f32 {
    CONFIDENCE_FLOOR + (margin / CONFIDENCE_SCALE).clamp(0.0, 1.0) * 0.29
}

/// How far past the extension boundary each digit's tip sits.
/// Positive = extended by that much; `None` = tip or joint missing.
fn extension_excess(frame: &Frame) -> [Option<f32>; 5] {
    let mut excess = [None; 5];
    for (digit, (tip_idx, pip_idx)) in DIGIT_TIP_PIP.iter().enumerate() {
        if let (Some(tip), Some(pip)) = (frame[*tip_idx], frame[*pip_idx]) {
            excess[digit] = Some(pip.y - EXTENSION_MARGIN - tip.y);
        }
    }
    excess
}

/// Static label from finger-extension geometry, with the margin that
/// decided it (fed into the confidence score).
fn static_label(frame: &Frame) -> Option<(GestureLabel, f32)> {
    let excess = extension_excess(frame);
    let extended: Vec<usize> = (0..5)
        .filter(|&d| excess[d].map_or(false, |e| e > 0.0))
        .collect();

    match extended.len() {
        0 => {
            // Weakest curl bounds the confidence
            let margin = excess
                .iter()
                .flatten()
                .map(|e| -e)
                .fold(f32::INFINITY, f32::min);
            Some((GestureLabel::ClosedFist, if margin.is_finite() { margin } else { 0.0 }))
        }
        5 => {
            let margin = excess.iter().flatten().fold(f32::INFINITY, |m, &e| m.min(e));
            Some((GestureLabel::OpenPalm, margin))
        }
        1 => one_finger_label(frame),
        2 => {
            // Peace sign requires specifically index (1) and middle (2)
            if extended == [1, 2] {
                let margin = excess[1].unwrap_or(0.0).min(excess[2].unwrap_or(0.0));
                Some((GestureLabel::PeaceSign, margin))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Disambiguate a single extended digit: thumbs-up when the thumb tip
/// sits clearly right of the wrist, pointing-up when the index tip sits
/// clearly above it. Missing landmarks skip the corresponding sub-test.
fn one_finger_label(frame: &Frame) -> Option<(GestureLabel, f32)> {
    let wrist = frame[WRIST]?;

    if let Some(thumb_tip) = frame[THUMB_TIP] {
        let margin = thumb_tip.x - wrist.x - THUMB_X_OFFSET;
        if margin > 0.0 {
            return Some((GestureLabel::ThumbsUp, margin));
        }
    }

    if let Some(index_tip) = frame[INDEX_TIP] {
        let margin = wrist.y - POINT_Y_OFFSET - index_tip.y;
        if margin > 0.0 {
            return Some((GestureLabel::PointingUp, margin));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::hand::{Landmark, LANDMARK_COUNT};

    /// Neutral fist-like frame: every tip just below its joint, and no
    /// tip far enough from the wrist to trip the one-finger cues
    fn fist_frame() -> Frame {
        let mut frame: Frame = [None; LANDMARK_COUNT];
        frame[WRIST] = Some(Landmark::new(320.0, 280.0, 0.0));
        for (tip, pip) in DIGIT_TIP_PIP {
            frame[pip] = Some(Landmark::new(300.0 + tip as f32 * 8.0, 240.0, 0.0));
            frame[tip] = Some(Landmark::new(300.0 + tip as f32 * 8.0, 245.0, 0.0));
        }
        frame
    }

    /// Extend a digit by lifting its tip well above the joint
    fn extend(frame: &mut Frame, digit: usize, by: f32) {
        let (tip, pip) = DIGIT_TIP_PIP[digit];
        let joint = frame[pip].unwrap();
        frame[tip] = Some(Landmark::new(joint.x, joint.y - EXTENSION_MARGIN - by, joint.z));
    }

    #[test]
    fn all_extended_is_open_palm() {
        let mut frame = fist_frame();
        for digit in 0..5 {
            extend(&mut frame, digit, 20.0);
        }
        let (result, _) = classify(&frame, None);
        assert_eq!(result.unwrap().label, GestureLabel::OpenPalm);
    }

    #[test]
    fn none_extended_is_closed_fist() {
        let (result, _) = classify(&fist_frame(), None);
        assert_eq!(result.unwrap().label, GestureLabel::ClosedFist);
    }

    #[test]
    fn index_and_middle_is_peace_sign() {
        let mut frame = fist_frame();
        extend(&mut frame, 1, 20.0);
        extend(&mut frame, 2, 20.0);
        let (result, _) = classify(&frame, None);
        assert_eq!(result.unwrap().label, GestureLabel::PeaceSign);
    }

    #[test]
    fn other_two_finger_pairs_are_unclassified() {
        let mut frame = fist_frame();
        extend(&mut frame, 3, 20.0);
        extend(&mut frame, 4, 20.0);
        let (result, _) = classify(&frame, None);
        assert!(result.is_none());
    }

    #[test]
    fn thumb_right_of_wrist_is_thumbs_up() {
        let mut frame = fist_frame();
        extend(&mut frame, 0, 20.0);
        let wrist = frame[WRIST].unwrap();
        let tip = frame[THUMB_TIP].unwrap();
        frame[THUMB_TIP] = Some(Landmark::new(wrist.x + THUMB_X_OFFSET + 15.0, tip.y, 0.0));
        let (result, _) = classify(&frame, None);
        assert_eq!(result.unwrap().label, GestureLabel::ThumbsUp);
    }

    #[test]
    fn index_above_wrist_is_pointing_up() {
        let mut frame = fist_frame();
        extend(&mut frame, 1, 20.0);
        let wrist = frame[WRIST].unwrap();
        let tip = frame[INDEX_TIP].unwrap();
        frame[INDEX_TIP] = Some(Landmark::new(
            tip.x,
            wrist.y - POINT_Y_OFFSET - 30.0,
            0.0,
        ));
        let (result, _) = classify(&frame, None);
        assert_eq!(result.unwrap().label, GestureLabel::PointingUp);
    }

    #[test]
    fn single_finger_without_either_cue_is_unclassified() {
        // Ring finger alone: neither the thumb nor the index cue holds
        let mut frame = fist_frame();
        extend(&mut frame, 3, 20.0);
        let (result, _) = classify(&frame, None);
        assert!(result.is_none());
    }

    #[test]
    fn three_or_four_extended_is_unclassified_but_centroid_updates() {
        let mut frame = fist_frame();
        for digit in 0..4 {
            extend(&mut frame, digit, 20.0);
        }
        let (result, new_centroid) = classify(&frame, None);
        assert!(result.is_none());
        assert!(new_centroid.is_some());
    }

    #[test]
    fn horizontal_shift_overrides_static_label() {
        let frame = fist_frame();
        let (_, centroid) = classify(&frame, None);

        let mut shifted = fist_frame();
        for slot in shifted.iter_mut().flatten() {
            slot.x += 40.0;
        }
        let (result, _) = classify(&shifted, centroid);
        assert_eq!(result.unwrap().label, GestureLabel::SwipeRight);
    }

    #[test]
    fn leftward_shift_is_swipe_left() {
        let frame = fist_frame();
        let (_, centroid) = classify(&frame, None);

        let mut shifted = fist_frame();
        for slot in shifted.iter_mut().flatten() {
            slot.x -= 40.0;
        }
        let (result, _) = classify(&shifted, centroid);
        assert_eq!(result.unwrap().label, GestureLabel::SwipeLeft);
    }

    #[test]
    fn vertical_shift_is_point_direction() {
        let frame = fist_frame();
        let (_, centroid) = classify(&frame, None);

        let mut shifted = fist_frame();
        for slot in shifted.iter_mut().flatten() {
            slot.y += 40.0;
        }
        let (result, _) = classify(&shifted, centroid);
        assert_eq!(result.unwrap().label, GestureLabel::PointingDown);
    }

    #[test]
    fn horizontal_wins_over_vertical() {
        let frame = fist_frame();
        let (_, centroid) = classify(&frame, None);

        let mut shifted = fist_frame();
        for slot in shifted.iter_mut().flatten() {
            slot.x += 45.0;
            slot.y += 45.0;
        }
        let (result, _) = classify(&shifted, centroid);
        assert_eq!(result.unwrap().label, GestureLabel::SwipeRight);
    }

    #[test]
    fn no_override_without_a_static_label() {
        // 4 extended digits: unclassified, so motion cannot relabel it
        let mut frame = fist_frame();
        for digit in 0..4 {
            extend(&mut frame, digit, 20.0);
        }
        let (_, centroid) = classify(&frame, None);

        let mut shifted = frame;
        for slot in shifted.iter_mut().flatten() {
            slot.x += 60.0;
        }
        let (result, _) = classify(&shifted, centroid);
        assert!(result.is_none());
    }

    #[test]
    fn empty_frame_yields_nothing() {
        let frame: Frame = [None; LANDMARK_COUNT];
        let (result, new_centroid) = classify(&frame, Some((100.0, 100.0)));
        assert!(result.is_none());
        assert!(new_centroid.is_none());
    }

    #[test]
    fn missing_digit_counts_as_not_extended() {
        let mut frame = fist_frame();
        for digit in 1..5 {
            extend(&mut frame, digit, 20.0);
        }
        // Knock out the thumb tip: 4 extended, thumb skipped, no panic
        frame[THUMB_TIP] = None;
        let (result, _) = classify(&frame, None);
        assert!(result.is_none());
    }

    #[test]
    fn confidence_stays_in_contract_range() {
        for margin in [0.0, 1.0, 25.0, 50.0, 500.0] {
            let c = confidence_from_margin(margin);
            assert!((CONFIDENCE_FLOOR..1.0).contains(&c), "margin {margin} -> {c}");
        }
    }
}
