//! Gesture vocabulary and the presentation actions it maps to
//!
//! Each label carries a snake_case key, a display name, and the action
//! it triggers. Actions only describe the effect; executing it (key
//! injection, UI update) is the event sink's business.

/// All recognizable gestures, in display order
pub const GESTURE_LABELS: [GestureLabel; 9] = [
    GestureLabel::OpenPalm,
    GestureLabel::ClosedFist,
    GestureLabel::PointingUp,
    GestureLabel::PointingDown,
    GestureLabel::ThumbsUp,
    GestureLabel::ThumbsDown,
    GestureLabel::PeaceSign,
    GestureLabel::SwipeLeft,
    GestureLabel::SwipeRight,
];

/// Discrete hand-pose/motion categories
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureLabel {
    OpenPalm,
    ClosedFist,
    PointingUp,
    PointingDown,
    ThumbsUp,
    ThumbsDown,
    PeaceSign,
    SwipeLeft,
    SwipeRight,
}

impl GestureLabel {
    pub fn key(&self) -> &'static str {
        match self {
            GestureLabel::OpenPalm => "open_palm",
            GestureLabel::ClosedFist => "closed_fist",
            GestureLabel::PointingUp => "pointing_up",
            GestureLabel::PointingDown => "pointing_down",
            GestureLabel::ThumbsUp => "thumbs_up",
            GestureLabel::ThumbsDown => "thumbs_down",
            GestureLabel::PeaceSign => "peace_sign",
            GestureLabel::SwipeLeft => "swipe_left",
            GestureLabel::SwipeRight => "swipe_right",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::OpenPalm => "Open Palm",
            GestureLabel::ClosedFist => "Closed Fist",
            GestureLabel::PointingUp => "Point Up",
            GestureLabel::PointingDown => "Point Down",
            GestureLabel::ThumbsUp => "Thumbs Up",
            GestureLabel::ThumbsDown => "Thumbs Down",
            GestureLabel::PeaceSign => "Peace Sign",
            GestureLabel::SwipeLeft => "Swipe Left",
            GestureLabel::SwipeRight => "Swipe Right",
        }
    }

    /// Presentation action this gesture triggers. Swipes share the
    /// slide-navigation actions with the pointing gestures.
    pub fn action(&self) -> Action {
        match self {
            GestureLabel::OpenPalm => Action::PlayPause,
            GestureLabel::ClosedFist => Action::Stop,
            GestureLabel::PointingUp => Action::NextSlide,
            GestureLabel::PointingDown => Action::PreviousSlide,
            GestureLabel::ThumbsUp => Action::ZoomIn,
            GestureLabel::ThumbsDown => Action::ZoomOut,
            GestureLabel::PeaceSign => Action::TogglePointer,
            GestureLabel::SwipeLeft => Action::PreviousSlide,
            GestureLabel::SwipeRight => Action::NextSlide,
        }
    }
}

/// Presentation control actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PlayPause,
    Stop,
    NextSlide,
    PreviousSlide,
    ZoomIn,
    ZoomOut,
    TogglePointer,
}

impl Action {
    pub fn key(&self) -> &'static str {
        match self {
            Action::PlayPause => "play_pause",
            Action::Stop => "stop",
            Action::NextSlide => "next_slide",
            Action::PreviousSlide => "previous_slide",
            Action::ZoomIn => "zoom_in",
            Action::ZoomOut => "zoom_out",
            Action::TogglePointer => "toggle_pointer",
        }
    }

    /// Key combination a real controller would inject. Only logged here.
    pub fn key_combo(&self) -> &'static str {
        match self {
            Action::PlayPause => "Space",
            Action::Stop => "Escape",
            Action::NextSlide => "ArrowRight",
            Action::PreviousSlide => "ArrowLeft",
            Action::ZoomIn => "Control +",
            Action::ZoomOut => "Control -",
            Action::TogglePointer => "Control P",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Action::PlayPause => "Play/Pause presentation",
            Action::Stop => "Stop presentation",
            Action::NextSlide => "Next slide",
            Action::PreviousSlide => "Previous slide",
            Action::ZoomIn => "Zoom in",
            Action::ZoomOut => "Zoom out",
            Action::TogglePointer => "Toggle pointer mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipes_share_navigation_actions() {
        assert_eq!(GestureLabel::SwipeRight.action(), GestureLabel::PointingUp.action());
        assert_eq!(GestureLabel::SwipeLeft.action(), GestureLabel::PointingDown.action());
    }

    #[test]
    fn keys_are_unique_per_label() {
        for (i, a) in GESTURE_LABELS.iter().enumerate() {
            for b in GESTURE_LABELS.iter().skip(i + 1) {
                assert_ne!(a.key(), b.key());
            }
        }
    }
}
