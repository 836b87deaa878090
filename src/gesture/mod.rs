//! Gesture module - classification and stability filtering
//!
//! Pure computation over landmark frames; no browser APIs. The bridge
//! feeds frames in and wires the resulting events to the slide deck.

pub mod hand;

mod classifier;
mod labels;
mod stability;

pub use classifier::{classify, Classification, EXTENSION_MARGIN, MOTION_DELTA};
pub use labels::{Action, GestureLabel, GESTURE_LABELS};
pub use stability::{
    RecognitionEvent, StabilityFilter, COOLDOWN_MS, HISTORY_CAPACITY, MIN_CONSISTENT,
};
