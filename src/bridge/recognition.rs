//! Recognition pipeline - connects landmark frames to gesture events
//!
//! Runs once per animation tick: classify the current frame, feed the
//! stability filter, and on acceptance log the simulated key press,
//! drive the slide deck and record stats. The clock is read once per
//! tick here; the core only compares the timestamps it is handed.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks;
use crate::demo;
use crate::gesture::{classify, StabilityFilter};
use crate::presentation::SlideDeck;
use crate::renderer::overlay;

/// Demo mode detects a hand on roughly this share of ticks
const DEMO_PRESENCE_RATE: f64 = 0.7;

struct RecognizerState {
    /// Previous frame's centroid, threaded into each classify call
    prev_centroid: Option<(f32, f32)>,
    filter: StabilityFilter,
    deck: SlideDeck,
    demo_mode: bool,
}

impl Default for RecognizerState {
    fn default() -> Self {
        Self {
            prev_centroid: None,
            filter: StabilityFilter::new(),
            deck: SlideDeck::new(),
            demo_mode: false,
        }
    }
}

thread_local! {
    static RECOGNIZER: RefCell<RecognizerState> = RefCell::new(RecognizerState::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Enable/disable the synthetic landmark source
#[wasm_bindgen]
pub fn set_demo_mode(enabled: bool) {
    RECOGNIZER.with(|state_cell| {
        state_cell.borrow_mut().demo_mode = enabled;
    });
    if enabled {
        web_sys::console::log_1(&"Demo mode - simulating hand detection".into());
    }
}

/// Run one detection tick. Returns true when a gesture event fired.
#[wasm_bindgen]
pub fn detection_tick() -> bool {
    let now_ms = js_sys::Date::now();

    RECOGNIZER.with(|state_cell| {
        let mut state = state_cell.borrow_mut();

        if state.demo_mode {
            if js_sys::Math::random() < DEMO_PRESENCE_RATE {
                landmarks::set_frame(demo::synthetic_frame(now_ms / 1000.0));
            } else {
                landmarks::clear_landmarks();
            }
        }

        let fired = match landmarks::current_frame() {
            Some(frame) => {
                overlay::record_detection(now_ms);
                let (classification, centroid) = classify(&frame, state.prev_centroid);
                if centroid.is_some() {
                    state.prev_centroid = centroid;
                }
                classification.and_then(|c| state.filter.observe(c, now_ms))
            }
            // No hand this tick: nothing to classify, centroid kept
            None => None,
        };

        if let Some(event) = fired {
            web_sys::console::log_1(
                &format!(
                    "{} ({:.0}%) -> {} [key: {}]",
                    event.name,
                    event.confidence * 100.0,
                    event.action.describe(),
                    event.action.key_combo(),
                )
                .into(),
            );
            state.deck.apply(event.action, now_ms);
            overlay::record_event(&event);
        }

        state.deck.tick(now_ms);
        fired.is_some()
    })
}

/// Reset filter state and history (camera restart)
#[wasm_bindgen]
pub fn reset_recognition() {
    RECOGNIZER.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.prev_centroid = None;
        state.filter.reset();
    });
}

// ============================================================================
// DISPLAY QUERIES (formatted for the HTML overlay)
// ============================================================================

/// Latest accepted gesture, e.g. "Closed Fist (82%)"
#[wasm_bindgen]
pub fn get_current_gesture_text() -> String {
    RECOGNIZER.with(|state_cell| {
        let state = state_cell.borrow();
        match state.filter.last_event() {
            Some(event) => format!("{} ({:.0}%)", event.name, event.confidence * 100.0),
            None => "No gesture".to_string(),
        }
    })
}

/// Accepted events, most recent first, one line each
#[wasm_bindgen]
pub fn get_gesture_history_text() -> String {
    RECOGNIZER.with(|state_cell| {
        let state = state_cell.borrow();
        state
            .filter
            .history()
            .map(|event| {
                format!(
                    "{} - {:.0}% - {:.1}s",
                    event.name,
                    event.confidence * 100.0,
                    event.timestamp_ms / 1000.0,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Supported gestures with their actions, one line each, for the
/// control-reference panel
#[wasm_bindgen]
pub fn get_gesture_guide_text() -> String {
    crate::gesture::GESTURE_LABELS
        .iter()
        .map(|label| {
            format!(
                "{} -> {} [{}]",
                label.display_name(),
                label.action().describe(),
                label.action().key_combo(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Current slide as "title\ncontent\nn / total"
#[wasm_bindgen]
pub fn get_slide_text() -> String {
    RECOGNIZER.with(|state_cell| {
        let state = state_cell.borrow();
        let slide = state.deck.slide();
        format!("{}\n{}\n{}", slide.title, slide.content, state.deck.position_text())
    })
}

/// Deck zoom level for the CSS transform
#[wasm_bindgen]
pub fn get_deck_zoom() -> f32 {
    RECOGNIZER.with(|state_cell| state_cell.borrow().deck.zoom())
}

#[wasm_bindgen]
pub fn is_pointer_mode() -> bool {
    RECOGNIZER.with(|state_cell| state_cell.borrow().deck.pointer_mode())
}

// ============================================================================
// DECK BUTTONS (manual controls next to the gesture path)
// ============================================================================

#[wasm_bindgen]
pub fn deck_next() {
    RECOGNIZER.with(|state_cell| state_cell.borrow_mut().deck.next_slide());
}

#[wasm_bindgen]
pub fn deck_previous() {
    RECOGNIZER.with(|state_cell| state_cell.borrow_mut().deck.previous_slide());
}

#[wasm_bindgen]
pub fn deck_toggle_play() {
    let now_ms = js_sys::Date::now();
    RECOGNIZER.with(|state_cell| {
        state_cell
            .borrow_mut()
            .deck
            .apply(crate::gesture::Action::PlayPause, now_ms)
    });
}

#[wasm_bindgen]
pub fn deck_toggle_pointer() {
    let now_ms = js_sys::Date::now();
    RECOGNIZER.with(|state_cell| {
        state_cell
            .borrow_mut()
            .deck
            .apply(crate::gesture::Action::TogglePointer, now_ms)
    });
}
