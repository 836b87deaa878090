//! Landmark storage and JS bridge
//!
//! Receives one hand's landmarks from JavaScript (a real detector) or
//! from the demo generator, and stores them for the recognition
//! pipeline and renderer to read.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::gesture::hand::{Frame, Landmark, LANDMARK_COUNT};

/// Flat floats expected per update: 21 landmarks x (x, y, z)
pub const FLAT_LEN: usize = LANDMARK_COUNT * 3;

/// Current frame's landmarks
struct LandmarkStore {
    frame: Frame,
    has_data: bool,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            frame: [None; LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks x x, y, z). Non-finite coordinates mark that
/// landmark missing for the tick.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != FLAT_LEN {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                FLAT_LEN
            )
            .into(),
        );
        return;
    }

    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        for i in 0..LANDMARK_COUNT {
            let (x, y, z) = (data[i * 3], data[i * 3 + 1], data[i * 3 + 2]);
            store.frame[i] = if x.is_finite() && y.is_finite() && z.is_finite() {
                Some(Landmark::new(x, y, z))
            } else {
                None
            };
        }
        store.has_data = true;
    });
}

/// Called from JavaScript when no hand was detected this tick
#[wasm_bindgen]
pub fn clear_landmarks() {
    LANDMARKS.with(|store_cell| {
        store_cell.borrow_mut().has_data = false;
    });
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Get the current frame (for recognition/renderer)
pub fn current_frame() -> Option<Frame> {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        if store.has_data {
            Some(store.frame)
        } else {
            None
        }
    })
}

/// Replace the stored frame (demo mode)
pub fn set_frame(frame: Frame) {
    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.frame = frame;
        store.has_data = true;
    });
}
