//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod recognition;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    // Internal API
    current_frame,
    FLAT_LEN,
};

pub use recognition::{
    detection_tick,
    set_demo_mode,
    reset_recognition,
    get_current_gesture_text,
    get_gesture_guide_text,
    get_gesture_history_text,
    get_slide_text,
    get_deck_zoom,
    is_pointer_mode,
    deck_next,
    deck_previous,
    deck_toggle_play,
    deck_toggle_pointer,
};
