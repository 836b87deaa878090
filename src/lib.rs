//! Gesture Web - webcam hand-gesture presentation control demo
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod renderer;

pub mod demo;
pub mod gesture;
pub mod presentation;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_landmarks, deck_next, deck_previous, deck_toggle_play, deck_toggle_pointer,
    detection_tick, get_current_gesture_text, get_deck_zoom, get_gesture_guide_text,
    get_gesture_history_text, get_slide_text, is_pointer_mode, reset_recognition,
    set_demo_mode, update_landmarks,
};
pub use renderer::overlay::{get_stats_overlay_text, reset_stats, set_frame_metrics};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize WebGPU - must be called before render_frame
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("WebGPU initialized with hand landmark rendering");
    Ok(())
}

/// Render one frame with current landmarks
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}
