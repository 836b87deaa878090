//! Detection stats for the HTML overlay
//!
//! Tracks totals, smoothed frame timing and the latest event for
//! real-time display.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::gesture::RecognitionEvent;

struct Stats {
    /// Ticks that carried a hand
    total_detections: u32,
    /// Accepted gesture events
    total_events: u32,

    /// Frame timing, exponentially smoothed
    fps: f32,
    frame_time_ms: f32,

    /// First detection timestamp, for the detections/sec figure
    start_ms: Option<f64>,
    last_detection_ms: f64,

    last_event: Option<(&'static str, f32)>,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_detections: 0,
            total_events: 0,
            fps: 0.0,
            frame_time_ms: 0.0,
            start_ms: None,
            last_detection_ms: 0.0,
            last_event: None,
        }
    }
}

thread_local! {
    static STATS: RefCell<Stats> = RefCell::new(Stats::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    // Ignore invalid times (tab backgrounded or first frame)
    if frame_time_ms < 1.0 || frame_time_ms > 200.0 {
        return;
    }

    STATS.with(|s| {
        let mut stats = s.borrow_mut();
        // Exponential moving average for smooth display
        stats.fps = stats.fps * 0.9 + fps * 0.1;
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + frame_time_ms * 0.1;
    });
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_stats_overlay_text() -> String {
    STATS.with(|s| {
        let stats = s.borrow();
        let elapsed_s = match stats.start_ms {
            Some(start) => ((stats.last_detection_ms - start) / 1000.0).max(0.001),
            None => 0.001,
        };
        let per_second = stats.total_detections as f64 / elapsed_s;
        let last = match stats.last_event {
            Some((name, confidence)) => format!("{} ({:.0}%)", name, confidence * 100.0),
            None => "-".to_string(),
        };
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Detections: {} ({:.1}/s)\n\
             Events: {}\n\
             Last: {}",
            stats.fps, stats.frame_time_ms, stats.total_detections, per_second,
            stats.total_events, last,
        )
    })
}

/// Reset all counters (camera restart)
#[wasm_bindgen]
pub fn reset_stats() {
    STATS.with(|s| {
        *s.borrow_mut() = Stats::default();
    });
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Count one tick that carried a hand
pub fn record_detection(now_ms: f64) {
    STATS.with(|s| {
        let mut stats = s.borrow_mut();
        stats.total_detections += 1;
        stats.last_detection_ms = now_ms;
        if stats.start_ms.is_none() {
            stats.start_ms = Some(now_ms);
        }
    });
}

/// Count one accepted gesture event
pub fn record_event(event: &RecognitionEvent) {
    STATS.with(|s| {
        let mut stats = s.borrow_mut();
        stats.total_events += 1;
        stats.last_event = Some((event.name, event.confidence));
    });
}
