//! Stability filtering - turns noisy per-frame classifications into a
//! debounced recognition event stream
//!
//! A label must repeat in the recent buffer before it is accepted, and
//! a global cooldown keeps a held gesture from firing more than once a
//! second. Everything degrades to "no event"; the filter has no failure
//! state and recovers on the next tick.

use std::collections::VecDeque;

use super::classifier::Classification;
use super::labels::{Action, GestureLabel};

/// Observations kept for the consistency check
pub const BUFFER_CAPACITY: usize = 5;

/// Only observations this recent count toward consistency
pub const CONSISTENCY_WINDOW_MS: f64 = 500.0;

/// Same-label observations within the window required to confirm
pub const MIN_CONSISTENT: usize = 3;

/// Minimum gap between accepted events, regardless of label
pub const COOLDOWN_MS: f64 = 1000.0;

/// Accepted events retained for display
pub const HISTORY_CAPACITY: usize = 10;

/// An accepted, debounced gesture ready for the event sink
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognitionEvent {
    pub label: GestureLabel,
    pub name: &'static str,
    pub action: Action,
    pub confidence: f32,
    pub timestamp_ms: f64,
}

/// One buffered classifier output
#[derive(Clone, Copy, Debug)]
struct Observation {
    label: GestureLabel,
    timestamp_ms: f64,
}

pub struct StabilityFilter {
    buffer: VecDeque<Observation>,
    last_event: Option<RecognitionEvent>,
    history: VecDeque<RecognitionEvent>,
}

impl StabilityFilter {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(BUFFER_CAPACITY + 1),
            last_event: None,
            history: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Feed one tick's classification. Timestamps must be non-decreasing
    /// across calls. Returns the recognition event when the label has
    /// proven stable and the cooldown has elapsed.
    pub fn observe(
        &mut self,
        classification: Classification,
        now_ms: f64,
    ) -> Option<RecognitionEvent> {
        self.buffer.push_back(Observation {
            label: classification.label,
            timestamp_ms: now_ms,
        });
        if self.buffer.len() > BUFFER_CAPACITY {
            self.buffer.pop_front();
        }

        let consistent = self
            .buffer
            .iter()
            .filter(|o| {
                o.label == classification.label
                    && now_ms - o.timestamp_ms < CONSISTENCY_WINDOW_MS
            })
            .count();
        if consistent < MIN_CONSISTENT {
            return None;
        }

        if let Some(last) = &self.last_event {
            if now_ms - last.timestamp_ms < COOLDOWN_MS {
                return None;
            }
        }

        let event = RecognitionEvent {
            label: classification.label,
            name: classification.label.display_name(),
            action: classification.label.action(),
            confidence: classification.confidence,
            timestamp_ms: now_ms,
        };
        self.last_event = Some(event);
        self.history.push_front(event);
        self.history.truncate(HISTORY_CAPACITY);
        Some(event)
    }

    /// Most recently accepted event, if any
    pub fn last_event(&self) -> Option<&RecognitionEvent> {
        self.last_event.as_ref()
    }

    /// Accepted events, most recent first, at most [`HISTORY_CAPACITY`]
    pub fn history(&self) -> impl Iterator<Item = &RecognitionEvent> {
        self.history.iter()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_event = None;
        self.history.clear();
    }
}

impl Default for StabilityFilter {
    fn default() -> Self {
        Self::new()
    }
}
