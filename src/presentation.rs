//! Slide deck simulator driven by recognized gesture actions
//!
//! Pure state: navigation, autoplay, pointer mode and zoom. The DOM
//! side only reads the formatted slide text through the bridge.

use crate::gesture::Action;

/// Autoplay advances one slide per interval
pub const AUTOPLAY_INTERVAL_MS: f64 = 3000.0;

pub const ZOOM_STEP: f32 = 0.1;
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;

pub struct Slide {
    pub title: &'static str,
    pub content: &'static str,
}

/// Demo deck content
pub static SLIDES: [Slide; 5] = [
    Slide {
        title: "Welcome to AI Gesture Control",
        content: "Revolutionary presentation control using computer vision",
    },
    Slide {
        title: "How It Works",
        content: "Advanced AI detects hand gestures in real-time",
    },
    Slide {
        title: "Supported Gestures",
        content: "Open palm, pointing, swipes, and more",
    },
    Slide {
        title: "Applications",
        content: "Presentations, gaming, accessibility tools",
    },
    Slide {
        title: "Future Vision",
        content: "Seamless human-computer interaction",
    },
];

pub struct SlideDeck {
    current: usize,
    playing: bool,
    pointer_mode: bool,
    zoom: f32,
    last_advance_ms: f64,
}

impl SlideDeck {
    pub fn new() -> Self {
        Self {
            current: 0,
            playing: false,
            pointer_mode: false,
            zoom: 1.0,
            last_advance_ms: 0.0,
        }
    }

    /// Apply one recognized action to the deck.
    pub fn apply(&mut self, action: Action, now_ms: f64) {
        match action {
            Action::PlayPause => {
                self.playing = !self.playing;
                if self.playing {
                    self.last_advance_ms = now_ms;
                }
            }
            Action::Stop => {
                self.playing = false;
                self.pointer_mode = false;
                self.current = 0;
            }
            Action::NextSlide => self.next_slide(),
            Action::PreviousSlide => self.previous_slide(),
            Action::ZoomIn => self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX),
            Action::ZoomOut => self.zoom = (self.zoom - ZOOM_STEP).max(ZOOM_MIN),
            Action::TogglePointer => self.pointer_mode = !self.pointer_mode,
        }
    }

    /// Advance autoplay. Returns true when the slide changed. Autoplay
    /// stops itself at the last slide.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.playing || now_ms - self.last_advance_ms < AUTOPLAY_INTERVAL_MS {
            return false;
        }
        if self.current + 1 < SLIDES.len() {
            self.current += 1;
            self.last_advance_ms = now_ms;
            true
        } else {
            self.playing = false;
            false
        }
    }

    pub fn next_slide(&mut self) {
        if self.current + 1 < SLIDES.len() {
            self.current += 1;
        }
    }

    pub fn previous_slide(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        }
    }

    pub fn slide(&self) -> &'static Slide {
        &SLIDES[self.current]
    }

    /// "n / total" indicator text
    pub fn position_text(&self) -> String {
        format!("{} / {}", self.current + 1, SLIDES.len())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn pointer_mode(&self) -> bool {
        self.pointer_mode
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut deck = SlideDeck::new();
        deck.previous_slide();
        assert_eq!(deck.position_text(), "1 / 5");
        for _ in 0..10 {
            deck.next_slide();
        }
        assert_eq!(deck.position_text(), "5 / 5");
    }

    #[test]
    fn autoplay_advances_on_interval_and_stops_at_end() {
        let mut deck = SlideDeck::new();
        deck.apply(Action::PlayPause, 0.0);
        assert!(deck.is_playing());

        assert!(!deck.tick(2999.0));
        assert!(deck.tick(3000.0));
        assert_eq!(deck.position_text(), "2 / 5");

        // Run well past the deck's end
        let mut t = 3000.0;
        for _ in 0..10 {
            t += AUTOPLAY_INTERVAL_MS;
            deck.tick(t);
        }
        assert_eq!(deck.position_text(), "5 / 5");
        assert!(!deck.is_playing());
    }

    #[test]
    fn stop_resets_and_halts() {
        let mut deck = SlideDeck::new();
        deck.apply(Action::PlayPause, 0.0);
        deck.apply(Action::NextSlide, 10.0);
        deck.apply(Action::TogglePointer, 20.0);
        deck.apply(Action::Stop, 30.0);
        assert!(!deck.is_playing());
        assert!(!deck.pointer_mode());
        assert_eq!(deck.position_text(), "1 / 5");
    }

    #[test]
    fn zoom_steps_and_clamps() {
        let mut deck = SlideDeck::new();
        for _ in 0..40 {
            deck.apply(Action::ZoomIn, 0.0);
        }
        assert_eq!(deck.zoom(), ZOOM_MAX);
        for _ in 0..80 {
            deck.apply(Action::ZoomOut, 0.0);
        }
        assert_eq!(deck.zoom(), ZOOM_MIN);
    }

    #[test]
    fn pointer_mode_toggles() {
        let mut deck = SlideDeck::new();
        deck.apply(Action::TogglePointer, 0.0);
        assert!(deck.pointer_mode());
        deck.apply(Action::TogglePointer, 1.0);
        assert!(!deck.pointer_mode());
    }
}
