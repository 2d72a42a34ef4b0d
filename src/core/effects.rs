//! Pure math/state behind the secondary interactive effects.

use super::constants::{HOVER_DURATION_MS, PARALLAX_FACTOR, TILT_MAX_DEG};

/// Map a normalized cursor position within the hero canvas to a perspective
/// tilt in degrees: `(rotate_y, rotate_x)`, each within ±TILT_MAX_DEG.
pub fn tilt_degrees(u: f32, v: f32) -> (f32, f32) {
    let span = TILT_MAX_DEG * 2.0;
    ((u - 0.5) * span, (v - 0.5) * span)
}

/// Vertical hero offset for a given scroll position.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// CSS transition for hover-scale targets. The entrance pass owns the
/// `transition` property until its reveal has played, so this is re-applied
/// on every enter rather than once at wiring time.
pub fn hover_transition() -> String {
    format!("transform {HOVER_DURATION_MS}ms ease")
}

/// Character-by-character title reveal. Runs forward once; there is no way
/// to rewind it.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the full text has been shown.
    pub fn step(&mut self) -> Option<String> {
        if self.shown >= self.chars.len() {
            return None;
        }
        self.shown += 1;
        Some(self.chars[..self.shown].iter().collect())
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}
