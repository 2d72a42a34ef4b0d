//! Declarative entrance-transition descriptors and their trigger logic.
//!
//! The web layer is a pure configuration consumer: it reads these specs,
//! hides the targets, and flips CSS properties when the state machine says
//! so. The browser's transition engine does the timeline math.

use super::constants::ENTRANCE_START_FRACTION;

#[derive(Clone, Copy, Debug)]
pub struct EntranceSpec {
    /// Selector for the elements that animate.
    pub target: &'static str,
    /// Selector for the element whose viewport position drives the toggle.
    pub trigger: &'static str,
    /// Hidden-state offset in CSS pixels.
    pub from_x: f32,
    pub from_y: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Extra delay added per item within the group.
    pub stagger_ms: u32,
    /// Plays once on page load instead of waiting for a scroll trigger.
    pub play_on_load: bool,
}

/// The full set of page transitions, in document order.
pub fn entrance_specs() -> Vec<EntranceSpec> {
    vec![
        EntranceSpec {
            target: ".hero-text",
            trigger: ".hero-text",
            from_x: 0.0,
            from_y: 50.0,
            duration_ms: 1000,
            delay_ms: 0,
            stagger_ms: 0,
            play_on_load: true,
        },
        EntranceSpec {
            target: ".hero-visual",
            trigger: ".hero-visual",
            from_x: 50.0,
            from_y: 0.0,
            duration_ms: 1000,
            delay_ms: 300,
            stagger_ms: 0,
            play_on_load: true,
        },
        EntranceSpec {
            target: ".about-text",
            trigger: ".about-text",
            from_x: 0.0,
            from_y: 30.0,
            duration_ms: 1000,
            delay_ms: 0,
            stagger_ms: 0,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".about-visual",
            trigger: ".about-visual",
            from_x: 30.0,
            from_y: 0.0,
            duration_ms: 1000,
            delay_ms: 300,
            stagger_ms: 0,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".stat",
            trigger: ".about-stats",
            from_x: 0.0,
            from_y: 30.0,
            duration_ms: 800,
            delay_ms: 0,
            stagger_ms: 200,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".project-card",
            trigger: ".projects-grid",
            from_x: 0.0,
            from_y: 50.0,
            duration_ms: 800,
            delay_ms: 0,
            stagger_ms: 200,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".skill-item",
            trigger: ".skills-grid",
            from_x: -30.0,
            from_y: 0.0,
            duration_ms: 600,
            delay_ms: 0,
            stagger_ms: 100,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".contact-item",
            trigger: ".contact-info",
            from_x: 0.0,
            from_y: 30.0,
            duration_ms: 800,
            delay_ms: 0,
            stagger_ms: 200,
            play_on_load: false,
        },
        EntranceSpec {
            target: ".contact-form",
            trigger: ".contact-form",
            from_x: 30.0,
            from_y: 0.0,
            duration_ms: 1000,
            delay_ms: 0,
            stagger_ms: 0,
            play_on_load: false,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Play,
    Reverse,
}

/// Per-group toggle state: play once when the trigger's top crosses the
/// start line, reverse when it scrolls back above it.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntranceState {
    played: bool,
}

impl EntranceState {
    pub fn on_scroll(&mut self, trigger_top: f64, viewport_h: f64) -> Option<Toggle> {
        let start_line = viewport_h * ENTRANCE_START_FRACTION;
        if !self.played && trigger_top <= start_line {
            self.played = true;
            Some(Toggle::Play)
        } else if self.played && trigger_top > start_line {
            self.played = false;
            Some(Toggle::Reverse)
        } else {
            None
        }
    }

    pub fn played(&self) -> bool {
        self.played
    }
}

/// Delay for the `index`-th item of a staggered group.
pub fn item_delay_ms(spec: &EntranceSpec, index: usize) -> u32 {
    spec.delay_ms + spec.stagger_ms * index as u32
}

/// CSS transition declaration driving a group's reveal and reverse. Hover
/// effects install their own declaration, so play and reverse must re-apply
/// this one before flipping any property.
pub fn transition_decl(spec: &EntranceSpec) -> String {
    format!(
        "opacity {d}ms cubic-bezier(0.22, 1, 0.36, 1), transform {d}ms cubic-bezier(0.22, 1, 0.36, 1)",
        d = spec.duration_ms
    )
}
