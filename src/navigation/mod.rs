//! Section navigation engine for the landing page and the editor preview.
//!
//! [`SectionScrollController`] turns wheel input into discrete section
//! transitions animated by [`TransitionAnimator`]; [`PreviewScrubController`]
//! maps wheel delta straight to a bounded progress value. Both feed the pure
//! mappings in [`visuals`].

mod animator;
mod controller;
mod registry;
mod scrub;
pub mod visuals;

pub use animator::{Sample, TransitionAnimator, ease_in_out_quad};
pub use controller::{
    NavigationState, Position, SectionScrollController, Transition, WheelOutcome,
};
pub use registry::{Section, SectionBounds, SectionRegistry};
pub use scrub::{PreviewScrubController, ScrubState};

use crate::config::AppConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl Direction {
    /// Browser convention: positive delta scrolls the content down.
    pub fn from_delta(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Whether the host has a fine pointer (mouse/trackpad) or only touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerCapability {
    Precise,
    Coarse,
}

/// Tuning values for both controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationTuning {
    pub noise_threshold: f32,
    pub section_duration: Duration,
    pub reveal_duration: Duration,
    pub scrub_sensitivity: f32,
    pub spy_fraction: f32,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            noise_threshold: 10.0,
            section_duration: Duration::from_millis(1000),
            reveal_duration: Duration::from_millis(1200),
            scrub_sensitivity: 0.2,
            spy_fraction: 1.0 / 3.0,
        }
    }
}

impl From<&AppConfig> for NavigationTuning {
    fn from(config: &AppConfig) -> Self {
        Self {
            noise_threshold: config.noise_threshold.max(0.0),
            section_duration: Duration::from_millis(config.section_duration_ms),
            reveal_duration: Duration::from_millis(config.reveal_duration_ms),
            scrub_sensitivity: config.scrub_sensitivity,
            spy_fraction: config.spy_fraction,
        }
    }
}

/// The four full-viewport blocks of the landing page, in scroll order.
pub fn landing_sections() -> Vec<Section> {
    vec![
        Section::new("hero", "#fdfbf7"),
        Section::new("news", "#ffffff"),
        Section::new("about", "#f5f5f5"),
        Section::new("info", "#ffffff"),
    ]
}
