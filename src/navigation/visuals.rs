//! Pure mapping from navigation/scrub state to hero visuals.

use super::animator::ease_in_out_quad;
use super::{Direction, NavigationState};
use std::time::{Duration, Instant};

/// Overlay fully above the hero (hidden).
pub const IMAGE_HIDDEN_PERCENT: f32 = -100.0;
/// Overlay covering the hero.
pub const IMAGE_SHOWN_PERCENT: f32 = 0.0;
const SCRUB_TEXT_TOGGLE: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

pub const TITLE_COLOR: Rgba = Rgba::from_rgb8(0x5d, 0x40, 0x37);
pub const SUBTITLE_COLOR: Rgba = Rgba::from_rgb8(0x55, 0x55, 0x55);
pub const TITLE_ON_IMAGE: Rgba = Rgba::from_rgb8(0xff, 0xff, 0xff);
pub const SUBTITLE_ON_IMAGE: Rgba = Rgba::from_rgb8(0xf0, 0xf0, 0xf0);

/// Drop shadow behind hero text while the image is under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextShadow {
    pub offset_y: f32,
    pub blur: f32,
    pub color: Rgba,
}

pub const TEXT_SHADOW: TextShadow = TextShadow {
    offset_y: 2.0,
    blur: 10.0,
    color: Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.5,
    },
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualProps {
    /// Vertical offset of the image layer, `-100` (hidden above) to `0`.
    pub image_position_percent: f32,
    pub title_color: Rgba,
    pub subtitle_color: Rgba,
    pub text_shadow: Option<TextShadow>,
}

impl VisualProps {
    fn blended(image_position_percent: f32, blend: f32) -> Self {
        Self {
            image_position_percent,
            title_color: TITLE_COLOR.lerp(TITLE_ON_IMAGE, blend),
            subtitle_color: SUBTITLE_COLOR.lerp(SUBTITLE_ON_IMAGE, blend),
            text_shadow: (blend > 0.5).then_some(TEXT_SHADOW),
        }
    }

    pub fn image_visible(&self) -> bool {
        self.image_position_percent > IMAGE_HIDDEN_PERCENT
    }
}

/// Editor preview mapping: slide follows progress, text flips at the halfway
/// mark.
pub fn render_scrub(progress: f32) -> VisualProps {
    let progress = progress.clamp(0.0, 100.0);
    let blend = if progress > SCRUB_TEXT_TOGGLE { 1.0 } else { 0.0 };
    VisualProps::blended(IMAGE_HIDDEN_PERCENT + progress, blend)
}

/// Landing page mapping for the hero section. An exit motion still in
/// flight is rendered even after the controller has left section 0.
pub fn render_navigation(
    state: &NavigationState,
    reveal: &RevealAnimation,
    now: Instant,
) -> VisualProps {
    if state.current_index != 0 && !reveal.is_moving(now) {
        return VisualProps::blended(IMAGE_HIDDEN_PERCENT, 0.0);
    }
    VisualProps::blended(reveal.position(now), reveal.text_blend(now))
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    from_position: f32,
    to_position: f32,
    from_blend: f32,
    to_blend: f32,
    started_at: Instant,
    duration: Duration,
}

impl Motion {
    fn eased(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        ease_in_out_quad(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Enter/exit motion of the hero image layer.
///
/// Entering after downward input slides in from above; entering from the
/// section below finds the image already in place. Leaving always slides up.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimation {
    shown: bool,
    motion: Option<Motion>,
}

impl RevealAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Follow the controller's reveal flag; starts a motion on every flip.
    pub fn sync(&mut self, revealed: bool, direction: Direction, duration: Duration, now: Instant) {
        if revealed == self.shown {
            return;
        }
        let current_position = self.position(now);
        let current_blend = self.text_blend(now);
        let (from_position, to_position, to_blend) = if revealed {
            let from = match direction {
                Direction::Down => IMAGE_HIDDEN_PERCENT,
                Direction::Up => IMAGE_SHOWN_PERCENT,
            };
            (from, IMAGE_SHOWN_PERCENT, 1.0)
        } else {
            (current_position, IMAGE_HIDDEN_PERCENT, 0.0)
        };
        self.shown = revealed;
        self.motion = Some(Motion {
            from_position,
            to_position,
            from_blend: current_blend,
            to_blend,
            started_at: now,
            duration,
        });
    }

    /// Jump to a resting state without motion (e.g. after the scroll-spy
    /// moved away from the hero).
    pub fn settle_at(&mut self, revealed: bool) {
        self.shown = revealed;
        self.motion = None;
    }

    pub fn position(&self, now: Instant) -> f32 {
        match self.motion {
            Some(motion) if !motion.finished(now) => {
                motion.from_position + (motion.to_position - motion.from_position) * motion.eased(now)
            }
            _ if self.shown => IMAGE_SHOWN_PERCENT,
            _ => IMAGE_HIDDEN_PERCENT,
        }
    }

    pub fn text_blend(&self, now: Instant) -> f32 {
        match self.motion {
            Some(motion) if !motion.finished(now) => {
                motion.from_blend + (motion.to_blend - motion.from_blend) * motion.eased(now)
            }
            _ if self.shown => 1.0,
            _ => 0.0,
        }
    }

    pub fn is_moving(&self, now: Instant) -> bool {
        self.motion.is_some_and(|motion| !motion.finished(now))
    }

    /// Drop a finished motion so the tick subscription can stop.
    pub fn prune(&mut self, now: Instant) {
        if self.motion.is_some_and(|motion| motion.finished(now)) {
            self.motion = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVEAL: Duration = Duration::from_millis(1200);

    fn hero_state(image_revealed: bool, direction: Direction) -> NavigationState {
        NavigationState {
            current_index: 0,
            image_revealed,
            is_animating: false,
            direction,
        }
    }

    #[test]
    fn scrub_maps_progress_to_slide() {
        assert_eq!(render_scrub(0.0).image_position_percent, -100.0);
        assert_eq!(render_scrub(30.0).image_position_percent, -70.0);
        assert_eq!(render_scrub(100.0).image_position_percent, 0.0);
        assert_eq!(render_scrub(250.0).image_position_percent, 0.0);
    }

    #[test]
    fn scrub_text_flips_only_past_halfway() {
        let at_half = render_scrub(50.0);
        assert_eq!(at_half.title_color, TITLE_COLOR);
        assert!(at_half.text_shadow.is_none());

        let past_half = render_scrub(50.5);
        assert_eq!(past_half.title_color, TITLE_ON_IMAGE);
        assert_eq!(past_half.subtitle_color, SUBTITLE_ON_IMAGE);
        assert_eq!(past_half.text_shadow, Some(TEXT_SHADOW));
    }

    #[test]
    fn downward_entry_slides_from_above() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.sync(true, Direction::Down, REVEAL, start);

        assert_eq!(reveal.position(start), -100.0);
        let mid = reveal.position(start + REVEAL / 2);
        assert!((mid + 50.0).abs() < 0.5);
        assert_eq!(reveal.position(start + REVEAL), 0.0);
        assert!(!reveal.is_moving(start + REVEAL));
    }

    #[test]
    fn upward_entry_is_already_resident() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.sync(true, Direction::Up, REVEAL, start);
        assert_eq!(reveal.position(start), 0.0);
        assert_eq!(reveal.position(start + REVEAL / 3), 0.0);
        // Text still crossfades over the reveal duration.
        assert!(reveal.text_blend(start + REVEAL / 3) < 1.0);
    }

    #[test]
    fn exit_always_slides_up() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.sync(true, Direction::Up, REVEAL, start);
        let later = start + REVEAL;
        reveal.sync(false, Direction::Down, REVEAL, later);

        let mid = reveal.position(later + REVEAL / 2);
        assert!(mid < 0.0 && mid > -100.0);
        assert_eq!(reveal.position(later + REVEAL), -100.0);
    }

    #[test]
    fn navigation_render_tracks_reveal() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        let hidden = render_navigation(&hero_state(false, Direction::Down), &reveal, start);
        assert!(!hidden.image_visible());
        assert_eq!(hidden.title_color, TITLE_COLOR);

        reveal.sync(true, Direction::Down, REVEAL, start);
        let settled = render_navigation(
            &hero_state(true, Direction::Down),
            &reveal,
            start + REVEAL,
        );
        assert_eq!(settled.image_position_percent, 0.0);
        assert_eq!(settled.title_color, TITLE_ON_IMAGE);
        assert!(settled.text_shadow.is_some());
    }

    #[test]
    fn other_sections_hide_the_layer() {
        let now = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.settle_at(true);
        let state = NavigationState {
            current_index: 2,
            image_revealed: false,
            is_animating: false,
            direction: Direction::Down,
        };
        assert!(!render_navigation(&state, &reveal, now).image_visible());
    }

    #[test]
    fn exit_keeps_sliding_after_leaving_the_hero() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.settle_at(true);
        reveal.sync(false, Direction::Down, REVEAL, start);
        let state = NavigationState {
            current_index: 1,
            image_revealed: false,
            is_animating: true,
            direction: Direction::Down,
        };

        let mid = render_navigation(&state, &reveal, start + REVEAL / 4);
        assert!(mid.image_visible());
        assert_eq!(mid.image_position_percent, reveal.position(start + REVEAL / 4));

        let done = render_navigation(&state, &reveal, start + REVEAL);
        assert_eq!(done.image_position_percent, IMAGE_HIDDEN_PERCENT);
        assert_eq!(done.title_color, TITLE_COLOR);
    }

    #[test]
    fn prune_clears_finished_motion() {
        let start = Instant::now();
        let mut reveal = RevealAnimation::new();
        reveal.sync(true, Direction::Down, REVEAL, start);
        reveal.prune(start + REVEAL / 2);
        assert!(reveal.is_moving(start + REVEAL / 2));
        reveal.prune(start + REVEAL);
        assert!(!reveal.is_moving(start + REVEAL));
        assert!(reveal.is_shown());
    }
}
