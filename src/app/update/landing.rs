use super::super::state::App;
use super::Effect;
use iced::mouse::ScrollDelta;
use std::time::Instant;
use tracing::{debug, trace};

/// Convert an iced wheel delta to a pixel delta where positive scrolls the
/// content down.
pub(super) fn wheel_delta_px(delta: ScrollDelta, line_px: f32) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * line_px,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

impl App {
    pub(super) fn handle_landing_wheel(&mut self, delta: ScrollDelta, effects: &mut Vec<Effect>) {
        let delta_y = wheel_delta_px(delta, self.config.wheel_line_px);
        self.feed_landing_wheel(delta_y, Instant::now(), effects);
    }

    /// Keyboard paging goes through the same path as a wheel notch.
    pub(super) fn handle_keyboard_step(&mut self, sign: f32, effects: &mut Vec<Effect>) {
        let delta_y = sign * self.config.keyboard_step_delta;
        self.feed_landing_wheel(delta_y, Instant::now(), effects);
    }

    pub(super) fn feed_landing_wheel(&mut self, delta_y: f32, now: Instant, effects: &mut Vec<Effect>) {
        let Some(landing) = self.landing.as_mut() else {
            return;
        };
        let outcome = landing.controller.on_wheel(delta_y, now);
        trace!(
            delta_y,
            intercepted = outcome.intercepted,
            started = outcome.transition.is_some(),
            "Landing wheel"
        );
        if outcome.transition.is_some() {
            self.start_landing_transition(now, effects);
        }
    }

    pub(super) fn handle_nav_clicked(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let now = Instant::now();
        let Some(landing) = self.landing.as_mut() else {
            return;
        };
        if landing.controller.jump_to(index, now).is_some() {
            self.start_landing_transition(now, effects);
        }
    }

    /// Sync the overlay with the controller's new state and emit the first
    /// frame; the rest follow the tick subscription.
    fn start_landing_transition(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(landing) = self.landing.as_mut() else {
            return;
        };
        let state = landing.controller.state();
        landing.reveal.sync(
            state.image_revealed,
            state.direction,
            self.tuning.reveal_duration,
            now,
        );
        if let Some(offset) = landing.controller.tick(now) {
            effects.push(Effect::ScrollLanding(offset));
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(landing) = self.landing.as_mut() {
            if landing.controller.is_animating() {
                if let Some(offset) = landing.controller.tick(now) {
                    effects.push(Effect::ScrollLanding(offset));
                }
            }
            landing.reveal.prune(now);
        }
        if let Some(editor) = self.editor.as_mut() {
            if editor.flash.as_ref().is_some_and(|flash| flash.expired(now)) {
                editor.flash = None;
            }
        }
    }

    pub(super) fn handle_landing_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        let now = Instant::now();
        if let Some(landing) = self.landing.as_ref() {
            if viewport_height.is_finite()
                && viewport_height > 0.0
                && (viewport_height - landing.viewport_height).abs() >= 0.5
            {
                self.resize_landing(viewport_height, now, effects);
            }
        }
        let Some(landing) = self.landing.as_mut() else {
            return;
        };
        if let Some(index) = landing.controller.on_native_scroll(offset_y, viewport_height) {
            if index != 0 {
                // Scrolled away natively; the overlay is off screen.
                landing.reveal.settle_at(false);
            }
        }
    }

    pub(super) fn resize_landing(
        &mut self,
        viewport_height: f32,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        let Some(landing) = self.landing.as_mut() else {
            return;
        };
        debug!(
            from = landing.viewport_height,
            to = viewport_height,
            "Landing viewport resized"
        );
        landing.viewport_height = viewport_height;
        if let Some(offset) = landing.controller.on_viewport_resized(viewport_height, now) {
            effects.push(Effect::ScrollLanding(offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::ConfigAuth;
    use crate::config::AppConfig;
    use crate::i18n::Language;
    use crate::navigation::Position;
    use crate::navigation::visuals::render_navigation;
    use crate::store::JsonFileStore;
    use std::sync::Arc;
    use std::time::Duration;

    fn landing_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            window_height: 664.0,
            ..AppConfig::default()
        };
        let mut app = App::new(
            config,
            Arc::new(JsonFileStore::new(dir.path())),
            Arc::new(ConfigAuth::new(None)),
            dir.path().join(".cache"),
            Language::Jp,
        );
        let mut effects = Vec::new();
        app.mount_landing(&mut effects);
        (app, dir)
    }

    fn position(app: &App) -> Position {
        app.landing.as_ref().expect("landing").controller.position()
    }

    #[test]
    fn wheel_deltas_follow_browser_sign() {
        assert_eq!(wheel_delta_px(ScrollDelta::Lines { x: 0.0, y: -1.0 }, 40.0), 40.0);
        assert_eq!(wheel_delta_px(ScrollDelta::Lines { x: 0.0, y: 2.0 }, 40.0), -80.0);
        assert_eq!(wheel_delta_px(ScrollDelta::Pixels { x: 0.0, y: -12.5 }, 40.0), 12.5);
    }

    #[test]
    fn wheel_down_walks_through_the_hero_stops() {
        let (mut app, _dir) = landing_app();
        let start = Instant::now();
        let mut effects = Vec::new();

        app.feed_landing_wheel(120.0, start, &mut effects);
        assert_eq!(position(&app), Position::LeadImage);
        assert!(app.landing.as_ref().expect("landing").reveal.is_shown());

        // Swallowed while the hold runs.
        app.feed_landing_wheel(120.0, start + Duration::from_millis(10), &mut effects);
        assert_eq!(position(&app), Position::LeadImage);

        let done = start + Duration::from_millis(1300);
        app.handle_tick(done, &mut effects);
        effects.clear();
        app.feed_landing_wheel(120.0, done, &mut effects);
        assert_eq!(position(&app), Position::Section(1));
        assert!(matches!(effects.as_slice(), [Effect::ScrollLanding(_)]));

        app.handle_tick(done + Duration::from_millis(1100), &mut effects);
        assert!(matches!(effects.last(), Some(Effect::ScrollLanding(y)) if (*y - 600.0).abs() < 0.01));
    }

    #[test]
    fn overlay_slides_out_while_scrolling_to_news() {
        let (mut app, _dir) = landing_app();
        let start = Instant::now();
        let mut effects = Vec::new();

        app.feed_landing_wheel(120.0, start, &mut effects);
        let revealed = start + Duration::from_millis(1300);
        app.handle_tick(revealed, &mut effects);
        app.feed_landing_wheel(120.0, revealed, &mut effects);
        assert_eq!(position(&app), Position::Section(1));

        let landing = app.landing.as_ref().expect("landing");
        let state = landing.controller.state();
        let during = revealed + Duration::from_millis(300);
        let props = render_navigation(&state, &landing.reveal, during);
        assert!(props.image_position_percent > -100.0);
        assert_eq!(props.image_position_percent, landing.reveal.position(during));

        let after = revealed + Duration::from_millis(1300);
        assert!(!render_navigation(&state, &landing.reveal, after).image_visible());
    }

    #[test]
    fn keyboard_steps_use_configured_delta() {
        let (mut app, _dir) = landing_app();
        let mut effects = Vec::new();
        app.handle_keyboard_step(1.0, &mut effects);
        assert_eq!(position(&app), Position::LeadImage);
    }

    #[test]
    fn native_scroll_away_settles_the_overlay() {
        let (mut app, _dir) = landing_app();
        let mut effects = Vec::new();
        app.handle_landing_scrolled(900.0, 600.0, &mut effects);
        let landing = app.landing.as_ref().expect("landing");
        assert_eq!(landing.controller.state().current_index, 1);
        assert!(!landing.reveal.is_shown());
    }

    #[test]
    fn idle_resize_snaps_to_current_section() {
        let (mut app, _dir) = landing_app();
        let mut effects = Vec::new();
        app.handle_landing_scrolled(1200.0, 600.0, &mut effects);
        assert_eq!(app.landing.as_ref().expect("landing").controller.state().current_index, 2);

        effects.clear();
        app.resize_landing(500.0, Instant::now(), &mut effects);
        assert!(matches!(effects.as_slice(), [Effect::ScrollLanding(y)] if (*y - 1000.0).abs() < 0.01));
    }
}
