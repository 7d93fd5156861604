use super::animator::TransitionAnimator;
use super::registry::SectionRegistry;
use super::{Direction, NavigationTuning, PointerCapability};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Snapshot of the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_index: usize,
    /// Only meaningful while `current_index == 0`.
    pub image_revealed: bool,
    pub is_animating: bool,
    pub direction: Direction,
}

/// Discrete stop of the state machine. The first section has two stops: its
/// text and the image layer revealed over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    LeadText,
    LeadImage,
    Section(usize),
}

impl Position {
    pub fn index(self) -> usize {
        match self {
            Position::LeadText | Position::LeadImage => 0,
            Position::Section(idx) => idx,
        }
    }

    fn for_index(index: usize) -> Self {
        if index == 0 {
            Position::LeadText
        } else {
            Position::Section(index)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Position,
    pub to: Position,
    pub target_offset: f32,
    pub duration: Duration,
}

/// Result of feeding one wheel event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelOutcome {
    /// The host must suppress native scrolling for this event.
    pub intercepted: bool,
    pub transition: Option<Transition>,
}

impl WheelOutcome {
    fn passthrough() -> Self {
        Self::default()
    }

    fn swallowed() -> Self {
        Self {
            intercepted: true,
            transition: None,
        }
    }
}

/// Wheel-to-section state machine for one scroll container.
///
/// The controller is the only writer of the container offset while attached:
/// every offset it wants applied comes out of [`tick`](Self::tick) or
/// [`on_viewport_resized`](Self::on_viewport_resized).
#[derive(Debug)]
pub struct SectionScrollController {
    registry: SectionRegistry,
    tuning: NavigationTuning,
    pointer: PointerCapability,
    animator: TransitionAnimator,
    current_index: usize,
    image_revealed: bool,
    direction: Direction,
    scroll_top: f32,
}

impl SectionScrollController {
    pub fn new(
        registry: SectionRegistry,
        tuning: NavigationTuning,
        pointer: PointerCapability,
    ) -> Self {
        Self {
            registry,
            tuning,
            pointer,
            animator: TransitionAnimator::new(),
            current_index: 0,
            image_revealed: false,
            direction: Direction::Down,
            scroll_top: 0.0,
        }
    }

    pub fn state(&self) -> NavigationState {
        NavigationState {
            current_index: self.current_index,
            image_revealed: self.image_revealed,
            is_animating: self.animator.is_running(),
            direction: self.direction,
        }
    }

    pub fn position(&self) -> Position {
        match (self.current_index, self.image_revealed) {
            (0, false) => Position::LeadText,
            (0, true) => Position::LeadImage,
            (idx, _) => Position::Section(idx),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn pointer(&self) -> PointerCapability {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: PointerCapability) {
        if self.pointer != pointer {
            debug!(?pointer, "Pointer capability changed");
            self.pointer = pointer;
        }
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Feed one wheel event. `delta_y` follows the browser convention:
    /// positive scrolls down.
    pub fn on_wheel(&mut self, delta_y: f32, now: Instant) -> WheelOutcome {
        if self.pointer == PointerCapability::Coarse {
            return WheelOutcome::passthrough();
        }
        if self.animator.is_running() {
            trace!(delta_y, "Wheel swallowed during transition");
            return WheelOutcome::swallowed();
        }
        if !delta_y.is_finite() || delta_y.abs() < self.tuning.noise_threshold {
            return WheelOutcome::passthrough();
        }

        let direction = Direction::from_delta(delta_y);
        let Some(next) = self.next_position(direction) else {
            return WheelOutcome::swallowed();
        };
        WheelOutcome {
            intercepted: true,
            transition: self.begin(next, direction, now),
        }
    }

    /// Jump straight to a section (nav header click). Lands on the text stop.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<Transition> {
        if self.animator.is_running() || index >= self.registry.len() {
            return None;
        }
        let next = Position::for_index(index);
        if next == self.position() {
            return None;
        }
        let direction = if index >= self.current_index {
            Direction::Down
        } else {
            Direction::Up
        };
        self.begin(next, direction, now)
    }

    /// Advance the in-flight transition. Returns the offset to write to the
    /// viewport, or `None` when idle.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let sample = self.animator.sample(now)?;
        self.scroll_top = sample.value;
        if sample.finished {
            debug!(
                index = self.current_index,
                image_revealed = self.image_revealed,
                offset = sample.value,
                "Section transition finished"
            );
        }
        Some(sample.value)
    }

    /// Scroll-spy hook for native scroll events. Returns the new current
    /// index when it changed.
    pub fn on_native_scroll(&mut self, scroll_top: f32, viewport_height: f32) -> Option<usize> {
        if self.animator.is_running() {
            return None;
        }
        if scroll_top.is_finite() {
            self.scroll_top = scroll_top;
        }
        let index = self
            .registry
            .current_section_at(scroll_top, viewport_height)?;
        if index == self.current_index {
            return None;
        }
        debug!(
            from = self.current_index,
            to = index,
            "Scroll-spy moved current section"
        );
        self.current_index = index;
        if index != 0 {
            self.image_revealed = false;
        }
        Some(index)
    }

    /// Re-measure after a viewport resize. A transition in flight is pointed
    /// at its destination's fresh offset and keeps its end time; when idle
    /// the returned offset re-aligns the current section.
    pub fn on_viewport_resized(&mut self, viewport_height: f32, now: Instant) -> Option<f32> {
        self.registry.measure_uniform(viewport_height);
        let offset = self.registry.offset_of(self.current_index)?;
        if self.animator.is_running() {
            self.animator.retarget(offset, now);
            return None;
        }
        if self.pointer == PointerCapability::Coarse || (offset - self.scroll_top).abs() < 0.5 {
            return None;
        }
        self.scroll_top = offset;
        Some(offset)
    }

    /// Unmount: stop scheduling frames.
    pub fn detach(&mut self) {
        if self.animator.is_running() {
            debug!("Detaching controller with a transition in flight");
        }
        self.animator.stop();
    }

    fn next_position(&self, direction: Direction) -> Option<Position> {
        let last = self.registry.len().checked_sub(1)?;
        match (self.position(), direction) {
            (Position::LeadText, Direction::Down) => Some(Position::LeadImage),
            (Position::LeadText, Direction::Up) => None,
            (Position::LeadImage, Direction::Down) => (last >= 1).then_some(Position::Section(1)),
            (Position::LeadImage, Direction::Up) => Some(Position::LeadText),
            (Position::Section(k), Direction::Down) => {
                (k < last).then_some(Position::Section(k + 1))
            }
            (Position::Section(1), Direction::Up) => Some(Position::LeadImage),
            (Position::Section(k), Direction::Up) => Some(Position::Section(k - 1)),
        }
    }

    fn begin(&mut self, next: Position, direction: Direction, now: Instant) -> Option<Transition> {
        let from = self.position();
        let Some(target_offset) = self.registry.offset_of(next.index()) else {
            debug!(?next, "Section layout not ready; ignoring transition");
            return None;
        };
        let duration = if next.index() == from.index() {
            self.tuning.reveal_duration
        } else {
            self.tuning.section_duration
        };

        self.current_index = next.index();
        self.image_revealed = next == Position::LeadImage;
        self.direction = direction;
        self.animator
            .animate(self.scroll_top, target_offset, duration, now);

        let transition = Transition {
            from,
            to: next,
            target_offset,
            duration,
        };
        debug!(
            ?from,
            to = ?next,
            target_offset,
            duration_ms = duration.as_millis() as u64,
            "Starting section transition"
        );
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{Section, landing_sections};

    const VIEWPORT: f32 = 900.0;

    fn controller_with(count: usize) -> SectionScrollController {
        let sections = (0..count)
            .map(|idx| Section::new(format!("s{idx}"), "#ffffff"))
            .collect();
        let mut registry = SectionRegistry::new(sections, 1.0 / 3.0);
        registry.measure_uniform(VIEWPORT);
        SectionScrollController::new(
            registry,
            NavigationTuning::default(),
            PointerCapability::Precise,
        )
    }

    fn landing() -> SectionScrollController {
        let mut registry = SectionRegistry::new(landing_sections(), 1.0 / 3.0);
        registry.measure_uniform(VIEWPORT);
        SectionScrollController::new(
            registry,
            NavigationTuning::default(),
            PointerCapability::Precise,
        )
    }

    /// Wheel once and run the resulting transition to completion.
    fn step(controller: &mut SectionScrollController, delta_y: f32, now: &mut Instant) {
        controller.on_wheel(delta_y, *now);
        *now += Duration::from_millis(1300);
        while controller.tick(*now).is_some() {}
    }

    #[test]
    fn downward_walk_visits_every_state_then_sticks() {
        for count in 2..=6 {
            let mut controller = controller_with(count);
            let mut now = Instant::now();
            let mut visited = vec![controller.position()];
            for _ in 0..count + 3 {
                step(&mut controller, 120.0, &mut now);
                if visited.last() != Some(&controller.position()) {
                    visited.push(controller.position());
                }
            }
            let mut expected = vec![Position::LeadText, Position::LeadImage];
            expected.extend((1..count).map(Position::Section));
            assert_eq!(visited, expected, "count={count}");
            assert_eq!(controller.state().current_index, count - 1);
        }
    }

    #[test]
    fn upward_walk_returns_through_image_to_text() {
        for count in 2..=6 {
            let mut controller = controller_with(count);
            let mut now = Instant::now();
            for _ in 0..count + 1 {
                step(&mut controller, 120.0, &mut now);
            }
            assert_eq!(controller.position(), Position::Section(count - 1));

            let mut visited = vec![controller.position()];
            for _ in 0..count + 3 {
                step(&mut controller, -120.0, &mut now);
                if visited.last() != Some(&controller.position()) {
                    visited.push(controller.position());
                }
            }
            let mut expected: Vec<Position> = (1..count).rev().map(Position::Section).collect();
            expected.push(Position::LeadImage);
            expected.push(Position::LeadText);
            assert_eq!(visited, expected, "count={count}");
        }
    }

    #[test]
    fn small_deltas_are_noise() {
        let mut controller = landing();
        let now = Instant::now();
        for delta in [9.9, -9.9, 0.0, 5.0, -1.0] {
            let outcome = controller.on_wheel(delta, now);
            assert!(!outcome.intercepted);
            assert!(outcome.transition.is_none());
        }
        assert_eq!(controller.position(), Position::LeadText);
        assert!(!controller.is_animating());
    }

    #[test]
    fn input_during_transition_is_swallowed() {
        let mut controller = landing();
        let start = Instant::now();
        controller.on_wheel(120.0, start);
        let locked = controller.state();
        assert!(locked.is_animating);

        for (offset_ms, delta) in [(10, 500.0), (200, -500.0), (900, 120.0), (1100, -30.0)] {
            let outcome = controller.on_wheel(delta, start + Duration::from_millis(offset_ms));
            assert!(outcome.intercepted);
            assert!(outcome.transition.is_none());
            let state = controller.state();
            assert_eq!(state.current_index, locked.current_index);
            assert_eq!(state.image_revealed, locked.image_revealed);
        }
    }

    #[test]
    fn first_down_reveals_image_and_holds_lock() {
        let mut controller = landing();
        let start = Instant::now();
        let outcome = controller.on_wheel(120.0, start);
        let transition = outcome.transition.expect("reveal transition");
        assert_eq!(transition.from, Position::LeadText);
        assert_eq!(transition.to, Position::LeadImage);
        assert_eq!(transition.target_offset, 0.0);
        assert_eq!(transition.duration, Duration::from_millis(1200));

        let state = controller.state();
        assert!(state.image_revealed);
        assert_eq!(state.direction, Direction::Down);

        assert_eq!(controller.tick(start + Duration::from_millis(600)), Some(0.0));
        assert!(controller.is_animating());
        controller.tick(start + Duration::from_millis(1200));
        assert!(!controller.is_animating());
    }

    #[test]
    fn image_down_scrolls_to_second_section() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);

        let outcome = controller.on_wheel(120.0, now);
        let transition = outcome.transition.expect("section transition");
        assert_eq!(transition.to, Position::Section(1));
        assert_eq!(transition.target_offset, VIEWPORT);
        assert_eq!(transition.duration, Duration::from_millis(1000));
        assert!(!controller.state().image_revealed);

        let halfway = controller
            .tick(now + Duration::from_millis(500))
            .expect("running");
        assert!((halfway - VIEWPORT / 2.0).abs() < 1.0);
    }

    #[test]
    fn up_from_second_section_enters_image_from_below() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);
        step(&mut controller, 120.0, &mut now);
        assert_eq!(controller.position(), Position::Section(1));

        let transition = controller
            .on_wheel(-120.0, now)
            .transition
            .expect("back to hero");
        assert_eq!(transition.to, Position::LeadImage);
        assert_eq!(transition.target_offset, 0.0);
        assert_eq!(transition.duration, Duration::from_millis(1000));
        let state = controller.state();
        assert_eq!(state.current_index, 0);
        assert!(state.image_revealed);
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn hiding_image_uses_reveal_duration() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);
        let transition = controller
            .on_wheel(-120.0, now)
            .transition
            .expect("hide image");
        assert_eq!(transition.to, Position::LeadText);
        assert_eq!(transition.duration, Duration::from_millis(1200));
        assert_eq!(controller.state().direction, Direction::Up);
    }

    #[test]
    fn edges_are_intercepted_no_ops() {
        let mut controller = landing();
        let outcome = controller.on_wheel(-120.0, Instant::now());
        assert!(outcome.intercepted);
        assert!(outcome.transition.is_none());
        assert!(!controller.is_animating());
    }

    #[test]
    fn coarse_pointer_leaves_wheel_native() {
        let mut controller = landing();
        controller.set_pointer(PointerCapability::Coarse);
        let outcome = controller.on_wheel(300.0, Instant::now());
        assert_eq!(outcome, WheelOutcome::default());
        assert_eq!(controller.position(), Position::LeadText);
    }

    #[test]
    fn unmeasured_layout_is_a_silent_no_op() {
        let registry = SectionRegistry::new(landing_sections(), 1.0 / 3.0);
        let mut controller = SectionScrollController::new(
            registry,
            NavigationTuning::default(),
            PointerCapability::Precise,
        );
        let outcome = controller.on_wheel(120.0, Instant::now());
        assert!(outcome.intercepted);
        assert!(outcome.transition.is_none());
        assert_eq!(controller.position(), Position::LeadText);
        assert!(!controller.is_animating());
    }

    #[test]
    fn spy_is_skipped_while_animating() {
        let mut controller = landing();
        let now = Instant::now();
        controller.on_wheel(120.0, now);
        assert_eq!(controller.on_native_scroll(2000.0, VIEWPORT), None);
        assert_eq!(controller.state().current_index, 0);
    }

    #[test]
    fn spy_leaving_first_section_resets_reveal() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);
        assert!(controller.state().image_revealed);

        assert_eq!(controller.on_native_scroll(1800.0, VIEWPORT), Some(2));
        let state = controller.state();
        assert_eq!(state.current_index, 2);
        assert!(!state.image_revealed);
        assert_eq!(controller.on_native_scroll(1810.0, VIEWPORT), None);
    }

    #[test]
    fn jump_respects_lock_and_lands_on_text() {
        let mut controller = landing();
        let now = Instant::now();
        let transition = controller.jump_to(3, now).expect("jump");
        assert_eq!(transition.target_offset, 3.0 * VIEWPORT);
        assert!(controller.jump_to(1, now).is_none());

        let later = now + Duration::from_millis(1000);
        controller.tick(later);
        let back = controller.jump_to(0, later).expect("jump home");
        assert_eq!(back.to, Position::LeadText);
        assert_eq!(controller.state().direction, Direction::Up);
        assert!(controller.jump_to(9, later).is_none());
    }

    #[test]
    fn resize_mid_transition_retargets_destination() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);
        controller.on_wheel(120.0, now);

        assert_eq!(
            controller.on_viewport_resized(600.0, now + Duration::from_millis(400)),
            None
        );
        let end = controller
            .tick(now + Duration::from_millis(1000))
            .expect("final sample");
        assert_eq!(end, 600.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn resize_when_idle_realigns_current_section() {
        let mut controller = landing();
        let mut now = Instant::now();
        step(&mut controller, 120.0, &mut now);
        step(&mut controller, 120.0, &mut now);
        step(&mut controller, 120.0, &mut now);
        assert_eq!(controller.scroll_top(), 2.0 * VIEWPORT);

        assert_eq!(controller.on_viewport_resized(700.0, now), Some(1400.0));
        assert_eq!(controller.on_viewport_resized(700.0, now), None);
    }

    #[test]
    fn detach_stops_frames() {
        let mut controller = landing();
        let now = Instant::now();
        controller.on_wheel(120.0, now);
        controller.detach();
        assert!(controller.tick(now + Duration::from_millis(16)).is_none());
    }
}
