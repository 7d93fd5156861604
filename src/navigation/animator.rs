use std::time::{Duration, Instant};

/// Ease-in-out quadratic curve over `t` in `[0, 1]`.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

impl Run {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value_at(&self, now: Instant) -> f32 {
        let eased = ease_in_out_quad(self.progress(now));
        self.start + (self.target - self.start) * eased
    }

    fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }
}

/// One frame produced by [`TransitionAnimator::sample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f32,
    pub finished: bool,
}

/// Time-based interpolation of a single scalar (the viewport scroll offset).
///
/// Single-flight: callers must check [`is_running`](Self::is_running) before
/// starting a new run. A run always lasts its full duration; once the final
/// sample has been handed out the animator goes idle and produces nothing
/// further.
#[derive(Debug, Default)]
pub struct TransitionAnimator {
    run: Option<Run>,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.run.map(|run| run.target)
    }

    pub fn animate(&mut self, start: f32, target: f32, duration: Duration, now: Instant) {
        debug_assert!(self.run.is_none(), "animator is single-flight");
        self.run = Some(Run {
            start,
            target,
            started_at: now,
            duration,
        });
    }

    /// Interpolated value for `now`. Returns `None` when idle.
    pub fn sample(&mut self, now: Instant) -> Option<Sample> {
        let run = self.run?;
        let finished = run.progress(now) >= 1.0;
        let value = if finished { run.target } else { run.value_at(now) };
        if finished {
            self.run = None;
        }
        Some(Sample { value, finished })
    }

    /// Point the in-flight run at a new target without moving its end time.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        let Some(run) = self.run else {
            return;
        };
        let current = run.value_at(now);
        let remaining = run.ends_at().saturating_duration_since(now);
        self.run = Some(Run {
            start: current,
            target,
            started_at: now,
            duration: remaining,
        });
    }

    pub fn stop(&mut self) {
        self.run = None;
    }
}
