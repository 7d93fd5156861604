pub const MAX_PROGRESS: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrubState {
    pub progress: f32,
}

/// Editor preview scrubber: wheel delta maps straight onto a progress value in
/// `[0, 100]`. There is no animation and therefore no lock.
#[derive(Debug, Clone)]
pub struct PreviewScrubController {
    state: ScrubState,
    sensitivity: f32,
}

impl PreviewScrubController {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            state: ScrubState::default(),
            sensitivity: if sensitivity.is_finite() {
                sensitivity
            } else {
                0.2
            },
        }
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.state.progress
    }

    /// Apply one wheel event and return the new progress.
    pub fn on_wheel(&mut self, delta_y: f32) -> f32 {
        if delta_y.is_finite() {
            let next = self.state.progress + delta_y * self.sensitivity;
            self.state.progress = next.clamp(0.0, MAX_PROGRESS);
        }
        self.state.progress
    }

    pub fn reset(&mut self) {
        self.state = ScrubState::default();
    }
}
