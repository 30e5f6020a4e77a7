// src/animation/rotation.rs
//
// Rotation state of a single segment.
// Scale is measured in half-turns: 0.0 lies flat, 1.0 is flipped by PI.

/// Scale added per tick while a segment is turning.
pub const ROTATION_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadyRunning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    StillRunning,
    Settled,
}

#[derive(Debug, Clone, Default)]
pub struct RotationState {
    scale: f64,
    prev_scale: f64,
    direction: i8, // -1, 0 or 1; 0 means idle
}

impl RotationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a half-turn towards whichever side the segment is not resting on.
    /// Has no effect while a turn is already in progress.
    pub fn start_updating(&mut self) -> StartOutcome {
        if self.direction != 0 {
            return StartOutcome::AlreadyRunning;
        }
        self.direction = (1.0 - 2.0 * self.prev_scale) as i8;
        StartOutcome::Started
    }

    /// Advances the turn by one step.
    ///
    /// The turn settles once the distance from the last resting value is
    /// strictly greater than one half-turn. With a 0.1 step the tenth update
    /// leaves the scale a hair short of the target in f64, so a turn settles
    /// on the eleventh update, clamped back onto the target.
    pub fn update(&mut self) -> StepOutcome {
        if self.direction == 0 {
            return StepOutcome::Idle;
        }

        let direction = f64::from(self.direction);
        self.scale += direction * ROTATION_STEP;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + direction;
            self.direction = 0;
            self.prev_scale = self.scale;
            return StepOutcome::Settled;
        }
        StepOutcome::StillRunning
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn prev_scale(&self) -> f64 {
        self.prev_scale
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0
    }
}
