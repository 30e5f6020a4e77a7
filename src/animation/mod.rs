// src/animation/mod.rs

pub mod clock;
pub mod rotation;

pub use clock::{Clock, DEFAULT_TICK_INTERVAL};
pub use rotation::{RotationState, StartOutcome, StepOutcome, ROTATION_STEP};
