// src/render/scene.rs
//
// Snapshot of what the stage last rendered. The window redraws the
// snapshot every frame; it only changes when the stage renders.

use super::{Color, Segment};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub weight: f32,
}

/// A round-capped line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub style: StrokeStyle,
    pub segment: Segment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub background: Color,
    pub stroke: Stroke,
}
