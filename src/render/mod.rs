// src/render/mod.rs

pub mod color;
pub mod geometry;
pub mod renderer;
pub mod scene;

pub use color::{Color, InvalidColor};
pub use geometry::{Segment, Surface};
pub use renderer::draw_scene;
pub use scene::{Scene, Stroke, StrokeStyle};
