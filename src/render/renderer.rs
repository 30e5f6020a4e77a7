// src/render/renderer.rs
//
// Draws a Scene with Nannou.

use super::{Scene, Surface};
use nannou::prelude::*;

pub fn draw_scene(draw: &Draw, scene: &Scene, surface: &Surface) {
    draw.background().color(scene.background.to_rgb());

    let stroke = &scene.stroke;
    draw.line()
        .start(surface.to_nannou(stroke.segment.start))
        .end(surface.to_nannou(stroke.segment.end))
        .weight(stroke.style.weight)
        .caps_round()
        .color(stroke.style.color.to_rgb());
}
