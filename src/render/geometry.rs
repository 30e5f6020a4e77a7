// src/render/geometry.rs
//
// Layout of the segment line on the drawing surface.
// Positions are computed in canvas space (origin top-left, y down,
// positive angles turn clockwise on screen) and mapped into Nannou's
// centered, y-up space only when drawn.

use crate::models::NODE_COUNT;
use nannou::prelude::*;

/// The fixed-size drawing surface, sized once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

/// A straight segment in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal distance between neighboring slots, also the segment length.
    pub fn gap(&self) -> f32 {
        (self.width * 0.8) / (NODE_COUNT + 1) as f32
    }

    /// Pivot of the segment at `index`.
    pub fn slot(&self, index: usize) -> Vec2 {
        let gap = self.gap();
        vec2(0.1 * self.width + index as f32 * gap + gap, self.height / 2.0)
    }

    pub fn stroke_weight(&self, divisor: f32) -> f32 {
        self.width.min(self.height) / divisor
    }

    /// Segment from the slot pivot to `(-gap, 0)`, turned by `PI * scale`.
    pub fn segment(&self, index: usize, scale: f64) -> Segment {
        let origin = self.slot(index);
        let angle = PI * scale as f32;
        let tip = vec2(-self.gap() * angle.cos(), -self.gap() * angle.sin());
        Segment {
            start: origin,
            end: origin + tip,
        }
    }

    // canvas space -> Nannou space
    pub fn to_nannou(&self, point: Vec2) -> Vec2 {
        vec2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        let diff = (actual - expected).abs();
        assert!(
            diff.x < 0.001 && diff.y < 0.001,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_slots() {
        let surface = Surface::new(1200.0, 600.0);
        // 0.8 * 1200 / 6
        assert_eq!(surface.gap(), 160.0);
        assert_close(surface.slot(0), vec2(280.0, 300.0));
        assert_close(surface.slot(4), vec2(920.0, 300.0));
        assert_eq!(surface.stroke_weight(60.0), 10.0);
    }

    #[test]
    fn test_segment_rotation() {
        let surface = Surface::new(1200.0, 600.0);

        let flat = surface.segment(1, 0.0);
        assert_close(flat.start, vec2(440.0, 300.0));
        assert_close(flat.end, vec2(280.0, 300.0));

        // half of a half-turn points the segment up the canvas (negative y)
        let upright = surface.segment(1, 0.5);
        assert_close(upright.end, vec2(440.0, 140.0));

        let flipped = surface.segment(1, 1.0);
        assert_close(flipped.end, vec2(600.0, 300.0));
    }

    #[test]
    fn test_to_nannou() {
        let surface = Surface::new(1200.0, 600.0);
        assert_close(surface.to_nannou(vec2(0.0, 0.0)), vec2(-600.0, 300.0));
        assert_close(surface.to_nannou(vec2(600.0, 300.0)), vec2(0.0, 0.0));
        assert_close(surface.to_nannou(vec2(1200.0, 600.0)), vec2(600.0, -300.0));
    }
}
