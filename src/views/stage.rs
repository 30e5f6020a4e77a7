// src/views/stage.rs
//
// The Stage ties the line, the clock and the drawing surface together.
// A press starts the active node turning and starts the clock; every tick
// renders and then advances the line; once the node settles the clock
// stops and the stage renders one last time.

use crate::animation::{Clock, StartOutcome, StepOutcome};
use crate::config::StyleConfig;
use crate::models::RotateLine;
use crate::render::{Scene, StrokeStyle, Surface};
use log::{debug, info};
use std::time::Duration;

pub struct Stage {
    surface: Surface,
    style: StyleConfig,
    line: RotateLine,
    clock: Clock,
    scene: Scene,
}

impl Stage {
    pub fn new(surface: Surface, style: StyleConfig, tick_interval: Duration) -> Self {
        info!(
            "Stage {}x{}, ticking every {:?}",
            surface.width, surface.height, tick_interval
        );
        let line = RotateLine::new();
        Self {
            scene: compose(&line, &surface, &style),
            surface,
            style,
            line,
            clock: Clock::new(tick_interval),
        }
    }

    pub fn render(&mut self) {
        self.scene = compose(&self.line, &self.surface, &self.style);
    }

    /// Pointer press. Ignored while the active node is still turning.
    pub fn press(&mut self) -> StartOutcome {
        let outcome = self.line.start_updating();
        match outcome {
            StartOutcome::Started => {
                debug!("Node {} starts turning", self.line.active());
                self.clock.start();
            }
            StartOutcome::AlreadyRunning => debug!("Press ignored, node still turning"),
        }
        outcome
    }

    /// Feeds frame time to the clock and runs every tick that fell due.
    pub fn update(&mut self, elapsed: Duration) {
        for _ in 0..self.clock.advance(elapsed) {
            // ticks left over after a stop are dropped
            if !self.clock.is_running() {
                break;
            }
            self.tick();
        }
    }

    fn tick(&mut self) {
        self.render();
        if self.line.update() == StepOutcome::Settled && self.clock.stop() {
            self.render();
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn line(&self) -> &RotateLine {
        &self.line
    }

    pub fn is_animating(&self) -> bool {
        self.clock.is_running()
    }
}

fn compose(line: &RotateLine, surface: &Surface, style: &StyleConfig) -> Scene {
    let stroke_style = StrokeStyle {
        color: style.stroke,
        weight: surface.stroke_weight(style.stroke_divisor),
    };
    Scene {
        background: style.background,
        stroke: line.draw(surface, stroke_style),
    }
}
