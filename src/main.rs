// src/main.rs
use log::{error, info, warn};
use nannou::event::TouchPhase;
use nannou::prelude::*;
use simple_logger::SimpleLogger;

use rotline::{
    config::Config,
    render::{draw_scene, Surface},
    views::Stage,
};

struct Model {
    stage: Stage,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config before the logger so its level applies
    let (config, load_result) = match Config::load() {
        Ok((config, path)) => (config, Ok(path)),
        Err(err) => (Config::default(), Err(err)),
    };

    if let Err(err) = SimpleLogger::new()
        .with_level(config.logging.level)
        .init()
    {
        eprintln!("Failed to initialize logger: {}", err);
    }

    match load_result {
        Ok(path) => info!("Loaded config from {}", path.display()),
        Err(err) => warn!("{}; using built-in defaults", err),
    }

    // The window keeps the size it starts with
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .resizable(false)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .expect("Failed to create window");
    let rect = app
        .window(window_id)
        .expect("Window closed during startup")
        .rect();

    let stage = Stage::new(
        Surface::new(rect.w(), rect.h()),
        config.style.clone(),
        config.animation.tick_interval(),
    );

    Model { stage }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.stage.press();
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if is_tap(touch.phase) {
        model.stage.press();
    }
}

// only the first contact of a touch counts as a press
fn is_tap(phase: TouchPhase) -> bool {
    phase == TouchPhase::Started
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.stage.update(update.since_last);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw_scene(&draw, model.stage.scene(), model.stage.surface());
    if let Err(err) = draw.to_frame(app, &frame) {
        error!("Failed to draw frame: {:?}", err);
    }
}
