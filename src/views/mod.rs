// src/views/mod.rs

pub mod stage;

pub use stage::Stage;
