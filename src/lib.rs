// src/lib.rs
//
// A line of five segments that flip over one after another, like
// dominoes, each time the window is clicked.

pub mod animation;
pub mod config;
pub mod models;
pub mod render;
pub mod views;
