// src/config/config_types.rs
//
// Config sections for the app. Every field has a default so a partial
// config.toml, or none at all, still runs the stock animation.

use crate::render::Color;
use log::LevelFilter;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("rotline"),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub stroke: Color,
    pub stroke_divisor: f32, // stroke weight is min(width, height) / stroke_divisor
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Color::new(0x21, 0x21, 0x21),
            stroke: Color::new(0xe7, 0x4c, 0x3c),
            stroke_divisor: 60.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_interval_ms: u64,
}

impl AnimationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}
