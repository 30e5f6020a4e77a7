// src/config/config_load.rs
//
// Loading config.toml

use super::{AnimationConfig, LoggingConfig, StyleConfig, WindowConfig};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("tick_interval_ms must be greater than zero")]
    ZeroTickInterval,
    #[error("stroke_divisor must be a positive number, got {0}")]
    InvalidStrokeDivisor(f32),
    #[error("window size must be non-zero, got {0}x{1}")]
    EmptyWindow(u32, u32),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads config.toml from the executable's directory, falling back to
    /// the current working directory.
    pub fn load() -> Result<(Self, PathBuf), ConfigError> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let candidates = candidate_paths(exe_dir.as_deref());

        // the working directory entry is last and is tried even if missing,
        // so its read error is the one reported
        let path = candidates
            .iter()
            .find(|p| p.exists())
            .or_else(|| candidates.last())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Ok((Self::load_from(&path)?, path))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new(CONFIG_FILE))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let divisor = self.style.stroke_divisor;
        if !(divisor.is_finite() && divisor > 0.0) {
            return Err(ConfigError::InvalidStrokeDivisor(divisor));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::EmptyWindow(
                self.window.width,
                self.window.height,
            ));
        }
        Ok(())
    }

}

/// Places config.toml is looked for, in order: next to the executable,
/// then the working directory.
fn candidate_paths(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    exe_dir
        .map(|dir| dir.join(CONFIG_FILE))
        .into_iter()
        .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;
    use log::LevelFilter;
    use std::time::Duration;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.style.background, Color::new(0x21, 0x21, 0x21));
        assert_eq!(config.style.stroke, Color::new(0xe7, 0x4c, 0x3c));
        assert_eq!(config.style.stroke_divisor, 60.0);
        assert_eq!(config.animation.tick_interval(), Duration::from_millis(60));
        assert_eq!(config.logging.level, LevelFilter::Info);
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::from_toml_str(
            r##"
            [window]
            width = 800

            [style]
            stroke = "#00ff00"

            [logging]
            level = "debug"
            "##,
        )
        .unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.style.stroke, Color::new(0, 255, 0));
        assert_eq!(config.style.background, Color::new(0x21, 0x21, 0x21));
        assert_eq!(config.logging.level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = Config::from_toml_str("[style]\nbackground = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = Config::from_toml_str("[style]\nstroke = \"#+1+1+1\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_validation() {
        let err = Config::from_toml_str("[animation]\ntick_interval_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTickInterval));

        let err = Config::from_toml_str("[style]\nstroke_divisor = -2.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStrokeDivisor(_)));

        let err = Config::from_toml_str("[window]\nheight = 0").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyWindow(1280, 0)));
    }

    #[test]
    fn test_exe_dir_is_searched_before_working_dir() {
        let exe_dir = Path::new("/opt/rotline/bin");
        assert_eq!(
            candidate_paths(Some(exe_dir)),
            vec![
                PathBuf::from("/opt/rotline/bin/config.toml"),
                PathBuf::from("config.toml"),
            ]
        );
        assert_eq!(candidate_paths(None), vec![PathBuf::from("config.toml")]);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from(Path::new("does/not/exist/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_repository_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
        let config = Config::load_from(&path).unwrap();
        let defaults = Config::default();
        assert_eq!(config.style.background, defaults.style.background);
        assert_eq!(config.style.stroke, defaults.style.stroke);
        assert_eq!(
            config.animation.tick_interval_ms,
            defaults.animation.tick_interval_ms
        );
    }
}
