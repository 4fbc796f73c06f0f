// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[generator]` - Defaults seeding the requirements form
//! - `[render]` - Simulated render timing and output options
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `MANIM_STUDIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use manim_studio::app::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::render::{FrameRate, RenderQuality, RenderSettings, Resolution, VideoFormat};
use crate::domain::requirements::{AnimationStyle, EducationLevel, LessonMinutes};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Values pre-filled in a fresh requirements form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_level: Option<EducationLevel>,

    /// Lesson length in minutes; clamped to 1–10 when read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_duration: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<AnimationStyle>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn level(&self) -> EducationLevel {
        self.default_level.unwrap_or_default()
    }

    #[must_use]
    pub fn duration(&self) -> LessonMinutes {
        self.default_duration
            .map(LessonMinutes::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn style(&self) -> AnimationStyle {
        self.default_style.unwrap_or_default()
    }
}

/// Simulated render settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Delay between two render steps in milliseconds.
    #[serde(
        default = "default_step_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_interval_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<RenderQuality>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<VideoFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<FrameRate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval_ms(),
            quality: None,
            format: None,
            fps: None,
            resolution: None,
        }
    }
}

impl RenderConfig {
    /// Step interval clamped to the supported range.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        let ms = self
            .step_interval_ms
            .unwrap_or(DEFAULT_STEP_INTERVAL_MS)
            .clamp(MIN_STEP_INTERVAL_MS, MAX_STEP_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Initial render settings of a new session.
    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        RenderSettings {
            quality: self.quality.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            fps: self.fps.unwrap_or_default(),
            resolution: self.resolution.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_step_interval_ms() -> Option<u64> {
    Some(DEFAULT_STEP_INTERVAL_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// The second element is an i18n warning key when an existing file could
/// not be read or parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "Invalid configuration, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "Configuration saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            generator: GeneratorConfig {
                default_level: Some(EducationLevel::College),
                default_duration: Some(7),
                default_style: Some(AnimationStyle::Minimalist),
            },
            render: RenderConfig {
                step_interval_ms: Some(750),
                quality: Some(RenderQuality::Ultra),
                format: Some(VideoFormat::Mov),
                fps: Some(FrameRate::Fps30),
                resolution: Some(Resolution::Uhd4k),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_fields_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert_eq!(
            loaded.render.step_interval(),
            Duration::from_millis(DEFAULT_STEP_INTERVAL_MS)
        );
        assert_eq!(loaded.generator.level(), EducationLevel::HighSchool);
        assert_eq!(loaded.generator.duration().value(), 3);
    }

    #[test]
    fn kebab_case_values_are_parsed() {
        let toml = r#"
[general]
theme_mode = "DARK"

[generator]
default_level = "middle-school"
default_style = "3d-visualization"
default_duration = 42

[render]
quality = "medium"
fps = "30"
resolution = "720p"
"#;
        let config: Config = toml::from_str(toml).expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.generator.level(), EducationLevel::MiddleSchool);
        assert_eq!(config.generator.style(), AnimationStyle::Visualization3d);
        assert_eq!(config.generator.duration().value(), 10);
        let settings = config.render.settings();
        assert_eq!(settings.quality, RenderQuality::Medium);
        assert_eq!(settings.fps, FrameRate::Fps30);
        assert_eq!(settings.resolution, Resolution::Hd720);
        assert_eq!(settings.format, VideoFormat::Mp4);
    }

    #[test]
    fn step_interval_is_clamped() {
        let fast = RenderConfig {
            step_interval_ms: Some(10),
            ..RenderConfig::default()
        };
        assert_eq!(fast.step_interval(), Duration::from_millis(MIN_STEP_INTERVAL_MS));

        let slow = RenderConfig {
            step_interval_ms: Some(60_000),
            ..RenderConfig::default()
        };
        assert_eq!(slow.step_interval(), Duration::from_millis(MAX_STEP_INTERVAL_MS));
    }

    #[test]
    fn load_with_override_reports_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[render\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
