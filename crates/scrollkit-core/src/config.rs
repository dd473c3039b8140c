use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::driver::{ScrollOptions, DEFAULT_DURATION_MS};
use crate::easing::{Easing, EasingCurve};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            scroll: ScrollConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Total animation time in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    /// Adjustment subtracted from the target's top edge (e.g. a sticky
    /// header height)
    #[serde(default)]
    pub offset: f64,
    /// Easing curve name; unrecognized names fall back to linear
    #[serde(default)]
    pub easing: EasingCurve,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            offset: 0.0,
            easing: EasingCurve::default(),
        }
    }
}

impl ScrollConfig {
    /// Per-call options for the animation driver.
    pub fn options(&self) -> ScrollOptions {
        ScrollOptions {
            duration_ms: self.duration_ms,
            offset: self.offset,
            easing: Easing::Curve(self.easing),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a scroll animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl UiConfig {
    /// Tick duration for the animation frame rate
    pub fn animation_tick(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration_ms() -> f64 {
    DEFAULT_DURATION_MS
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u16 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollkit/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollkit")
            .join("config.toml")
    }
}
