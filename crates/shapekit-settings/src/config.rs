//! Editor configuration
//!
//! Configuration is organized into logical sections:
//! - Canvas defaults (initial viewport size)
//! - Shape defaults (size of newly added rectangles and circles)
//! - Outline padding used for group bounding boxes
//! - Transform handle styling for full, locked and hover outlines
//! - Event history kept by the editor's event bus
//!
//! Files may be JSON or TOML; the format is chosen by extension. Missing
//! sections and keys fall back to their defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsResult};

/// Canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Initial viewport width
    pub width: f64,
    /// Initial viewport height
    pub height: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Defaults for newly created shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeSettings {
    /// Width of a new rectangle
    pub rectangle_width: f64,
    /// Height of a new rectangle
    pub rectangle_height: f64,
    /// Radius of a new circle
    pub circle_radius: f64,
}

impl Default for ShapeSettings {
    fn default() -> Self {
        Self {
            rectangle_width: 100.0,
            rectangle_height: 100.0,
            circle_radius: 50.0,
        }
    }
}

/// Group outline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Margin added around every member when computing a group background
    pub padding: f64,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self { padding: 10.0 }
    }
}

/// Transform handle styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    /// Anchor size when rotate/resize is enabled
    pub anchor_size: f64,
    /// Border width of the full transformer
    pub border_width: f64,
    /// Border width of locked and hover outlines
    pub locked_border_width: f64,
    /// Dash pattern of locked and hover outlines
    pub locked_dash: [f64; 2],
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            anchor_size: 6.0,
            border_width: 2.0,
            locked_border_width: 1.0,
            locked_dash: [4.0, 4.0],
        }
    }
}

/// Event bus settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Keep a log of published editor events
    pub history: bool,
    /// Oldest events are dropped past this many
    pub max_history: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        Self {
            history: false,
            max_history: 500,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    /// Canvas defaults
    pub canvas: CanvasSettings,
    /// Shape defaults
    pub shapes: ShapeSettings,
    /// Group outline
    pub outline: OutlineSettings,
    /// Transform handles
    pub handles: HandleSettings,
    /// Event history
    pub events: EventSettings,
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/shapekit/settings.toml`)
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join("shapekit").join("settings.toml"))
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        settings.validate()?;
        tracing::debug!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                )
                .into())
            }
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas.width", self.canvas.width)?;
        positive("canvas.height", self.canvas.height)?;
        positive("shapes.rectangle_width", self.shapes.rectangle_width)?;
        positive("shapes.rectangle_height", self.shapes.rectangle_height)?;
        positive("shapes.circle_radius", self.shapes.circle_radius)?;

        if !self.outline.padding.is_finite() || self.outline.padding < 0.0 {
            return Err(out_of_range("outline.padding", self.outline.padding));
        }

        positive("handles.anchor_size", self.handles.anchor_size)?;
        positive("handles.border_width", self.handles.border_width)?;
        positive("handles.locked_border_width", self.handles.locked_border_width)?;
        if self.handles.locked_dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "handles.locked_dash".to_string(),
                value: format!("{:?}", self.handles.locked_dash),
            });
        }

        if self.events.history && self.events.max_history == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "events.max_history".to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn positive(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(key, value))
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
