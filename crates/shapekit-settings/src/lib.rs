//! ShapeKit Settings Crate
//!
//! Handles editor configuration: canvas defaults, shape defaults, outline
//! padding, transform handle styling and event history.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, EditorSettings, EventSettings, HandleSettings, OutlineSettings,
    ShapeSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
