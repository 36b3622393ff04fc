//! # ShapeKit
//!
//! Headless core of a small 2D shape editor:
//! - Rectangles and circles placed at random on a canvas
//! - Grouping, merging into existing groups and ungrouping
//! - Click and hover semantics where a grouped shape selects its group
//! - Derived transform-handle and group-button state for a UI shell
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Error types and the event bus
//! 2. **shapekit-settings** - Editor configuration (TOML / JSON)
//! 3. **shapekit-designer** - Scene model, grouping engine, selection controller
//! 4. **shapekit** - Binary that wires settings, logging and a demo session

pub use shapekit_designer as designer;
pub use shapekit_settings as settings;

pub use shapekit_core::{
    ControlsSnapshot, EditorEvent, Error, EventBus, EventCategory, EventFilter, GroupButton,
    GroupingError, HandleMode, Result, SubscriptionId,
};

pub use shapekit_designer::{
    ControlsState, DesignerState, Group, GroupOutcome, Point, Shape, ShapeType, Transform,
    TransformEnd, TransformerConfig,
};

pub use shapekit_settings::{EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Loads settings from `path`, or from the default location when `None`.
///
/// A missing file yields the defaults.
pub fn load_settings(path: Option<&std::path::Path>) -> anyhow::Result<EditorSettings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => EditorSettings::default_path()?,
    };
    Ok(EditorSettings::load_or_default(&path)?)
}
