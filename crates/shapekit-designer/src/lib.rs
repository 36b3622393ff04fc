//! # ShapeKit Designer
//!
//! Scene model and interaction logic for a small 2D shape editor: rectangles
//! and circles that can be grouped, ungrouped, selected and hovered.
//!
//! ## Core Components
//!
//! - **Model**: Rectangles, circles, groups and their transforms
//! - **Geometry**: Padded outlines, bounding boxes and parent/local conversions
//! - **Entity Store**: Arena of shapes and groups with derived membership
//! - **Group Manager**: Create group, add to group, ungroup, clear all
//! - **Selection Manager**: Click and hover semantics plus handle configuration
//! - **Viewport**: Canvas size used for random placement
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (UI facade, event publishing)
//!   ├── GroupManager ──┐
//!   ├── SelectionManager ─┤
//!   │                  └── EntityStore (shapes, groups, selection, hover)
//!   │                        └── geometry (outlines, coordinate spaces)
//!   ├── Viewport
//!   └── EventBus (shapekit-core)
//! ```
//!
//! ## Usage
//!
//! ```
//! use shapekit_designer::DesignerState;
//!
//! let mut state = DesignerState::with_seed(42);
//! let rect = state.add_rectangle();
//! let circle = state.add_circle();
//!
//! state.click(Some(rect), false);
//! state.click(Some(circle), true);
//! state.create_group().expect("two ungrouped shapes");
//!
//! assert_eq!(state.groups().len(), 1);
//! assert_eq!(state.controls().group_button.label(), "Ungroup");
//! ```

pub mod designer_state;
pub mod entity_store;
pub mod geometry;
pub mod group_manager;
pub mod model;
pub mod selection_manager;
pub mod viewport;

pub use designer_state::{DesignerState, TransformEnd};
pub use entity_store::{EntityRef, EntityStore, InvariantViolation, Parent, Selection};
pub use geometry::{BoundingBox, OUTLINE_PADDING};
pub use group_manager::{GroupManager, GroupOutcome};
pub use model::{
    Color, DesignCircle, DesignRectangle, DesignerShape, DrawingObject, Group, GroupBackground,
    Point, Shape, ShapeType, Transform,
};
pub use selection_manager::{Anchor, ControlsState, SelectionManager, TransformerConfig};
pub use viewport::Viewport;
