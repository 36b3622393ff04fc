//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so shells can log or forward them.

use serde::{Deserialize, Serialize};

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// A shape was created on the canvas root
    ShapeAdded {
        /// Id of the new shape.
        shape_id: u64,
    },
    /// A shape's size or transform was committed at the end of a gesture
    ShapeTransformed {
        /// Id of the shape.
        shape_id: u64,
    },
    /// A new group was created
    GroupCreated {
        /// Id of the new group.
        group_id: u64,
        /// Member shape ids at creation time.
        members: Vec<u64>,
    },
    /// Membership, transform or background of an existing group changed
    GroupChanged {
        /// Id of the group.
        group_id: u64,
    },
    /// A group was destroyed and its members released to the root
    GroupDissolved {
        /// Id of the destroyed group.
        group_id: u64,
        /// Shapes that were moved back to the root.
        released: Vec<u64>,
    },
    /// Every shape and group was removed
    SceneCleared,
    /// The selection set changed
    SelectionChanged {
        /// Selected ids after the change.
        selected: Vec<u64>,
    },
    /// The hovered id changed
    HoverChanged {
        /// Hovered id after the change, if any.
        hovered: Option<u64>,
    },
    /// The canvas viewport was resized
    ViewportResized {
        /// New width.
        width: f64,
        /// New height.
        height: f64,
    },
    /// A user-visible notice, typically a rejected operation
    Notice {
        /// Message to show in a blocking dialog.
        message: String,
    },
    /// Derived UI controls were recomputed
    ControlsChanged(ControlsSnapshot),
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::ShapeAdded { .. }
            | EditorEvent::ShapeTransformed { .. }
            | EditorEvent::GroupCreated { .. }
            | EditorEvent::GroupChanged { .. }
            | EditorEvent::GroupDissolved { .. }
            | EditorEvent::SceneCleared => EventCategory::Scene,
            EditorEvent::SelectionChanged { .. } => EventCategory::Selection,
            EditorEvent::HoverChanged { .. } => EventCategory::Hover,
            EditorEvent::ViewportResized { .. } => EventCategory::Viewport,
            EditorEvent::Notice { .. } => EventCategory::Notice,
            EditorEvent::ControlsChanged(_) => EventCategory::Controls,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::ShapeAdded { shape_id } => format!("Shape {} added", shape_id),
            EditorEvent::ShapeTransformed { shape_id } => {
                format!("Shape {} transformed", shape_id)
            }
            EditorEvent::GroupCreated { group_id, members } => {
                format!("Group {} created with {} members", group_id, members.len())
            }
            EditorEvent::GroupChanged { group_id } => format!("Group {} changed", group_id),
            EditorEvent::GroupDissolved { group_id, released } => {
                format!("Group {} dissolved, {} released", group_id, released.len())
            }
            EditorEvent::SceneCleared => "Scene cleared".to_string(),
            EditorEvent::SelectionChanged { selected } => {
                format!("Selection: {:?}", selected)
            }
            EditorEvent::HoverChanged { hovered } => format!("Hover: {:?}", hovered),
            EditorEvent::ViewportResized { width, height } => {
                format!("Viewport resized to {}x{}", width, height)
            }
            EditorEvent::Notice { message } => format!("Notice: {}", message),
            EditorEvent::ControlsChanged(controls) => format!(
                "Controls: button={}, handles={:?}",
                controls.group_button, controls.handles
            ),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Shape and group topology or geometry.
    Scene,
    /// Selection set changes.
    Selection,
    /// Hover changes.
    Hover,
    /// Viewport size changes.
    Viewport,
    /// User-facing notices.
    Notice,
    /// Recomputed group button and transform handles.
    Controls,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Scene => write!(f, "Scene"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Hover => write!(f, "Hover"),
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::Notice => write!(f, "Notice"),
            EventCategory::Controls => write!(f, "Controls"),
        }
    }
}

/// Semantics of the combined group/ungroup button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupButton {
    /// The selection is exactly one live group.
    Ungroup,
    /// Any other selection.
    CreateGroup,
}

impl GroupButton {
    /// Label shown on the button
    pub fn label(&self) -> &'static str {
        match self {
            GroupButton::Ungroup => "Ungroup",
            GroupButton::CreateGroup => "Create Group",
        }
    }
}

impl std::fmt::Display for GroupButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the transform handles around the selection are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleMode {
    /// Nothing is selected.
    Hidden,
    /// Move-only outline: a grouped shape is indirectly selected.
    Locked,
    /// Rotate and resize enabled.
    Full,
}

/// Derived control state delivered after every selection, hover or topology change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsSnapshot {
    /// Current group/ungroup button semantics.
    pub group_button: GroupButton,
    /// Current transform handle mode.
    pub handles: HandleMode,
    /// Id shown with the hover outline, if any.
    pub hover_outline: Option<u64>,
}
