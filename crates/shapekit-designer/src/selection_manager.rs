use serde::{Deserialize, Serialize};
use shapekit_core::{ControlsSnapshot, GroupButton, HandleMode};
use shapekit_settings::HandleSettings;

use crate::entity_store::{EntityRef, EntityStore};

/// Resize anchors around a transformer, clockwise from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleRight,
    BottomRight,
    BottomCenter,
    BottomLeft,
    MiddleLeft,
}

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::MiddleRight,
        Anchor::BottomRight,
        Anchor::BottomCenter,
        Anchor::BottomLeft,
        Anchor::MiddleLeft,
    ];
}

/// Presentation of a set of transform handles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerConfig {
    pub mode: HandleMode,
    /// Ids the handles are attached to.
    pub nodes: Vec<u64>,
    pub rotate_enabled: bool,
    pub resize_enabled: bool,
    pub anchor_size: f64,
    pub border_width: f64,
    /// `None` draws a solid border.
    pub border_dash: Option<[f64; 2]>,
    pub enabled_anchors: Vec<Anchor>,
}

impl TransformerConfig {
    pub fn hidden() -> Self {
        Self {
            mode: HandleMode::Hidden,
            nodes: Vec::new(),
            rotate_enabled: false,
            resize_enabled: false,
            anchor_size: 0.0,
            border_width: 0.0,
            border_dash: None,
            enabled_anchors: Vec::new(),
        }
    }

    pub fn locked(nodes: Vec<u64>, handles: &HandleSettings) -> Self {
        Self {
            mode: HandleMode::Locked,
            nodes,
            rotate_enabled: false,
            resize_enabled: false,
            anchor_size: 0.0,
            border_width: handles.locked_border_width,
            border_dash: Some(handles.locked_dash),
            enabled_anchors: Vec::new(),
        }
    }

    pub fn full(nodes: Vec<u64>, handles: &HandleSettings) -> Self {
        Self {
            mode: HandleMode::Full,
            nodes,
            rotate_enabled: true,
            resize_enabled: true,
            anchor_size: handles.anchor_size,
            border_width: handles.border_width,
            border_dash: None,
            enabled_anchors: Anchor::ALL.to_vec(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.mode != HandleMode::Hidden
    }
}

/// Everything the shell needs to redraw its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlsState {
    pub group_button: GroupButton,
    pub transformer: TransformerConfig,
    /// Dashed outline around the hovered node.
    pub hover: Option<TransformerConfig>,
}

impl ControlsState {
    /// Compact form published on the event bus.
    pub fn snapshot(&self) -> ControlsSnapshot {
        ControlsSnapshot {
            group_button: self.group_button,
            handles: self.transformer.mode,
            hover_outline: self
                .hover
                .as_ref()
                .and_then(|cfg| cfg.nodes.first().copied()),
        }
    }
}

/// Click and hover handling plus derived handle state.
///
/// # Selection Model
///
/// - **Group redirect**: a click on a grouped shape targets its group
/// - **Plain click**: replaces the selection with the target
/// - **Modified click**: toggles the target in or out of the selection
/// - **Empty click**: clears the selection
///
/// Handle presentation is recomputed from the store on demand and never
/// cached here.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    handles: HandleSettings,
}

impl SelectionManager {
    /// Creates a manager with default handle styling.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.handles().anchor_size, 6.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handles(handles: HandleSettings) -> Self {
        Self { handles }
    }

    pub fn handles(&self) -> &HandleSettings {
        &self.handles
    }

    /// Maps a raw hit to the id that should be selected.
    ///
    /// Returns `None` for ids that no longer exist.
    pub fn effective_target(&self, store: &EntityStore, id: u64) -> Option<u64> {
        match store.resolve(id)? {
            EntityRef::Shape(obj) => Some(obj.group_id.unwrap_or(obj.id)),
            EntityRef::Group(group) => Some(group.id),
        }
    }

    /// Applies a click. Returns `true` when the selection changed.
    pub fn click(&self, store: &mut EntityStore, target: Option<u64>, modifier: bool) -> bool {
        let before = store.selection.clone();

        match target {
            None => store.selection.clear(),
            Some(id) => {
                let Some(effective) = self.effective_target(store, id) else {
                    tracing::debug!("Ignoring click on stale id {}", id);
                    return false;
                };
                if modifier {
                    store.selection.toggle(effective);
                } else {
                    store.selection.replace([effective]);
                }
            }
        }

        store.selection != before
    }

    /// Returns `true` when the hovered id changed.
    pub fn hover_enter(&self, store: &mut EntityStore, id: u64) -> bool {
        if store.resolve(id).is_none() {
            tracing::debug!("Ignoring hover on stale id {}", id);
            return false;
        }
        if store.hover == Some(id) {
            return false;
        }
        store.hover = Some(id);
        true
    }

    /// Clears the hover if `id` is the hovered node.
    pub fn hover_leave(&self, store: &mut EntityStore, id: u64) -> bool {
        if store.hover == Some(id) {
            store.hover = None;
            true
        } else {
            false
        }
    }

    /// Handles around the current selection.
    pub fn transformer_config(&self, store: &EntityStore) -> TransformerConfig {
        let nodes: Vec<u64> = store.selection.iter().collect();
        if nodes.is_empty() {
            return TransformerConfig::hidden();
        }

        let has_grouped_shape = nodes.iter().any(|&id| {
            matches!(store.resolve(id), Some(EntityRef::Shape(obj)) if obj.group_id.is_some())
        });

        if has_grouped_shape {
            TransformerConfig::locked(nodes, &self.handles)
        } else {
            TransformerConfig::full(nodes, &self.handles)
        }
    }

    /// Hover outline, hidden while the hovered id is itself selected.
    pub fn hover_outline(&self, store: &EntityStore) -> Option<TransformerConfig> {
        let id = store.hover?;
        if store.selection.contains(id) || store.resolve(id).is_none() {
            return None;
        }
        Some(TransformerConfig::locked(vec![id], &self.handles))
    }

    pub fn group_button(&self, store: &EntityStore) -> GroupButton {
        match store.selection.ids() {
            [id] if store.group(*id).is_some() => GroupButton::Ungroup,
            _ => GroupButton::CreateGroup,
        }
    }

    pub fn controls(&self, store: &EntityStore) -> ControlsState {
        ControlsState {
            group_button: self.group_button(store),
            transformer: self.transformer_config(store),
            hover: self.hover_outline(store),
        }
    }
}
