//! Designer state manager for UI integration.
//! Owns the scene and turns UI callbacks into scene operations.
//!
//! This module is split into submodules:
//! - `shapes`: Shape creation and clear-all
//! - `grouping`: Create group, add to group and ungroup
//! - `selection`: Click and hover handling
//! - `transforms`: Drag and transform gesture commits, viewport resize
//!
//! Every operation runs to completion on the caller's thread. Afterwards the
//! matching [`EditorEvent`]s are published followed by a fresh
//! [`EditorEvent::ControlsChanged`].

mod grouping;
mod selection;
mod shapes;
mod transforms;

pub use transforms::TransformEnd;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shapekit_core::{
    ControlsSnapshot, EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    SubscriptionId,
};
use shapekit_settings::EditorSettings;

use crate::entity_store::EntityStore;
use crate::group_manager::GroupManager;
use crate::model::{DrawingObject, Group, Transform};
use crate::selection_manager::{ControlsState, SelectionManager};
use crate::viewport::Viewport;

/// Designer state for UI integration
pub struct DesignerState {
    pub(crate) store: EntityStore,
    pub(crate) group_manager: GroupManager,
    pub(crate) selection_manager: SelectionManager,
    pub(crate) viewport: Viewport,
    pub(crate) settings: EditorSettings,
    pub(crate) rng: StdRng,
    events: Arc<EventBus>,
    controls: ControlsState,
}

impl DesignerState {
    /// Creates a designer with default settings and an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self::build(settings, StdRng::from_entropy())
    }

    /// Deterministic placement and colors, for tests and demos.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_settings_and_seed(EditorSettings::default(), seed)
    }

    pub fn with_settings_and_seed(settings: EditorSettings, seed: u64) -> Self {
        Self::build(settings, StdRng::seed_from_u64(seed))
    }

    fn build(settings: EditorSettings, rng: StdRng) -> Self {
        let store = EntityStore::new();
        let selection_manager = SelectionManager::with_handles(settings.handles.clone());
        let controls = selection_manager.controls(&store);
        let events = EventBus::with_config(EventBusConfig {
            enable_history: settings.events.history,
            max_history_size: settings.events.max_history,
            ..Default::default()
        });
        Self {
            group_manager: GroupManager::with_padding(settings.outline.padding),
            viewport: Viewport::new(settings.canvas.width, settings.canvas.height),
            selection_manager,
            store,
            settings,
            rng,
            events: Arc::new(events),
            controls,
        }
    }

    /// Subscribe to raw editor events.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(EditorEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(filter, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Called after every selection, hover or topology change with the
    /// recomputed button semantics and handle mode.
    pub fn on_controls_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ControlsSnapshot) + Send + Sync + 'static,
    {
        self.events
            .subscribe(EventFilter::category(EventCategory::Controls), move |event| {
                if let EditorEvent::ControlsChanged(snapshot) = event {
                    callback(snapshot);
                }
            })
    }

    /// Shared handle to the bus, for shells that poll from an async task or
    /// read back the event history enabled by `settings.events`.
    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn selection(&self) -> &[u64] {
        self.store.selection.ids()
    }

    pub fn hovered(&self) -> Option<u64> {
        self.store.hover
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.store.shapes()
    }

    pub fn groups(&self) -> Vec<&Group> {
        self.store.groups()
    }

    pub fn absolute_transform(&self, shape_id: u64) -> Option<Transform> {
        self.store.absolute_transform(shape_id)
    }

    /// Cached controls as of the last operation.
    pub fn controls(&self) -> &ControlsState {
        &self.controls
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub(crate) fn publish(&self, event: EditorEvent) {
        if let Err(e) = self.events.publish(event) {
            tracing::trace!("Event dropped: {}", e);
        }
    }

    pub(crate) fn publish_selection(&self) {
        self.publish(EditorEvent::SelectionChanged {
            selected: self.store.selection.ids().to_vec(),
        });
    }

    /// Recomputes the derived controls and announces them.
    pub(crate) fn refresh_controls(&mut self) {
        self.controls = self.selection_manager.controls(&self.store);
        self.publish(EditorEvent::ControlsChanged(self.controls.snapshot()));
    }

    /// Surfaces a rejected operation to the user.
    pub(crate) fn notice(&self, message: String) {
        tracing::warn!("{}", message);
        self.publish(EditorEvent::Notice { message });
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("shapes", &self.store.shape_count())
            .field("groups", &self.store.group_count())
            .field("selection", &self.store.selection.ids())
            .field("viewport", &self.viewport)
            .finish()
    }
}
