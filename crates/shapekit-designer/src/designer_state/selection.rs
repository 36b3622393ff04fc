//! Pointer handling for designer state.

use shapekit_core::EditorEvent;

use super::DesignerState;

impl DesignerState {
    /// Handles a click. `None` means the empty canvas was hit.
    pub fn click(&mut self, target: Option<u64>, modifier: bool) {
        if self
            .selection_manager
            .click(&mut self.store, target, modifier)
        {
            self.publish_selection();
        }
        self.refresh_controls();
    }

    pub fn hover_enter(&mut self, id: u64) {
        if self.selection_manager.hover_enter(&mut self.store, id) {
            self.publish(EditorEvent::HoverChanged { hovered: Some(id) });
        }
        self.refresh_controls();
    }

    pub fn hover_leave(&mut self, id: u64) {
        if self.selection_manager.hover_leave(&mut self.store, id) {
            self.publish(EditorEvent::HoverChanged { hovered: None });
        }
        self.refresh_controls();
    }

    /// Id a click on `id` would select, following the group redirect.
    pub fn effective_target(&self, id: u64) -> Option<u64> {
        self.selection_manager.effective_target(&self.store, id)
    }
}
