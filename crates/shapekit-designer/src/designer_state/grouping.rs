//! Group and ungroup operations for designer state.

use shapekit_core::{EditorEvent, Result};

use super::DesignerState;
use crate::group_manager::GroupOutcome;

impl DesignerState {
    /// Groups the current selection, merging into an existing group when
    /// exactly one is implicated.
    pub fn create_group(&mut self) -> Result<GroupOutcome> {
        let selected = self.store.selection.ids().to_vec();
        let result = self.group_manager.create_group(&mut self.store, &selected);
        self.finish_grouping(result)
    }

    /// Moves shapes into an existing group.
    pub fn add_to_group(&mut self, group_id: u64, shape_ids: &[u64]) -> Result<GroupOutcome> {
        let result = self
            .group_manager
            .add_to_group(&mut self.store, group_id, shape_ids);
        self.finish_grouping(result)
    }

    /// Dissolves the selected group.
    pub fn ungroup(&mut self) -> Result<GroupOutcome> {
        let selected = self.store.selection.ids().to_vec();
        let result = self.group_manager.ungroup(&mut self.store, &selected);
        self.finish_grouping(result)
    }

    fn finish_grouping(
        &mut self,
        result: std::result::Result<GroupOutcome, shapekit_core::GroupingError>,
    ) -> Result<GroupOutcome> {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.notice(e.to_string());
                return Err(e.into());
            }
        };

        match &outcome {
            GroupOutcome::Created { group_id, members } => {
                self.publish(EditorEvent::GroupCreated {
                    group_id: *group_id,
                    members: members.clone(),
                });
            }
            GroupOutcome::Extended {
                group_id,
                dissolved,
                shrunk,
                ..
            } => {
                for (source, released) in dissolved {
                    self.publish(EditorEvent::GroupDissolved {
                        group_id: *source,
                        released: released.clone(),
                    });
                }
                for source in shrunk {
                    self.publish(EditorEvent::GroupChanged { group_id: *source });
                }
                self.publish(EditorEvent::GroupChanged {
                    group_id: *group_id,
                });
            }
            GroupOutcome::Dissolved { group_id, released } => {
                self.publish(EditorEvent::GroupDissolved {
                    group_id: *group_id,
                    released: released.clone(),
                });
            }
        }

        self.publish_selection();
        self.refresh_controls();
        Ok(outcome)
    }
}
