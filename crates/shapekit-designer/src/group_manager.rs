use shapekit_core::GroupingError;

use crate::entity_store::{EntityRef, EntityStore, Parent};
use crate::geometry::{self, OUTLINE_PADDING};
use crate::model::{Point, Transform};

/// What a successful grouping operation did to the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    /// A new group was created from ungrouped shapes.
    Created { group_id: u64, members: Vec<u64> },
    /// Shapes joined an existing group.
    Extended {
        group_id: u64,
        added: Vec<u64>,
        /// Source groups that were emptied down to one member and dissolved
        /// on the way, with the shapes they released.
        dissolved: Vec<(u64, Vec<u64>)>,
        /// Source groups that lost members but kept at least two.
        shrunk: Vec<u64>,
    },
    /// A group was destroyed and its members moved back to the root.
    Dissolved { group_id: u64, released: Vec<u64> },
}

/// Compound grouping operations over an [`EntityStore`].
///
/// Every operation validates all of its preconditions before the first
/// mutation, so a returned error always means the scene is untouched.
///
/// # Membership rules
///
/// - A shape is a member of at most one group
/// - Moving a shape between groups is leave-then-join inside one call
/// - A group whose membership would fall to one is dissolved first
/// - Backgrounds are resized after every membership change
#[derive(Debug, Clone)]
pub struct GroupManager {
    padding: f64,
}

impl GroupManager {
    pub fn new() -> Self {
        Self::with_padding(OUTLINE_PADDING)
    }

    pub fn with_padding(padding: f64) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Groups the selected ids.
    ///
    /// When exactly one existing group is implicated, the remaining shapes
    /// are merged into it instead of creating a new group. Otherwise a new
    /// group is built from the ungrouped shapes in the selection, centered on
    /// the mean of their positions, and becomes the sole selection.
    pub fn create_group(
        &self,
        store: &mut EntityStore,
        selected: &[u64],
    ) -> Result<GroupOutcome, GroupingError> {
        if selected.len() < 2 {
            return Err(GroupingError::TooFewSelected {
                required: 2,
                found: selected.len(),
            });
        }

        let mut selected_groups: Vec<u64> = Vec::new();
        let mut shapes: Vec<u64> = Vec::new();
        for &id in selected {
            match store.resolve(id) {
                Some(EntityRef::Group(group)) => push_unique(&mut selected_groups, group.id),
                Some(EntityRef::Shape(obj)) => push_unique(&mut shapes, obj.id),
                None => tracing::debug!("Ignoring stale selected id {}", id),
            }
        }
        for &gid in &selected_groups {
            for member in store.members_of(gid) {
                push_unique(&mut shapes, member);
            }
        }

        let mut implicated = selected_groups.clone();
        for &id in &shapes {
            if let Some(gid) = store.shape(id).and_then(|obj| obj.group_id) {
                push_unique(&mut implicated, gid);
            }
        }

        if let [target] = implicated[..] {
            let to_add: Vec<u64> = shapes
                .iter()
                .copied()
                .filter(|&id| store.shape(id).and_then(|obj| obj.group_id) != Some(target))
                .collect();
            if to_add.is_empty() {
                return Err(GroupingError::NothingToAdd { group_id: target });
            }
            return self.add_to_group(store, target, &to_add);
        }

        let ungrouped: Vec<u64> = shapes
            .iter()
            .copied()
            .filter(|&id| store.shape(id).is_some_and(|obj| obj.group_id.is_none()))
            .collect();
        if ungrouped.len() < 2 {
            return Err(GroupingError::NotEnoughUngrouped {
                found: ungrouped.len(),
            });
        }

        let absolute: Vec<(u64, Transform)> = ungrouped
            .iter()
            .filter_map(|&id| store.shape(id).map(|obj| (id, obj.transform)))
            .collect();
        let count = absolute.len() as f64;
        let center = Point::new(
            absolute.iter().map(|(_, t)| t.position.x).sum::<f64>() / count,
            absolute.iter().map(|(_, t)| t.position.y).sum::<f64>() / count,
        );

        // The new group starts unrotated, so only the offset changes.
        let members: Vec<(u64, Transform)> = absolute
            .iter()
            .map(|(id, t)| {
                let local = Point::new(t.position.x - center.x, t.position.y - center.y);
                (*id, Transform::new(local, t.rotation))
            })
            .collect();

        let group_id = store.add_group(Transform::new(center, 0.0), &members);
        store.refresh_background(group_id, self.padding);
        store.selection.replace([group_id]);

        tracing::info!(
            "Created group {} with {} members at ({:.1}, {:.1})",
            group_id,
            members.len(),
            center.x,
            center.y
        );
        self.check(store);

        Ok(GroupOutcome::Created {
            group_id,
            members: ungrouped,
        })
    }

    /// Moves `shape_ids` into `target`, preserving their absolute position
    /// and rotation, then selects the target.
    pub fn add_to_group(
        &self,
        store: &mut EntityStore,
        target: u64,
        shape_ids: &[u64],
    ) -> Result<GroupOutcome, GroupingError> {
        if store.group(target).is_none() {
            return Err(GroupingError::UnknownGroup { group_id: target });
        }

        let mut to_add: Vec<u64> = Vec::new();
        for &id in shape_ids {
            match store.shape(id) {
                Some(obj) if obj.group_id != Some(target) => push_unique(&mut to_add, id),
                Some(_) => {}
                None => tracing::debug!("Ignoring stale shape id {}", id),
            }
        }
        if to_add.is_empty() {
            return Err(GroupingError::NothingToAdd { group_id: target });
        }

        let mut dissolved: Vec<(u64, Vec<u64>)> = Vec::new();
        let mut shrunk: Vec<u64> = Vec::new();

        for &id in &to_add {
            let source = store.shape(id).and_then(|obj| obj.group_id);
            if let Some(source) = source {
                if store.member_count(source) <= 2 {
                    let released = store.dissolve_group(source);
                    tracing::debug!(
                        "Dissolved group {} while moving shape {} to group {}",
                        source,
                        id,
                        target
                    );
                    shrunk.retain(|&g| g != source);
                    dissolved.push((source, released));
                } else {
                    push_unique(&mut shrunk, source);
                }
            }

            let Some(absolute) = store.absolute_transform(id) else {
                continue;
            };
            let Some(target_transform) = store.group(target).map(|g| g.transform) else {
                continue;
            };
            let local = geometry::relative_to(&absolute, &target_transform);
            store.reparent(id, Parent::Group(target), local);
        }

        for &source in &shrunk {
            store.refresh_background(source, self.padding);
        }
        store.refresh_background(target, self.padding);
        store.selection.replace([target]);

        tracing::info!("Added {} shapes to group {}", to_add.len(), target);
        self.check(store);

        Ok(GroupOutcome::Extended {
            group_id: target,
            added: to_add,
            dissolved,
            shrunk,
        })
    }

    /// Dissolves the single selected group and selects the released shapes.
    pub fn ungroup(
        &self,
        store: &mut EntityStore,
        selected: &[u64],
    ) -> Result<GroupOutcome, GroupingError> {
        let group_id = match selected {
            [id] if store.group(*id).is_some() => *id,
            _ => {
                return Err(GroupingError::NotASingleGroup {
                    selected: selected.len(),
                })
            }
        };

        let released = store.dissolve_group(group_id);
        store.selection.replace(released.iter().copied());

        tracing::info!("Ungrouped {} releasing {} shapes", group_id, released.len());
        self.check(store);

        Ok(GroupOutcome::Dissolved { group_id, released })
    }

    /// Removes every shape and group. Safe to call on an empty scene.
    pub fn clear_all(&self, store: &mut EntityStore) {
        let (shapes, groups) = (store.shape_count(), store.group_count());
        store.remove_all();
        tracing::info!("Cleared {} shapes and {} groups", shapes, groups);
    }

    fn check(&self, store: &EntityStore) {
        let result = store.validate(self.padding);
        debug_assert!(result.is_ok(), "scene invariants broken: {:?}", result);
        if let Err(violations) = result {
            tracing::error!("Scene invariants broken: {:?}", violations);
        }
    }
}

impl Default for GroupManager {
    fn default() -> Self {
        Self::new()
    }
}

fn push_unique(ids: &mut Vec<u64>, id: u64) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}
