//! Arena of shapes and groups keyed by id.
//!
//! Shapes point at their owning group through `group_id`; group membership is
//! always derived from those back-references and never stored twice.
//! The store also owns the selection set and the hovered id.

use std::collections::HashMap;

use thiserror::Error;

use crate::geometry::{self, padded_bounds};
use crate::model::{Color, DrawingObject, Group, Shape, Transform};

/// Where a shape is attached in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    Root,
    Group(u64),
}

/// A resolved id.
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Shape(&'a DrawingObject),
    Group(&'a Group),
}

/// Duplicate-free set of selected ids, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `false` when the id was already selected.
    pub fn insert(&mut self, id: u64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.ids.len();
        self.ids.retain(|&i| i != id);
        self.ids.len() != before
    }

    /// Adds the id if absent, removes it otherwise.
    pub fn toggle(&mut self, id: u64) {
        if !self.remove(id) {
            self.ids.push(id);
        }
    }

    pub fn replace<I: IntoIterator<Item = u64>>(&mut self, ids: I) {
        self.ids.clear();
        for id in ids {
            self.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }
}

/// A broken structural invariant, reported by [`EntityStore::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    #[error("Shape {shape_id} points at missing group {group_id}")]
    OrphanedShape { shape_id: u64, group_id: u64 },

    #[error("Group {group_id} has {members} members")]
    UndersizedGroup { group_id: u64, members: usize },

    #[error("Shape {shape_id} draggable flag does not match its parent")]
    DraggableMismatch { shape_id: u64 },

    #[error("Group {group_id} background does not cover its members")]
    StaleBackground { group_id: u64 },

    #[error("Shape {shape_id} missing from draw order")]
    MissingFromDrawOrder { shape_id: u64 },
}

#[derive(Debug, Clone)]
pub struct EntityStore {
    shapes: HashMap<u64, DrawingObject>,
    groups: HashMap<u64, Group>,
    draw_order: Vec<u64>,
    next_id: u64,
    pub selection: Selection,
    pub hover: Option<u64>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            groups: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
            selection: Selection::new(),
            hover: None,
        }
    }

    /// Ids are shared by shapes and groups so a selection can mix both.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_shape(&mut self, shape: Shape, transform: Transform, fill: Color) -> u64 {
        let id = self.generate_id();
        self.shapes
            .insert(id, DrawingObject::new(id, shape, transform, fill));
        self.draw_order.push(id);
        id
    }

    /// Creates a group and attaches each `(shape_id, local_transform)` to it.
    ///
    /// Ids that do not resolve to a shape are skipped. The background is left
    /// empty; the caller sizes it once membership is final.
    pub fn add_group(&mut self, transform: Transform, members: &[(u64, Transform)]) -> u64 {
        let id = self.generate_id();
        self.groups.insert(id, Group::new(id, transform));
        for (shape_id, local) in members {
            self.reparent(*shape_id, Parent::Group(id), *local);
        }
        id
    }

    /// Attaches a shape to `parent` with the given local transform.
    ///
    /// Returns `false` on a lookup miss (unknown shape or unknown group).
    pub fn reparent(&mut self, shape_id: u64, parent: Parent, local: Transform) -> bool {
        if let Parent::Group(gid) = parent {
            if !self.groups.contains_key(&gid) {
                tracing::debug!("Reparent of {} skipped: group {} missing", shape_id, gid);
                return false;
            }
        }
        let Some(obj) = self.shapes.get_mut(&shape_id) else {
            tracing::debug!("Reparent skipped: shape {} missing", shape_id);
            return false;
        };
        obj.transform = local;
        match parent {
            Parent::Root => {
                obj.group_id = None;
                obj.draggable = true;
            }
            Parent::Group(gid) => {
                obj.group_id = Some(gid);
                obj.draggable = false;
            }
        }
        true
    }

    /// Destroys a group, moving every member back to the root at its
    /// absolute position and rotation. Returns the released shape ids.
    pub fn dissolve_group(&mut self, group_id: u64) -> Vec<u64> {
        let Some(group) = self.groups.remove(&group_id) else {
            tracing::debug!("Dissolve skipped: group {} missing", group_id);
            return Vec::new();
        };

        let released = self.members_of(group_id);
        for id in &released {
            if let Some(obj) = self.shapes.get_mut(id) {
                obj.transform = geometry::compose(&obj.transform, &group.transform);
                obj.group_id = None;
                obj.draggable = true;
            }
        }

        self.selection.remove(group_id);
        if self.hover == Some(group_id) {
            self.hover = None;
        }
        released
    }

    /// Removes every shape and group and resets selection and hover.
    pub fn remove_all(&mut self) {
        self.shapes.clear();
        self.groups.clear();
        self.draw_order.clear();
        self.selection.clear();
        self.hover = None;
    }

    pub fn shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.get(&id)
    }

    pub(crate) fn shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(&id)
    }

    pub fn group(&self, id: u64) -> Option<&Group> {
        self.groups.get(&id)
    }

    pub(crate) fn group_mut(&mut self, id: u64) -> Option<&mut Group> {
        self.groups.get_mut(&id)
    }

    pub fn resolve(&self, id: u64) -> Option<EntityRef<'_>> {
        if let Some(obj) = self.shapes.get(&id) {
            return Some(EntityRef::Shape(obj));
        }
        self.groups.get(&id).map(EntityRef::Group)
    }

    /// Shapes in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawingObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Groups ordered by id.
    pub fn groups(&self) -> Vec<&Group> {
        let mut groups: Vec<&Group> = self.groups.values().collect();
        groups.sort_by_key(|g| g.id);
        groups
    }

    /// Member ids of a group, in draw order.
    pub fn members_of(&self, group_id: u64) -> Vec<u64> {
        self.shapes()
            .filter(|obj| obj.group_id == Some(group_id))
            .map(|obj| obj.id)
            .collect()
    }

    pub fn member_count(&self, group_id: u64) -> usize {
        self.shapes
            .values()
            .filter(|obj| obj.group_id == Some(group_id))
            .count()
    }

    /// Transform of a shape in canvas-root coordinates.
    pub fn absolute_transform(&self, shape_id: u64) -> Option<Transform> {
        let obj = self.shapes.get(&shape_id)?;
        match obj.group_id.and_then(|gid| self.groups.get(&gid)) {
            Some(group) => Some(geometry::compose(&obj.transform, &group.transform)),
            None => Some(obj.transform),
        }
    }

    /// Resizes a group's background to the padded outline of its members.
    pub(crate) fn refresh_background(&mut self, group_id: u64, padding: f64) {
        let bounds = padded_bounds(
            self.shapes
                .values()
                .filter(|obj| obj.group_id == Some(group_id)),
            padding,
        );
        if let (Some(group), Some(bb)) = (self.groups.get_mut(&group_id), bounds) {
            group.background = bb.to_background();
        }
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.groups.is_empty()
    }

    /// Checks every structural invariant of the scene graph.
    pub fn validate(&self, padding: f64) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        for obj in self.shapes.values() {
            match obj.group_id {
                Some(gid) if !self.groups.contains_key(&gid) => {
                    violations.push(InvariantViolation::OrphanedShape {
                        shape_id: obj.id,
                        group_id: gid,
                    });
                }
                _ => {}
            }
            if obj.draggable != obj.group_id.is_none() {
                violations.push(InvariantViolation::DraggableMismatch { shape_id: obj.id });
            }
            if !self.draw_order.contains(&obj.id) {
                violations.push(InvariantViolation::MissingFromDrawOrder { shape_id: obj.id });
            }
        }

        for group in self.groups.values() {
            let members = self.member_count(group.id);
            if members < 2 {
                violations.push(InvariantViolation::UndersizedGroup {
                    group_id: group.id,
                    members,
                });
                continue;
            }
            let expected = padded_bounds(
                self.shapes
                    .values()
                    .filter(|obj| obj.group_id == Some(group.id)),
                padding,
            )
            .map(|bb| bb.to_background());
            let matches = expected.is_some_and(|bg| {
                (bg.position.x - group.background.position.x).abs() < 1e-6
                    && (bg.position.y - group.background.position.y).abs() < 1e-6
                    && (bg.width - group.background.width).abs() < 1e-6
                    && (bg.height - group.background.height).abs() < 1e-6
            });
            if !matches {
                violations.push(InvariantViolation::StaleBackground { group_id: group.id });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::OUTLINE_PADDING;
    use crate::model::{DesignCircle, DesignRectangle, Point};

    fn rect(store: &mut EntityStore, x: f64, y: f64) -> u64 {
        store.add_shape(
            Shape::Rectangle(DesignRectangle::new(20.0, 10.0)),
            Transform::at(x, y),
            Color::new(10, 20, 30),
        )
    }

    #[test]
    fn test_selection_set_semantics() {
        let mut selection = Selection::new();
        assert!(selection.insert(3));
        assert!(!selection.insert(3));
        selection.insert(1);
        assert_eq!(selection.ids(), &[3, 1]);

        selection.toggle(3);
        assert_eq!(selection.ids(), &[1]);
        selection.toggle(3);
        assert_eq!(selection.ids(), &[1, 3]);

        selection.replace([5, 5, 6]);
        assert_eq!(selection.ids(), &[5, 6]);
    }

    #[test]
    fn test_ids_shared_between_shapes_and_groups() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        let b = rect(&mut store, 10.0, 0.0);
        let g = store.add_group(
            Transform::at(5.0, 0.0),
            &[(a, Transform::at(-5.0, 0.0)), (b, Transform::at(5.0, 0.0))],
        );
        assert!(g != a && g != b);
        assert!(matches!(store.resolve(g), Some(EntityRef::Group(_))));
        assert!(matches!(store.resolve(a), Some(EntityRef::Shape(_))));
        assert!(store.resolve(999).is_none());
    }

    #[test]
    fn test_members_are_derived() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        let b = rect(&mut store, 10.0, 0.0);
        let c = rect(&mut store, 20.0, 0.0);
        let g = store.add_group(
            Transform::default(),
            &[(a, Transform::at(0.0, 0.0)), (c, Transform::at(20.0, 0.0))],
        );
        assert_eq!(store.members_of(g), vec![a, c]);
        assert_eq!(store.shape(b).and_then(|s| s.group_id), None);
        assert!(!store.shape(a).map(|s| s.draggable).unwrap_or(true));
    }

    #[test]
    fn test_reparent_to_missing_group_is_a_miss() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        assert!(!store.reparent(a, Parent::Group(42), Transform::default()));
        assert_eq!(store.shape(a).and_then(|s| s.group_id), None);
    }

    #[test]
    fn test_dissolve_restores_absolute_transform() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        let b = rect(&mut store, 0.0, 0.0);
        let g = store.add_group(
            Transform::new(Point::new(100.0, 100.0), 90.0),
            &[
                (a, Transform::new(Point::new(10.0, 0.0), 5.0)),
                (b, Transform::at(-10.0, 0.0)),
            ],
        );
        store.selection.insert(g);

        let released = store.dissolve_group(g);
        assert_eq!(released, vec![a, b]);
        assert_eq!(store.group_count(), 0);
        assert!(store.selection.is_empty());

        let obj = store.shape(a).expect("shape a");
        assert!(obj.draggable);
        assert!((obj.transform.position.x - 100.0).abs() < 1e-9);
        assert!((obj.transform.position.y - 110.0).abs() < 1e-9);
        assert!((obj.transform.rotation - 95.0).abs() < 1e-9);
    }

    #[test]
    fn test_validate_reports_undersized_and_stale_groups() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        let b = store.add_shape(
            Shape::Circle(DesignCircle::new(5.0)),
            Transform::at(30.0, 0.0),
            Color::new(0, 0, 0),
        );
        let g = store.add_group(
            Transform::default(),
            &[(a, Transform::at(0.0, 0.0)), (b, Transform::at(30.0, 0.0))],
        );

        let errors = store.validate(OUTLINE_PADDING).expect_err("background unset");
        assert_eq!(errors, vec![InvariantViolation::StaleBackground { group_id: g }]);

        store.refresh_background(g, OUTLINE_PADDING);
        assert!(store.validate(OUTLINE_PADDING).is_ok());

        store.reparent(b, Parent::Root, Transform::at(30.0, 0.0));
        let errors = store.validate(OUTLINE_PADDING).expect_err("one member");
        assert_eq!(
            errors,
            vec![InvariantViolation::UndersizedGroup {
                group_id: g,
                members: 1
            }]
        );
    }

    #[test]
    fn test_remove_all() {
        let mut store = EntityStore::new();
        let a = rect(&mut store, 0.0, 0.0);
        store.selection.insert(a);
        store.hover = Some(a);

        store.remove_all();
        assert!(store.is_empty());
        assert!(store.selection.is_empty());
        assert_eq!(store.hover, None);
        assert_eq!(store.shapes().count(), 0);
    }
}
