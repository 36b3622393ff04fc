//! Geometry utilities for the scene graph.
//!
//! Pure functions only: bounding boxes from sampled outlines and the
//! conversions that move a point or a transform between a parent's space
//! and the canvas root. Every reparenting goes through these helpers.

use nalgebra::{Isometry2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::model::{DrawingObject, GroupBackground, Point, Transform};

/// Margin added around each member when sizing a group background.
pub const OUTLINE_PADDING: f64 = 10.0;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Background rectangle covering this box.
    pub fn to_background(&self) -> GroupBackground {
        GroupBackground {
            position: Point::new(self.min_x, self.min_y),
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Bounding box of a point cloud. `None` when there are no points.
pub fn bounding_box<'a, I>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut bb = BoundingBox::new(first.x, first.y, first.x, first.y);
    for p in iter {
        bb.include(*p);
    }
    Some(bb)
}

/// Union of the padded outlines of `members`, each in its parent's space.
///
/// Used for group backgrounds, where the parent is the group itself.
pub fn padded_bounds<'a, I>(members: I, padding: f64) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'a DrawingObject>,
{
    members
        .into_iter()
        .filter_map(|obj| bounding_box(obj.padded_outline(padding).iter()))
        .reduce(|acc, bb| acc.union(&bb))
}

fn parent_isometry(parent_position: Point, parent_rotation_deg: f64) -> Isometry2<f64> {
    // Forward transform of a parent: rotate about its origin, then translate.
    Isometry2::new(
        Vector2::new(parent_position.x, parent_position.y),
        parent_rotation_deg.to_radians(),
    )
}

/// Expresses a root-space point relative to a parent.
///
/// Translates by `-parent_position`, then rotates by `-parent_rotation_deg`.
pub fn to_local_space(point: Point, parent_position: Point, parent_rotation_deg: f64) -> Point {
    let local = parent_isometry(parent_position, parent_rotation_deg)
        .inverse_transform_point(&Point2::new(point.x, point.y));
    Point::new(local.x, local.y)
}

/// Inverse of [`to_local_space`]: rotates by the parent's rotation, then
/// translates by its position.
pub fn to_parent_space(point: Point, parent_position: Point, parent_rotation_deg: f64) -> Point {
    let world = parent_isometry(parent_position, parent_rotation_deg)
        .transform_point(&Point2::new(point.x, point.y));
    Point::new(world.x, world.y)
}

/// Absolute transform of a node whose local transform is `local` inside `parent`.
pub fn compose(local: &Transform, parent: &Transform) -> Transform {
    Transform::new(
        to_parent_space(local.position, parent.position, parent.rotation),
        local.rotation + parent.rotation,
    )
}

/// Local transform inside `parent` for a node placed at `absolute`.
pub fn relative_to(absolute: &Transform, parent: &Transform) -> Transform {
    Transform::new(
        to_local_space(absolute.position, parent.position, parent.rotation),
        absolute.rotation - parent.rotation,
    )
}
