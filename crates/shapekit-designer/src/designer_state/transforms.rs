//! Gesture commits and viewport resize for designer state.

use serde::{Deserialize, Serialize};
use shapekit_core::EditorEvent;

use super::DesignerState;
use crate::model::{DesignerShape, Point, Transform};

/// Final state of an interactive transform gesture.
///
/// Position and rotation are in the node's parent space. Scale is the
/// transient factor accumulated during the gesture; it is folded into the
/// stored geometry and never kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformEnd {
    pub position: Point,
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl TransformEnd {
    pub fn new(position: Point, rotation: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            position,
            rotation,
            scale_x,
            scale_y,
        }
    }

    /// Scale factors with zero or non-finite values replaced by 1.
    pub fn normalized_scale(&self) -> (f64, f64) {
        (normalize(self.scale_x), normalize(self.scale_y))
    }
}

fn normalize(factor: f64) -> f64 {
    if factor.is_finite() && factor != 0.0 {
        factor
    } else {
        1.0
    }
}

impl DesignerState {
    /// Commits the end of a drag on a root shape or a group.
    ///
    /// Grouped shapes only move with their group, so a drag reported for
    /// one is ignored.
    pub fn end_drag(&mut self, id: u64, position: Point) {
        if let Some(obj) = self.store.shape_mut(id) {
            if obj.group_id.is_some() {
                tracing::debug!("Ignoring drag end on grouped shape {}", id);
                return;
            }
            obj.transform.position = position;
            self.publish(EditorEvent::ShapeTransformed { shape_id: id });
            return;
        }

        if let Some(group) = self.store.group_mut(id) {
            group.transform.position = position;
            self.publish(EditorEvent::GroupChanged { group_id: id });
            return;
        }

        tracing::debug!("Ignoring drag end on stale id {}", id);
    }

    /// Commits the end of a rotate/resize gesture.
    pub fn end_transform(&mut self, id: u64, end: TransformEnd) {
        let (sx, sy) = end.normalized_scale();
        let transform = Transform::new(end.position, end.rotation);
        let padding = self.group_manager.padding();

        if let Some(obj) = self.store.shape_mut(id) {
            obj.transform = transform;
            obj.shape.apply_scale(sx, sy);
            let group_id = obj.group_id;

            self.publish(EditorEvent::ShapeTransformed { shape_id: id });
            if let Some(gid) = group_id {
                self.store.refresh_background(gid, padding);
                self.publish(EditorEvent::GroupChanged { group_id: gid });
            }
            return;
        }

        if let Some(group) = self.store.group_mut(id) {
            group.transform = transform;
            for member in self.store.members_of(id) {
                if let Some(obj) = self.store.shape_mut(member) {
                    obj.transform.position.x *= sx;
                    obj.transform.position.y *= sy;
                    obj.shape.apply_scale(sx, sy);
                }
            }
            self.store.refresh_background(id, padding);
            tracing::debug!("Group {} transformed, scale folded ({:.3}, {:.3})", id, sx, sy);
            self.publish(EditorEvent::GroupChanged { group_id: id });
            return;
        }

        tracing::debug!("Ignoring transform end on stale id {}", id);
    }

    /// Updates the area used for random placement.
    pub fn resize_viewport(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
        tracing::debug!("Viewport resized to {}", self.viewport);
        self.publish(EditorEvent::ViewportResized { width, height });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_scale() {
        let end = TransformEnd::new(Point::default(), 0.0, 0.0, f64::NAN);
        assert_eq!(end.normalized_scale(), (1.0, 1.0));
        let end = TransformEnd::new(Point::default(), 0.0, -2.0, 0.5);
        assert_eq!(end.normalized_scale(), (-2.0, 0.5));
    }
}
