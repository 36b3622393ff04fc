use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use super::{DesignerShape, OutlinePoints, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub width: f64,
    pub height: f64,
}

impl DesignRectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl DesignerShape for DesignRectangle {
    fn padded_outline(&self, center: Point, padding: f64) -> OutlinePoints {
        // Corners stay axis aligned in the parent space; the shape's own
        // rotation does not widen its contribution to a group background.
        let half_w = self.width / 2.0 + padding;
        let half_h = self.height / 2.0 + padding;

        smallvec![
            Point::new(center.x - half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y - half_h),
            Point::new(center.x + half_w, center.y + half_h),
            Point::new(center.x - half_w, center.y + half_h),
        ]
    }

    fn apply_scale(&mut self, sx: f64, sy: f64) {
        self.width *= sx.abs();
        self.height *= sy.abs();
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
