use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;

use super::{DesignerShape, OutlinePoints, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    pub radius: f64,
}

impl DesignCircle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl DesignerShape for DesignCircle {
    fn padded_outline(&self, center: Point, padding: f64) -> OutlinePoints {
        // Cardinal samples hit the true extremes.
        let r = self.radius + padding;
        let d = r * FRAC_1_SQRT_2;
        [
            (r, 0.0),
            (0.0, r),
            (-r, 0.0),
            (0.0, -r),
            (d, d),
            (-d, d),
            (-d, -d),
            (d, -d),
        ]
        .into_iter()
        .map(|(dx, dy)| Point::new(center.x + dx, center.y + dy))
        .collect()
    }

    fn apply_scale(&mut self, sx: f64, sy: f64) {
        self.radius *= sx.abs().max(sy.abs());
    }

    fn size(&self) -> (f64, f64) {
        (self.radius * 2.0, self.radius * 2.0)
    }
}
