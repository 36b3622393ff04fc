//! Visible canvas area.
//!
//! Only used to place new shapes; it never moves or clips existing ones.

use std::fmt;

use rand::Rng;

use crate::model::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Uniform point in `[0, width) x [0, height)`.
    ///
    /// A degenerate axis (zero, negative or non-finite) yields 0 on that axis.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point::new(
            random_coordinate(rng, self.canvas_width),
            random_coordinate(rng, self.canvas_height),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}x{:.0}", self.canvas_width, self.canvas_height)
    }
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_point_inside_canvas() {
        let viewport = Viewport::new(300.0, 200.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = viewport.random_point(&mut rng);
            assert!((0.0..300.0).contains(&p.x));
            assert!((0.0..200.0).contains(&p.y));
        }
    }

    #[test]
    fn test_degenerate_canvas() {
        let viewport = Viewport::new(0.0, -5.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(viewport.random_point(&mut rng), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_resize() {
        let mut viewport = Viewport::default();
        viewport.set_canvas_size(640.0, 480.0);
        assert_eq!(viewport.canvas_width(), 640.0);
        assert_eq!(viewport.to_string(), "640x480");
    }
}
