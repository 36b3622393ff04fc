use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod circle;
mod rectangle;

pub use circle::DesignCircle;
pub use rectangle::DesignRectangle;

/// Outline samples for a single shape. Rectangles use 4, circles 8.
pub type OutlinePoints = SmallVec<[Point; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Position and rotation of a node relative to its parent.
///
/// Rotation is stored in degrees, clockwise in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point,
    pub rotation: f64,
}

impl Transform {
    pub fn new(position: Point, rotation: f64) -> Self {
        Self { position, rotation }
    }

    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Point::new(x, y), 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// CSS style `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Geometry shared by every drawable kind.
///
/// Geometry is independent of placement: callers pass the center of the
/// shape in whatever space they are working in. Outlines are axis aligned
/// in that space.
pub trait DesignerShape {
    /// Boundary samples offset outward by `padding`, around `center`.
    fn padded_outline(&self, center: Point, padding: f64) -> OutlinePoints;

    /// Folds a transient scale factor into the stored dimensions.
    fn apply_scale(&mut self, sx: f64, sy: f64);

    /// Unrotated width and height.
    fn size(&self) -> (f64, f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Circle => write!(f, "Circle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
}

impl DesignerShape for Shape {
    fn padded_outline(&self, center: Point, padding: f64) -> OutlinePoints {
        match self {
            Shape::Rectangle(s) => s.padded_outline(center, padding),
            Shape::Circle(s) => s.padded_outline(center, padding),
        }
    }

    fn apply_scale(&mut self, sx: f64, sy: f64) {
        match self {
            Shape::Rectangle(s) => s.apply_scale(sx, sy),
            Shape::Circle(s) => s.apply_scale(sx, sy),
        }
    }

    fn size(&self) -> (f64, f64) {
        match self {
            Shape::Rectangle(s) => s.size(),
            Shape::Circle(s) => s.size(),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }
}

/// A leaf drawable placed on the canvas root or inside exactly one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingObject {
    pub id: u64,
    /// Owning group; `None` means the shape sits on the canvas root.
    pub group_id: Option<u64>,
    pub name: String,
    pub shape: Shape,
    /// Relative to the owning group, or to the root when ungrouped.
    pub transform: Transform,
    pub fill: Color,
    /// Grouped shapes only move with their group.
    pub draggable: bool,
}

impl DrawingObject {
    /// Creates a new ungrouped drawing object.
    pub fn new(id: u64, shape: Shape, transform: Transform, fill: Color) -> Self {
        let name = format!("{} {}", shape.shape_type(), id);
        Self {
            id,
            group_id: None,
            name,
            shape,
            transform,
            fill,
            draggable: true,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Padded outline expressed in the space of the object's parent.
    pub fn padded_outline(&self, padding: f64) -> OutlinePoints {
        self.shape
            .padded_outline(self.transform.position, padding)
    }
}

/// The invisible hit region of a group, in the group's local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupBackground {
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

/// A composite node. Members are the shapes whose `group_id` is this id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u64,
    pub name: String,
    /// Always relative to the canvas root; groups never nest.
    pub transform: Transform,
    pub background: GroupBackground,
}

impl Group {
    pub fn new(id: u64, transform: Transform) -> Self {
        Self {
            id,
            name: format!("Group {}", id),
            transform,
            background: GroupBackground::default(),
        }
    }
}
