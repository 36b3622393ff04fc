//! Shape creation and clear-all for designer state.

use shapekit_core::EditorEvent;

use super::DesignerState;
use crate::model::{Color, DesignCircle, DesignRectangle, Shape, Transform};

impl DesignerState {
    /// Adds a rectangle of the configured default size at a random spot.
    pub fn add_rectangle(&mut self) -> u64 {
        let shape = Shape::Rectangle(DesignRectangle::new(
            self.settings.shapes.rectangle_width,
            self.settings.shapes.rectangle_height,
        ));
        self.add_shape(shape)
    }

    /// Adds a circle of the configured default radius at a random spot.
    pub fn add_circle(&mut self) -> u64 {
        let shape = Shape::Circle(DesignCircle::new(self.settings.shapes.circle_radius));
        self.add_shape(shape)
    }

    fn add_shape(&mut self, shape: Shape) -> u64 {
        let position = self.viewport.random_point(&mut self.rng);
        let fill = Color::random(&mut self.rng);
        let kind = shape.shape_type();

        let id = self
            .store
            .add_shape(shape, Transform::new(position, 0.0), fill);
        tracing::debug!(
            "Added {} {} at ({:.1}, {:.1}) fill {}",
            kind,
            id,
            position.x,
            position.y,
            fill.to_hex()
        );

        self.publish(EditorEvent::ShapeAdded { shape_id: id });
        self.refresh_controls();
        id
    }

    /// Removes every shape and group and resets selection and hover.
    pub fn clear_all(&mut self) {
        self.group_manager.clear_all(&mut self.store);
        self.publish(EditorEvent::SceneCleared);
        self.publish_selection();
        self.publish(EditorEvent::HoverChanged { hovered: None });
        self.refresh_controls();
    }
}
