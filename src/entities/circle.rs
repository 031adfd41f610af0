//! Circle entity

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox2D, Color, Handle, Vector2, Vector3};

/// A circle entity defined by center and radius
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius in drawing units
    pub radius: f64,
    /// Stroke width in drawing units
    pub width: f64,
    /// Fill flag carried through from extraction
    pub filled: bool,
}

impl Circle {
    /// Create a new circle
    pub fn new(center: Vector3, radius: f64) -> Self {
        Circle {
            common: EntityCommon::default(),
            center,
            radius,
            width: 0.0,
            filled: false,
        }
    }
}

impl Entity for Circle {
    fn handle(&self) -> Handle {
        self.common.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.common.handle = handle;
    }

    fn layer(&self) -> &str {
        &self.common.layer
    }

    fn color(&self) -> Color {
        self.common.color
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::new(
            Vector2::new(self.center.x - self.radius, self.center.y - self.radius),
            Vector2::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }
}
