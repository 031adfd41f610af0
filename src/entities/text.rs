//! Text entity

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox2D, Color, Handle, Vector3};

/// A single-line text entity
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point
    pub position: Vector3,
    /// Text content
    pub value: String,
    /// Text height in drawing units
    pub height: f64,
}

impl Text {
    /// Create a new text entity
    pub fn new(position: Vector3, value: impl Into<String>, height: f64) -> Self {
        Text {
            common: EntityCommon::default(),
            position,
            value: value.into(),
            height,
        }
    }
}

impl Entity for Text {
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
        "TEXT"
    }

    fn bounding_box(&self) -> BoundingBox2D {
        // Width is unknown without font metrics; anchor-only box.
        BoundingBox2D::from_points([self.position.xy()]).unwrap()
    }
}
