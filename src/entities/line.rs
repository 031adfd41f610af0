//! Line entity

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox2D, Color, Handle, Vector3};

/// A line entity defined by two endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point of the line
    pub start: Vector3,
    /// End point of the line
    pub end: Vector3,
    /// Stroke width in drawing units
    pub width: f64,
}

impl Line {
    /// Create a new line between two points
    pub fn from_points(start: Vector3, end: Vector3) -> Self {
        Line {
            common: EntityCommon::default(),
            start,
            end,
            width: 0.0,
        }
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}

impl Entity for Line {
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
        "LINE"
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points([self.start.xy(), self.end.xy()]).unwrap()
    }
}
