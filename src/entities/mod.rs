//! Converted DXF entity types and traits

use crate::types::{BoundingBox2D, Color, Handle};

pub mod circle;
pub mod line;
pub mod polyline;
pub mod text;

pub use circle::Circle;
pub use line::Line;
pub use polyline::{Polyline, PolylineFlags};
pub use text::Text;

/// Base trait for all converted entities
pub trait Entity {
    /// Get the entity's unique handle
    fn handle(&self) -> Handle;

    /// Set the entity's handle
    fn set_handle(&mut self, handle: Handle);

    /// Get the entity's layer name
    fn layer(&self) -> &str;

    /// Get the entity's color
    fn color(&self) -> Color;

    /// Get the entity type name as written to the file
    fn entity_type(&self) -> &'static str;

    /// Get the 2D bounding box of the entity
    fn bounding_box(&self) -> BoundingBox2D;
}

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Unique handle, assigned when added to a document
    pub handle: Handle,
    /// Layer name
    pub layer: String,
    /// Color
    pub color: Color,
}

impl EntityCommon {
    /// Common data for an entity on the given layer with the given color
    pub fn new(layer: impl Into<String>, color: Color) -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: layer.into(),
            color,
        }
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        EntityCommon {
            handle: Handle::NULL,
            layer: "0".to_string(),
            color: Color::ByLayer,
        }
    }
}

/// Closed set of entity kinds the conversion pipeline can produce.
///
/// Rectangles and flattened curves both collapse to [`Polyline`], so four
/// kinds cover the five input primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityType {
    Line(Line),
    Polyline(Polyline),
    Circle(Circle),
    Text(Text),
}

impl EntityType {
    /// Access the entity through the common trait
    pub fn as_entity(&self) -> &dyn Entity {
        match self {
            EntityType::Line(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Text(e) => e,
        }
    }

    /// Mutable access through the common trait
    pub fn as_entity_mut(&mut self) -> &mut dyn Entity {
        match self {
            EntityType::Line(e) => e,
            EntityType::Polyline(e) => e,
            EntityType::Circle(e) => e,
            EntityType::Text(e) => e,
        }
    }

    /// The type name as written to the file
    pub fn type_name(&self) -> &'static str {
        self.as_entity().entity_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vector3;

    #[test]
    fn test_type_names() {
        let line = EntityType::Line(Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)));
        assert_eq!(line.type_name(), "LINE");

        let circle = EntityType::Circle(Circle::new(Vector3::ZERO, 2.0));
        assert_eq!(circle.type_name(), "CIRCLE");
    }

    #[test]
    fn test_common_defaults() {
        let common = EntityCommon::default();
        assert_eq!(common.layer, "0");
        assert_eq!(common.color, Color::ByLayer);
        assert!(common.handle.is_null());
    }
}
