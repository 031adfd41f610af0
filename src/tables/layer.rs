//! Layer table entry

use super::TableEntry;
use crate::types::{Color, Handle, LineWeight};

/// A layer table entry
#[derive(Debug, Clone)]
pub struct Layer {
    /// Unique handle
    pub handle: Handle,
    /// Layer name
    pub name: String,
    /// Layer color
    pub color: Color,
    /// Line type name
    pub line_type: String,
    /// Line weight
    pub line_weight: LineWeight,
    /// Is this layer plottable?
    pub is_plottable: bool,
}

impl Layer {
    /// Create a new layer with default settings
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            handle: Handle::NULL,
            name: name.into(),
            color: Color::WHITE,
            line_type: "CONTINUOUS".to_string(),
            line_weight: LineWeight::Standard,
            is_plottable: true,
        }
    }

    /// Create the standard "0" layer
    pub fn layer_0() -> Self {
        Self::new("0")
    }

    /// Create a layer with a specific color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            color,
            ..Self::new(name)
        }
    }
}

impl TableEntry for Layer {
    fn handle(&self) -> Handle {
        self.handle
    }

    fn set_handle(&mut self, handle: Handle) {
        self.handle = handle;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_standard(&self) -> bool {
        self.name == "0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_defaults() {
        let layer = Layer::new("LINES");
        assert_eq!(layer.color, Color::WHITE);
        assert_eq!(layer.line_type, "CONTINUOUS");
        assert!(layer.is_plottable);
        assert!(!layer.is_standard());
    }

    #[test]
    fn test_layer_zero() {
        let layer = Layer::layer_0();
        assert_eq!(layer.name, "0");
        assert!(layer.is_standard());
    }

    #[test]
    fn test_with_color() {
        let layer = Layer::with_color("CIRCLES", Color::RED);
        assert_eq!(layer.color, Color::RED);
    }
}
