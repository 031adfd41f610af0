//! Text style table entry

use super::TableEntry;
use crate::types::Handle;

/// A text style table entry
#[derive(Debug, Clone)]
pub struct TextStyle {
    /// Unique handle
    pub handle: Handle,
    /// Style name
    pub name: String,
    /// Font file name
    pub font_file: String,
    /// Fixed height (0 = not fixed)
    pub height: f64,
    /// Width factor
    pub width_factor: f64,
    /// Oblique angle in degrees
    pub oblique_angle: f64,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(name: impl Into<String>, font_file: impl Into<String>) -> Self {
        TextStyle {
            handle: Handle::NULL,
            name: name.into(),
            font_file: font_file.into(),
            height: 0.0,
            width_factor: 1.0,
            oblique_angle: 0.0,
        }
    }

    /// The standard text style
    pub fn standard() -> Self {
        Self::new("Standard", "txt")
    }
}

impl TableEntry for TextStyle {
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
        self.name.eq_ignore_ascii_case("standard")
    }
}
