//! Color representation for DXF entities
//!
//! Entities produced by the conversion pipeline carry one of the 8 basic
//! AutoCAD Color Index (ACI) values 0-7, resolved from the extraction
//! layer's normalized RGB triples.

use std::fmt;

/// A color attached to a DXF entity or layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0 on the wire)
    ByBlock,
    /// AutoCAD Color Index
    Index(u8),
}

impl Color {
    /// Common color constants
    pub const BLACK: Color = Color::Index(0);
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);

    /// Create a color from a raw ACI index
    pub fn from_index(index: i16) -> Self {
        match index {
            256 => Color::ByLayer,
            0..=255 => Color::Index(index as u8),
            _ => Color::WHITE,
        }
    }

    /// Classify a normalized RGB triple (each channel in [0, 1]) to the
    /// nearest basic palette index.
    ///
    /// A channel counts as "high" above 0.8 and "low" below 0.2; anything
    /// that matches none of the seven reference colors falls through to
    /// black. The check order (red, green, blue, yellow, cyan, magenta,
    /// white, black) is significant: white is matched before the final
    /// catch-all, and boundary values (exactly 0.8 or 0.2) classify as
    /// neither high nor low.
    pub fn from_normalized_rgb(r: f64, g: f64, b: f64) -> Self {
        let hi = |c: f64| c > 0.8;
        let lo = |c: f64| c < 0.2;

        if hi(r) && lo(g) && lo(b) {
            Color::RED
        } else if lo(r) && hi(g) && lo(b) {
            Color::GREEN
        } else if lo(r) && lo(g) && hi(b) {
            Color::BLUE
        } else if hi(r) && hi(g) && lo(b) {
            Color::YELLOW
        } else if lo(r) && hi(g) && hi(b) {
            Color::CYAN
        } else if hi(r) && lo(g) && hi(b) {
            Color::MAGENTA
        } else if hi(r) && hi(g) && hi(b) {
            Color::WHITE
        } else {
            Color::BLACK
        }
    }

    /// The value written to DXF group code 62
    pub fn aci(&self) -> i16 {
        match self {
            Color::ByLayer => 256,
            Color::ByBlock => 0,
            Color::Index(i) => *i as i16,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_channels() {
        assert_eq!(Color::from_normalized_rgb(1.0, 0.0, 0.0), Color::RED);
        assert_eq!(Color::from_normalized_rgb(0.0, 1.0, 0.0), Color::GREEN);
        assert_eq!(Color::from_normalized_rgb(0.0, 0.0, 1.0), Color::BLUE);
    }

    #[test]
    fn test_mixed_channels() {
        assert_eq!(Color::from_normalized_rgb(1.0, 1.0, 0.0), Color::YELLOW);
        assert_eq!(Color::from_normalized_rgb(0.0, 1.0, 1.0), Color::CYAN);
        assert_eq!(Color::from_normalized_rgb(1.0, 0.0, 1.0), Color::MAGENTA);
        assert_eq!(Color::from_normalized_rgb(1.0, 1.0, 1.0), Color::WHITE);
    }

    #[test]
    fn test_black_fallthrough() {
        assert_eq!(Color::from_normalized_rgb(0.0, 0.0, 0.0), Color::BLACK);
        // Mid-range grays match nothing
        assert_eq!(Color::from_normalized_rgb(0.5, 0.5, 0.5), Color::BLACK);
    }

    #[test]
    fn test_boundary_values_fall_through() {
        // Exactly at the thresholds a channel is neither high nor low,
        // so the triple classifies as black.
        assert_eq!(Color::from_normalized_rgb(0.8, 0.8, 0.8), Color::BLACK);
        assert_eq!(Color::from_normalized_rgb(1.0, 0.2, 0.0), Color::BLACK);
    }

    #[test]
    fn test_aci_values() {
        assert_eq!(Color::ByLayer.aci(), 256);
        assert_eq!(Color::ByBlock.aci(), 0);
        assert_eq!(Color::BLUE.aci(), 5);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(7), Color::WHITE);
        assert_eq!(Color::from_index(-5), Color::WHITE);
    }
}
