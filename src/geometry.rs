//! Input geometry model.
//!
//! These are the records handed over by the extraction layer: flat
//! primitives with 2D coordinates and typed style properties. The kinds are
//! a closed set, so downstream dispatch is exhaustive at compile time.

use crate::types::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five primitive kinds produced by extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Line,
    Curve,
    Rectangle,
    Circle,
    Text,
}

impl GeometryKind {
    /// Minimum number of coordinates a primitive of this kind must carry.
    ///
    /// Line: [start, end]. Curve: control points. Rectangle: [top-left,
    /// bottom-right]. Circle: [center, point-on-radius]. Text: [position].
    pub fn min_coordinates(&self) -> usize {
        match self {
            GeometryKind::Line => 2,
            GeometryKind::Curve => 3,
            GeometryKind::Rectangle => 2,
            GeometryKind::Circle => 2,
            GeometryKind::Text => 1,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryKind::Line => write!(f, "line"),
            GeometryKind::Curve => write!(f, "curve"),
            GeometryKind::Rectangle => write!(f, "rectangle"),
            GeometryKind::Circle => write!(f, "circle"),
            GeometryKind::Text => write!(f, "text"),
        }
    }
}

/// How a curve's control points are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Cubic Bezier control polygon (4 points).
    #[default]
    Bezier,
    /// Circular arc approximation.
    Arc,
    /// Quadratic control polygon.
    Quadratic,
}

/// Style properties attached to an extracted primitive.
///
/// All fields are optional in the source data; the defaults mirror what the
/// extraction layer emits when a property is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryStyle {
    /// Stroke width in source units.
    pub width: f64,
    /// Normalized RGB color, each channel in [0, 1].
    pub color: [f64; 3],
    /// Fill flag for rectangles and circles.
    pub filled: bool,
    /// Interpretation of curve control points.
    pub curve_kind: CurveKind,
    /// Text content (text primitives only).
    pub content: String,
    /// Font size in source units (text primitives only).
    pub font_size: f64,
}

impl Default for GeometryStyle {
    fn default() -> Self {
        GeometryStyle {
            width: 1.0,
            color: [0.0, 0.0, 0.0],
            filled: false,
            curve_kind: CurveKind::Bezier,
            content: String::new(),
            font_size: 12.0,
        }
    }
}

/// One extracted primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryObject {
    /// Primitive kind, driving coordinate semantics.
    pub kind: GeometryKind,
    /// Ordered 2D coordinates; meaning depends on `kind`.
    pub coordinates: Vec<Vector2>,
    /// Style properties.
    #[serde(default)]
    pub style: GeometryStyle,
    /// Source page index, carried through but unused by conversion.
    #[serde(default)]
    pub page_number: u32,
}

impl GeometryObject {
    /// Create a primitive with default style.
    pub fn new(kind: GeometryKind, coordinates: Vec<Vector2>) -> Self {
        GeometryObject {
            kind,
            coordinates,
            style: GeometryStyle::default(),
            page_number: 0,
        }
    }

    /// Line segment between two points.
    pub fn line(start: Vector2, end: Vector2) -> Self {
        Self::new(GeometryKind::Line, vec![start, end])
    }

    /// Curve through the given control points.
    pub fn curve(control_points: Vec<Vector2>) -> Self {
        Self::new(GeometryKind::Curve, control_points)
    }

    /// Axis-aligned rectangle from opposite corners.
    pub fn rectangle(top_left: Vector2, bottom_right: Vector2) -> Self {
        Self::new(GeometryKind::Rectangle, vec![top_left, bottom_right])
    }

    /// Circle from center and a point on its radius.
    pub fn circle(center: Vector2, on_radius: Vector2) -> Self {
        Self::new(GeometryKind::Circle, vec![center, on_radius])
    }

    /// Text anchored at a position.
    pub fn text(position: Vector2, content: impl Into<String>) -> Self {
        let mut geom = Self::new(GeometryKind::Text, vec![position]);
        geom.style.content = content.into();
        geom
    }

    /// Replace the style, builder-style.
    pub fn with_style(mut self, style: GeometryStyle) -> Self {
        self.style = style;
        self
    }
}
