//! Polyline entity

use super::{Entity, EntityCommon};
use crate::types::{BoundingBox2D, Color, Handle, Vector3};
use bitflags::bitflags;

bitflags! {
    /// POLYLINE group 70 flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PolylineFlags: i16 {
        /// The polyline is closed (last vertex joins the first)
        const CLOSED = 1;
        /// Curve-fit vertices have been added
        const CURVE_FIT = 2;
    }
}

/// An ordered vertex chain, open or closed
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertex chain in drawing order
    pub vertices: Vec<Vector3>,
    /// Polyline flags (closure, fit)
    pub flags: PolylineFlags,
    /// Filled shapes get a constant width equal to the stroke width
    pub filled: bool,
    /// Stroke width in drawing units
    pub width: f64,
}

impl Polyline {
    /// Create an open polyline from a vertex chain
    pub fn from_vertices(vertices: Vec<Vector3>) -> Self {
        Polyline {
            common: EntityCommon::default(),
            vertices,
            flags: PolylineFlags::empty(),
            filled: false,
            width: 0.0,
        }
    }

    /// Mark the polyline as closed
    pub fn close(&mut self) {
        self.flags |= PolylineFlags::CLOSED;
    }

    /// Whether the last vertex joins the first
    pub fn is_closed(&self) -> bool {
        self.flags.contains(PolylineFlags::CLOSED)
    }
}

impl Entity for Polyline {
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
        "POLYLINE"
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(self.vertices.iter().map(|v| v.xy()))
            .unwrap_or(BoundingBox2D::new(Default::default(), Default::default()))
    }
}
