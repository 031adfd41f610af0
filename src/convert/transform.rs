//! Batch coordinate normalization.
//!
//! A single transform is computed from the entire input batch before any
//! primitive is converted, then applied identically to every coordinate.
//! The transform is immutable for the lifetime of the batch.

use crate::geometry::GeometryObject;
use crate::types::{BoundingBox2D, Vector2, Vector3};

/// Auto-scale fits the drawing's longest dimension to this many units.
pub const TARGET_SIZE: f64 = 1000.0;

/// Offset/scale applied to every coordinate of one conversion batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    /// Added to every x before scaling
    pub offset_x: f64,
    /// Added to every y before scaling
    pub offset_y: f64,
    /// Uniform scale applied after the offset
    pub scale_factor: f64,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        CoordinateTransform {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_factor: 1.0,
        }
    }
}

impl CoordinateTransform {
    /// Compute the transform for a batch.
    ///
    /// The offset translates the batch bounding-box minimum to the origin.
    /// With `auto_scale` the longest box dimension is fitted to
    /// [`TARGET_SIZE`]; a degenerate box (all points coincide) keeps scale
    /// 1.0. An empty batch keeps the identity transform.
    pub fn from_batch(batch: &[GeometryObject], auto_scale: bool) -> Self {
        let all_points = batch.iter().flat_map(|g| g.coordinates.iter().copied());
        let Some(bounds) = BoundingBox2D::from_points(all_points) else {
            return Self::default();
        };

        let scale_factor = if auto_scale {
            let max_dimension = bounds.max_dimension();
            if max_dimension > 0.0 {
                TARGET_SIZE / max_dimension
            } else {
                1.0
            }
        } else {
            1.0
        };

        CoordinateTransform {
            offset_x: -bounds.min.x,
            offset_y: -bounds.min.y,
            scale_factor,
        }
    }

    /// Map a source coordinate into DXF model space (z = 0)
    pub fn apply(&self, point: Vector2) -> Vector3 {
        Vector3::from_xy(
            (point.x + self.offset_x) * self.scale_factor,
            (point.y + self.offset_y) * self.scale_factor,
        )
    }

    /// Scale a source-space distance into drawing units
    pub fn scale_distance(&self, distance: f64) -> f64 {
        distance * self.scale_factor
    }
}
