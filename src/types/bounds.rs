//! Bounding box over a batch of extracted coordinates

use super::Vector2;
use std::fmt;

/// 2D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = BoundingBox2D {
            min: first,
            max: first,
        };
        for point in iter {
            bounds.expand_to_include(point);
        }
        Some(bounds)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Longest side of the box
    pub fn max_dimension(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox2D[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let bounds = BoundingBox2D::from_points([
            Vector2::new(3.0, 7.0),
            Vector2::new(-1.0, 2.0),
            Vector2::new(5.0, 4.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, Vector2::new(-1.0, 2.0));
        assert_eq!(bounds.max, Vector2::new(5.0, 7.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 5.0);
        assert_eq!(bounds.max_dimension(), 6.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(BoundingBox2D::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn test_degenerate_box() {
        let p = Vector2::new(4.0, 4.0);
        let bounds = BoundingBox2D::from_points([p, p]).unwrap();
        assert_eq!(bounds.max_dimension(), 0.0);
    }
}
