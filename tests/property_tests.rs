//! Property-based invariants for the normalizer and flattener.

use dxforge::convert::{flatten_bezier, CoordinateTransform};
use dxforge::{GeometryObject, Vector2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

fn point() -> impl Strategy<Value = Vector2> {
    (coord(), coord()).prop_map(|(x, y)| Vector2::new(x, y))
}

proptest! {
    #[test]
    fn bezier_endpoints_are_exact(p0 in point(), p1 in point(), p2 in point(), p3 in point()) {
        let points = flatten_bezier(&[p0, p1, p2, p3], 16);
        prop_assert_eq!(points.len(), 17);
        prop_assert_eq!(points[0], p0);
        prop_assert_eq!(*points.last().unwrap(), p3);
    }

    #[test]
    fn transform_moves_batch_minimum_to_origin(points in prop::collection::vec(point(), 1..20)) {
        let batch: Vec<GeometryObject> = points
            .chunks(2)
            .filter(|chunk| chunk.len() == 2)
            .map(|chunk| GeometryObject::line(chunk[0], chunk[1]))
            .collect();
        prop_assume!(!batch.is_empty());

        let transform = CoordinateTransform::from_batch(&batch, false);
        let mapped: Vec<_> = batch
            .iter()
            .flat_map(|g| g.coordinates.iter())
            .map(|p| transform.apply(*p))
            .collect();

        let min_x = mapped.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = mapped.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        prop_assert!(min_x.abs() < 1e-9);
        prop_assert!(min_y.abs() < 1e-9);
        prop_assert!(mapped.iter().all(|p| p.z == 0.0));
    }

    #[test]
    fn auto_scale_never_produces_nonpositive_factor(points in prop::collection::vec(point(), 2..20)) {
        let batch: Vec<GeometryObject> = points
            .chunks(2)
            .filter(|chunk| chunk.len() == 2)
            .map(|chunk| GeometryObject::line(chunk[0], chunk[1]))
            .collect();
        prop_assume!(!batch.is_empty());

        let transform = CoordinateTransform::from_batch(&batch, true);
        prop_assert!(transform.scale_factor > 0.0);
        prop_assert!(transform.scale_factor.is_finite());
    }
}
