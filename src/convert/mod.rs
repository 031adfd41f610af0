//! Geometry conversion.
//!
//! Maps extracted primitives one-to-one onto DXF entities, applying the
//! batch coordinate transform, curve flattening, palette color reduction,
//! width clamping, and layer routing.

pub mod flatten;
pub mod transform;

pub use flatten::{flatten_bezier, flatten_curve, flatten_piecewise};
pub use transform::{CoordinateTransform, TARGET_SIZE};

use crate::config::{ConversionConfig, WriterOptions};
use crate::diagnostics::{DiagnosticSink, Severity};
use crate::entities::{Circle, Entity, EntityCommon, EntityType, Line, Polyline, Text};
use crate::error::{DxfError, Result};
use crate::geometry::{GeometryKind, GeometryObject};
use crate::types::Color;
use indexmap::IndexMap;
use tracing::{debug, error, info};

/// Conversion summary exposed after a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStats {
    /// Number of entities produced
    pub total: usize,
    /// Counts grouped by output entity type
    pub by_entity_type: IndexMap<&'static str, usize>,
    /// Counts grouped by resolved layer name
    pub by_layer: IndexMap<String, usize>,
    /// The transform applied to the batch
    pub transform: CoordinateTransform,
}

/// Converts extracted primitives into DXF entities.
///
/// The converter owns the coordinate transform for the duration of one
/// batch: [`GeometryConverter::convert`] computes it from the whole input
/// set before converting any single primitive.
#[derive(Debug)]
pub struct GeometryConverter {
    config: ConversionConfig,
    options: WriterOptions,
    transform: CoordinateTransform,
    by_entity_type: IndexMap<&'static str, usize>,
    by_layer: IndexMap<String, usize>,
    total: usize,
    diagnostics: DiagnosticSink,
}

impl GeometryConverter {
    /// Create a converter for the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_options(config, WriterOptions::default())
    }

    /// Create a converter with explicit writer options
    pub fn with_options(config: ConversionConfig, options: WriterOptions) -> Self {
        GeometryConverter {
            config,
            options,
            transform: CoordinateTransform::default(),
            by_entity_type: IndexMap::new(),
            by_layer: IndexMap::new(),
            total: 0,
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Convert a batch of primitives.
    ///
    /// Produces one entity per input; malformed primitives are skipped with
    /// a recorded diagnostic and never abort the batch.
    pub fn convert(&mut self, batch: &[GeometryObject]) -> Vec<EntityType> {
        info!(count = batch.len(), "converting geometry batch");

        self.transform = CoordinateTransform::from_batch(batch, self.config.auto_scale);
        debug!(
            offset_x = self.transform.offset_x,
            offset_y = self.transform.offset_y,
            scale = self.transform.scale_factor,
            "coordinate system computed"
        );

        self.by_entity_type.clear();
        self.by_layer.clear();
        self.total = 0;
        self.diagnostics = DiagnosticSink::new();

        let mut entities = Vec::with_capacity(batch.len());
        for geometry in batch {
            match self.convert_single(geometry) {
                Ok(entity) => {
                    self.tally(&entity);
                    entities.push(entity);
                }
                Err(err) => {
                    error!(kind = %geometry.kind, "conversion failed: {err}");
                    self.diagnostics.record(
                        Severity::Skipped,
                        format!("{} on page {}: {err}", geometry.kind, geometry.page_number),
                    );
                }
            }
        }

        info!(converted = entities.len(), "geometry batch converted");
        entities
    }

    /// The transform computed for the last batch
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Diagnostics recorded during the last batch
    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// Statistics for the last batch
    pub fn statistics(&self) -> ConversionStats {
        ConversionStats {
            total: self.total,
            by_entity_type: self.by_entity_type.clone(),
            by_layer: self.by_layer.clone(),
            transform: self.transform,
        }
    }

    fn tally(&mut self, entity: &EntityType) {
        self.total += 1;
        *self.by_entity_type.entry(entity.type_name()).or_insert(0) += 1;
        *self
            .by_layer
            .entry(entity.as_entity().layer().to_string())
            .or_insert(0) += 1;
    }

    fn convert_single(&self, geometry: &GeometryObject) -> Result<EntityType> {
        self.check_arity(geometry)?;
        match geometry.kind {
            GeometryKind::Line => self.convert_line(geometry),
            GeometryKind::Curve => self.convert_curve(geometry),
            GeometryKind::Rectangle => self.convert_rectangle(geometry),
            GeometryKind::Circle => self.convert_circle(geometry),
            GeometryKind::Text => self.convert_text(geometry),
        }
    }

    fn check_arity(&self, geometry: &GeometryObject) -> Result<()> {
        let expected = geometry.kind.min_coordinates();
        let found = geometry.coordinates.len();
        if found < expected {
            return Err(DxfError::MalformedGeometry {
                kind: geometry.kind,
                expected,
                found,
            });
        }
        Ok(())
    }

    fn convert_line(&self, geometry: &GeometryObject) -> Result<EntityType> {
        if geometry.coordinates.len() < 2 {
            return Err(DxfError::MalformedGeometry {
                kind: GeometryKind::Line,
                expected: 2,
                found: geometry.coordinates.len(),
            });
        }

        let mut line = Line::from_points(
            self.transform.apply(geometry.coordinates[0]),
            self.transform.apply(geometry.coordinates[1]),
        );
        line.common = self.common_for(geometry, "LINES");
        line.width = self.clamp_width(geometry.style.width);
        Ok(EntityType::Line(line))
    }

    fn convert_curve(&self, geometry: &GeometryObject) -> Result<EntityType> {
        let samples = flatten_curve(
            &geometry.coordinates,
            geometry.style.curve_kind,
            self.options.curve_segments,
        );

        if samples.len() < 2 {
            // Too short to flatten; draw the chord instead.
            return self.convert_line(geometry);
        }

        let vertices = samples.iter().map(|p| self.transform.apply(*p)).collect();
        let mut polyline = Polyline::from_vertices(vertices);
        polyline.common = self.common_for(geometry, "CURVES");
        polyline.width = self.clamp_width(geometry.style.width);
        Ok(EntityType::Polyline(polyline))
    }

    fn convert_rectangle(&self, geometry: &GeometryObject) -> Result<EntityType> {
        let top_left = geometry.coordinates[0];
        let bottom_right = geometry.coordinates[1];

        // Corner order is fixed: TL, TR, BR, BL, back to TL.
        let corners = [
            top_left,
            crate::types::Vector2::new(bottom_right.x, top_left.y),
            bottom_right,
            crate::types::Vector2::new(top_left.x, bottom_right.y),
            top_left,
        ];

        let vertices = corners.iter().map(|p| self.transform.apply(*p)).collect();
        let mut polyline = Polyline::from_vertices(vertices);
        polyline.close();
        polyline.common = self.common_for(geometry, "RECTANGLES");
        polyline.filled = geometry.style.filled;
        polyline.width = self.clamp_width(geometry.style.width);
        Ok(EntityType::Polyline(polyline))
    }

    fn convert_circle(&self, geometry: &GeometryObject) -> Result<EntityType> {
        let center = geometry.coordinates[0];
        let on_radius = geometry.coordinates[1];
        let radius = self.transform.scale_distance(center.distance(&on_radius));

        let mut circle = Circle::new(self.transform.apply(center), radius);
        circle.common = self.common_for(geometry, "CIRCLES");
        circle.width = self.clamp_width(geometry.style.width);
        circle.filled = geometry.style.filled;
        Ok(EntityType::Circle(circle))
    }

    fn convert_text(&self, geometry: &GeometryObject) -> Result<EntityType> {
        let position = self.transform.apply(geometry.coordinates[0]);
        let height = geometry.style.font_size * self.transform.scale_factor;

        let mut text = Text::new(position, geometry.style.content.clone(), height);
        text.common = self.common_for(geometry, "TEXT");
        Ok(EntityType::Text(text))
    }

    fn common_for(&self, geometry: &GeometryObject, category: &str) -> EntityCommon {
        let [r, g, b] = geometry.style.color;
        EntityCommon::new(self.layer_name(category), Color::from_normalized_rgb(r, g, b))
    }

    fn layer_name(&self, category: &str) -> String {
        if !self.config.create_layers {
            return "0".to_string();
        }
        format!("{}{}", self.config.layer_prefix, category)
    }

    fn clamp_width(&self, width: f64) -> f64 {
        width.min(self.config.max_line_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryStyle;
    use crate::types::Vector2;

    fn converter() -> GeometryConverter {
        GeometryConverter::new(ConversionConfig::default())
    }

    #[test]
    fn test_line_conversion() {
        let mut conv = converter();
        let batch = vec![GeometryObject::line(
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
        )];
        let entities = conv.convert(&batch);
        assert_eq!(entities.len(), 1);
        match &entities[0] {
            EntityType::Line(line) => {
                assert_eq!(line.length(), 10.0);
                assert_eq!(line.common.layer, "PDF_LAYER_LINES");
            }
            other => panic!("expected LINE, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_rectangle_closure() {
        let mut conv = converter();
        let batch = vec![GeometryObject::rectangle(
            Vector2::new(0.0, 10.0),
            Vector2::new(10.0, 0.0),
        )];
        let entities = conv.convert(&batch);
        match &entities[0] {
            EntityType::Polyline(poly) => {
                assert_eq!(poly.vertices.len(), 5);
                assert_eq!(poly.vertices[0], poly.vertices[4]);
                assert!(poly.is_closed());
            }
            other => panic!("expected POLYLINE, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_circle_radius() {
        let mut conv = converter();
        let batch = vec![GeometryObject::circle(
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 4.0),
        )];
        let entities = conv.convert(&batch);
        match &entities[0] {
            EntityType::Circle(circle) => assert_eq!(circle.radius, 5.0),
            other => panic!("expected CIRCLE, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_width_clamp() {
        let mut conv = converter();
        let mut geom = GeometryObject::line(Vector2::ZERO, Vector2::new(1.0, 0.0));
        geom.style.width = 20.0;
        let entities = conv.convert(&[geom]);
        match &entities[0] {
            EntityType::Line(line) => assert_eq!(line.width, 10.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_layer_routing_disabled() {
        let mut config = ConversionConfig::default();
        config.create_layers = false;
        let mut conv = GeometryConverter::new(config);
        let entities = conv.convert(&[GeometryObject::text(Vector2::ZERO, "x")]);
        assert_eq!(entities[0].as_entity().layer(), "0");
    }

    #[test]
    fn test_malformed_primitive_skipped() {
        let mut conv = converter();
        let batch = vec![
            GeometryObject::line(Vector2::ZERO, Vector2::new(1.0, 1.0)),
            GeometryObject::new(GeometryKind::Line, vec![Vector2::ZERO]),
            GeometryObject::text(Vector2::ZERO, "ok"),
        ];
        let entities = conv.convert(&batch);
        assert_eq!(entities.len(), 2);
        assert_eq!(conv.diagnostics().len(), 1);
        assert!(conv.diagnostics().has(Severity::Skipped));
    }

    #[test]
    fn test_statistics() {
        let mut conv = converter();
        let batch = vec![
            GeometryObject::line(Vector2::ZERO, Vector2::new(1.0, 1.0)),
            GeometryObject::line(Vector2::ZERO, Vector2::new(2.0, 2.0)),
            GeometryObject::circle(Vector2::new(1.0, 1.0), Vector2::new(2.0, 1.0)),
        ];
        conv.convert(&batch);
        let stats = conv.statistics();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_entity_type.get("LINE"), Some(&2));
        assert_eq!(stats.by_entity_type.get("CIRCLE"), Some(&1));
        assert_eq!(stats.by_layer.get("PDF_LAYER_LINES"), Some(&2));
    }

    #[test]
    fn test_text_height_scales() {
        let mut config = ConversionConfig::default();
        config.auto_scale = true;
        let mut conv = GeometryConverter::new(config);

        // 100-unit wide batch scales by 10.
        let mut text = GeometryObject::text(Vector2::ZERO, "T");
        text.style.font_size = 12.0;
        let batch = vec![
            GeometryObject::line(Vector2::ZERO, Vector2::new(100.0, 0.0)),
            text,
        ];
        let entities = conv.convert(&batch);
        match &entities[1] {
            EntityType::Text(t) => assert_eq!(t.height, 120.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_curve_produces_polyline() {
        let mut conv = converter();
        let curve = GeometryObject::curve(vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 5.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(15.0, 5.0),
        ]);
        let entities = conv.convert(&[curve]);
        match &entities[0] {
            EntityType::Polyline(poly) => {
                assert_eq!(poly.vertices.len(), 17);
                assert!(!poly.is_closed());
                assert_eq!(poly.common.layer, "PDF_LAYER_CURVES");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_two_point_curve_is_malformed() {
        let mut conv = converter();
        let curve = GeometryObject::curve(vec![Vector2::ZERO, Vector2::new(4.0, 3.0)]);
        let entities = conv.convert(&[curve]);
        assert!(entities.is_empty());
        assert_eq!(conv.diagnostics().len(), 1);
    }

    #[test]
    fn test_non_bezier_curve_interpolates() {
        let mut conv = converter();
        let mut curve = GeometryObject::curve(vec![
            Vector2::ZERO,
            Vector2::new(4.0, 3.0),
            Vector2::new(8.0, 0.0),
        ]);
        curve.style = GeometryStyle {
            curve_kind: crate::geometry::CurveKind::Arc,
            ..GeometryStyle::default()
        };
        let entities = conv.convert(&[curve]);
        match &entities[0] {
            EntityType::Polyline(poly) => assert_eq!(poly.vertices.len(), 12),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_determinism() {
        let batch = vec![
            GeometryObject::line(Vector2::new(1.5, 2.5), Vector2::new(9.0, 4.0)),
            GeometryObject::circle(Vector2::new(3.0, 3.0), Vector2::new(6.0, 7.0)),
        ];
        let mut a = converter();
        let mut b = converter();
        assert_eq!(a.convert(&batch), b.convert(&batch));
    }
}
