//! # dxforge
//!
//! Convert extracted vector-drawing geometry to DXF documents.
//!
//! dxforge takes the flat primitives an upstream extraction stage pulls out
//! of a PDF (lines, curves, rectangles, circles, text) and turns them into
//! a coordinate-normalized DXF drawing: one shared offset/scale transform
//! per batch, Bezier flattening, palette color reduction, per-category
//! layer routing, and ASCII DXF serialization.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dxforge::{ConversionConfig, GeometryObject, Pipeline, Vector2};
//!
//! let geometries = vec![
//!     GeometryObject::line(Vector2::new(0.0, 0.0), Vector2::new(100.0, 50.0)),
//!     GeometryObject::circle(Vector2::new(50.0, 50.0), Vector2::new(75.0, 50.0)),
//! ];
//!
//! let pipeline = Pipeline::new(ConversionConfig::default());
//! let report = pipeline.run(&geometries, "output/drawing.dxf")?;
//! println!("wrote {} entities", report.converted);
//! # Ok::<(), dxforge::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! Data flows strictly left to right, with no component depending on a
//! later one:
//!
//! - [`geometry`] - input primitives from the extraction layer
//! - [`convert`] - coordinate normalization, curve flattening, entity
//!   conversion
//! - [`document`] - the in-memory DXF document and its tables
//! - [`io::dxf`] - the create → write → save → close writer and the ASCII
//!   serializer
//! - [`pipeline`] - the batch entry point tying the stages together

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod document;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pipeline;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use config::{ConversionConfig, WriterOptions};
pub use convert::{CoordinateTransform, GeometryConverter};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use document::DxfDocument;
pub use entities::{Circle, Entity, EntityType, Line, Polyline, Text};
pub use error::{DxfError, Result};
pub use geometry::{CurveKind, GeometryKind, GeometryObject, GeometryStyle};
pub use io::dxf::DxfWriter;
pub use pipeline::{ConversionReport, Pipeline};
pub use tables::{Layer, LineType, Table, TableEntry, TextStyle};
pub use types::{BoundingBox2D, Color, DxfVersion, Handle, LineWeight, Vector2, Vector3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = DxfDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1024);

        let doc2 = DxfDocument::with_version(DxfVersion::AC1009);
        assert_eq!(doc2.version, DxfVersion::AC1009);
    }
}
