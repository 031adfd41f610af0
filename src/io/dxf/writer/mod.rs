//! DXF writer module
//!
//! [`DxfWriter`] drives one create → write → save → close cycle over an
//! in-memory [`DxfDocument`]. Calling write or save before create is a
//! usage error; close discards the document so the writer can start a
//! fresh, independent one.

mod section_writer;
mod stream_writer;
mod text_writer;

pub use section_writer::SectionWriter;
pub use stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::DxfTextWriter;

use crate::config::{ConversionConfig, WriterOptions};
use crate::diagnostics::{DiagnosticSink, Severity};
use crate::document::DxfDocument;
use crate::entities::{Entity, EntityType};
use crate::error::{DxfError, Result};
use crate::tables::Layer;
use crate::types::{Color, DxfVersion};
use indexmap::IndexMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The six category layers created on every new document, with their
/// fixed colors
const DEFAULT_LAYERS: [(&str, Color); 6] = [
    ("LINES", Color::WHITE),
    ("CURVES", Color::BLUE),
    ("RECTANGLES", Color::GREEN),
    ("CIRCLES", Color::RED),
    ("TEXT", Color::YELLOW),
    ("DIMENSIONS", Color::MAGENTA),
];

/// One row of the layer table in a statistics report
#[derive(Debug, Clone, PartialEq)]
pub struct LayerInfo {
    /// Layer name
    pub name: String,
    /// ACI color index
    pub color: i16,
    /// Line type name
    pub line_type: String,
}

/// Document metadata reported by [`DxfWriter::statistics`]
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStats {
    /// Configured DXF version string
    pub dxf_version: String,
    /// Configured unit string
    pub units: String,
    /// Full layer table
    pub layers: Vec<LayerInfo>,
    /// Number of entities in the document
    pub total_entities: usize,
    /// Entity counts grouped by type name
    pub entity_counts: IndexMap<&'static str, usize>,
}

/// Writes converted entities into a DXF file
#[derive(Debug)]
pub struct DxfWriter {
    config: ConversionConfig,
    options: WriterOptions,
    document: Option<DxfDocument>,
    diagnostics: DiagnosticSink,
}

impl DxfWriter {
    /// Create a writer for the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_options(config, WriterOptions::default())
    }

    /// Create a writer with explicit options
    pub fn with_options(config: ConversionConfig, options: WriterOptions) -> Self {
        DxfWriter {
            config,
            options,
            document: None,
            diagnostics: DiagnosticSink::new(),
        }
    }

    /// Create a fresh in-memory document at the configured version.
    ///
    /// Sets up the six default category layers and the header fields
    /// (version, unit code, timestamps). Replaces any previous document.
    pub fn create_document(&mut self) -> Result<()> {
        let version = DxfVersion::from_config_str(&self.config.dxf_version)?;
        let mut document = DxfDocument::with_version(version);
        document.insunits = self.config.insunits_code();

        if self.options.create_default_layers {
            for (name, color) in DEFAULT_LAYERS {
                document.add_layer(Layer::with_color(name, color));
            }
        }

        info!(version = %version, "DXF document created");
        self.document = Some(document);
        self.diagnostics = DiagnosticSink::new();
        Ok(())
    }

    /// Add converted entities to the document.
    ///
    /// Individual invalid entities (a polyline with fewer than 2 vertices)
    /// are skipped with a recorded diagnostic; the rest of the batch is
    /// written. Returns the number of entities actually added.
    pub fn write_entities(&mut self, entities: &[EntityType]) -> Result<usize> {
        let document = self
            .document
            .as_mut()
            .ok_or(DxfError::Usage("write_entities called before create_document"))?;

        info!(count = entities.len(), "writing entities");

        let mut written = 0;
        for entity in entities {
            if let EntityType::Polyline(polyline) = entity {
                if polyline.vertices.len() < 2 {
                    warn!(
                        vertices = polyline.vertices.len(),
                        "skipping degenerate polyline"
                    );
                    self.diagnostics.record(
                        Severity::Skipped,
                        format!(
                            "POLYLINE with {} vertices needs at least 2",
                            polyline.vertices.len()
                        ),
                    );
                    continue;
                }
            }
            // Entity layers implied by the routing scheme must exist in
            // the layer table.
            let layer = entity.as_entity().layer();
            if !document.layers.contains(layer) {
                document.add_layer(Layer::new(layer));
            }
            document.add_entity(entity.clone());
            written += 1;
        }

        Ok(written)
    }

    /// Serialize the document to `path`, creating the destination
    /// directory if necessary. Returns the path written.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<PathBuf> {
        let document = self
            .document
            .as_ref()
            .ok_or(DxfError::Usage("save called before create_document"))?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let mut writer = DxfTextWriter::new(BufWriter::new(file));
        let mut sections = SectionWriter::new(&mut writer);
        sections.write_document(document)?;
        writer.flush()?;

        info!(path = %path.display(), "DXF file saved");
        Ok(path.to_path_buf())
    }

    /// Report version/unit metadata, the layer table and entity counts.
    ///
    /// Returns `None` when no document exists.
    pub fn statistics(&self) -> Option<DocumentStats> {
        let document = self.document.as_ref()?;
        let layers = document
            .layers
            .iter()
            .map(|layer| LayerInfo {
                name: layer.name.clone(),
                color: layer.color.aci(),
                line_type: layer.line_type.clone(),
            })
            .collect();

        Some(DocumentStats {
            dxf_version: self.config.dxf_version.clone(),
            units: self.config.units.clone(),
            layers,
            total_entities: document.entity_count(),
            entity_counts: document.entity_counts(),
        })
    }

    /// Diagnostics recorded while writing the current document
    pub fn diagnostics(&self) -> &DiagnosticSink {
        &self.diagnostics
    }

    /// Access the in-memory document, if one exists
    pub fn document(&self) -> Option<&DxfDocument> {
        self.document.as_ref()
    }

    /// Discard the in-memory document.
    ///
    /// Required before starting the next conversion; a closed writer must
    /// call [`DxfWriter::create_document`] again before writing or saving.
    pub fn close(&mut self) {
        if self.document.take().is_some() {
            info!("DXF document closed");
        }
    }
}
