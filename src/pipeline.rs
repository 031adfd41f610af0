//! End-to-end conversion pipeline.
//!
//! Orchestrates one batch: convert the extracted primitives, create a
//! document, write the entities, save, and close. Recoverable per-primitive
//! problems are collected into the report; usage and I/O failures abort the
//! run and are surfaced to the caller.

use crate::config::{ConversionConfig, WriterOptions};
use crate::convert::{ConversionStats, GeometryConverter};
use crate::diagnostics::Diagnostic;
use crate::error::{DxfError, Result};
use crate::geometry::GeometryObject;
use crate::io::dxf::{DocumentStats, DxfWriter};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of one pipeline run
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Where the DXF file was written
    pub output_path: PathBuf,
    /// Entities written to the document
    pub converted: usize,
    /// Primitives dropped along the way
    pub skipped: usize,
    /// Conversion-side statistics (transform, per-type/per-layer counts)
    pub conversion: ConversionStats,
    /// Document-side statistics (version, units, layers, entity counts)
    pub document: DocumentStats,
    /// All diagnostics collected from the converter and the writer
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts batches of extracted geometry into DXF files
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ConversionConfig,
    options: WriterOptions,
}

impl Pipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self::with_options(config, WriterOptions::default())
    }

    /// Create a pipeline with explicit writer options
    pub fn with_options(config: ConversionConfig, options: WriterOptions) -> Self {
        Pipeline { config, options }
    }

    /// Run the full conversion for one batch.
    ///
    /// Fails with [`DxfError::EmptyBatch`] when the input contains no
    /// primitives or none of them survive conversion; malformed primitives
    /// inside a non-empty result only show up as diagnostics.
    pub fn run<P: AsRef<Path>>(
        &self,
        geometries: &[GeometryObject],
        output_path: P,
    ) -> Result<ConversionReport> {
        let output_path = output_path.as_ref();
        info!(
            count = geometries.len(),
            output = %output_path.display(),
            "starting conversion"
        );

        if geometries.is_empty() {
            warn!("no geometry extracted, nothing to convert");
            return Err(DxfError::EmptyBatch);
        }

        let mut converter =
            GeometryConverter::with_options(self.config.clone(), self.options.clone());
        let entities = converter.convert(geometries);
        if entities.is_empty() {
            warn!("no entities produced from {} primitives", geometries.len());
            return Err(DxfError::EmptyBatch);
        }

        let mut writer = DxfWriter::with_options(self.config.clone(), self.options.clone());
        let result = self.write_and_save(&mut writer, &entities, output_path);
        let stats = writer.statistics();
        let mut diagnostics = converter.diagnostics().iter().cloned().collect::<Vec<_>>();
        diagnostics.extend(writer.diagnostics().iter().cloned());
        // The in-memory document is released on both paths.
        writer.close();

        let (saved_path, written) = result?;
        let document = stats.ok_or(DxfError::Usage("document discarded before statistics"))?;

        let report = ConversionReport {
            output_path: saved_path,
            converted: written,
            skipped: diagnostics.len(),
            conversion: converter.statistics(),
            document,
            diagnostics,
        };

        info!(
            converted = report.converted,
            skipped = report.skipped,
            "conversion finished"
        );
        Ok(report)
    }

    fn write_and_save(
        &self,
        writer: &mut DxfWriter,
        entities: &[crate::entities::EntityType],
        output_path: &Path,
    ) -> Result<(PathBuf, usize)> {
        writer.create_document()?;
        let written = writer.write_entities(entities)?;
        let saved_path = writer.save(output_path)?;
        Ok((saved_path, written))
    }
}
