//! Conversion configuration.
//!
//! The option surface mirrors what the command-line tool and library
//! callers can tune; everything has a sensible default and the whole
//! structure round-trips through a JSON file.

use crate::error::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Options controlling a PDF-geometry to DXF conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Target DXF version string ("R12" through "R2018").
    pub dxf_version: String,
    /// Drawing unit string driving the `$INSUNITS` header code.
    pub units: String,
    /// Decimal precision carried for downstream tooling.
    pub precision: u32,

    /// Upstream filter threshold; primitives shorter than this are assumed
    /// to have been dropped before conversion.
    pub min_line_length: f64,
    /// Ceiling applied to stroke widths during conversion.
    pub max_line_width: f64,
    /// Reserved for tolerance-based flattening; the current flattener is
    /// fixed-segment.
    pub curve_tolerance: f64,

    /// Fallback ACI color for future explicit overrides.
    pub default_color: i16,
    /// Named stroke-color overrides (name -> ACI index).
    pub stroke_color_mapping: IndexMap<String, i16>,

    /// Route primitives to prefixed per-category layers instead of layer "0".
    pub create_layers: bool,
    /// Prefix prepended to category names when layer routing is enabled.
    pub layer_prefix: String,

    /// Default directory for generated files.
    pub output_directory: String,
    /// Informational flag passed through from extraction; not enforced here.
    pub preserve_scale: bool,
    /// Fit the drawing's longest dimension to a fixed target size.
    pub auto_scale: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        let mut stroke_color_mapping = IndexMap::new();
        for (name, index) in [
            ("black", 0),
            ("white", 7),
            ("red", 1),
            ("green", 3),
            ("blue", 5),
            ("yellow", 2),
            ("cyan", 4),
            ("magenta", 6),
        ] {
            stroke_color_mapping.insert(name.to_string(), index);
        }

        ConversionConfig {
            dxf_version: "R2010".to_string(),
            units: "mm".to_string(),
            precision: 6,
            min_line_length: 0.1,
            max_line_width: 10.0,
            curve_tolerance: 0.01,
            default_color: 7,
            stroke_color_mapping,
            create_layers: true,
            layer_prefix: "PDF_LAYER_".to_string(),
            output_directory: "output".to_string(),
            preserve_scale: true,
            auto_scale: false,
        }
    }
}

impl ConversionConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// The `$INSUNITS` code for the configured unit string.
    ///
    /// Unrecognized units map to 0 (unitless).
    pub fn insunits_code(&self) -> i16 {
        match self.units.as_str() {
            "mm" => 4,
            "cm" => 3,
            "m" => 6,
            "in" => 1,
            _ => 0,
        }
    }
}

/// Writer-side tuning separate from the conversion options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Create the six fixed category layers on document creation.
    pub create_default_layers: bool,
    /// Sample count for cubic Bezier flattening.
    pub curve_segments: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            create_default_layers: true,
            curve_segments: 16,
        }
    }
}
