//! Error types for the dxforge library

use crate::geometry::GeometryKind;
use std::io;
use thiserror::Error;

/// Main error type for conversion and writing operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported DXF format version string
    #[error("Unsupported DXF version: {0:?}")]
    UnsupportedVersion(String),

    /// Writer invoked out of sequence (e.g. write before create)
    #[error("Writer usage error: {0}")]
    Usage(&'static str),

    /// A primitive does not satisfy its kind's coordinate arity
    #[error("{kind} geometry needs at least {expected} coordinates, got {found}")]
    MalformedGeometry {
        kind: GeometryKind,
        expected: usize,
        found: usize,
    },

    /// The input batch produced no output at all
    #[error("No geometry to convert")]
    EmptyBatch,

    /// Configuration or geometry JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for dxforge operations
pub type Result<T> = std::result::Result<T, DxfError>;
