//! Core value types shared by the conversion pipeline and the DXF writer

use crate::error::{DxfError, Result};
use std::fmt;

pub mod bounds;
pub mod color;
pub mod handle;
pub mod line_weight;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use color::Color;
pub use handle::Handle;
pub use line_weight::LineWeight;
pub use vector::{Vector2, Vector3};

/// DXF format version, identified by its `$ACADVER` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DxfVersion {
    /// AutoCAD R12
    AC1009,
    /// AutoCAD 2000
    AC1015,
    /// AutoCAD 2004
    AC1018,
    /// AutoCAD 2007
    AC1021,
    /// AutoCAD 2010
    AC1024,
    /// AutoCAD 2013
    AC1027,
    /// AutoCAD 2018+
    AC1032,
}

impl DxfVersion {
    /// Resolve a configuration version string ("R12", "R2010", ...).
    ///
    /// "R2020" is accepted as an alias for the 2018 format; no newer
    /// on-disk format exists.
    pub fn from_config_str(s: &str) -> Result<Self> {
        match s {
            "R12" => Ok(DxfVersion::AC1009),
            "R2000" => Ok(DxfVersion::AC1015),
            "R2004" => Ok(DxfVersion::AC1018),
            "R2007" => Ok(DxfVersion::AC1021),
            "R2010" => Ok(DxfVersion::AC1024),
            "R2013" => Ok(DxfVersion::AC1027),
            "R2018" | "R2020" => Ok(DxfVersion::AC1032),
            other => Err(DxfError::UnsupportedVersion(other.to_string())),
        }
    }

    /// The string written as `$ACADVER`
    pub fn to_dxf_string(&self) -> &'static str {
        match self {
            DxfVersion::AC1009 => "AC1009",
            DxfVersion::AC1015 => "AC1015",
            DxfVersion::AC1018 => "AC1018",
            DxfVersion::AC1021 => "AC1021",
            DxfVersion::AC1024 => "AC1024",
            DxfVersion::AC1027 => "AC1027",
            DxfVersion::AC1032 => "AC1032",
        }
    }

    /// Human-readable release name
    pub fn release_name(&self) -> &'static str {
        match self {
            DxfVersion::AC1009 => "R12",
            DxfVersion::AC1015 => "R2000",
            DxfVersion::AC1018 => "R2004",
            DxfVersion::AC1021 => "R2007",
            DxfVersion::AC1024 => "R2010",
            DxfVersion::AC1027 => "R2013",
            DxfVersion::AC1032 => "R2018",
        }
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.release_name())
    }
}
