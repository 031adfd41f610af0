//! Line weight representation for DXF entities
//!
//! Line weights are stored in hundredths of a drawing unit, or as the
//! special ByLayer/ByBlock/Default markers.

use std::fmt;

/// Represents line weight in a DXF document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LineWeight {
    /// Use the layer's line weight
    #[default]
    ByLayer,
    /// Use the block's line weight
    ByBlock,
    /// Default line weight
    Standard,
    /// Specific line weight in 1/100 of a drawing unit
    Value(i16),
}

impl LineWeight {
    /// Create a line weight from a raw DXF group 370 value
    pub fn from_raw(value: i16) -> Self {
        match value {
            -1 => LineWeight::ByLayer,
            -2 => LineWeight::ByBlock,
            -3 => LineWeight::Standard,
            v => LineWeight::Value(v),
        }
    }

    /// Convert a stroke width in drawing units into a concrete line weight
    /// (truncated to integer hundredths, matching the document's encoding).
    pub fn from_drawing_units(width: f64) -> Self {
        LineWeight::Value((width * 100.0) as i16)
    }

    /// Get the raw value written to DXF group code 370
    pub fn raw(&self) -> i16 {
        match self {
            LineWeight::ByLayer => -1,
            LineWeight::ByBlock => -2,
            LineWeight::Standard => -3,
            LineWeight::Value(v) => *v,
        }
    }
}

impl fmt::Display for LineWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineWeight::ByLayer => write!(f, "ByLayer"),
            LineWeight::ByBlock => write!(f, "ByBlock"),
            LineWeight::Standard => write!(f, "Standard"),
            LineWeight::Value(v) => write!(f, "{:.2}", *v as f64 / 100.0),
        }
    }
}
