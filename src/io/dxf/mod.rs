//! ASCII DXF serialization

pub mod writer;

pub use writer::{DocumentStats, DxfWriter, LayerInfo};
