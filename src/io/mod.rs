//! File format I/O

pub mod dxf;
