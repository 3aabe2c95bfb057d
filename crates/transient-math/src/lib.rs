//! Mathematical primitives for Transient Fit Core.

pub mod integrate;
pub mod poly;
