//! Arithmetic primitives for the PPT Atoms validation suite.

pub mod geometry;
pub mod stats;
