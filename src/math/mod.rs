//! Numeric helpers shared by the colour metrics

/// Distance functions over small fixed-size vectors
pub mod distance;
