//! Error types for universe construction and resizing.
//!
//! Stepping and cell access are total over wrapped coordinates, so the only
//! failures are invalid dimensions or seeding parameters.

/// Errors that can occur when building or resizing a universe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UniverseError {
    /// Width or height was zero.
    #[error("universe dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Random seeding density outside `[0.0, 1.0]`.
    #[error("seeding density must be within 0.0..=1.0 (got {0})")]
    InvalidDensity(f64),
}
