//! Error handling for PlotKit5
//!
//! Geometry errors are deliberately narrow: degenerate inputs (too few
//! points, zero-length neighbor segments) are neutralized locally and never
//! surface as errors, so the only failure a caller can see from the geometry
//! layer is an arc whose radii cannot reach its chord.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The requested elliptical arc does not exist: the radii are too small
    /// to span the chord and radius autoscaling was disabled.
    #[error(
        "no elliptic arc solution: radii ({rx:.3}, {ry:.3}) cannot reach chord of length {chord:.3}"
    )]
    NoSolution {
        /// The requested x radius after minimum clamping.
        rx: f64,
        /// The requested y radius after minimum clamping.
        ry: f64,
        /// The distance between the arc endpoints.
        chord: f64,
    },
}

/// Result type using GeometryError
pub type Result<T> = std::result::Result<T, GeometryError>;
