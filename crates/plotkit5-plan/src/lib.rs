//! # PlotKit5 Plan
//!
//! Pen travel planning: reorders the strokes of a
//! [`PathSet`](plotkit5_core::PathSet) to cut pen-up travel before
//! emission.
//!
//! The sorter is a greedy nearest-neighbor heuristic, not a TSP solver:
//! each step jumps to the closest remaining stroke endpoint, found in
//! amortized constant time through a uniform-grid index over endpoints.
//! Plotter output only needs travel to be much shorter than drawing, not
//! optimal.

pub mod sort;
pub mod spatial;

pub use sort::PathSorter;
pub use spatial::{EndpointIndex, IndexEntry};
