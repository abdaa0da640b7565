//! # PlotKit5 Export
//!
//! Serializes sorted [`PathSet`](plotkit5_core::PathSet)s to output
//! formats: SVG documents for preview and archival, G-code for the
//! plotting device itself. Emitters are read-only over the path set; all
//! device-protocol knobs live in explicit config structs.

pub mod error;
pub mod gcode;
pub mod svg;

pub use error::{ExportError, Result};
pub use gcode::{generate, generate_passes, write_gcode, GcodeConfig};
pub use svg::{document, path_data, path_element, write_svg, SvgConfig};
