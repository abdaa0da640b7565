//! SVG document emission.
//!
//! Serializes a [`PathSet`] into a `<path>` element inside a `<g>` wrapper:
//! each stroke becomes `M x y L x y ...`, concatenated with no separator so
//! every leading `M` marks a pen lift. Coordinates use `f64` display
//! formatting, which round-trips through standard SVG path parsers.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use plotkit5_core::{PathSet, Polyline, Units};

use crate::error::Result;

/// Physical page setup for an emitted SVG document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgConfig {
    /// Page width in `units`.
    pub width: f64,
    /// Page height in `units`.
    pub height: f64,
    pub units: Units,
    /// ViewBox scale relative to the page size.
    pub scale: f64,
    /// Displayed stroke width for path elements (the pen width).
    pub stroke_width: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self::a3()
    }
}

impl SvgConfig {
    /// A custom page size in millimeters.
    pub fn new(width: f64, height: f64) -> Self {
        SvgConfig {
            width,
            height,
            units: Units::Mm,
            scale: 1.0,
            stroke_width: 0.2,
        }
    }

    /// A4 portrait (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(210.0, 297.0)
    }

    /// A4 landscape (297 x 210 mm).
    pub fn a4_landscape() -> Self {
        Self::new(297.0, 210.0)
    }

    /// A3 portrait (297 x 420 mm).
    pub fn a3() -> Self {
        Self::new(297.0, 420.0)
    }

    /// A3 landscape (420 x 297 mm).
    pub fn a3_landscape() -> Self {
        Self::new(420.0, 297.0)
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Path data for one stroke: `M` to the first point, `L` through the rest,
/// and for closed strokes a final `L` back to the start so the pen
/// physically closes the loop.
fn stroke_data(stroke: &Polyline) -> String {
    let mut d = String::new();
    for (i, p) in stroke.points().iter().enumerate() {
        if i == 0 {
            let _ = write!(d, "M{} {}", p.x, p.y);
        } else {
            let _ = write!(d, " L{} {}", p.x, p.y);
        }
    }
    if stroke.is_closed() && stroke.len() > 2 {
        if let Some(first) = stroke.first() {
            let _ = write!(d, " L{} {}", first.x, first.y);
        }
    }
    d
}

/// Concatenated path data for every stroke. Each stroke's leading `M` is
/// the pen-lift separator; no other separator is emitted.
pub fn path_data(path: &PathSet) -> String {
    let mut d = String::new();
    for stroke in path {
        d.push_str(&stroke_data(stroke));
    }
    d
}

/// A `<path>` element for the whole path set.
pub fn path_element(path: &PathSet, stroke_width: f64) -> String {
    format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\"/>\n",
        path_data(path),
        stroke_width
    )
}

/// A complete SVG document for the path set.
pub fn document(path: &PathSet, config: &SvgConfig) -> String {
    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    let _ = write!(
        svg,
        "<svg width=\"{w}{u}\" height=\"{h}{u}\" viewBox=\"0,0,{vw},{vh}\" \
         baseProfile=\"tiny\" version=\"1.2\" xmlns=\"http://www.w3.org/2000/svg\">",
        w = config.width,
        h = config.height,
        u = config.units.suffix(),
        vw = config.width * config.scale,
        vh = config.height * config.scale,
    );
    svg.push_str("<defs/>");
    svg.push_str("<g id=\"plot\">");
    svg.push_str(&path_element(path, config.stroke_width));
    svg.push_str("</g></svg>");
    svg
}

/// Emits the document and writes it to `file`.
pub fn write_svg(path: &PathSet, config: &SvgConfig, file: impl AsRef<Path>) -> Result<()> {
    fs::write(file, document(path, config))?;
    Ok(())
}
