//! G-code emission.
//!
//! Serializes a [`PathSet`] using the fly-height / plunge-depth protocol:
//! per stroke the head is raised to the fly height, rapided to the stroke
//! start, plunged to the working depth, then fed through the remaining
//! points. G-code feed rates are sticky, so `F` is emitted only on the
//! first move after each plunge. The footer raises the head once more,
//! returns home, and stops the tool.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use plotkit5_core::{PathSet, Polyline};

use crate::error::Result;

/// Head movement protocol for G-code emission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcodeConfig {
    /// Z height for pen-up travel.
    pub head_up_height: f64,
    /// Z height while drawing; negative values carve below the surface.
    pub head_down_height: f64,
    /// Feed rate for raising the head.
    pub head_up_speed: f64,
    /// Feed rate for plunging the head.
    pub head_down_speed: f64,
    /// Feed rate for drawing moves.
    pub move_speed: f64,
}

impl Default for GcodeConfig {
    fn default() -> Self {
        GcodeConfig {
            head_up_height: 3.0,
            head_down_height: 1.0,
            head_up_speed: 800.0,
            head_down_speed: 500.0,
            move_speed: 300.0,
        }
    }
}

impl GcodeConfig {
    pub fn with_heights(mut self, up: f64, down: f64) -> Self {
        self.head_up_height = up;
        self.head_down_height = down;
        self
    }

    pub fn with_move_speed(mut self, speed: f64) -> Self {
        self.move_speed = speed;
        self
    }
}

/// Emits one stroke: raise, rapid to the start, plunge to `down_height`,
/// feed through the rest (closing the loop for closed strokes).
fn stroke_body(gcode: &mut String, stroke: &Polyline, config: &GcodeConfig, down_height: f64) {
    let points = stroke.points();
    let Some(first) = points.first() else {
        return;
    };

    let _ = writeln!(
        gcode,
        "G0 Z{:.1} F{:.0}",
        config.head_up_height, config.head_up_speed
    );
    let _ = writeln!(gcode, "G0 X{:.1} Y{:.1}", first.x, first.y);
    let _ = writeln!(
        gcode,
        "G1 Z{:.1} F{:.0}",
        down_height, config.head_down_speed
    );

    let mut feed_pending = true;
    let wrap = if stroke.is_closed() && points.len() > 2 {
        Some(*first)
    } else {
        None
    };
    for p in points[1..].iter().chain(wrap.iter()) {
        let _ = write!(gcode, "G1 X{:.1} Y{:.1}", p.x, p.y);
        if feed_pending {
            let _ = write!(gcode, " F{:.0}", config.move_speed);
            feed_pending = false;
        }
        gcode.push('\n');
    }
}

/// Emits a complete single-pass program: `M3` header, every stroke, then
/// raise, home, `M5`.
pub fn generate(path: &PathSet, config: &GcodeConfig) -> String {
    generate_passes(path, config, &[config.head_down_height])
}

/// Emits a multi-pass program: the whole stroke sequence is repeated once
/// per entry of `depths`, each pass plunging to that depth. Scheduling the
/// depths (count and step) is the caller's concern.
pub fn generate_passes(path: &PathSet, config: &GcodeConfig, depths: &[f64]) -> String {
    let mut gcode = String::from("M3\n");

    for (pass, &depth) in depths.iter().enumerate() {
        debug!(pass = pass + 1, depth, "emitting pass");
        for stroke in path {
            stroke_body(&mut gcode, stroke, config, depth);
        }
    }

    let _ = writeln!(gcode, "G0 Z{:.1}", config.head_up_height);
    gcode.push_str("G0 X0 Y0\n");
    gcode.push_str("M5\n");
    gcode
}

/// Emits the program and writes it to `file`.
pub fn write_gcode(path: &PathSet, config: &GcodeConfig, file: impl AsRef<Path>) -> Result<()> {
    fs::write(file, generate(path, config))?;
    Ok(())
}
