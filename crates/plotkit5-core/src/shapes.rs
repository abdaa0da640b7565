//! Input shape primitives.
//!
//! Each primitive resolves itself into strokes through the core path model:
//! an outline [`Polyline`] expanded by [`StrokeStyle`] into concentric pen
//! passes, plus an optional concentric fill. Shape-specific geometry stays
//! here; everything downstream (sorting, emission) sees only path sets.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::arc::Arc;
use crate::error::Result;
use crate::geometry::{remap, Transform, Vec2};
use crate::path::PathSet;
use crate::polyline::Polyline;

/// How a primitive's outline becomes pen strokes.
///
/// Replaces the original ad-hoc per-call keyword plumbing with one explicit
/// struct threaded through scene construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Physical pen nib width.
    pub pen_width: f64,
    /// Desired stroke width; wider than `pen_width` expands into multiple
    /// concentric passes.
    pub stroke_width: f64,
    /// Fill closed outlines with concentric interior rings.
    pub fill: bool,
    /// Fractional overlap between adjacent fill rings.
    pub fill_overlap: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        StrokeStyle {
            pen_width: 0.2,
            stroke_width: 0.2,
            fill: false,
            fill_overlap: 0.15,
        }
    }
}

impl StrokeStyle {
    /// Style drawing single passes with the given pen.
    pub fn pen(pen_width: f64) -> Self {
        StrokeStyle {
            pen_width,
            stroke_width: pen_width,
            ..Self::default()
        }
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Expands an outline into strokes under this style.
    fn render(&self, outline: Polyline) -> PathSet {
        let mut path = outline.stroke_path(self.stroke_width, self.pen_width);
        if self.fill && outline.is_closed() {
            path.append(outline.fill_path(self.pen_width * 2.0, self.fill_overlap));
        }
        path
    }
}

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineShape {
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>) -> Self {
        LineShape {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn outline(&self) -> Polyline {
        Polyline::from_points([self.start, self.end])
    }
}

/// A circle, optionally left open over an angular gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f64,
    /// Half-angle (degrees) of a gap to leave open; `None` draws the full
    /// circle.
    pub open_angle: Option<f64>,
    /// Rotation (degrees) of the gap position.
    pub offset_angle: f64,
}

impl CircleShape {
    pub fn new(center: impl Into<Vec2>, radius: f64) -> Self {
        CircleShape {
            center: center.into(),
            radius,
            open_angle: None,
            offset_angle: 0.0,
        }
    }

    pub fn with_opening(mut self, open_angle: f64, offset_angle: f64) -> Self {
        self.open_angle = Some(open_angle);
        self.offset_angle = offset_angle;
        self
    }

    /// Sample count scaled with the radius, matching the arc solver's
    /// chordal-error policy.
    fn resolution(&self) -> usize {
        (remap(self.radius, 0.0, 180.0, 12.0, 180.0) as usize).max(12)
    }

    pub fn outline(&self) -> Result<Polyline> {
        if let Some(open) = self.open_angle {
            // Open circles are the large arc between the two gap edges.
            let a = Vec2::from_polar(self.center, self.offset_angle + open, self.radius);
            let b = Vec2::from_polar(self.center, self.offset_angle + 360.0 - open, self.radius);
            return Arc::new(a, b, self.radius)
                .with_flags(true, true)
                .to_polyline(None);
        }

        let steps = self.resolution();
        let points: Vec<Vec2> = (0..steps)
            .map(|i| {
                let angle = 360.0 * i as f64 / steps as f64;
                Vec2::from_polar(self.center, angle, self.radius)
            })
            .collect();
        Ok(Polyline::closed_from_points(points))
    }
}

/// An axis-aligned rectangle, optionally rotated about its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub center: Vec2,
    pub size: Vec2,
    pub rotation_deg: f64,
}

impl RectShape {
    pub fn new(center: impl Into<Vec2>, size: impl Into<Vec2>) -> Self {
        RectShape {
            center: center.into(),
            size: size.into(),
            rotation_deg: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn outline(&self) -> Polyline {
        let rx = self.size.x * 0.5;
        let ry = self.size.y * 0.5;
        let corners = [
            Vec2::new(self.center.x - rx, self.center.y - ry),
            Vec2::new(self.center.x + rx, self.center.y - ry),
            Vec2::new(self.center.x + rx, self.center.y + ry),
            Vec2::new(self.center.x - rx, self.center.y + ry),
        ];
        let outline = Polyline::closed_from_points(corners);
        if self.rotation_deg == 0.0 {
            outline
        } else {
            outline.transformed(&Transform::rotation(self.rotation_deg, self.center))
        }
    }
}

/// A regular polygon with `sides` corners on a circumscribed ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegularPolygon {
    pub center: Vec2,
    pub radius: Vec2,
    pub sides: usize,
    pub rotation_deg: f64,
}

impl RegularPolygon {
    pub fn new(center: impl Into<Vec2>, radius: f64, sides: usize) -> Self {
        RegularPolygon {
            center: center.into(),
            radius: Vec2::new(radius, radius),
            sides: sides.max(3),
            rotation_deg: 0.0,
        }
    }

    /// A flat-topped hexagon.
    pub fn hexagon(center: impl Into<Vec2>, radius: f64) -> Self {
        Self::new(center, radius, 6)
    }

    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Corners at equal polar steps, offset by half a step so an edge faces
    /// up.
    pub fn outline(&self) -> Polyline {
        let step = 360.0 / self.sides as f64;
        let points: Vec<Vec2> = (0..self.sides)
            .map(|i| {
                let a = (self.rotation_deg + step * i as f64 - step * 0.5).to_radians();
                Vec2::new(
                    self.center.x + self.radius.x * a.cos(),
                    self.center.y + self.radius.y * a.sin(),
                )
            })
            .collect();
        Polyline::closed_from_points(points)
    }
}

/// An elliptical arc primitive; see [`Arc`] for the parameterization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcShape {
    pub start: Vec2,
    pub end: Vec2,
    pub radius: Vec2,
    pub rotation_deg: f64,
    pub large_arc: bool,
    pub sweep: bool,
    pub autoscale_radius: bool,
}

impl ArcShape {
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>, radius: f64) -> Self {
        ArcShape {
            start: start.into(),
            end: end.into(),
            radius: Vec2::new(radius, radius),
            rotation_deg: 0.0,
            large_arc: true,
            sweep: false,
            autoscale_radius: true,
        }
    }

    pub fn with_flags(mut self, large_arc: bool, sweep: bool) -> Self {
        self.large_arc = large_arc;
        self.sweep = sweep;
        self
    }

    pub fn with_autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale_radius = autoscale;
        self
    }

    pub fn outline(&self) -> Result<Polyline> {
        Arc {
            start: self.start,
            end: self.end,
            radius: self.radius,
            rotation_deg: self.rotation_deg,
            large_arc: self.large_arc,
            sweep: self.sweep,
            autoscale_radius: self.autoscale_radius,
        }
        .to_polyline(None)
    }
}

/// Enum wrapper over every drawable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(LineShape),
    Circle(CircleShape),
    Rect(RectShape),
    Polygon(RegularPolygon),
    Arc(ArcShape),
}

impl Shape {
    /// Resolves the primitive into strokes under `style`.
    ///
    /// # Errors
    ///
    /// Arc-backed shapes propagate [`crate::GeometryError::NoSolution`]
    /// when their radii cannot reach the chord and autoscaling is off.
    pub fn resolve(&self, style: &StrokeStyle) -> Result<PathSet> {
        let outline = match self {
            Shape::Line(s) => s.outline(),
            Shape::Circle(s) => s.outline()?,
            Shape::Rect(s) => s.outline(),
            Shape::Polygon(s) => s.outline(),
            Shape::Arc(s) => s.outline()?,
        };
        Ok(style.render(outline))
    }
}

/// Resolves a list of primitives into one scene path set.
///
/// A primitive that fails to resolve is reported and skipped; one malformed
/// arc never aborts the rest of the scene.
pub fn build_scene(shapes: &[Shape], style: &StrokeStyle) -> PathSet {
    let mut scene = PathSet::new();
    for (i, shape) in shapes.iter().enumerate() {
        match shape.resolve(style) {
            Ok(path) => scene.append(path),
            Err(err) => {
                warn!(index = i, %err, "skipping unresolvable primitive");
            }
        }
    }
    scene
}
