//! SVG-style elliptical arcs.
//!
//! Converts an endpoint parameterization (start, end, radii, x-axis
//! rotation, large-arc/sweep flags) into center form (center, start angle,
//! angular span) per the W3C arc implementation notes, then samples the
//! result into a [`Polyline`]. Every `acos`/`sqrt` argument is clamped
//! before use so floating error can never surface as NaN.

use tracing::warn;

use crate::error::{GeometryError, Result};
use crate::geometry::{remap, Vec2};
use crate::polyline::Polyline;

/// Radii are clamped to this minimum to avoid division by zero.
const MIN_RADIUS: f64 = 0.001;

/// An elliptical arc in endpoint parameterization. Transient: resolved
/// immediately into center form or a sampled polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub start: Vec2,
    pub end: Vec2,
    /// Ellipse radii; constructors normalize a scalar radius into a pair.
    pub radius: Vec2,
    /// Rotation of the ellipse x-axis, degrees.
    pub rotation_deg: f64,
    pub large_arc: bool,
    pub sweep: bool,
    /// When the radii are too small for the chord, scale them up to the
    /// smallest valid ellipse instead of failing.
    pub autoscale_radius: bool,
}

/// An arc resolved to center parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Vec2,
    /// Start angle on the unit circle, degrees.
    pub theta_deg: f64,
    /// Signed angular span, degrees.
    pub delta_deg: f64,
    /// Effective radii after any autoscaling.
    pub radius: Vec2,
    /// Rotation of the ellipse x-axis, degrees.
    pub rotation_deg: f64,
    start: Vec2,
    end: Vec2,
}

impl Arc {
    /// Creates a circular arc with a uniform radius.
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>, radius: f64) -> Self {
        Self::elliptical(start, end, Vec2::new(radius, radius))
    }

    /// Creates an elliptical arc with separate x/y radii.
    pub fn elliptical(start: impl Into<Vec2>, end: impl Into<Vec2>, radius: Vec2) -> Self {
        Arc {
            start: start.into(),
            end: end.into(),
            radius,
            rotation_deg: 0.0,
            large_arc: true,
            sweep: false,
            autoscale_radius: true,
        }
    }

    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
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

    /// Chord length between the endpoints.
    pub fn chord(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Solves the endpoint parameterization into center form.
    ///
    /// # Errors
    ///
    /// [`GeometryError::NoSolution`] when the radii cannot reach the chord
    /// and autoscaling is disabled.
    pub fn solve(&self) -> Result<CenterArc> {
        let mut rx = self.radius.x.max(MIN_RADIUS);
        let mut ry = self.radius.y.max(MIN_RADIUS);

        // Zero-length chord: every ellipse through the point qualifies, so
        // collapse to a zero-span arc at it instead of dividing by zero.
        if self.start == self.end {
            return Ok(CenterArc {
                center: self.start,
                theta_deg: 0.0,
                delta_deg: 0.0,
                radius: Vec2::new(rx, ry),
                rotation_deg: self.rotation_deg,
                start: self.start,
                end: self.end,
            });
        }

        let phi = self.rotation_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();

        // Half-chord in the frame where the ellipse axes align with x/y:
        // rotate (start - end) / 2 by -phi.
        let half = (self.start - self.end) * 0.5;
        let x1p = cos_phi * half.x + sin_phi * half.y;
        let y1p = cos_phi * half.y - sin_phi * half.x;
        let x1p_sq = x1p * x1p;
        let y1p_sq = y1p * y1p;

        // An ellipse through both endpoints exists iff this ratio is <= 1.
        let radius_check = x1p_sq / (rx * rx) + y1p_sq / (ry * ry);
        if radius_check > 1.0 {
            if self.autoscale_radius {
                let s = radius_check.sqrt();
                warn!(
                    rx,
                    ry,
                    scale = s,
                    "arc radii too small for chord, autoscaling"
                );
                rx *= s;
                ry *= s;
            } else {
                return Err(GeometryError::NoSolution {
                    rx,
                    ry,
                    chord: self.chord(),
                });
            }
        }

        let rx_sq = rx * rx;
        let ry_sq = ry * ry;

        // Center candidate in the rotated frame. The radicand collapses to
        // zero exactly when the chord spans the full ellipse; float error
        // can push it slightly negative, so clamp before the root.
        let tmp = rx_sq * y1p_sq + ry_sq * x1p_sq;
        let radicand = ((rx_sq * ry_sq - tmp) / tmp).max(0.0);
        let radical = radicand.sqrt();

        let (cxp, cyp) = if self.large_arc == self.sweep {
            (-radical * (rx * y1p / ry), radical * (ry * x1p / rx))
        } else {
            (radical * (rx * y1p / ry), -radical * (ry * x1p / rx))
        };

        let mid = self.start.lerp(self.end, 0.5);
        let center = Vec2::new(
            cos_phi * cxp - sin_phi * cyp + mid.x,
            sin_phi * cxp + cos_phi * cyp + mid.y,
        );

        // Endpoints on the unit circle, clamped against rounding.
        let u1 = Vec2::new(
            ((x1p - cxp) / rx).clamp(-1.0, 1.0),
            ((y1p - cyp) / ry).clamp(-1.0, 1.0),
        );
        let u2 = Vec2::new(
            ((-x1p - cxp) / rx).clamp(-1.0, 1.0),
            ((-y1p - cyp) / ry).clamp(-1.0, 1.0),
        );

        // Start angle. On the axis the acos argument degenerates; the
        // negative-axis case intentionally yields 180 rather than the 0 the
        // W3C notes suggest, matching established caller expectations.
        let theta_deg = if u1.y > 0.0 {
            u1.x.acos().to_degrees()
        } else if u1.y < 0.0 {
            -u1.x.acos().to_degrees()
        } else if u1.x > 0.0 {
            0.0
        } else {
            180.0
        };

        // Signed span between u1 and u2, same guarded-acos treatment for
        // the parallel/antiparallel degeneracies.
        let det = u1.x * u2.y - u1.y * u2.x;
        let dot = u1.dot(u2).clamp(-1.0, 1.0);
        let mut delta_deg = if det > 0.0 {
            dot.acos().to_degrees()
        } else if det < 0.0 {
            -dot.acos().to_degrees()
        } else if dot > 0.0 {
            0.0
        } else {
            180.0
        };

        if !self.sweep && delta_deg >= 0.0 {
            delta_deg -= 360.0;
        } else if self.large_arc && delta_deg <= 0.0 {
            delta_deg += 360.0;
        }

        Ok(CenterArc {
            center,
            theta_deg,
            delta_deg,
            radius: Vec2::new(rx, ry),
            rotation_deg: self.rotation_deg,
            start: self.start,
            end: self.end,
        })
    }

    /// Resolves the arc into a sampled polyline.
    ///
    /// The sample count scales with the larger radius (remapped from
    /// [0, 180] radius units to [12, 180] samples) so chordal error stays
    /// roughly constant across arc sizes; pass `resolution` to override.
    /// A zero-length chord degenerates to the single start point.
    pub fn to_polyline(&self, resolution: Option<usize>) -> Result<Polyline> {
        if self.start == self.end {
            return Ok(Polyline::from_points([self.start]));
        }

        let solved = self.solve()?;
        let steps = resolution.unwrap_or_else(|| {
            let r = self.radius.x.max(self.radius.y);
            (remap(r, 0.0, 180.0, 12.0, 180.0) as usize).max(2)
        });

        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            points.push(solved.point_at(i as f64 / steps as f64));
        }
        Ok(Polyline::from_points(points))
    }
}

impl CenterArc {
    /// Evaluates the arc at `t` in `[0, 1]`. Values at or beyond the ends
    /// return the exact endpoints.
    pub fn point_at(&self, t: f64) -> Vec2 {
        if t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }

        let angle = (self.theta_deg + t * self.delta_deg).to_radians();
        let (sin_a, cos_a) = angle.sin_cos();
        let (sin_phi, cos_phi) = self.rotation_deg.to_radians().sin_cos();
        let rx = self.radius.x;
        let ry = self.radius.y;

        Vec2::new(
            rx * cos_phi * cos_a - ry * sin_phi * sin_a + self.center.x,
            rx * sin_phi * cos_a + ry * cos_phi * sin_a + self.center.y,
        )
    }
}
