//! Core 2D geometry types: vectors and affine transforms.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D point or vector with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new vector with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point.
    pub fn distance(&self, other: Vec2) -> f64 {
        (other - *self).length()
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the unit vector in this direction, or `None` for a
    /// zero-length vector.
    pub fn normalized(&self) -> Option<Vec2> {
        let len = self.length();
        if len == 0.0 {
            return None;
        }
        Some(Vec2::new(self.x / len, self.y / len))
    }

    /// The left-hand perpendicular `(-y, x)`.
    pub fn perp(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Linear interpolation between `self` and `other` at `t`.
    pub fn lerp(&self, other: Vec2, t: f64) -> Vec2 {
        *self * (1.0 - t) + other * t
    }

    /// Point at `angle_deg` degrees and `radius` distance from `center`.
    pub fn from_polar(center: Vec2, angle_deg: f64, radius: f64) -> Vec2 {
        let a = angle_deg.to_radians();
        Vec2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
    }

    /// Angle (degrees) and distance of `self` relative to `center`.
    pub fn to_polar(&self, center: Vec2) -> (f64, f64) {
        let d = *self - center;
        (d.y.atan2(d.x).to_degrees(), d.length())
    }

    /// True when both coordinates are finite. Non-finite points mark pen-up
    /// breaks in collaborator point streams.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

/// Remaps `value` from the range `[in_min, in_max]` to `[out_min, out_max]`.
/// The mapping is linear and not clamped.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let in_span = in_max - in_min;
    let out_span = out_max - out_min;
    let mut t = value - in_min;
    if t != 0.0 {
        t /= in_span;
    }
    out_min + t * out_span
}

/// An affine transform: anchor-relative rotation and scale followed by a
/// translation.
///
/// Application order is fixed: translate to origin relative to `anchor`,
/// rotate, scale, translate back, then add the global `translate`. The
/// identity transform is a no-op and is detected cheaply so repeated
/// application accumulates no floating error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translate: Vec2,
    pub rotate_deg: f64,
    pub scale: Vec2,
    pub anchor: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Transform = Transform {
        translate: Vec2::ZERO,
        rotate_deg: 0.0,
        scale: Vec2 { x: 1.0, y: 1.0 },
        anchor: Vec2::ZERO,
    };

    /// A pure translation.
    pub fn translation(dx: f64, dy: f64) -> Self {
        Transform {
            translate: Vec2::new(dx, dy),
            ..Self::IDENTITY
        }
    }

    /// A rotation (degrees) about `anchor`.
    pub fn rotation(angle_deg: f64, anchor: Vec2) -> Self {
        Transform {
            rotate_deg: angle_deg,
            anchor,
            ..Self::IDENTITY
        }
    }

    /// A uniform scale about the origin. Scalar input is normalized to a
    /// scale pair at construction.
    pub fn scaling(s: f64) -> Self {
        Self::scaling_xy(s, s)
    }

    /// A non-uniform scale about the origin.
    pub fn scaling_xy(sx: f64, sy: f64) -> Self {
        Transform {
            scale: Vec2::new(sx, sy),
            ..Self::IDENTITY
        }
    }

    /// Returns this transform rebased on a different anchor point.
    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    /// True when applying this transform changes nothing.
    pub fn is_identity(&self) -> bool {
        self.translate.x == 0.0
            && self.translate.y == 0.0
            && self.rotate_deg == 0.0
            && self.scale.x == 1.0
            && self.scale.y == 1.0
    }

    /// Applies the transform to a point.
    ///
    /// Total over all real inputs. The identity returns the input
    /// bit-identically; a zero rotation skips the trig and an identity scale
    /// skips the multiplies.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let rotated = self.rotate_deg != 0.0;
        let scaled = self.scale.x != 1.0 || self.scale.y != 1.0;

        let mut out = p;
        if rotated || scaled {
            out -= self.anchor;

            if rotated {
                let radians = self.rotate_deg.to_radians();
                let (sin_t, cos_t) = radians.sin_cos();
                out = Vec2::new(out.x * cos_t - out.y * sin_t, out.x * sin_t + out.y * cos_t);
            }
            if scaled {
                out.x *= self.scale.x;
                out.y *= self.scale.y;
            }

            out += self.anchor;
        }

        out + self.translate
    }
}
