//! Ordered collections of pen-down strokes.
//!
//! A [`PathSet`] is the unit of work for sorting and emission: an ordered
//! list of disjoint [`Polyline`] strokes, where list order is drawing order
//! and the gap between one stroke's end and the next stroke's start is
//! pen-up travel.

use crate::geometry::{Transform, Vec2};
use crate::polyline::Polyline;

/// An ordered set of strokes. Insertion order is drawing order until a
/// sorter reorders a copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSet {
    strokes: Vec<Polyline>,
}

impl PathSet {
    /// Creates an empty path set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path set holding a single stroke.
    pub fn from_stroke(stroke: Polyline) -> Self {
        let mut path = PathSet::new();
        path.add(stroke);
        path
    }

    /// Appends a stroke. Empty strokes are dropped.
    pub fn add(&mut self, stroke: Polyline) {
        if !stroke.is_empty() {
            self.strokes.push(stroke);
        }
    }

    /// Appends every stroke of another path set.
    pub fn append(&mut self, other: PathSet) {
        self.strokes.extend(other.strokes);
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn strokes(&self) -> &[Polyline] {
        &self.strokes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polyline> {
        self.strokes.iter()
    }

    pub fn into_strokes(self) -> Vec<Polyline> {
        self.strokes
    }

    /// Total pen-down length: the sum of stroke perimeters.
    pub fn down_length(&self) -> f64 {
        self.strokes.iter().map(|s| s.perimeter()).sum()
    }

    /// Total pen-up travel: the sum of gaps between consecutive strokes.
    pub fn up_length(&self) -> f64 {
        self.strokes
            .windows(2)
            .filter_map(|pair| {
                let from = pair[0].last()?;
                let to = pair[1].first()?;
                Some(from.distance(to))
            })
            .sum()
    }

    /// Pen-down plus pen-up length.
    pub fn length(&self) -> f64 {
        self.down_length() + self.up_length()
    }

    /// Merges consecutive strokes whose connecting gap is at most
    /// `tolerance`, reducing pen lifts for paths that already line up.
    pub fn join(&self, tolerance: f64) -> PathSet {
        if self.strokes.len() < 2 {
            return self.clone();
        }
        let mut result: Vec<Polyline> = vec![self.strokes[0].clone()];
        for stroke in &self.strokes[1..] {
            let gap = match (result.last().and_then(|s| s.last()), stroke.first()) {
                (Some(from), Some(to)) => from.distance(to),
                _ => f64::INFINITY,
            };
            if gap <= tolerance {
                let tail = result.last_mut().expect("seeded with first stroke");
                for p in stroke.points() {
                    tail.line_to(*p);
                }
            } else {
                result.push(stroke.clone());
            }
        }
        PathSet { strokes: result }
    }

    /// Returns a copy with `transform` applied to every stroke.
    pub fn transformed(&self, transform: &Transform) -> PathSet {
        PathSet {
            strokes: self
                .strokes
                .iter()
                .map(|s| s.transformed(transform))
                .collect(),
        }
    }

    /// Returns a translated copy.
    pub fn translated(&self, dx: f64, dy: f64) -> PathSet {
        self.transformed(&Transform::translation(dx, dy))
    }

    /// Returns a copy scaled about the origin. A single factor scales both
    /// axes.
    pub fn scaled(&self, sx: f64, sy: f64) -> PathSet {
        self.transformed(&Transform::scaling_xy(sx, sy))
    }

    /// Returns a copy rotated about the origin.
    pub fn rotated(&self, angle_deg: f64) -> PathSet {
        self.transformed(&Transform::rotation(angle_deg, Vec2::ZERO))
    }

    /// Axis-aligned bounding box over all strokes.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut acc: Option<(Vec2, Vec2)> = None;
        for stroke in &self.strokes {
            if let Some((min, max)) = stroke.bounds() {
                acc = Some(match acc {
                    None => (min, max),
                    Some((amin, amax)) => (
                        Vec2::new(amin.x.min(min.x), amin.y.min(min.y)),
                        Vec2::new(amax.x.max(max.x), amax.y.max(max.y)),
                    ),
                });
            }
        }
        acc
    }

    /// Builds a path set from a collaborator point stream where non-finite
    /// coordinates mark pen-up breaks between strokes.
    pub fn from_point_stream<I>(stream: I) -> PathSet
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut path = PathSet::new();
        let mut current = Polyline::new();
        for (x, y) in stream {
            let p = Vec2::new(x, y);
            if p.is_finite() {
                current.line_to(p);
            } else if !current.is_empty() {
                path.add(std::mem::take(&mut current));
            }
        }
        path.add(current);
        path
    }
}

impl From<Vec<Polyline>> for PathSet {
    fn from(strokes: Vec<Polyline>) -> Self {
        PathSet {
            strokes: strokes.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }
}

impl IntoIterator for PathSet {
    type Item = Polyline;
    type IntoIter = std::vec::IntoIter<Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a Polyline;
    type IntoIter = std::slice::Iter<'a, Polyline>;

    fn into_iter(self) -> Self::IntoIter {
        self.strokes.iter()
    }
}
