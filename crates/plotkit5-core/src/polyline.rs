//! Polylines with derived per-vertex caches.
//!
//! A [`Polyline`] owns an ordered list of points plus a `closed` flag, and
//! lazily derives cumulative arc lengths and per-vertex normals/tangents.
//! The derived data lives behind a dirty flag: any mutation invalidates it,
//! and every accessor that reads it rebuilds first, so stale values can
//! never leak out.

use std::cell::RefCell;

use cavalier_contours::polyline::{
    PlineSource, PlineSourceMut, PlineVertex, Polyline as ContourPolyline,
};
use tracing::warn;

use crate::geometry::{Transform, Vec2};
use crate::path::PathSet;

/// Denominator floor for the miter factor; below this the joint is a
/// hairpin and the displacement stays unscaled.
const MITER_EPS: f64 = 1e-9;

/// Upper bound on concentric fill rings, against offsets that fail to
/// collapse.
const MAX_FILL_RINGS: usize = 10_000;

/// An ordered polyline of 2D points, open or closed.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    points: Vec<Vec2>,
    closed: bool,
    cache: RefCell<Option<VertexCache>>,
}

/// Derived per-vertex data, valid only while the owning polyline is
/// unmodified.
#[derive(Debug, Clone)]
struct VertexCache {
    /// Cumulative arc length up to each vertex; closed polylines carry one
    /// extra wrap-around entry.
    lengths: Vec<f64>,
    normals: Vec<Vec2>,
    tangents: Vec<Vec2>,
}

impl PartialEq for Polyline {
    fn eq(&self, other: &Self) -> bool {
        self.closed == other.closed && self.points == other.points
    }
}

impl Polyline {
    /// Creates an empty open polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open polyline from a point sequence.
    pub fn from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            closed: false,
            cache: RefCell::new(None),
        }
    }

    /// Creates a closed polyline from a point sequence.
    pub fn closed_from_points<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Vec2>,
    {
        let mut poly = Self::from_points(points);
        poly.closed = true;
        poly
    }

    /// Appends a point, invalidating derived data.
    pub fn line_to(&mut self, p: impl Into<Vec2>) {
        self.points.push(p.into());
        self.invalidate();
    }

    /// Sets the closed flag. Toggling it changes the wrap-around length
    /// entry, so derived data is invalidated.
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
        self.invalidate();
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point sequence in insertion order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    fn invalidate(&mut self) {
        *self.cache.borrow_mut() = None;
    }

    /// Rebuilds the derived caches if dirty.
    fn ensure_cache(&self) {
        let mut slot = self.cache.borrow_mut();
        if slot.is_none() {
            *slot = Some(self.compute_cache());
        }
    }

    fn compute_cache(&self) -> VertexCache {
        let n = self.points.len();
        if n < 2 {
            return VertexCache {
                lengths: Vec::new(),
                normals: Vec::new(),
                tangents: Vec::new(),
            };
        }

        let mut lengths = Vec::with_capacity(n + 1);
        lengths.push(0.0);
        for i in 1..n {
            let prev = lengths[i - 1];
            lengths.push(prev + self.points[i - 1].distance(self.points[i]));
        }
        if self.closed {
            let prev = lengths[n - 1];
            lengths.push(prev + self.points[n - 1].distance(self.points[0]));
        }

        // Unit direction of the span i -> j, or zero for duplicate points so
        // a degenerate neighbor never contributes NaN.
        let dir = |i: usize, j: usize| -> Vec2 {
            (self.points[j] - self.points[i])
                .normalized()
                .unwrap_or(Vec2::ZERO)
        };

        let mut tangents = Vec::with_capacity(n);
        let mut normals = Vec::with_capacity(n);
        for i in 0..n {
            let tangent = if self.closed {
                let prev = (i + n - 1) % n;
                let next = (i + 1) % n;
                let sum = dir(prev, i) + dir(i, next);
                sum.normalized().unwrap_or(Vec2::ZERO)
            } else if i == 0 {
                dir(0, 1)
            } else if i == n - 1 {
                dir(n - 2, n - 1)
            } else {
                let sum = dir(i - 1, i) + dir(i, i + 1);
                sum.normalized().unwrap_or(Vec2::ZERO)
            };
            tangents.push(tangent);
            normals.push(tangent.perp());
        }

        VertexCache {
            lengths,
            normals,
            tangents,
        }
    }

    /// Total arc length, including the wrap-around span when closed.
    /// Zero for polylines with fewer than two points.
    pub fn perimeter(&self) -> f64 {
        self.ensure_cache();
        self.cache
            .borrow()
            .as_ref()
            .and_then(|c| c.lengths.last().copied())
            .unwrap_or(0.0)
    }

    /// Cumulative arc length up to vertex `i`.
    pub fn length_at(&self, i: usize) -> f64 {
        self.ensure_cache();
        self.cache
            .borrow()
            .as_ref()
            .and_then(|c| c.lengths.get(i).copied())
            .unwrap_or(0.0)
    }

    /// Per-vertex normal: the perpendicular of [`tangent_at`](Self::tangent_at).
    /// Zero for degenerate polylines.
    pub fn normal_at(&self, i: usize) -> Vec2 {
        self.ensure_cache();
        self.cache
            .borrow()
            .as_ref()
            .and_then(|c| c.normals.get(i).copied())
            .unwrap_or(Vec2::ZERO)
    }

    /// Per-vertex tangent: the single-neighbor direction at open endpoints,
    /// the normalized bisector of the incoming/outgoing directions at
    /// interior vertices. Zero for degenerate polylines.
    pub fn tangent_at(&self, i: usize) -> Vec2 {
        self.ensure_cache();
        self.cache
            .borrow()
            .as_ref()
            .and_then(|c| c.tangents.get(i).copied())
            .unwrap_or(Vec2::ZERO)
    }

    /// Point at arc-length distance `d` from the start, walking the closing
    /// span as well when closed. `d` is clamped to the perimeter.
    pub fn point_at_length(&self, d: f64) -> Option<Vec2> {
        let n = self.points.len();
        if n == 0 {
            return None;
        }
        if n == 1 {
            return Some(self.points[0]);
        }
        self.ensure_cache();
        let cache = self.cache.borrow();
        let lengths = &cache.as_ref().expect("cache rebuilt above").lengths;
        let total = *lengths.last().expect("at least two entries");
        if d <= 0.0 {
            return Some(self.points[0]);
        }
        if d >= total {
            return Some(if self.closed {
                self.points[0]
            } else {
                self.points[n - 1]
            });
        }
        for i in 1..lengths.len() {
            if d <= lengths[i] {
                let span = lengths[i] - lengths[i - 1];
                let t = if span == 0.0 {
                    0.0
                } else {
                    (d - lengths[i - 1]) / span
                };
                let a = self.points[i - 1];
                let b = self.points[i % n];
                return Some(a.lerp(b, t));
            }
        }
        Some(self.points[n - 1])
    }

    /// Returns a copy with the point order reversed. The closed flag is
    /// preserved; no resampling happens.
    pub fn reversed(&self) -> Polyline {
        let mut points = self.points.clone();
        points.reverse();
        Polyline {
            points,
            closed: self.closed,
            cache: RefCell::new(None),
        }
    }

    /// Returns a copy with `transform` applied to every point. An identity
    /// transform short-circuits to a plain clone.
    pub fn transformed(&self, transform: &Transform) -> Polyline {
        if transform.is_identity() {
            return self.clone();
        }
        Polyline {
            points: self.points.iter().map(|p| transform.apply(*p)).collect(),
            closed: self.closed,
            cache: RefCell::new(None),
        }
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        if self.points.is_empty() {
            return None;
        }
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Parallel offset: every vertex displaced along its normal by
    /// `distance`, with interior displacements scaled by the miter factor
    /// `sqrt(2 / (1 + n_i . n_{i-1}))` to preserve perpendicular width
    /// through bends. Degenerate input (fewer than two points, zero
    /// distance) returns an unchanged copy.
    pub fn offset(&self, distance: f64) -> Polyline {
        let n = self.points.len();
        if n < 2 || distance == 0.0 {
            return self.clone();
        }
        self.ensure_cache();
        let cache = self.cache.borrow();
        let normals = &cache.as_ref().expect("cache rebuilt above").normals;

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let mut width = distance;
            let prev = if self.closed {
                Some((i + n - 1) % n)
            } else if i > 0 && i < n - 1 {
                Some(i - 1)
            } else {
                None
            };
            if let Some(prev) = prev {
                let denom = 1.0 + normals[i].dot(normals[prev]);
                if denom > MITER_EPS {
                    width *= (2.0 / denom).sqrt();
                }
            }
            points.push(self.points[i] + normals[i] * width);
        }

        Polyline {
            points,
            closed: self.closed,
            cache: RefCell::new(None),
        }
    }

    /// Resamples at a fixed arc-length spacing by linear interpolation
    /// between the original vertices. Open polylines keep their exact last
    /// point. A non-positive spacing returns an unchanged copy.
    pub fn resample_by_spacing(&self, spacing: f64) -> Polyline {
        let n = self.points.len();
        if n < 2 || spacing <= 0.0 {
            return self.clone();
        }
        self.ensure_cache();
        let cache = self.cache.borrow();
        let lengths = &cache.as_ref().expect("cache rebuilt above").lengths;
        let total = *lengths.last().expect("at least two entries");

        let mut points = vec![self.points[0]];
        let mut next = spacing;
        for i in 1..lengths.len() {
            let span_start = lengths[i - 1];
            let span_end = lengths[i];
            let span = span_end - span_start;
            let a = self.points[i - 1];
            let b = self.points[i % n];
            while next < total && next <= span_end {
                let t = if span == 0.0 {
                    0.0
                } else {
                    (next - span_start) / span
                };
                points.push(a.lerp(b, t));
                next += spacing;
            }
        }
        if !self.closed {
            let last = self.points[n - 1];
            if *points.last().expect("seeded with first point") != last {
                points.push(last);
            }
        }

        Polyline {
            points,
            closed: self.closed,
            cache: RefCell::new(None),
        }
    }

    /// Even-odd test for a point against this polyline's outline.
    pub fn inside(&self, pos: Vec2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut counter = 0;
        let mut p1 = self.points[0];
        for i in 1..=n {
            let p2 = self.points[i % n];
            if pos.y > p1.y.min(p2.y)
                && pos.y <= p1.y.max(p2.y)
                && pos.x <= p1.x.max(p2.x)
                && p1.y != p2.y
            {
                let xinters = (pos.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                if p1.x == p2.x || pos.x <= xinters {
                    counter += 1;
                }
            }
            p1 = p2;
        }
        counter % 2 != 0
    }

    /// Expands a stroke wider than the pen into concentric passes: offsets
    /// stepping by `pen_width` from `+stroke_width/2` down toward
    /// `-stroke_width/2`. When the stroke fits in a single pen pass the
    /// result is just the centerline.
    pub fn stroke_path(&self, stroke_width: f64, pen_width: f64) -> PathSet {
        let mut path = PathSet::new();
        if stroke_width > pen_width && pen_width > 0.0 {
            let half = stroke_width * 0.5;
            let mut r = half;
            while r > -half {
                path.add(self.offset(r));
                r = (r - pen_width).max(-half);
            }
        } else {
            path.add(self.clone());
        }
        path
    }

    /// Signed offset through the external 2D geometry engine. For closed
    /// polylines the winding is normalized first so that a negative
    /// distance always shrinks inward and a positive one grows outward.
    /// May split into several polylines, or collapse to none.
    pub fn buffer(&self, distance: f64) -> Vec<Polyline> {
        if self.points.len() < 2 {
            return vec![self.clone()];
        }

        let mut vertices = self.points.clone();
        if self.closed {
            if vertices.len() > 1 && vertices.first() == vertices.last() {
                vertices.pop();
            }
            if signed_area(&vertices) > 0.0 {
                vertices.reverse();
            }
        }

        let mut pline = ContourPolyline::new();
        for p in &vertices {
            pline.add_vertex(PlineVertex::new(p.x, p.y, 0.0));
        }
        pline.set_is_closed(self.closed);

        pline
            .parallel_offset(distance)
            .iter()
            .map(|result| Polyline {
                points: result
                    .vertex_data
                    .iter()
                    .map(|v| Vec2::new(v.x, v.y))
                    .collect(),
                closed: self.closed,
                cache: RefCell::new(None),
            })
            .collect()
    }

    /// Concentric inward fill of a closed outline: rings stepped by
    /// `tool_width * (1 - overlap)` until the interior collapses.
    pub fn fill_path(&self, tool_width: f64, overlap: f64) -> PathSet {
        let mut path = PathSet::new();
        if !self.closed || self.points.len() < 3 {
            warn!(
                points = self.points.len(),
                closed = self.closed,
                "fill requested for a degenerate outline, skipping"
            );
            return path;
        }

        let step = -(tool_width * (1.0 - overlap));
        let mut rings = self.buffer(-tool_width * 0.5);
        let mut passes = 0;
        while !rings.is_empty() && passes < MAX_FILL_RINGS {
            let mut next = Vec::new();
            for ring in rings {
                if ring.len() >= 2 {
                    next.extend(ring.buffer(step));
                    path.add(ring);
                }
            }
            rings = next;
            passes += 1;
        }
        path
    }
}

impl From<Vec<Vec2>> for Polyline {
    fn from(points: Vec<Vec2>) -> Self {
        Polyline {
            points,
            closed: false,
            cache: RefCell::new(None),
        }
    }
}

/// Shoelace signed area of a vertex loop. Positive for counter-clockwise
/// winding in a Y-up frame.
fn signed_area(points: &[Vec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}
