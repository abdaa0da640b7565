//! Uniform-grid spatial index over stroke endpoints.
//!
//! Buckets endpoint entries into an `n x n` grid over their bounding box.
//! `nearest` expands square rings of cells outward from the query cell
//! until it finds candidates, then scans one ring further so a closer
//! point just across a cell boundary is never missed.
//!
//! The index borrows nothing: entries carry the stroke's position in the
//! path set being sorted, and the index is built fresh per sort call and
//! discarded afterwards.

use std::collections::HashMap;

use plotkit5_core::Vec2;

/// One stroke endpoint in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexEntry {
    pub position: Vec2,
    /// Position of the stroke in the path set under sort.
    pub stroke: usize,
    /// True when this entry is the stroke's far endpoint, i.e. matching it
    /// means drawing the stroke reversed.
    pub reversed: bool,
}

impl IndexEntry {
    pub fn new(position: Vec2, stroke: usize, reversed: bool) -> Self {
        IndexEntry {
            position,
            stroke,
            reversed,
        }
    }
}

/// Uniform-grid bucket index over endpoint entries.
#[derive(Debug)]
pub struct EndpointIndex {
    bins: HashMap<(i64, i64), Vec<IndexEntry>>,
    n: i64,
    min: Vec2,
    width: f64,
    height: f64,
    size: usize,
}

impl EndpointIndex {
    /// Default grid subdivision per axis.
    pub const DEFAULT_CELLS: usize = 100;

    /// Builds an index over `entries` with an `n x n` cell grid spanning
    /// their bounding box.
    pub fn new(entries: Vec<IndexEntry>, n: usize) -> Self {
        let mut min = Vec2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for e in &entries {
            min.x = min.x.min(e.position.x);
            min.y = min.y.min(e.position.y);
            max.x = max.x.max(e.position.x);
            max.y = max.y.max(e.position.y);
        }
        if entries.is_empty() {
            min = Vec2::ZERO;
            max = Vec2::ZERO;
        }

        let mut index = EndpointIndex {
            bins: HashMap::new(),
            n: n.max(1) as i64,
            min,
            width: max.x - min.x,
            height: max.y - min.y,
            size: 0,
        };
        for entry in entries {
            index.insert(entry);
        }
        index
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Grid cell of a point. Degenerate extents collapse to cell zero on
    /// that axis.
    fn cell_of(&self, p: Vec2) -> (i64, i64) {
        let px = if self.width == 0.0 {
            0.0
        } else {
            (p.x - self.min.x) / self.width
        };
        let py = if self.height == 0.0 {
            0.0
        } else {
            (p.y - self.min.y) / self.height
        };
        ((px * self.n as f64) as i64, (py * self.n as f64) as i64)
    }

    /// Adds an entry to its bucket.
    pub fn insert(&mut self, entry: IndexEntry) {
        let cell = self.cell_of(entry.position);
        self.bins.entry(cell).or_default().push(entry);
        self.size += 1;
    }

    /// Removes the entry for `stroke` with the given orientation, if
    /// present.
    pub fn remove(&mut self, position: Vec2, stroke: usize, reversed: bool) {
        let cell = self.cell_of(position);
        if let Some(bin) = self.bins.get_mut(&cell) {
            if let Some(at) = bin
                .iter()
                .position(|e| e.stroke == stroke && e.reversed == reversed)
            {
                bin.remove(at);
                self.size -= 1;
            }
        }
    }

    /// Entries in the square ring of cells at Chebyshev radius `r` around
    /// `(i, j)`.
    fn ring(&self, i: i64, j: i64, r: i64, out: &mut Vec<IndexEntry>) {
        if r == 0 {
            if let Some(bin) = self.bins.get(&(i, j)) {
                out.extend_from_slice(bin);
            }
            return;
        }
        for p in (i - r)..=(i + r) {
            if let Some(bin) = self.bins.get(&(p, j - r)) {
                out.extend_from_slice(bin);
            }
            if let Some(bin) = self.bins.get(&(p, j + r)) {
                out.extend_from_slice(bin);
            }
        }
        for q in (j - r + 1)..(j + r) {
            if let Some(bin) = self.bins.get(&(i - r, q)) {
                out.extend_from_slice(bin);
            }
            if let Some(bin) = self.bins.get(&(i + r, q)) {
                out.extend_from_slice(bin);
            }
        }
    }

    /// Closest entry to `point` by Euclidean distance, ties broken by
    /// `(y, x)` so results are deterministic.
    ///
    /// Calling this on an empty index is a programming error: the sorter's
    /// loop invariant guarantees it never happens.
    pub fn nearest(&self, point: Vec2) -> IndexEntry {
        assert!(!self.is_empty(), "nearest() called on an empty index");

        // Clamp the query into the grid so a point outside the indexed
        // bounding box still starts its ring walk near populated cells.
        let (i, j) = self.cell_of(point);
        let i = i.clamp(0, self.n);
        let j = j.clamp(0, self.n);
        let mut candidates = Vec::new();
        let mut r = 0;
        // Every populated cell lies in [0, n], so n + 1 rings from a
        // clamped center reach all of them.
        let max_r = self.n + 1;
        while candidates.is_empty() && r <= max_r {
            self.ring(i, j, r, &mut candidates);
            r += 1;
        }
        assert!(
            !candidates.is_empty(),
            "ring search exhausted a non-empty index"
        );
        // One ring further: the nearest candidate may sit just across a
        // cell boundary.
        self.ring(i, j, r, &mut candidates);

        candidates
            .into_iter()
            .min_by(|a, b| {
                let da = point.distance(a.position);
                let db = point.distance(b.position);
                da.total_cmp(&db)
                    .then(a.position.y.total_cmp(&b.position.y))
                    .then(a.position.x.total_cmp(&b.position.x))
            })
            .expect("candidates is non-empty")
    }
}
