//! Greedy nearest-neighbor stroke reordering.

use tracing::debug;

use plotkit5_core::PathSet;

use crate::spatial::{EndpointIndex, IndexEntry};

/// Reorders a path set's strokes to shorten pen-up travel.
///
/// Greedy: seed with the first stroke, then repeatedly jump to the closest
/// remaining endpoint, drawing that stroke reversed when its far end was
/// matched. Every input stroke appears exactly once in the output;
/// reversed strokes have their point order flipped, never resampled.
#[derive(Debug, Clone)]
pub struct PathSorter {
    reversible: bool,
    cells: usize,
}

impl Default for PathSorter {
    fn default() -> Self {
        PathSorter {
            reversible: true,
            cells: EndpointIndex::DEFAULT_CELLS,
        }
    }
}

impl PathSorter {
    /// Creates a sorter that may reverse strokes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables stroke reversal: strokes keep their drawing direction and
    /// only their order changes.
    pub fn non_reversible() -> Self {
        PathSorter {
            reversible: false,
            ..Self::default()
        }
    }

    /// Overrides the spatial grid subdivision.
    pub fn with_cells(mut self, cells: usize) -> Self {
        self.cells = cells.max(1);
        self
    }

    /// Returns a reordered copy of `path`. Fewer than two strokes are
    /// returned unchanged.
    pub fn sort(&self, path: &PathSet) -> PathSet {
        if path.len() < 2 {
            return path.clone();
        }

        let strokes = path.strokes();
        let mut entries = Vec::with_capacity(strokes.len() * 2);
        for (k, stroke) in strokes.iter().enumerate().skip(1) {
            let first = stroke.first().expect("path sets hold no empty strokes");
            entries.push(IndexEntry::new(first, k, false));
            // Closed strokes have an ambiguous far end and single-point
            // strokes have none; both contribute a single entry.
            if self.reversible && !stroke.is_closed() && stroke.len() > 1 {
                let last = stroke.last().expect("stroke has points");
                entries.push(IndexEntry::new(last, k, true));
            }
        }
        let mut index = EndpointIndex::new(entries, self.cells);

        let mut result = vec![strokes[0].clone()];
        let mut cursor = strokes[0]
            .last()
            .expect("path sets hold no empty strokes");

        while !index.is_empty() {
            let hit = index.nearest(cursor);
            let stroke = &strokes[hit.stroke];
            let first = stroke.first().expect("stroke has points");
            index.remove(first, hit.stroke, false);
            if self.reversible && !stroke.is_closed() && stroke.len() > 1 {
                let last = stroke.last().expect("stroke has points");
                index.remove(last, hit.stroke, true);
            }

            let placed = if hit.reversed {
                stroke.reversed()
            } else {
                stroke.clone()
            };
            cursor = placed.last().expect("stroke has points");
            result.push(placed);
        }

        let sorted = PathSet::from(result);
        debug!(
            strokes = sorted.len(),
            travel_before = path.up_length(),
            travel_after = sorted.up_length(),
            "sorted strokes"
        );
        sorted
    }
}
