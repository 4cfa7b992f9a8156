//! Pairwise-recency tracking for one cache set.
//!
//! Instead of per-line counters or an ordered list, recency is a W x W
//! boolean matrix: cell `(i, j)` records "way `i` was used more recently
//! than way `j`". Touching way `w` claims all of row `w` and clears column
//! `w` everywhere, so `w` dominates every other way and nothing dominates
//! `w`. The least recently used way is the one that dominates nothing,
//! which reads back as the first all-false row.
//!
//! Rows are packed one `u64` bitmask per way, which caps associativity at
//! 64; [`Cache::new`](crate::Cache::new) enforces the bound before a matrix
//! is ever built.

/// W x W recency matrix; bit `j` of `rows[i]` is cell `(i, j)`.
#[derive(Clone, Debug)]
pub struct RecencyMatrix {
    rows: Vec<u64>,
    ways: usize,
}

impl RecencyMatrix {
    /// Creates an all-false matrix: no ordering is established yet, so every
    /// way is an equally good victim.
    pub fn new(ways: usize) -> Self {
        debug_assert!(ways >= 1 && ways <= 64);
        Self {
            rows: vec![0; ways],
            ways,
        }
    }

    /// Marks `way` as the most recently used.
    ///
    /// Sets row `way` for every other way, then clears column `way` in all
    /// rows. A way never dominates itself, so the diagonal stays false and
    /// the all-false-row victim scan stays well defined for `ways == 1`.
    pub fn touch(&mut self, way: usize) {
        assert!(
            way < self.ways,
            "way {} out of range ({} ways)",
            way,
            self.ways
        );
        let column = 1u64 << way;
        self.rows[way] = self.full_row() & !column;
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i != way {
                *row &= !column;
            }
        }
    }

    /// Returns the least recently used way: the lowest-indexed way whose row
    /// is entirely false. Ways that were never touched keep empty rows, so
    /// before any activity way 0 is the defined tie-break.
    pub fn least_recently_used(&self) -> usize {
        for (i, row) in self.rows.iter().enumerate() {
            if *row == 0 {
                return i;
            }
        }
        // Unreachable: the way with the oldest touch has had every other way
        // touched after it, which cleared its whole row.
        0
    }

    fn full_row(&self) -> u64 {
        if self.ways == 64 {
            u64::MAX
        } else {
            (1u64 << self.ways) - 1
        }
    }
}
