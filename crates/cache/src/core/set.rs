//! A single cache set: W tagged lines plus their recency matrix.

use super::recency::RecencyMatrix;

/// One way's worth of storage.
///
/// Created invalid; `tag` and `data` are meaningless until a fill sets
/// `valid`. A line is never partially valid.
#[derive(Clone, Debug, Default)]
pub struct CacheLine<T> {
    pub tag: u64,
    pub data: T,
    pub valid: bool,
}

/// One set of a set-associative cache.
///
/// The set understands tags, not addresses. Callers carve the tag out of an
/// address first (see [`BitRange`](crate::bits::BitRange)) and take care of
/// set selection themselves.
pub struct CacheSet<T> {
    lines: Vec<CacheLine<T>>,
    recency: RecencyMatrix,
}

impl<T: Clone + Default> CacheSet<T> {
    pub fn new(ways: usize) -> Self {
        Self {
            lines: vec![CacheLine::default(); ways],
            recency: RecencyMatrix::new(ways),
        }
    }

    /// Searches all ways for `tag`.
    ///
    /// On a hit, the matching way becomes the most recently used and
    /// `(true, way)` comes back. On a miss, the reported way is the set's
    /// current victim; nothing is invalidated or overwritten, so a caller
    /// that decides not to fill has changed nothing.
    pub fn find_way(&mut self, tag: u64) -> (bool, usize) {
        for way in 0..self.lines.len() {
            if self.lines[way].valid && self.lines[way].tag == tag {
                self.recency.touch(way);
                return (true, way);
            }
        }
        (false, self.recency.least_recently_used())
    }

    /// Overwrites the line at `way` with a valid tag/data pair and marks it
    /// most recently used. Used both for cold fills and eviction refills;
    /// whatever the way held before is gone.
    pub fn fill(&mut self, way: usize, tag: u64, data: T) {
        self.lines[way] = CacheLine {
            tag,
            data,
            valid: true,
        };
        self.recency.touch(way);
    }

    /// Marks `way` most recently used without changing its contents.
    pub fn touch(&mut self, way: usize) {
        self.recency.touch(way);
    }

    /// The way the recency matrix would evict next.
    pub fn least_recently_used(&self) -> usize {
        self.recency.least_recently_used()
    }

    /// Clears the valid bit at `way`. Tag, data, and recency history all
    /// stay behind, so the invalidated way is not automatically the next
    /// victim.
    pub fn invalidate(&mut self, way: usize) {
        self.lines[way].valid = false;
    }

    pub fn line(&self, way: usize) -> &CacheLine<T> {
        &self.lines[way]
    }

    pub fn ways(&self) -> usize {
        self.lines.len()
    }
}
