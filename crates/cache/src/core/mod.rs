//! Set-associative cache core.
//!
//! A [`Cache`] owns S independent sets of W ways each, a tag
//! [`BitRange`], and one boxed [`SetIndexer`] chosen at construction. All
//! operations decompose an address the same way: the indexer picks the set,
//! the tag field picks the line within it.

pub mod index;
pub mod recency;
pub mod set;

use std::fmt;

use self::index::{DirectIndexer, HashedIndexer, ModuloIndexer, SetIndexer};
use self::set::CacheSet;
use crate::bits::{BitRange, log2_exact};
use crate::config::{CacheConfig, ConfigError, IndexStrategy};

/// Outcome of a [`Cache::lookup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lookup {
    pub hit: bool,
    /// Set that was probed; 0 for a disabled cache.
    pub set: usize,
    /// Matching way on a hit; the set's current victim on a miss.
    pub way: usize,
}

/// Outcome of a [`Cache::fill`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// The line was installed at (`set`, `way`); `evicted` says whether a
    /// valid line was overwritten to make room.
    Inserted {
        set: usize,
        way: usize,
        evicted: bool,
    },
    /// The tag is already resident. Refilling a resident line is caller
    /// misuse: the stored data is kept and nothing is overwritten.
    AlreadyResident { set: usize, way: usize },
    /// The cache is disabled (zero sets); nothing was stored.
    Disabled,
}

/// A set-associative cache holding one `T` per line.
///
/// The payload is whatever the simulation wants to remember about a line;
/// timing models carry latencies, trace drivers often just carry the
/// address back.
pub struct Cache<T> {
    sets: Vec<CacheSet<T>>,
    indexer: Box<dyn SetIndexer>,
    tag: BitRange,
    ways: usize,
}

impl<T> fmt::Debug for Cache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("sets", &self.sets.len())
            .field("ways", &self.ways)
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Default> Cache<T> {
    /// Builds a cache from an explicit configuration.
    ///
    /// All validation happens here and is fatal; a constructed cache cannot
    /// fail later. Set counts of 0 and 1 skip strategy selection entirely,
    /// per the degenerate-geometry rules on
    /// [`IndexStrategy`](crate::config::IndexStrategy).
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let tag = BitRange::new(config.tag_msb, config.tag_lsb)?;

        let indexer: Box<dyn SetIndexer> = match (config.sets, config.strategy) {
            (0 | 1, _) => Box::new(DirectIndexer),
            (sets, IndexStrategy::Modulo) => Box::new(ModuloIndexer::new(sets)),
            (sets, IndexStrategy::Hashed) => {
                log2_exact(sets as u64)?;
                Box::new(HashedIndexer::new(sets, tag))
            }
        };

        Self::with_indexer(config.sets, config.ways, tag, indexer)
    }

    /// Builds a cache around a caller-supplied indexing strategy.
    ///
    /// [`Cache::new`] covers the built-in strategies; this seam exists for
    /// experiments with custom mappings. The indexer must honor the
    /// [`SetIndexer`] range contract for `sets`.
    pub fn with_indexer(
        sets: usize,
        ways: usize,
        tag: BitRange,
        indexer: Box<dyn SetIndexer>,
    ) -> Result<Self, ConfigError> {
        if ways == 0 {
            return Err(ConfigError::ZeroWays);
        }
        if ways > 64 {
            return Err(ConfigError::TooManyWays(ways));
        }

        Ok(Self {
            sets: (0..sets).map(|_| CacheSet::new(ways)).collect(),
            indexer,
            tag,
            ways,
        })
    }

    /// Probes the cache for `addr`.
    ///
    /// A disabled cache always misses and mutates nothing. Otherwise a hit
    /// marks the matching way most recently used, and a miss reports the
    /// set's current victim without invalidating it; whether to follow up
    /// with a [`fill`](Cache::fill) is the caller's call.
    pub fn lookup(&mut self, addr: u64) -> Lookup {
        if self.sets.is_empty() {
            return Lookup {
                hit: false,
                set: 0,
                way: 0,
            };
        }

        let set = self.indexer.index(addr);
        let tag = self.tag.extract(addr);
        let (hit, way) = self.sets[set].find_way(tag);

        Lookup { hit, set, way }
    }

    /// Installs `data` for `addr`, overwriting the set's least recently
    /// used way on a conflict.
    ///
    /// Filling an address whose tag is already resident does not replace
    /// the stored data; it is reported as
    /// [`FillOutcome::AlreadyResident`] so drivers can surface the misuse.
    pub fn fill(&mut self, addr: u64, data: T) -> FillOutcome {
        if self.sets.is_empty() {
            return FillOutcome::Disabled;
        }

        let set = self.indexer.index(addr);
        let tag = self.tag.extract(addr);
        let (hit, way) = self.sets[set].find_way(tag);
        if hit {
            return FillOutcome::AlreadyResident { set, way };
        }

        let evicted = self.sets[set].line(way).valid;
        self.sets[set].fill(way, tag, data);

        FillOutcome::Inserted { set, way, evicted }
    }

    /// Invalidates the line at (`set`, `way`), modelling an external
    /// invalidation. Recency history is kept, so the invalidated way is not
    /// automatically the next victim. Out-of-range coordinates are a caller
    /// bug.
    pub fn evict(&mut self, set: usize, way: usize) {
        assert!(
            set < self.sets.len(),
            "set {} out of range ({} sets)",
            set,
            self.sets.len()
        );
        assert!(
            way < self.ways,
            "way {} out of range ({} ways)",
            way,
            self.ways
        );
        self.sets[set].invalidate(way);
    }

    /// Payload stored at (`set`, `way`), if that line is currently valid.
    pub fn data(&self, set: usize, way: usize) -> Option<&T> {
        let set = self.sets.get(set)?;
        if way >= set.ways() {
            return None;
        }
        let line = set.line(way);
        if line.valid { Some(&line.data) } else { None }
    }

    /// Number of sets; zero means the cache is disabled.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Ways per set.
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// True when the cache was configured with zero sets.
    pub fn is_disabled(&self) -> bool {
        self.sets.is_empty()
    }
}
