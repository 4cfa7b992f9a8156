//! Set-associative cache simulator library.
//!
//! This crate implements a configurable set-associative cache model with the following:
//! 1. **Decomposition:** a tag bit field `[msb:lsb]` and a set index carved out of
//!    each 64-bit address.
//! 2. **Indexing:** interchangeable strategies mapping addresses to sets (modulo,
//!    hashed, and the degenerate disabled/fully-associative geometries).
//! 3. **Replacement:** per-set pairwise-recency matrices; the victim is the way
//!    that was used more recently than nothing else.
//! 4. **Driving:** a hex trace reader and a statistics struct for trace-driven runs;
//!    the `waysim-cli` binary wires them together.

/// Bit-field extraction and power-of-two validation.
pub mod bits;
/// Construction parameters and configuration errors.
pub mod config;
/// The cache core: sets, recency matrices, indexing strategies.
pub mod core;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Hex address-trace ingestion.
pub mod trace;

/// Construction parameters; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::{CacheConfig, ConfigError, IndexStrategy};
/// Top-level cache type; construct with `Cache::new` from a `CacheConfig`.
pub use crate::core::{Cache, FillOutcome, Lookup};
/// Driver-side counters; feed lookup and fill outcomes in, print at the end.
pub use crate::stats::SimStats;
