//! Cache configuration.
//!
//! A [`CacheConfig`] is an explicit value handed to
//! [`Cache::new`](crate::Cache::new); nothing in this crate reads global
//! state. Deserialize one from JSON or start from `Default` and override
//! fields. Validation happens at cache construction and is fatal: there is
//! no partially built cache.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How an address is mapped to a set.
///
/// The strategy only matters for caches with two or more sets. Set counts of
/// zero (disabled) and one (fully associative) degenerate to forced-miss and
/// single-set routing regardless of the configured variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexStrategy {
    /// `address mod set_count`. Accepts any set count; the default.
    #[default]
    Modulo,
    /// Hash of the tag field, masked to a power-of-two set count. Spreads
    /// strided address streams that would alias badly under plain modulo.
    Hashed,
}

/// Construction parameters for a [`Cache`](crate::Cache).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Number of sets. Zero disables the cache entirely.
    pub sets: usize,
    /// Ways per set (associativity). Must be in `1..=64`.
    pub ways: usize,
    /// Most significant bit of the tag field, inclusive.
    pub tag_msb: u32,
    /// Least significant bit of the tag field, inclusive.
    pub tag_lsb: u32,
    /// Set-indexing strategy.
    pub strategy: IndexStrategy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sets: 64,
            ways: 4,
            tag_msb: 39,
            tag_lsb: 6,
            strategy: IndexStrategy::Modulo,
        }
    }
}

/// A configuration the cache refuses to be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A strategy demanded a power-of-two set count and got this instead.
    NotPowerOfTwo(u64),
    /// Tag field with `msb < lsb`, or an `msb` past bit 63.
    InvalidBitRange { msb: u32, lsb: u32 },
    /// A cache with zero ways could never hold a line.
    ZeroWays,
    /// The recency matrix packs one row per way into a 64-bit word.
    TooManyWays(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPowerOfTwo(x) => {
                write!(f, "set count {} is not a power of two", x)
            }
            ConfigError::InvalidBitRange { msb, lsb } => {
                write!(f, "invalid tag bit range [{}:{}]", msb, lsb)
            }
            ConfigError::ZeroWays => write!(f, "ways must be at least 1"),
            ConfigError::TooManyWays(ways) => {
                write!(f, "ways must be at most 64, got {}", ways)
            }
        }
    }
}

impl Error for ConfigError {}
