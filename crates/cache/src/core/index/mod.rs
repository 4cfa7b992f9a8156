//! Set-indexing strategies.
//!
//! A cache is built with exactly one strategy and consults it once per
//! lookup or fill. Strategies own whatever geometry they need (set count,
//! tag field) at construction, so the call itself is a pure address-to-set
//! mapping.

/// Maps addresses to set numbers.
///
/// Implementations must return values in `0..set_count` for the set count
/// they were built with; the cache indexes its set vector with the result.
pub trait SetIndexer {
    fn index(&self, addr: u64) -> usize;
}

pub use self::direct::DirectIndexer;
pub use self::hashed::HashedIndexer;
pub use self::modulo::ModuloIndexer;

mod direct;
mod hashed;
mod modulo;
