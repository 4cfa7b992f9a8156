//! Bit-level address helpers.
//!
//! Tag extraction and set-count validation both reduce to a handful of
//! shift-and-mask operations over plain `u64` addresses. Everything here is
//! pure arithmetic, shared by the cache core and the indexing strategies.

use crate::config::ConfigError;

/// An inclusive `[msb:lsb]` bit field of a 64-bit address.
///
/// Construction validates the range once so extraction never has to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitRange {
    msb: u32,
    lsb: u32,
}

impl BitRange {
    /// Creates a field covering bits `msb` down to `lsb`, both inclusive.
    ///
    /// Degenerate single-bit fields (`msb == lsb`) are allowed; a reversed
    /// range or an `msb` beyond bit 63 is not.
    pub fn new(msb: u32, lsb: u32) -> Result<Self, ConfigError> {
        if msb < lsb || msb >= u64::BITS {
            return Err(ConfigError::InvalidBitRange { msb, lsb });
        }
        Ok(Self { msb, lsb })
    }

    #[inline(always)]
    pub fn msb(&self) -> u32 {
        self.msb
    }

    #[inline(always)]
    pub fn lsb(&self) -> u32 {
        self.lsb
    }

    /// Width of the field in bits, always at least 1.
    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.msb - self.lsb + 1
    }

    /// Extracts the field from `addr`: shift right by `lsb`, mask to width.
    ///
    /// The full `[63:0]` range is legal, so the mask is built without
    /// shifting by 64.
    #[inline(always)]
    pub fn extract(&self, addr: u64) -> u64 {
        let shifted = addr >> self.lsb;
        if self.width() == u64::BITS {
            shifted
        } else {
            shifted & ((1u64 << self.width()) - 1)
        }
    }
}

/// Returns the exact base-2 logarithm of `x`.
///
/// Fails when `x` is zero or not a power of two. Strategies that index with
/// a mask use this to validate the set count up front instead of silently
/// rounding it.
pub fn log2_exact(x: u64) -> Result<u32, ConfigError> {
    if x == 0 || !x.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo(x));
    }
    Ok(x.trailing_zeros())
}
