use super::SetIndexer;
use crate::bits::BitRange;

/// Hashes the tag field and masks the result to a power-of-two set count.
///
/// Strided address streams alias badly under plain modulo indexing; mixing
/// the tag bits first spreads them across sets. The mixer is the splitmix64
/// finalizer, picked for avalanche quality and speed, not for any
/// cryptographic property.
pub struct HashedIndexer {
    tag: BitRange,
    mask: u64,
}

impl HashedIndexer {
    /// `sets` must be a power of two; callers validate with
    /// [`log2_exact`](crate::bits::log2_exact) before construction.
    pub fn new(sets: usize, tag: BitRange) -> Self {
        debug_assert!(sets >= 2 && sets.is_power_of_two());
        Self {
            tag,
            mask: sets as u64 - 1,
        }
    }

    fn mix(mut x: u64) -> u64 {
        x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        x ^ (x >> 31)
    }
}

impl SetIndexer for HashedIndexer {
    fn index(&self, addr: u64) -> usize {
        (Self::mix(self.tag.extract(addr)) & self.mask) as usize
    }
}
