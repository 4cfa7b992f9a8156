use super::SetIndexer;

/// `address mod set_count`.
///
/// Accepts any set count and is uniform exactly when the address stream is
/// uniform modulo the set count; strides that share a factor with the set
/// count will alias. The recommended default all the same.
pub struct ModuloIndexer {
    sets: usize,
}

impl ModuloIndexer {
    pub fn new(sets: usize) -> Self {
        debug_assert!(sets >= 2);
        Self { sets }
    }
}

impl SetIndexer for ModuloIndexer {
    fn index(&self, addr: u64) -> usize {
        (addr % self.sets as u64) as usize
    }
}
