//! Property tests over generated operation sequences.
//!
//! The recency matrix is checked against a reference LRU list, and the
//! cache against its round-trip and victim-selection guarantees, for many
//! generated geometries and touch orders.

use std::collections::HashSet;

use proptest::prelude::*;

use waysim::bits::BitRange;
use waysim::config::{CacheConfig, IndexStrategy};
use waysim::core::recency::RecencyMatrix;
use waysim::core::{Cache, FillOutcome};

proptest! {
    /// The matrix agrees with a plain move-to-back LRU list: untouched ways
    /// leave in index order, touched ways in the order of their last touch.
    #[test]
    fn matrix_matches_a_reference_lru_list(
        ways in 1usize..=16,
        touches in proptest::collection::vec(0usize..16, 0..200),
    ) {
        let mut matrix = RecencyMatrix::new(ways);
        let mut order: Vec<usize> = (0..ways).collect();

        for &raw in &touches {
            let way = raw % ways;
            matrix.touch(way);
            order.retain(|&w| w != way);
            order.push(way);
            prop_assert_eq!(matrix.least_recently_used(), order[0]);
        }
    }

    /// Once touched, a way is not the victim again until every other way
    /// has been touched since.
    #[test]
    fn touched_way_is_shielded_until_all_others_are_touched(
        ways in 2usize..=8,
        warmup in proptest::collection::vec(0usize..8, 0..50),
        picked in 0usize..8,
        later in proptest::collection::vec(0usize..8, 1..80),
    ) {
        let mut matrix = RecencyMatrix::new(ways);
        for &raw in &warmup {
            matrix.touch(raw % ways);
        }

        let picked = picked % ways;
        matrix.touch(picked);

        let mut touched_since: HashSet<usize> = HashSet::new();
        for &raw in &later {
            if matrix.least_recently_used() == picked {
                prop_assert_eq!(
                    touched_since.len(),
                    ways - 1,
                    "way {} became the victim before {:?} covered all others",
                    picked,
                    touched_since
                );
            }

            let way = raw % ways;
            matrix.touch(way);
            if way == picked {
                touched_since.clear();
            } else {
                touched_since.insert(way);
            }
        }
    }

    /// A fill followed by a lookup of the same address hits the same
    /// set/way and returns the payload, for any geometry.
    #[test]
    fn fill_then_lookup_round_trips(
        addr in any::<u64>(),
        payload in any::<u64>(),
        sets in 1usize..=64,
        ways in 1usize..=8,
    ) {
        let config = CacheConfig {
            sets,
            ways,
            tag_msb: 63,
            tag_lsb: 0,
            strategy: IndexStrategy::Modulo,
        };
        let mut cache = Cache::new(&config).unwrap();

        let outcome = cache.fill(addr, payload);
        prop_assert!(
            matches!(outcome, FillOutcome::Inserted { evicted: false, .. }),
            "expected a clean insert, got {:?}",
            outcome
        );

        let lookup = cache.lookup(addr);
        prop_assert!(lookup.hit);
        if let FillOutcome::Inserted { set, way, .. } = outcome {
            prop_assert_eq!((lookup.set, lookup.way), (set, way));
            prop_assert_eq!(cache.data(set, way), Some(&payload));
        }
    }

    /// Extraction always fits the field width.
    #[test]
    fn extraction_fits_the_field_width(
        addr in any::<u64>(),
        msb in 0u32..64,
        lsb in 0u32..64,
    ) {
        prop_assume!(msb >= lsb);
        let field = BitRange::new(msb, lsb).unwrap();
        let value = field.extract(addr);
        if field.width() < 64 {
            prop_assert!(value < (1u64 << field.width()));
        }
    }

    /// A four-bit window anywhere in the address extracts the same value a
    /// hand-written shift-and-mask does.
    #[test]
    fn extraction_matches_a_manual_shift(addr in any::<u64>(), lsb in 0u32..=60) {
        let field = BitRange::new(lsb + 3, lsb).unwrap();
        prop_assert_eq!(field.extract(addr), (addr >> lsb) & 0xF);
    }
}
