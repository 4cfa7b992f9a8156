//! Simulation statistics.
//!
//! The cache core reports per-operation outcomes and counts nothing itself;
//! drivers feed those outcomes into a [`SimStats`] and print the summary
//! when the trace ends.

use crate::core::{FillOutcome, Lookup};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub accesses: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Fills that found their tag already resident (caller misuse).
    pub rejected_fills: u64,
}

impl SimStats {
    pub fn record_lookup(&mut self, lookup: &Lookup) {
        self.accesses += 1;
        if lookup.hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn record_fill(&mut self, outcome: &FillOutcome) {
        match outcome {
            FillOutcome::Inserted { evicted: true, .. } => self.evictions += 1,
            FillOutcome::Inserted { .. } | FillOutcome::Disabled => {}
            FillOutcome::AlreadyResident { .. } => self.rejected_fills += 1,
        }
    }

    pub fn print(&self) {
        println!("\n-----------------------------");
        println!("Accesses:        {}", self.accesses);

        if self.accesses > 0 {
            let rate = self.hits as f64 / self.accesses as f64;
            println!(
                "Hits:            {:.2}% hit rate ({} / {})",
                rate * 100.0,
                self.hits,
                self.accesses
            );
        } else {
            println!("Hits:            N/A");
        }

        println!("Misses:          {}", self.misses);
        println!("Evictions:       {}", self.evictions);
        if self.rejected_fills > 0 {
            println!("Rejected fills:  {}", self.rejected_fills);
        }
        println!("-----------------------------");
    }
}
