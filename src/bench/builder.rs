//! # Table Builder
//!
//! Builds one [`ChainedTable`] per requested modulus over the same record set, timing the
//! insertion pass and summarising how evenly the records spread:
//! - **occupancy**: fraction of buckets holding at least one record,
//! - **max chain length**: longest bucket,
//! - **avg chain length**: records per non-empty bucket (0 for an empty table).
//!
//! Bucket allocation happens before the timer starts; only the insertion loop is measured.

use log::info;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bench::clock::{measure, Clock, MonotonicClock};
use crate::error::Result;
use crate::hashing::{ChainedTable, ChainedTableBuilder, LoadStats, DEFAULT_BASE};
use crate::record::Record;

/// Construction measurements for one modulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildStats {
    pub modulus: u64,
    pub build_time_ms: f64,
    pub occupancy: f64,
    pub max_chain_length: usize,
    pub avg_chain_length: f64,
}

impl BuildStats {
    /// Derives the reported ratios from raw bucket figures.
    pub fn from_load(modulus: u64, build_time_ms: f64, load: LoadStats) -> Self {
        let avg_chain_length = if load.non_empty_buckets == 0 {
            0.0
        } else {
            load.total_entries as f64 / load.non_empty_buckets as f64
        };
        BuildStats {
            modulus,
            build_time_ms,
            occupancy: load.non_empty_buckets as f64 / modulus as f64,
            max_chain_length: load.max_chain_length,
            avg_chain_length,
        }
    }
}

/// A populated table together with its construction statistics.
#[derive(Debug, Clone)]
pub struct BuiltTable<'a> {
    pub table: ChainedTable<'a>,
    pub stats: BuildStats,
}

/// Builds and measures chained tables, one per modulus.
#[derive(Debug, Clone)]
pub struct TableBuilder<C = MonotonicClock> {
    clock: C,
    base: u64,
}

impl TableBuilder<MonotonicClock> {
    /// Builder timed by the wall clock, using the default hash base.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for TableBuilder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TableBuilder<C> {
    pub fn with_clock(clock: C) -> Self {
        TableBuilder {
            clock,
            base: DEFAULT_BASE,
        }
    }

    /// Sets the polynomial base used by every table this builder creates.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Builds the table for a single modulus.
    ///
    /// # Errors
    /// - [`crate::Error::InvalidModulus`] for a zero modulus.
    /// - [`crate::Error::InvalidBase`] if the configured base is below 2.
    pub fn build_one<'a>(&self, modulus: u64, records: &'a [Record]) -> Result<BuiltTable<'a>> {
        let mut table = ChainedTableBuilder::new()
            .with_modulus(modulus)
            .with_base(self.base)
            .build()?;

        let ((), build_time_ms) = measure(&self.clock, || {
            for record in records {
                table.insert(record);
            }
        });

        let stats = BuildStats::from_load(modulus, build_time_ms, table.load_stats());
        info!(
            "built table m={} in {:.3} ms (occupancy {:.3}, max chain {}, avg chain {:.3})",
            modulus, build_time_ms, stats.occupancy, stats.max_chain_length, stats.avg_chain_length
        );
        Ok(BuiltTable { table, stats })
    }

    /// Builds one table per modulus, in input order. The first invalid modulus aborts the run.
    pub fn build<'a>(&self, moduli: &[u64], records: &'a [Record]) -> Result<Vec<BuiltTable<'a>>> {
        moduli
            .iter()
            .map(|&modulus| self.build_one(modulus, records))
            .collect()
    }

    /// Like [`TableBuilder::build`], but builds the tables concurrently.
    ///
    /// Tables share nothing; results come back in input order once every modulus is done.
    #[cfg(feature = "parallel")]
    pub fn build_par<'a>(
        &self,
        moduli: &[u64],
        records: &'a [Record],
    ) -> Result<Vec<BuiltTable<'a>>> {
        moduli
            .par_iter()
            .map(|&modulus| self.build_one(modulus, records))
            .collect()
    }
}
