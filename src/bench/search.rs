//! # Search Runner
//!
//! Replays a fixed batch of point lookups against each table. Every query records the number of
//! comparisons its bucket scan needed; the whole batch is timed as a single interval per table.

use log::info;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::bench::clock::{measure, Clock, MonotonicClock};
use crate::hashing::ChainedTable;
use crate::record::Record;

/// Name reported for a query that no record matched.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Result of one query against one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    pub query: u64,
    /// Always at least 1.
    pub comparisons: usize,
    pub found: Option<&'a Record>,
}

impl<'a> SearchOutcome<'a> {
    /// The matched record's name, or [`NOT_FOUND`].
    pub fn name(&self) -> &'a str {
        self.found.map_or(NOT_FOUND, |record| record.name.as_str())
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Timing for one table's full query batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    pub modulus: u64,
    pub total_search_time_ms: f64,
}

/// Per-table output of a search pass: batch timing plus one outcome per query, in query order.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub stats: SearchStats,
    pub outcomes: Vec<SearchOutcome<'a>>,
}

/// Runs query batches against chained tables.
#[derive(Debug, Clone, Default)]
pub struct SearchRunner<C = MonotonicClock> {
    clock: C,
}

impl SearchRunner<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl<C: Clock> SearchRunner<C> {
    pub fn with_clock(clock: C) -> Self {
        SearchRunner { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Looks up every query in `table`, in order.
    pub fn run_one<'a>(&self, table: &ChainedTable<'a>, queries: &[u64]) -> SearchResult<'a> {
        let (outcomes, total_search_time_ms) = measure(&self.clock, || {
            queries
                .iter()
                .map(|&query| {
                    let lookup = table.lookup(query);
                    SearchOutcome {
                        query,
                        comparisons: lookup.comparisons,
                        found: lookup.found,
                    }
                })
                .collect::<Vec<_>>()
        });

        info!(
            "searched table m={}: {} queries in {:.3} ms",
            table.modulus(),
            queries.len(),
            total_search_time_ms
        );
        SearchResult {
            stats: SearchStats {
                modulus: table.modulus(),
                total_search_time_ms,
            },
            outcomes,
        }
    }

    /// Runs the batch against each table in turn; one result per table, in table order.
    pub fn run<'t, 'a: 't, I>(&self, tables: I, queries: &[u64]) -> Vec<SearchResult<'a>>
    where
        I: IntoIterator<Item = &'t ChainedTable<'a>>,
    {
        tables
            .into_iter()
            .map(|table| self.run_one(table, queries))
            .collect()
    }

    /// Like [`SearchRunner::run`], with one worker per table. Output order matches input order.
    #[cfg(feature = "parallel")]
    pub fn run_par<'t, 'a: 't, I>(&self, tables: I, queries: &[u64]) -> Vec<SearchResult<'a>>
    where
        I: IntoIterator<Item = &'t ChainedTable<'a>>,
    {
        let tables: Vec<&ChainedTable<'a>> = tables.into_iter().collect();
        tables
            .par_iter()
            .map(|table| self.run_one(table, queries))
            .collect()
    }
}
