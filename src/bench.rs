//! Benchmark pipeline: build one table per modulus, replay the query batch against each, and
//! assemble the measurements into a [`Report`].

pub mod builder;
pub mod clock;
pub mod report;
pub mod search;

pub use builder::{BuildStats, BuiltTable, TableBuilder};
pub use clock::{measure, Clock, MonotonicClock, SteppingClock};
pub use report::{NotFoundRow, QueryRow, Report, NOT_FOUND_PLACEHOLDER_ID};
pub use search::{SearchOutcome, SearchResult, SearchRunner, SearchStats, NOT_FOUND};

use log::debug;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::record::Record;

/// Runs the full benchmark timed by the wall clock.
pub fn run(config: &BenchConfig, records: &[Record], queries: &[u64]) -> Result<Report> {
    run_with_clock(config, records, queries, &MonotonicClock::new())
}

/// Runs the full benchmark with an injected clock.
///
/// Every table is built before any is searched; the report is assembled only after all
/// search passes complete.
pub fn run_with_clock<C: Clock + ?Sized>(
    config: &BenchConfig,
    records: &[Record],
    queries: &[u64],
    clock: &C,
) -> Result<Report> {
    config.validate()?;
    debug!(
        "running {} records x {} queries over moduli {:?}",
        records.len(),
        queries.len(),
        config.moduli
    );

    let builder = TableBuilder::with_clock(clock).with_base(config.base);
    let runner = SearchRunner::with_clock(clock);

    #[cfg(not(feature = "parallel"))]
    let (built, results) = {
        let built = builder.build(&config.moduli, records)?;
        let results = runner.run(built.iter().map(|b| &b.table), queries);
        (built, results)
    };
    #[cfg(feature = "parallel")]
    let (built, results) = {
        let built = builder.build_par(&config.moduli, records)?;
        let results = runner.run_par(built.iter().map(|b| &b.table), queries);
        (built, results)
    };

    let build_stats: Vec<BuildStats> = built.iter().map(|b| b.stats).collect();
    Ok(Report::aggregate(&build_stats, &results))
}
