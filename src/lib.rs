//! # chainbench
//!
//! Builds a separate-chaining hash table for each of several table sizes over the same records,
//! replays a batch of lookups against every table, and reports construction time, load figures,
//! per-query comparison counts and search time for each size.
//!
//! ```rust
//! use chainbench::{bench, BenchConfig, Record};
//!
//! let records = vec![Record::new(1, "A", vec![]), Record::new(32, "B", vec![])];
//! let config = BenchConfig::default().with_moduli(vec![31, 97]);
//! let report = bench::run(&config, &records, &[32, 5]).unwrap();
//!
//! assert_eq!(report.queries[0].name, "B");
//! assert_eq!(report.queries[1].name, bench::NOT_FOUND);
//! assert_eq!(report.queries[1].comparisons, vec![1, 1]);
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod hashing;
pub mod io;
pub mod record;

pub use bench::Report;
pub use config::BenchConfig;
pub use error::{Error, Result};
pub use record::Record;
