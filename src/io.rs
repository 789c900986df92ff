//! Text I/O around the benchmark: loading inputs and writing statistics files.

pub mod records;
pub mod writer;

pub use records::{parse_queries, parse_records, read_queries, read_records};
pub use writer::{render_build_stats, render_search_stats, write_report};
