//! Writing a [`Report`] as the two comma-delimited statistics files.
//!
//! Construction file: build times, occupancies, max chain lengths, avg chain lengths; one line
//! each, one column per modulus. Search file: total search times, then `id,name,c1..cN` per
//! query, then every not-found query again under the placeholder id.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use log::info;

use crate::bench::{Report, NOT_FOUND};
use crate::config::BenchConfig;
use crate::error::{Error, Result};

fn join_fixed(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(",")
}

fn join_plain<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders the construction statistics file.
pub fn render_build_stats(report: &Report) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        join_fixed(&report.build_times_ms()),
        join_fixed(&report.occupancies()),
        join_plain(&report.max_chain_lengths()),
        join_fixed(&report.avg_chain_lengths()),
    )
}

/// Renders the search statistics file.
pub fn render_search_stats(report: &Report) -> String {
    let mut out = join_fixed(&report.search_times_ms());
    out.push('\n');

    for row in &report.queries {
        out.push_str(&format!("{},{}", row.id, row.name));
        for c in &row.comparisons {
            out.push_str(&format!(",{}", c));
        }
        out.push('\n');
    }

    for row in &report.not_found {
        out.push_str(&format!(
            "{},{},{}\n",
            row.placeholder_id,
            NOT_FOUND,
            join_plain(&row.comparisons)
        ));
    }
    out
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Writes both statistics files to the paths named in `config`.
pub fn write_report(report: &Report, config: &BenchConfig) -> Result<()> {
    write_file(&config.build_stats_path, &render_build_stats(report))?;
    write_file(&config.search_stats_path, &render_search_stats(report))?;
    info!(
        "statistics written to {} and {}",
        config.build_stats_path.display(),
        config.search_stats_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::{BuildStats, NotFoundRow, QueryRow, SearchStats, NOT_FOUND_PLACEHOLDER_ID};

    fn report() -> Report {
        Report {
            build: vec![
                BuildStats {
                    modulus: 7,
                    build_time_ms: 0.12345,
                    occupancy: 3.0 / 7.0,
                    max_chain_length: 2,
                    avg_chain_length: 4.0 / 3.0,
                },
                BuildStats {
                    modulus: 11,
                    build_time_ms: 1.5,
                    occupancy: 4.0 / 11.0,
                    max_chain_length: 1,
                    avg_chain_length: 1.0,
                },
            ],
            search: vec![
                SearchStats { modulus: 7, total_search_time_ms: 0.0004 },
                SearchStats { modulus: 11, total_search_time_ms: 2.0 },
            ],
            queries: vec![
                QueryRow { id: 3, name: "Ann".into(), comparisons: vec![1, 1] },
                QueryRow { id: 8, name: NOT_FOUND.into(), comparisons: vec![2, 1] },
            ],
            not_found: vec![NotFoundRow {
                placeholder_id: NOT_FOUND_PLACEHOLDER_ID,
                id: 8,
                comparisons: vec![2, 1],
            }],
        }
    }

    #[test]
    fn test_render_build_stats() {
        assert_eq!(
            render_build_stats(&report()),
            "0.123,1.500\n0.429,0.364\n2,1\n1.333,1.000\n"
        );
    }

    #[test]
    fn test_render_search_stats() {
        assert_eq!(
            render_search_stats(&report()),
            "0.000,2.000\n3,Ann,1,1\n8,NOT_FOUND,2,1\n99999,NOT_FOUND,2,1\n"
        );
    }

    #[test]
    fn test_render_empty_batch() {
        let mut r = report();
        r.queries.clear();
        r.not_found.clear();
        assert_eq!(render_search_stats(&r), "0.000,2.000\n");
    }
}
