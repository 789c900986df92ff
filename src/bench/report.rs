//! Aggregation of build and search measurements into one [`Report`].
//!
//! A query's reported name comes from the first table searched (the *canonical* table), while its
//! comparison counts come from every table.

use log::debug;

use crate::bench::builder::BuildStats;
use crate::bench::search::{SearchResult, SearchStats};

/// Id under which not-found queries are re-listed in the search statistics.
pub const NOT_FOUND_PLACEHOLDER_ID: u64 = 99999;

/// One query's canonical name and its comparison count in every table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRow {
    pub id: u64,
    pub name: String,
    /// Indexed like the moduli.
    pub comparisons: Vec<usize>,
}

/// A query the canonical table did not resolve.
///
/// Written out under `placeholder_id`; the real `id` is kept for callers that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundRow {
    pub placeholder_id: u64,
    pub id: u64,
    pub comparisons: Vec<usize>,
}

/// Everything a run measured, ordered by modulus index and then by query order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub build: Vec<BuildStats>,
    pub search: Vec<SearchStats>,
    pub queries: Vec<QueryRow>,
    pub not_found: Vec<NotFoundRow>,
}

impl Report {
    /// Reshapes per-table measurements into per-modulus columns and per-query rows.
    ///
    /// `search` must hold one result per table, each covering the same query batch.
    pub fn aggregate(build: &[BuildStats], search: &[SearchResult<'_>]) -> Report {
        let queries: Vec<QueryRow> = match search.first() {
            Some(canonical) => canonical
                .outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| QueryRow {
                    id: outcome.query,
                    name: outcome.name().to_string(),
                    comparisons: search.iter().map(|r| r.outcomes[i].comparisons).collect(),
                })
                .collect(),
            None => Vec::new(),
        };

        let not_found: Vec<NotFoundRow> = match search.first() {
            Some(canonical) => canonical
                .outcomes
                .iter()
                .zip(&queries)
                .filter(|(outcome, _)| !outcome.is_found())
                .map(|(_, row)| NotFoundRow {
                    placeholder_id: NOT_FOUND_PLACEHOLDER_ID,
                    id: row.id,
                    comparisons: row.comparisons.clone(),
                })
                .collect(),
            None => Vec::new(),
        };

        debug!(
            "report: {} moduli, {} queries, {} not found",
            build.len(),
            queries.len(),
            not_found.len()
        );
        Report {
            build: build.to_vec(),
            search: search.iter().map(|r| r.stats).collect(),
            queries,
            not_found,
        }
    }

    pub fn moduli(&self) -> Vec<u64> {
        self.build.iter().map(|b| b.modulus).collect()
    }

    pub fn build_times_ms(&self) -> Vec<f64> {
        self.build.iter().map(|b| b.build_time_ms).collect()
    }

    pub fn occupancies(&self) -> Vec<f64> {
        self.build.iter().map(|b| b.occupancy).collect()
    }

    pub fn max_chain_lengths(&self) -> Vec<usize> {
        self.build.iter().map(|b| b.max_chain_length).collect()
    }

    pub fn avg_chain_lengths(&self) -> Vec<f64> {
        self.build.iter().map(|b| b.avg_chain_length).collect()
    }

    pub fn search_times_ms(&self) -> Vec<f64> {
        self.search.iter().map(|s| s.total_search_time_ms).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::search::{SearchOutcome, NOT_FOUND};
    use crate::record::Record;

    fn stats(modulus: u64) -> BuildStats {
        BuildStats {
            modulus,
            build_time_ms: 1.0,
            occupancy: 0.5,
            max_chain_length: 2,
            avg_chain_length: 1.5,
        }
    }

    fn result<'a>(modulus: u64, outcomes: Vec<SearchOutcome<'a>>) -> SearchResult<'a> {
        SearchResult {
            stats: SearchStats {
                modulus,
                total_search_time_ms: modulus as f64 / 10.0,
            },
            outcomes,
        }
    }

    #[test]
    fn test_canonical_name_and_comparison_vectors() {
        let alice = Record::new(10, "Alice", vec![]);
        let shadow = Record::new(10, "Shadow", vec![]);

        let first = result(
            7,
            vec![
                SearchOutcome { query: 10, comparisons: 1, found: Some(&alice) },
                SearchOutcome { query: 44, comparisons: 3, found: None },
            ],
        );
        // a later table resolving differently must not change the reported name
        let second = result(
            11,
            vec![
                SearchOutcome { query: 10, comparisons: 2, found: Some(&shadow) },
                SearchOutcome { query: 44, comparisons: 1, found: None },
            ],
        );

        let report = Report::aggregate(&[stats(7), stats(11)], &[first, second]);
        assert_eq!(report.moduli(), vec![7, 11]);
        assert_eq!(report.search_times_ms(), vec![0.7, 1.1]);
        assert_eq!(
            report.queries,
            vec![
                QueryRow { id: 10, name: "Alice".into(), comparisons: vec![1, 2] },
                QueryRow { id: 44, name: NOT_FOUND.into(), comparisons: vec![3, 1] },
            ]
        );
        assert_eq!(
            report.not_found,
            vec![NotFoundRow {
                placeholder_id: NOT_FOUND_PLACEHOLDER_ID,
                id: 44,
                comparisons: vec![3, 1],
            }]
        );
    }

    #[test]
    fn test_not_found_follows_canonical_table_only() {
        let bob = Record::new(5, "Bob", vec![]);
        let first = result(3, vec![SearchOutcome { query: 5, comparisons: 4, found: None }]);
        let second = result(5, vec![SearchOutcome { query: 5, comparisons: 1, found: Some(&bob) }]);
        let report = Report::aggregate(&[stats(3), stats(5)], &[first, second]);
        assert_eq!(report.queries[0].name, NOT_FOUND);
        assert_eq!(report.not_found.len(), 1);
    }

    #[test]
    fn test_empty_batch_keeps_build_columns() {
        let report = Report::aggregate(&[stats(31)], &[result(31, vec![])]);
        assert!(report.queries.is_empty());
        assert!(report.not_found.is_empty());
        assert_eq!(report.build.len(), 1);
        assert_eq!(report.search.len(), 1);
        assert_eq!(report.max_chain_lengths(), vec![2]);
        assert_eq!(report.occupancies(), vec![0.5]);
        assert_eq!(report.avg_chain_lengths(), vec![1.5]);
        assert_eq!(report.build_times_ms(), vec![1.0]);
    }
}
