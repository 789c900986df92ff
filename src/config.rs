//! Run configuration: table sizes, hash base, and file locations.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::hashing::DEFAULT_BASE;

/// Table sizes of the reference run.
pub const DEFAULT_MODULI: [u64; 5] = [3793, 6637, 9473, 12323, 15149];

/// Everything one benchmark run needs to know, passed explicitly to [`crate::bench::run`]
/// and the I/O helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Table sizes, processed in this order. The first is the canonical table.
    pub moduli: Vec<u64>,
    pub base: u64,
    pub records_path: PathBuf,
    pub queries_path: PathBuf,
    pub build_stats_path: PathBuf,
    pub search_stats_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            moduli: DEFAULT_MODULI.to_vec(),
            base: DEFAULT_BASE,
            records_path: PathBuf::from("players.csv"),
            queries_path: PathBuf::from("consultas.csv"),
            build_stats_path: PathBuf::from("estatisticas_construcao.txt"),
            search_stats_path: PathBuf::from("estatisticas_consultas.txt"),
        }
    }
}

impl BenchConfig {
    pub fn with_moduli(mut self, moduli: Vec<u64>) -> Self {
        self.moduli = moduli;
        self
    }

    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Rejects settings that would fail part-way through a run.
    pub fn validate(&self) -> Result<()> {
        if self.moduli.is_empty() {
            return Err(Error::EmptyModuli);
        }
        if let Some(&modulus) = self.moduli.iter().find(|&&m| m == 0) {
            return Err(Error::InvalidModulus { modulus });
        }
        if self.base < 2 {
            return Err(Error::InvalidBase { base: self.base });
        }
        Ok(())
    }
}
