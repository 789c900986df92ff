use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;

use chainbench::{bench, io, BenchConfig};

/// Compare separate-chaining lookup cost across several table sizes
#[derive(Parser, Debug)]
#[command(name = "chainbench", version, about)]
struct Args {
    /// Records file (header line, then id,name,tags)
    #[arg(long, value_name = "FILE")]
    records: Option<PathBuf>,

    /// Queries file (one id per line)
    #[arg(long, value_name = "FILE")]
    queries: Option<PathBuf>,

    /// Output file for construction statistics
    #[arg(long, value_name = "FILE")]
    build_out: Option<PathBuf>,

    /// Output file for search statistics
    #[arg(long, value_name = "FILE")]
    search_out: Option<PathBuf>,

    /// Table sizes, comma-separated (e.g. 3793,6637,9473)
    #[arg(long, value_delimiter = ',')]
    moduli: Option<Vec<u64>>,

    /// Polynomial hash base
    #[arg(long)]
    base: Option<u64>,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        let mut config = BenchConfig::default();
        if let Some(path) = self.records {
            config.records_path = path;
        }
        if let Some(path) = self.queries {
            config.queries_path = path;
        }
        if let Some(path) = self.build_out {
            config.build_stats_path = path;
        }
        if let Some(path) = self.search_out {
            config.search_stats_path = path;
        }
        if let Some(moduli) = self.moduli {
            config.moduli = moduli;
        }
        if let Some(base) = self.base {
            config.base = base;
        }
        config
    }
}

fn run(config: &BenchConfig) -> chainbench::Result<()> {
    config.validate()?;
    let records = io::read_records(&config.records_path)?;
    let queries = io::read_queries(&config.queries_path)?;
    let report = bench::run(config, &records, &queries)?;
    io::write_report(&report, config)
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
