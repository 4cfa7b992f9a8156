//! Trace-driven set-associative cache simulator CLI.

use clap::{Parser, ValueEnum};
use log::{debug, warn};
use std::{fs, process};

use waysim::config::{CacheConfig, IndexStrategy};
use waysim::core::{Cache, FillOutcome};
use waysim::stats::SimStats;
use waysim::trace;

#[derive(Parser, Debug)]
#[command(
    name = "waysim",
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = None,
)]
struct Cli {
    /// Address trace to replay (hex, one address per line).
    #[arg(short = 't', long)]
    trace: String,

    /// JSON cache configuration; built-in defaults are used when omitted.
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Override the configured set count (0 disables the cache).
    #[arg(long)]
    sets: Option<usize>,

    /// Override the configured associativity.
    #[arg(long)]
    ways: Option<usize>,

    /// Override the configured indexing strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Probe only: misses are counted but no lines are installed.
    #[arg(long)]
    no_fill: bool,

    /// Log every access (same as RUST_LOG=debug).
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Modulo,
    Hashed,
}

impl From<StrategyArg> for IndexStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Modulo => IndexStrategy::Modulo,
            StrategyArg::Hashed => IndexStrategy::Hashed,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(msg) => fail(&msg),
    };

    let mut cache: Cache<u64> = match Cache::new(&config) {
        Ok(cache) => cache,
        Err(e) => fail(&format!("invalid configuration: {}", e)),
    };

    let addrs = match trace::read_trace(&cli.trace) {
        Ok(addrs) => addrs,
        Err(e) => fail(&format!("cannot read trace '{}': {}", cli.trace, e)),
    };

    println!(
        "[*] {} sets x {} ways, {:?} indexing, {} accesses",
        cache.set_count(),
        cache.ways(),
        config.strategy,
        addrs.len()
    );

    let stats = run_trace(&mut cache, &addrs, !cli.no_fill);
    stats.print();
}

fn load_config(cli: &Cli) -> Result<CacheConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read config '{}': {}", path, e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("cannot parse config '{}': {}", path, e))?
        }
        None => CacheConfig::default(),
    };

    if let Some(sets) = cli.sets {
        config.sets = sets;
    }
    if let Some(ways) = cli.ways {
        config.ways = ways;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy.into();
    }

    Ok(config)
}

fn run_trace(cache: &mut Cache<u64>, addrs: &[u64], fill_on_miss: bool) -> SimStats {
    let mut stats = SimStats::default();

    for &addr in addrs {
        let lookup = cache.lookup(addr);
        stats.record_lookup(&lookup);
        debug!(
            "{:#012x} set={} way={} {}",
            addr,
            lookup.set,
            lookup.way,
            if lookup.hit { "HIT" } else { "MISS" }
        );

        if !lookup.hit && fill_on_miss {
            let outcome = cache.fill(addr, addr);
            stats.record_fill(&outcome);
            if let FillOutcome::AlreadyResident { set, way } = outcome {
                warn!(
                    "{:#012x} refill of resident line at set={} way={}",
                    addr, set, way
                );
            }
        }
    }

    stats
}

fn fail(msg: &str) -> ! {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", msg);
    process::exit(1);
}
