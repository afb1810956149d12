//! percolation-stats CLI tool
//!
//! Estimates the percolation threshold of an N-by-N grid over T trials.
//!
//! Usage:
//!   percolation-stats <N> <T>

use percolation_stats::{Error, ExperimentConfig, PercolationStats, SiteSampling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_usage() {
    eprintln!("percolation-stats - Monte Carlo estimate of the percolation threshold");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  percolation-stats <N> <T>   Run T trials on an N-by-N grid");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PERCOLATION_SEED      Base seed for a reproducible run");
    eprintln!("  PERCOLATION_SAMPLING  rejection (default) or pool");
    eprintln!("  PERCOLATION_PARALLEL  1 or true to run trials in parallel");
    eprintln!("  RUST_LOG              Log filter (logs go to stderr)");
}

/// Parse the two positional arguments as signed integers so negative values
/// reach validation instead of failing as malformed.
fn parse_args(args: &[String]) -> Result<(i64, i64), String> {
    match args {
        [n, t] => {
            let n = n
                .parse::<i64>()
                .map_err(|e| format!("invalid grid size {:?}: {}", n, e))?;
            let t = t
                .parse::<i64>()
                .map_err(|e| format!("invalid trial count {:?}: {}", t, e))?;
            Ok((n, t))
        }
        _ => Err(format!("expected 2 arguments, got {}", args.len())),
    }
}

/// Layer `PERCOLATION_*` settings from `var` over the positional arguments.
fn build_config<F>(n: i64, t: i64, var: F) -> Result<ExperimentConfig, Error>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ExperimentConfig::from_signed(n, t)?;

    if let Some(seed) = var("PERCOLATION_SEED") {
        let seed = seed
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::InvalidArgument(format!("PERCOLATION_SEED {:?}: {}", seed, e)))?;
        config = config.with_seed(seed);
    }
    if let Some(sampling) = var("PERCOLATION_SAMPLING") {
        config = config.with_sampling(sampling.parse::<SiteSampling>()?);
    }
    if let Some(parallel) = var("PERCOLATION_PARALLEL") {
        let parallel = matches!(parallel.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        config = config.parallel(parallel);
    }

    Ok(config)
}

fn report(stats: &PercolationStats) -> String {
    format!(
        "mean                    = {}\n\
         stddev                  = {}\n\
         95% confidence interval = {}, {}",
        stats.mean(),
        stats.stddev(),
        stats.confidence_lo(),
        stats.confidence_hi()
    )
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "percolation_stats=warn,percolation_grid=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let (n, t) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let stats = build_config(n, t, |key| std::env::var(key).ok())
        .and_then(|config| PercolationStats::with_config(&config));

    match stats {
        Ok(stats) => println!("{}", report(&stats)),
        Err(e) => {
            tracing::error!("Experiment failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
