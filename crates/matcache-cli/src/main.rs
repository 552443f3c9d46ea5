//! Matcache CLI - harness for the memoizing matrix-inversion solver
//!
//! Reads a matrix as nested JSON row arrays, inverts it through the caching
//! solver, and reports the inverse together with cache statistics. Repeated
//! solves of the same input (`--repeat`) demonstrate the cache at work.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use matcache_core::{CacheStats, CachedSolver};
use matcache_linalg::{InvertOptions, MatMul, Matrix};

#[derive(Parser)]
#[command(
    name = "matcache",
    version = env!("CARGO_PKG_VERSION"),
    about = "Memoizing matrix inversion",
    long_about = "Inverts a matrix read from JSON row arrays, caching the result so repeated solves of the exact same matrix are answered without recomputation."
)]
struct Cli {
    /// Matrix input file (JSON nested row arrays), or '-' for stdin
    input: PathBuf,

    /// Solve the same matrix this many times
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,

    /// Check the result by multiplying it back against the input
    #[arg(long)]
    verify: bool,

    /// Pivot magnitudes at or below this threshold count as zero
    #[arg(long, env = "MATCACHE_PIVOT_THRESHOLD", default_value_t = 1e-12)]
    pivot_threshold: f64,

    /// JSON output format
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet output (errors only)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    inverse: &'a Matrix,
    stats: &'a CacheStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_identity_deviation: Option<f64>,
}

fn main() {
    let cli = Cli::parse();

    let result = init_logging(&cli).and_then(|_| run(&cli));
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let matrix = read_matrix(&cli.input)?;
    debug!("loaded {}x{} matrix", matrix.rows(), matrix.cols());

    let options = InvertOptions {
        pivot_threshold: cli.pivot_threshold,
    };

    let mut solver = CachedSolver::new();
    let mut inverse = solver.solve_with(&matrix, &options)?;
    for _ in 1..cli.repeat {
        inverse = solver.solve_with(&matrix, &options)?;
    }

    let max_identity_deviation = if cli.verify {
        Some(max_identity_deviation(&matrix, &inverse)?)
    } else {
        None
    };

    if cli.json {
        let report = Report {
            inverse: &inverse,
            stats: solver.stats(),
            max_identity_deviation,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !cli.quiet {
        println!("{}", style("Inverse").bold());
        print!("{}", inverse);

        let stats = solver.stats();
        println!(
            "{} {} computed, {} from cache ({:.0}% hit rate)",
            style("Cache:").bold(),
            stats.misses,
            stats.hits,
            stats.hit_rate() * 100.0
        );

        if let Some(deviation) = max_identity_deviation {
            println!(
                "{} max deviation from identity {:.3e}",
                style("Verify:").bold(),
                deviation
            );
        }
    }

    Ok(())
}

fn read_matrix(input: &Path) -> Result<Matrix> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read matrix from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read matrix from {}", input.display()))?
    };

    let matrix: Matrix = serde_json::from_str(&text)
        .context("Failed to parse matrix, expected JSON nested row arrays")?;
    Ok(matrix)
}

/// Largest absolute elementwise difference between `m @ inverse` and the
/// identity matrix
fn max_identity_deviation(m: &Matrix, inverse: &Matrix) -> Result<f64> {
    let product = MatMul::compute(m, inverse)?;
    let n = product.rows();
    let mut max = 0.0f64;
    for r in 0..n {
        for c in 0..n {
            let expected = if r == c { 1.0 } else { 0.0 };
            max = max.max((product[(r, c)] - expected).abs());
        }
    }
    Ok(max)
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
