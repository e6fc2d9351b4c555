//! Format comparison CLI
//!
//! Run Swiss and group-stage simulations, store the summary, chart it, and
//! check a real league-phase table against the same weak threshold.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use format_compare::{
    load_rating_map, load_real_list, load_summary_csv, render_comparison_chart,
    validate_real_season, write_summary_csv, RunReport,
};
use season_core::{
    baseline_report, run_comparison, seeded_rng, swiss_report, MonteCarloRunner, SimConfig,
};

#[derive(Parser)]
#[command(name = "format_compare")]
#[command(about = "Monte Carlo comparison of Swiss and group-stage formats", long_about = None)]
struct Cli {
    #[command(flatten)]
    sim: SimArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SimArgs {
    /// TOML file with simulation settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Seasons per format
    #[arg(long, short = 'n', global = true)]
    seasons: Option<u32>,

    /// Weak teams are rated strictly below this
    #[arg(long, global = true)]
    threshold: Option<i32>,

    /// Probability of a draw in any fixture
    #[arg(long, global = true)]
    draw_prob: Option<f64>,

    /// Parallel workers, each seeded with seed + worker index
    #[arg(long, short = 'w', global = true, default_value_t = 1)]
    workers: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate the Swiss league phase only
    Swiss,

    /// Simulate the classic group stage only
    Baseline,

    /// Simulate both formats and write the summary table
    Compare {
        /// Summary CSV output path
        #[arg(long, default_value = "data/summary.csv")]
        out: PathBuf,

        /// Also write a JSON run report
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Chart a stored summary
    Plot {
        /// Summary CSV written by `compare`
        #[arg(long, default_value = "data/summary.csv")]
        summary: PathBuf,

        /// Write the chart to this file as well
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Count weak teams in a real league-phase table
    Validate {
        /// CSV with `team,elo` columns
        #[arg(long, default_value = "data/clubelo_snapshot.csv")]
        ratings: PathBuf,

        /// CSV with `team,group` columns (`top8` / `9-24`)
        #[arg(long, default_value = "data/real_swiss_2024_25_top24.csv")]
        results: PathBuf,
    },
}

impl SimArgs {
    /// Defaults, then the config file, then explicit flags.
    fn build_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(seasons) = self.seasons {
            config.n_seasons = seasons;
        }
        if let Some(threshold) = self.threshold {
            config.weak_threshold = threshold;
        }
        if let Some(draw_prob) = self.draw_prob {
            config.draw_prob = draw_prob;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("format_compare=info,season_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_swiss(config: SimConfig, workers: usize) -> Result<()> {
    let n = config.n_seasons;
    let runner = MonteCarloRunner::new(config)?;
    let averages = if workers > 1 {
        runner.run_swiss_parallel(n, workers)?
    } else {
        runner.run_swiss_simulation(n, &mut seeded_rng(runner.config().seed))?
    };
    println!("{}", swiss_report(runner.config(), n, &averages));
    Ok(())
}

fn run_baseline(config: SimConfig, workers: usize) -> Result<()> {
    let n = config.n_seasons;
    let runner = MonteCarloRunner::new(config)?;
    let averages = if workers > 1 {
        runner.run_baseline_parallel(n, workers)?
    } else {
        runner.run_baseline_simulation(n, &mut seeded_rng(runner.config().seed))?
    };
    println!("{}", baseline_report(runner.config(), n, &averages));
    Ok(())
}

fn run_compare(config: SimConfig, workers: usize, out: &Path, json: Option<&Path>) -> Result<()> {
    println!("\n=== COMPARE: SWISS vs BASELINE ===\n");

    let summary = run_comparison(&config, workers)?;
    println!("{}", swiss_report(&config, summary.n_seasons, &summary.swiss));
    println!("{}", baseline_report(&config, summary.n_seasons, &summary.baseline));
    println!();
    println!("{}", summary.generate_report());

    write_summary_csv(out, &summary)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Saved results to {}", out.display());

    if let Some(path) = json {
        RunReport::new("Swiss vs baseline", config, workers, summary)
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Saved run report to {}", path.display());
    }
    Ok(())
}

fn run_plot(summary: &Path, out: Option<&Path>) -> Result<()> {
    let data = load_summary_csv(summary)
        .with_context(|| format!("reading {}", summary.display()))?;
    let chart = render_comparison_chart(&data)?;
    println!("{chart}");

    if let Some(path) = out {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &chart)?;
        println!("Saved {}", path.display());
    }
    Ok(())
}

fn run_validate(ratings: &Path, results: &Path, threshold: i32) -> Result<()> {
    let rating_map = load_rating_map(ratings)
        .with_context(|| format!("reading {}", ratings.display()))?;
    let standings = load_real_list(results)
        .with_context(|| format!("reading {}", results.display()))?;

    let report = validate_real_season(&rating_map, &standings, threshold);
    print!("{}", report.generate_report());
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.sim.build_config()?;
    let workers = cli.sim.workers.max(1);
    info!(seed = config.seed, n_seasons = config.n_seasons, workers, "configuration ready");

    match cli.command {
        Commands::Swiss => run_swiss(config, workers),
        Commands::Baseline => run_baseline(config, workers),
        Commands::Compare { out, json } => run_compare(config, workers, &out, json.as_deref()),
        Commands::Plot { summary, out } => run_plot(&summary, out.as_deref()),
        Commands::Validate { ratings, results } => {
            run_validate(&ratings, &results, config.weak_threshold)
        }
    }
}
