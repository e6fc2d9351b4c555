//! Monte Carlo driver: repeat single seasons and average their counts

use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{FormatKind, SimConfig};
use crate::error::{SimError, SimResult};
use crate::report::ComparisonSummary;
use crate::rng::{seeded_rng, worker_seed, SimRng};
use crate::season::{
    simulate_one_baseline_season, simulate_one_swiss_season, BaselineCounts, SwissCounts,
};

/// Expected weak-team counts per group-stage season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineAverages {
    pub avg_weak_qualified: f64,
    pub avg_weak_group_winners: f64,
}

impl BaselineAverages {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.avg_weak_qualified, self.avg_weak_group_winners)
    }
}

/// Expected weak-team counts per Swiss season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwissAverages {
    pub avg_weak_top8: f64,
    pub avg_weak_top24: f64,
}

impl SwissAverages {
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.avg_weak_top8, self.avg_weak_top24)
    }
}

/// The two counts a season produces, in reporting order
trait SeasonCounts {
    fn pair(&self) -> (u32, u32);
}

impl SeasonCounts for BaselineCounts {
    fn pair(&self) -> (u32, u32) {
        (self.weak_qualified, self.weak_group_winners)
    }
}

impl SeasonCounts for SwissCounts {
    fn pair(&self) -> (u32, u32) {
        (self.weak_top8, self.weak_top24)
    }
}

/// Summed counts over many seasons
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    first: u64,
    second: u64,
}

impl Totals {
    fn add(&mut self, counts: &impl SeasonCounts) {
        let (a, b) = counts.pair();
        self.first += u64::from(a);
        self.second += u64::from(b);
    }

    fn merge(self, other: Totals) -> Totals {
        Totals {
            first: self.first + other.first,
            second: self.second + other.second,
        }
    }

    fn averages(&self, n_seasons: u32) -> (f64, f64) {
        let n = f64::from(n_seasons);
        (self.first as f64 / n, self.second as f64 / n)
    }
}

fn run_seasons<R, C, F>(n_seasons: u32, rng: &mut R, mut season: F) -> SimResult<Totals>
where
    R: Rng + ?Sized,
    C: SeasonCounts,
    F: FnMut(&mut R) -> SimResult<C>,
{
    let mut totals = Totals::default();
    for _ in 0..n_seasons {
        totals.add(&season(&mut *rng)?);
    }
    Ok(totals)
}

/// Seasons handled by `worker` when `n_seasons` are split over `workers`.
/// The first `n_seasons % workers` workers take one extra season.
pub fn worker_share(n_seasons: u32, workers: usize, worker: usize) -> u32 {
    if workers == 0 {
        return 0;
    }
    let workers = workers as u32;
    let base = n_seasons / workers;
    let extra = u32::from((worker as u32) < n_seasons % workers);
    base + extra
}

/// Runs many seasons of either format under one configuration
pub struct MonteCarloRunner {
    config: SimConfig,
}

impl MonteCarloRunner {
    /// Build a runner over a validated config. An invalid tier table or draw
    /// probability is rejected here, before any season is simulated.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Average weak qualifiers and weak group winners over `n_seasons`
    /// group-stage seasons drawn from `rng`.
    pub fn run_baseline_simulation<R: Rng + ?Sized>(
        &self,
        n_seasons: u32,
        rng: &mut R,
    ) -> SimResult<BaselineAverages> {
        check_seasons(n_seasons)?;
        info!(format = %FormatKind::GroupStage, n_seasons, "starting Monte Carlo run");

        let totals = run_seasons(n_seasons, rng, |rng| {
            simulate_one_baseline_season(&self.config, rng)
        })?;
        let (avg_weak_qualified, avg_weak_group_winners) = totals.averages(n_seasons);

        info!(avg_weak_qualified, avg_weak_group_winners, "group stage run finished");
        Ok(BaselineAverages {
            avg_weak_qualified,
            avg_weak_group_winners,
        })
    }

    /// Average weak teams in the Swiss top 8 and top 24 over `n_seasons`
    /// seasons drawn from `rng`.
    pub fn run_swiss_simulation<R: Rng + ?Sized>(
        &self,
        n_seasons: u32,
        rng: &mut R,
    ) -> SimResult<SwissAverages> {
        check_seasons(n_seasons)?;
        info!(format = %FormatKind::Swiss, n_seasons, "starting Monte Carlo run");

        let totals = run_seasons(n_seasons, rng, |rng| {
            simulate_one_swiss_season(&self.config, rng)
        })?;
        let (avg_weak_top8, avg_weak_top24) = totals.averages(n_seasons);

        info!(avg_weak_top8, avg_weak_top24, "Swiss run finished");
        Ok(SwissAverages {
            avg_weak_top8,
            avg_weak_top24,
        })
    }

    /// Group-stage run split over `workers` threads, worker `w` seeded with
    /// `seed + w`.
    pub fn run_baseline_parallel(
        &self,
        n_seasons: u32,
        workers: usize,
    ) -> SimResult<BaselineAverages> {
        let totals =
            self.run_parallel(n_seasons, workers, simulate_one_baseline_season::<SimRng>)?;
        let (avg_weak_qualified, avg_weak_group_winners) = totals.averages(n_seasons);
        Ok(BaselineAverages {
            avg_weak_qualified,
            avg_weak_group_winners,
        })
    }

    /// Swiss run split over `workers` threads, worker `w` seeded with
    /// `seed + w`.
    pub fn run_swiss_parallel(&self, n_seasons: u32, workers: usize) -> SimResult<SwissAverages> {
        let totals =
            self.run_parallel(n_seasons, workers, simulate_one_swiss_season::<SimRng>)?;
        let (avg_weak_top8, avg_weak_top24) = totals.averages(n_seasons);
        Ok(SwissAverages {
            avg_weak_top8,
            avg_weak_top24,
        })
    }

    fn run_parallel<C, F>(&self, n_seasons: u32, workers: usize, season: F) -> SimResult<Totals>
    where
        C: SeasonCounts,
        F: Fn(&SimConfig, &mut SimRng) -> SimResult<C> + Sync,
    {
        check_seasons(n_seasons)?;
        if workers == 0 {
            return Err(SimError::InvalidConfig("workers must be at least 1".into()));
        }
        info!(n_seasons, workers, base_seed = self.config.seed, "starting parallel run");

        let partials: Vec<Totals> = (0..workers)
            .into_par_iter()
            .map(|w| {
                let mut rng = seeded_rng(worker_seed(self.config.seed, w));
                run_seasons(worker_share(n_seasons, workers, w), &mut rng, |rng| {
                    season(&self.config, rng)
                })
            })
            .collect::<SimResult<_>>()?;

        Ok(partials.into_iter().fold(Totals::default(), Totals::merge))
    }
}

fn check_seasons(n_seasons: u32) -> SimResult<()> {
    if n_seasons == 0 {
        return Err(SimError::NoSeasons);
    }
    Ok(())
}

/// Run both formats for `config.n_seasons` seasons. Each format gets its own
/// stream seeded with `config.seed`, so neither result depends on the other
/// having run first. `workers > 1` selects the parallel path.
pub fn run_comparison(config: &SimConfig, workers: usize) -> SimResult<ComparisonSummary> {
    let runner = MonteCarloRunner::new(config.clone())?;
    let n = config.n_seasons;

    let (swiss, baseline) = if workers > 1 {
        (
            runner.run_swiss_parallel(n, workers)?,
            runner.run_baseline_parallel(n, workers)?,
        )
    } else {
        (
            runner.run_swiss_simulation(n, &mut seeded_rng(config.seed))?,
            runner.run_baseline_simulation(n, &mut seeded_rng(config.seed))?,
        )
    };

    Ok(ComparisonSummary::new(config, swiss, baseline))
}

#[cfg(test)]
#[path = "monte_carlo_tests.rs"]
mod monte_carlo_tests;
