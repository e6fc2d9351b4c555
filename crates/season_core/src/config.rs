//! Simulation configuration
//!
//! Every constant the simulation depends on lives here so a run can be fully
//! described (and reproduced) from one TOML file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{SimError, SimResult};
use crate::rng::DEFAULT_SEED;
use crate::team::{Tier, TierSpec};

/// Teams rated strictly below this are "weak"
pub const DEFAULT_WEAK_THRESHOLD: i32 = 1500;

/// Probability that any fixture ends in a draw, independent of ratings
pub const DEFAULT_DRAW_PROB: f64 = 0.25;

/// Seasons simulated per format when nothing else is requested
pub const DEFAULT_SEASONS: u32 = 20_000;

/// Every tier table lists Top, Strong, Medium and Weak once each
const TIER_COUNT: usize = 4;

/// The two competition formats under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// 8 groups of 4, double round-robin, top 2 qualify
    GroupStage,
    /// 36-team single table, 2 opponents from each of 4 pots
    Swiss,
}

impl FormatKind {
    /// Number of teams the format is defined for
    pub fn pool_size(self) -> usize {
        match self {
            FormatKind::GroupStage => 32,
            FormatKind::Swiss => 36,
        }
    }

    /// Reject a pool whose size does not match the format.
    pub fn check_pool(self, actual: usize) -> SimResult<()> {
        let expected = self.pool_size();
        if actual != expected {
            return Err(SimError::PoolSize {
                format: self,
                expected,
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatKind::GroupStage => write!(f, "group stage"),
            FormatKind::Swiss => write!(f, "Swiss league phase"),
        }
    }
}

/// Configuration shared by both formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the random stream
    pub seed: u64,
    /// Weak teams are rated `< weak_threshold`
    pub weak_threshold: i32,
    /// Fixed draw probability for every fixture
    pub draw_prob: f64,
    /// Seasons simulated per format
    pub n_seasons: u32,
    /// Tier table for the 32-team group stage
    pub group_stage_tiers: Vec<TierSpec>,
    /// Tier table for the 36-team Swiss phase
    pub swiss_tiers: Vec<TierSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            weak_threshold: DEFAULT_WEAK_THRESHOLD,
            draw_prob: DEFAULT_DRAW_PROB,
            n_seasons: DEFAULT_SEASONS,
            group_stage_tiers: TierSpec::group_stage_defaults(),
            swiss_tiers: TierSpec::swiss_defaults(),
        }
    }
}

impl SimConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> SimResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SimError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> SimResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Tier table used to generate a pool for `format`
    pub fn tiers_for(&self, format: FormatKind) -> &[TierSpec] {
        match format {
            FormatKind::GroupStage => &self.group_stage_tiers,
            FormatKind::Swiss => &self.swiss_tiers,
        }
    }

    /// Check every invariant the simulators rely on.
    pub fn validate(&self) -> SimResult<()> {
        if !(0.0..=1.0).contains(&self.draw_prob) {
            return Err(SimError::InvalidConfig(format!(
                "draw_prob must be within [0, 1], got {}",
                self.draw_prob
            )));
        }
        validate_tiers(FormatKind::GroupStage, &self.group_stage_tiers)?;
        validate_tiers(FormatKind::Swiss, &self.swiss_tiers)
    }
}

/// Tiers must be exactly Top, Strong, Medium, Weak in that order, with
/// descending, non-overlapping intervals and counts summing to the format's
/// pool size. A tier may have a count of zero.
fn validate_tiers(format: FormatKind, tiers: &[TierSpec]) -> SimResult<()> {
    if tiers.len() != TIER_COUNT {
        return Err(SimError::InvalidConfig(format!(
            "{format}: expected {TIER_COUNT} tiers (top, strong, medium, weak), got {}",
            tiers.len()
        )));
    }

    for spec in tiers {
        if spec.min >= spec.max {
            return Err(SimError::InvalidConfig(format!(
                "{format}: {:?} tier has empty interval [{}, {})",
                spec.tier, spec.min, spec.max
            )));
        }
    }

    for pair in tiers.windows(2) {
        let (upper, lower) = (&pair[0], &pair[1]);
        if tier_rank(upper.tier) >= tier_rank(lower.tier) {
            return Err(SimError::InvalidConfig(format!(
                "{format}: tiers out of order ({:?} before {:?})",
                upper.tier, lower.tier
            )));
        }
        if lower.max > upper.min {
            return Err(SimError::InvalidConfig(format!(
                "{format}: {:?} interval overlaps {:?}",
                lower.tier, upper.tier
            )));
        }
    }

    let total: usize = tiers.iter().map(|t| t.count).sum();
    if total != format.pool_size() {
        return Err(SimError::InvalidConfig(format!(
            "{format}: tier counts sum to {total}, expected {}",
            format.pool_size()
        )));
    }
    Ok(())
}

fn tier_rank(tier: Tier) -> u8 {
    match tier {
        Tier::Top => 0,
        Tier::Strong => 1,
        Tier::Medium => 2,
        Tier::Weak => 3,
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
