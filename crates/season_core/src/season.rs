//! Single-season evaluation: rank the points table and count weak teams in
//! the zones that matter for each format.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::trace;

use crate::config::{FormatKind, SimConfig};
use crate::error::SimResult;
use crate::group_stage::{simulate_group_stage, GroupStage};
use crate::swiss::simulate_swiss_league_phase;
use crate::team::{generate_pool, Team};

/// Qualifiers per group
pub const GROUP_QUALIFIERS: usize = 2;

/// Swiss places that go straight to the round of 16
pub const SWISS_TOP: usize = 8;

/// Swiss places that reach the knockout stage at all
pub const SWISS_KNOCKOUT: usize = 24;

/// One row of a final table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub rating: i32,
    pub points: u32,
}

/// Weak-team counts for one group-stage season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineCounts {
    /// Weak teams finishing in a group's top 2 (0..=16)
    pub weak_qualified: u32,
    /// Weak teams winning their group (0..=8)
    pub weak_group_winners: u32,
}

/// Weak-team counts for one Swiss season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwissCounts {
    /// Weak teams in places 1-8
    pub weak_top8: u32,
    /// Weak teams in places 1-24
    pub weak_top24: u32,
}

/// Sort `indices` by points descending. The sort is stable, so tied teams
/// keep the order they were given in.
pub fn rank_by_points(indices: &[usize], points: &[u32]) -> Vec<usize> {
    let mut ranked = indices.to_vec();
    ranked.sort_by_key(|&i| Reverse(points[i]));
    ranked
}

/// Full final table for a pool
pub fn standings(teams: &[Team], points: &[u32]) -> Vec<Standing> {
    let all: Vec<usize> = (0..teams.len()).collect();
    rank_by_points(&all, points)
        .into_iter()
        .map(|i| Standing {
            name: teams[i].name.clone(),
            rating: teams[i].rating,
            points: points[i],
        })
        .collect()
}

fn count_weak(teams: &[Team], indices: &[usize], threshold: i32) -> u32 {
    indices
        .iter()
        .filter(|&&i| teams[i].is_weak(threshold))
        .count() as u32
}

/// Count weak qualifiers and weak group winners across all groups.
pub fn evaluate_group_stage(teams: &[Team], stage: &GroupStage, threshold: i32) -> BaselineCounts {
    let mut counts = BaselineCounts::default();

    for group in &stage.groups {
        let ranked = rank_by_points(group, &stage.points);
        counts.weak_qualified += count_weak(teams, &ranked[..GROUP_QUALIFIERS], threshold);
        counts.weak_group_winners += count_weak(teams, &ranked[..1], threshold);
    }

    counts
}

/// Count weak teams in the Swiss top 8 and top 24.
pub fn evaluate_swiss(teams: &[Team], points: &[u32], threshold: i32) -> SwissCounts {
    let all: Vec<usize> = (0..teams.len()).collect();
    let ranked = rank_by_points(&all, points);

    SwissCounts {
        weak_top8: count_weak(teams, &ranked[..SWISS_TOP.min(ranked.len())], threshold),
        weak_top24: count_weak(teams, &ranked[..SWISS_KNOCKOUT.min(ranked.len())], threshold),
    }
}

/// Generate a 32-team pool, play the group stage and count weak teams.
pub fn simulate_one_baseline_season<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> SimResult<BaselineCounts> {
    let teams = generate_pool(config.tiers_for(FormatKind::GroupStage), rng);
    let stage = simulate_group_stage(&teams, config.draw_prob, rng)?;
    let counts = evaluate_group_stage(&teams, &stage, config.weak_threshold);
    trace!(?counts, "baseline season");
    Ok(counts)
}

/// Generate a 36-team pool, play the league phase and count weak teams.
pub fn simulate_one_swiss_season<R: Rng + ?Sized>(
    config: &SimConfig,
    rng: &mut R,
) -> SimResult<SwissCounts> {
    let teams = generate_pool(config.tiers_for(FormatKind::Swiss), rng);
    let phase = simulate_swiss_league_phase(&teams, config.draw_prob, rng)?;
    let counts = evaluate_swiss(&teams, &phase.points, config.weak_threshold);
    trace!(?counts, "swiss season");
    Ok(counts)
}

#[cfg(test)]
#[path = "season_tests.rs"]
mod season_tests;
