//! Classic group stage: 8 random groups of 4, double round-robin

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::FormatKind;
use crate::error::SimResult;
use crate::match_model::simulate_match;
use crate::team::Team;

/// Teams per group
pub const GROUP_SIZE: usize = 4;

/// Groups in a 32-team pool
pub const NUM_GROUPS: usize = 8;

/// Each pair meets twice
pub const LEGS: usize = 2;

/// One group: pool indices of its four members
pub type Group = [usize; GROUP_SIZE];

/// Outcome of a simulated group stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStage {
    pub groups: Vec<Group>,
    /// Points per team, indexed like the pool
    pub points: Vec<u32>,
}

/// Shuffle 0..32 and cut it into 8 contiguous groups. No seeding or tier
/// balance is enforced.
pub fn draw_groups<R: Rng + ?Sized>(rng: &mut R) -> Vec<Group> {
    let mut indices: Vec<usize> = (0..NUM_GROUPS * GROUP_SIZE).collect();
    indices.shuffle(rng);

    indices
        .chunks_exact(GROUP_SIZE)
        .map(|chunk| [chunk[0], chunk[1], chunk[2], chunk[3]])
        .collect()
}

/// Play every unordered pair of `group` twice, adding points into `points`.
///
/// Returns the number of fixtures played (always 12).
pub fn play_round_robin<R: Rng + ?Sized>(
    teams: &[Team],
    group: &Group,
    p_draw: f64,
    points: &mut [u32],
    rng: &mut R,
) -> usize {
    let mut fixtures = 0;
    for i in 0..GROUP_SIZE {
        for j in (i + 1)..GROUP_SIZE {
            let (a, b) = (group[i], group[j]);
            for _leg in 0..LEGS {
                let outcome = simulate_match(teams[a].rating, teams[b].rating, p_draw, rng);
                let (pa, pb) = outcome.points();
                points[a] += pa;
                points[b] += pb;
                fixtures += 1;
            }
        }
    }
    fixtures
}

/// Simulate a full group stage for a 32-team pool.
pub fn simulate_group_stage<R: Rng + ?Sized>(
    teams: &[Team],
    p_draw: f64,
    rng: &mut R,
) -> SimResult<GroupStage> {
    FormatKind::GroupStage.check_pool(teams.len())?;

    let mut points = vec![0; teams.len()];
    let groups = draw_groups(rng);

    for group in &groups {
        play_round_robin(teams, group, p_draw, &mut points, rng);
    }

    Ok(GroupStage { groups, points })
}

#[cfg(test)]
#[path = "group_stage_tests.rs"]
mod group_stage_tests;
