//! Swiss league phase: 4 rating pots, 2 opponents drawn from each
//!
//! Every team draws its own 8-fixture schedule and only that team is
//! credited with the result. The opponent's reciprocal points are dropped,
//! so schedules are not symmetric and the point totals of a season do not
//! correspond to one shared fixture list.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

use crate::config::FormatKind;
use crate::error::{SimError, SimResult};
use crate::match_model::simulate_match;
use crate::team::Team;

/// Number of pots
pub const NUM_POTS: usize = 4;

/// Teams per pot
pub const POT_SIZE: usize = 9;

/// Opponents drawn from each pot
pub const OPPONENTS_PER_POT: usize = 2;

/// Fixtures per team
pub const FIXTURES_PER_TEAM: usize = NUM_POTS * OPPONENTS_PER_POT;

/// Outcome of a simulated league phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwissPhase {
    /// Pool indices per pot, strongest pot first
    pub pots: Vec<Vec<usize>>,
    /// Opponents drawn by each team, in draw order
    pub schedules: Vec<Vec<usize>>,
    /// Points per team, indexed like the pool
    pub points: Vec<u32>,
}

/// Split the pool into 4 pots of 9 by rating, highest first. Equal ratings
/// keep pool order.
pub fn make_pots(teams: &[Team]) -> SimResult<Vec<Vec<usize>>> {
    FormatKind::Swiss.check_pool(teams.len())?;

    let mut order: Vec<usize> = (0..teams.len()).collect();
    order.sort_by_key(|&i| Reverse(teams[i].rating));

    let pots: Vec<Vec<usize>> = order.chunks(POT_SIZE).map(<[usize]>::to_vec).collect();
    debug!(
        pot_floors = ?pots
            .iter()
            .map(|pot| pot.last().map(|&i| teams[i].rating))
            .collect::<Vec<_>>(),
        "built pots"
    );
    Ok(pots)
}

/// Draw `picks` distinct opponents for `team` from `pot`, excluding the team
/// itself and anyone already in `chosen`.
///
/// Fails with [`SimError::InsufficientCandidates`] instead of drawing from a
/// short candidate list.
pub fn draw_from_pot<R: Rng + ?Sized>(
    pot_index: usize,
    pot: &[usize],
    team: usize,
    chosen: &[usize],
    picks: usize,
    rng: &mut R,
) -> SimResult<Vec<usize>> {
    let candidates: Vec<usize> = pot
        .iter()
        .copied()
        .filter(|&j| j != team && !chosen.contains(&j))
        .collect();

    if candidates.len() < picks {
        return Err(SimError::InsufficientCandidates {
            team,
            pot: pot_index,
            available: candidates.len(),
            needed: picks,
        });
    }

    Ok(index::sample(rng, candidates.len(), picks)
        .into_iter()
        .map(|k| candidates[k])
        .collect())
}

/// Draw the full 8-opponent schedule for `team`, pot by pot.
pub fn draw_opponents<R: Rng + ?Sized>(
    pots: &[Vec<usize>],
    team: usize,
    rng: &mut R,
) -> SimResult<Vec<usize>> {
    let mut opponents = Vec::with_capacity(pots.len() * OPPONENTS_PER_POT);
    for (pot_index, pot) in pots.iter().enumerate() {
        let picked = draw_from_pot(pot_index, pot, team, &opponents, OPPONENTS_PER_POT, rng)?;
        opponents.extend(picked);
    }
    Ok(opponents)
}

/// Simulate the league phase for a 36-team pool.
pub fn simulate_swiss_league_phase<R: Rng + ?Sized>(
    teams: &[Team],
    p_draw: f64,
    rng: &mut R,
) -> SimResult<SwissPhase> {
    let pots = make_pots(teams)?;
    let mut points = vec![0; teams.len()];
    let mut schedules = Vec::with_capacity(teams.len());

    for (i, team) in teams.iter().enumerate() {
        let opponents = draw_opponents(&pots, i, rng)?;

        for &j in &opponents {
            let (pi, _) = simulate_match(team.rating, teams[j].rating, p_draw, rng).points();
            points[i] += pi;
        }

        schedules.push(opponents);
    }

    Ok(SwissPhase {
        pots,
        schedules,
        points,
    })
}

#[cfg(test)]
#[path = "swiss_tests.rs"]
mod swiss_tests;
