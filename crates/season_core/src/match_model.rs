//! Rating-based match outcome model with a fixed draw probability

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Points for a win
pub const WIN_POINTS: u32 = 3;

/// Points for a draw
pub const DRAW_POINTS: u32 = 1;

/// Result of a single fixture, from team A's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchOutcome {
    Draw,
    WinA,
    WinB,
}

impl MatchOutcome {
    /// Points awarded to (A, B)
    pub fn points(self) -> (u32, u32) {
        match self {
            MatchOutcome::Draw => (DRAW_POINTS, DRAW_POINTS),
            MatchOutcome::WinA => (WIN_POINTS, 0),
            MatchOutcome::WinB => (0, WIN_POINTS),
        }
    }
}

/// Probability that A beats B, ignoring draws (logistic Elo curve).
///
/// The gap is taken in `f64`, so any pair of `i32` ratings is accepted; very
/// large gaps saturate to 0 or 1.
pub fn win_probability(ra: i32, rb: i32) -> f64 {
    let gap = f64::from(ra) - f64::from(rb);
    1.0 / (1.0 + 10.0_f64.powf(-gap / 400.0))
}

/// Play one fixture.
///
/// A single uniform draw `r` in `[0, 1)` is split into three bands, in this
/// order: `[0, p_draw)` is a draw, the next `(1 - p_draw) * win_probability`
/// is an A win, the remainder a B win. Draw odds therefore never depend on
/// the rating gap.
pub fn simulate_match<R: Rng + ?Sized>(
    ra: i32,
    rb: i32,
    p_draw: f64,
    rng: &mut R,
) -> MatchOutcome {
    let p_win_a = (1.0 - p_draw) * win_probability(ra, rb);

    let r: f64 = rng.gen();
    if r < p_draw {
        MatchOutcome::Draw
    } else if r < p_draw + p_win_a {
        MatchOutcome::WinA
    } else {
        MatchOutcome::WinB
    }
}

#[cfg(test)]
#[path = "match_model_tests.rs"]
mod match_model_tests;
