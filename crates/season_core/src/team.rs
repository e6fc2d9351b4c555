//! Teams, strength tiers and per-season pool generation

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A competitor for one simulated season. Identity is the team's index in
/// the season pool, not its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub rating: i32,
}

impl Team {
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }

    /// Strictly below the threshold counts as weak.
    #[inline]
    pub fn is_weak(&self, threshold: i32) -> bool {
        is_weak(self.rating, threshold)
    }
}

/// Shared weak test, also used when checking real-world tables.
#[inline]
pub fn is_weak<T: PartialOrd + From<i32>>(rating: T, threshold: i32) -> bool {
    rating < T::from(threshold)
}

/// Strength tier a team is generated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Top,
    Strong,
    Medium,
    Weak,
}

impl Tier {
    /// Name fragment used for generated teams
    pub fn label(self) -> &'static str {
        match self {
            Tier::Top => "Top",
            Tier::Strong => "Strong",
            Tier::Medium => "Mid",
            Tier::Weak => "Weak",
        }
    }
}

/// How many teams to generate in a tier, and the half-open rating interval
/// `[min, max)` they are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSpec {
    pub tier: Tier,
    pub count: usize,
    pub min: i32,
    pub max: i32,
}

impl TierSpec {
    pub const fn new(tier: Tier, count: usize, min: i32, max: i32) -> Self {
        Self {
            tier,
            count,
            min,
            max,
        }
    }

    /// 32 teams, 8 per tier
    pub fn group_stage_defaults() -> Vec<TierSpec> {
        vec![
            TierSpec::new(Tier::Top, 8, 1850, 2051),
            TierSpec::new(Tier::Strong, 8, 1750, 1850),
            TierSpec::new(Tier::Medium, 8, 1550, 1750),
            TierSpec::new(Tier::Weak, 8, 1350, 1550),
        ]
    }

    /// 36 teams: 8 top, 10 strong, 10 medium, 8 weak
    pub fn swiss_defaults() -> Vec<TierSpec> {
        vec![
            TierSpec::new(Tier::Top, 8, 1850, 2051),
            TierSpec::new(Tier::Strong, 10, 1750, 1850),
            TierSpec::new(Tier::Medium, 10, 1550, 1750),
            TierSpec::new(Tier::Weak, 8, 1350, 1550),
        ]
    }
}

/// Generate every tier top to bottom, then shuffle the whole pool.
///
/// The returned order is the season-local index used by all simulators.
pub fn generate_pool<R: Rng + ?Sized>(tiers: &[TierSpec], rng: &mut R) -> Vec<Team> {
    let total = tiers.iter().map(|t| t.count).sum();
    let mut teams = Vec::with_capacity(total);

    for spec in tiers {
        for n in 1..=spec.count {
            let rating = rng.gen_range(spec.min..spec.max);
            teams.push(Team::new(format!("Team_{}_{}", spec.tier.label(), n), rating));
        }
    }

    teams.shuffle(rng);
    teams
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
