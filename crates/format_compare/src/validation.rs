//! Real-world check: count weak teams in an actual league-phase table using
//! the same threshold and strict `<` rule as the simulation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

use season_core::is_weak;

use crate::error::CompareResult;

/// Team name -> rating
pub type RatingMap = HashMap<String, f64>;

#[derive(Debug, Deserialize)]
struct RatingRow {
    team: String,
    elo: f64,
}

#[derive(Debug, Deserialize)]
struct ResultRow {
    team: String,
    group: String,
}

/// Teams that finished in the real top 8 and top 24
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealStandings {
    pub top8: Vec<String>,
    pub top24: Vec<String>,
}

/// Weak counts for one real season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub threshold: i32,
    pub weak_top8: u32,
    pub top8_size: usize,
    pub weak_top24: u32,
    pub top24_size: usize,
    /// Listed teams with no rating entry (not counted)
    pub unrated: Vec<String>,
}

impl ValidationReport {
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("REAL-LIFE CHECK (Swiss league phase)\n");
        report.push_str(&format!("Weak threshold: rating < {}\n", self.threshold));
        report.push_str(&format!(
            "Weak teams in Top 8 : {} / {}\n",
            self.weak_top8, self.top8_size
        ));
        report.push_str(&format!(
            "Weak teams in Top 24: {} / {}\n",
            self.weak_top24, self.top24_size
        ));
        if !self.unrated.is_empty() {
            report.push_str(&format!("Skipped (no rating): {}\n", self.unrated.join(", ")));
        }
        report
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Parse a `team,elo` table.
pub fn read_rating_map<R: Read>(reader: R) -> CompareResult<RatingMap> {
    let mut ratings = RatingMap::new();
    for row in csv_reader(reader).deserialize() {
        let row: RatingRow = row?;
        ratings.insert(row.team, row.elo);
    }
    Ok(ratings)
}

pub fn load_rating_map(path: &Path) -> CompareResult<RatingMap> {
    read_rating_map(std::fs::File::open(path)?)
}

/// Parse a `team,group` result list. `top8` rows count for both the top 8
/// and the top 24, `9-24` rows for the top 24 only; other groups are ignored.
pub fn read_real_list<R: Read>(reader: R) -> CompareResult<RealStandings> {
    let mut standings = RealStandings::default();
    for row in csv_reader(reader).deserialize() {
        let row: ResultRow = row?;
        match row.group.as_str() {
            "top8" => {
                standings.top8.push(row.team.clone());
                standings.top24.push(row.team);
            }
            "9-24" => standings.top24.push(row.team),
            _ => {}
        }
    }
    Ok(standings)
}

pub fn load_real_list(path: &Path) -> CompareResult<RealStandings> {
    read_real_list(std::fs::File::open(path)?)
}

/// Count listed teams rated below `threshold`. Teams missing from `ratings`
/// are skipped.
pub fn count_weak(teams: &[String], ratings: &RatingMap, threshold: i32) -> u32 {
    teams
        .iter()
        .filter_map(|team| ratings.get(team))
        .filter(|&&rating| is_weak(rating, threshold))
        .count() as u32
}

/// Count weak teams in a real season's top 8 and top 24.
pub fn validate_real_season(
    ratings: &RatingMap,
    standings: &RealStandings,
    threshold: i32,
) -> ValidationReport {
    let unrated: Vec<String> = standings
        .top24
        .iter()
        .filter(|team| !ratings.contains_key(*team))
        .cloned()
        .collect();
    for team in &unrated {
        warn!(%team, "no rating entry, not counted");
    }

    ValidationReport {
        threshold,
        weak_top8: count_weak(&standings.top8, ratings, threshold),
        top8_size: standings.top8.len(),
        weak_top24: count_weak(&standings.top24, ratings, threshold),
        top24_size: standings.top24.len(),
        unrated,
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
