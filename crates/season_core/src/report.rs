//! Aggregated results in the shape the tabular writer and console expect

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::monte_carlo::{BaselineAverages, SwissAverages};

pub const METRIC_SWISS_TOP8: &str = "swiss_avg_weak_top8";
pub const METRIC_SWISS_TOP24: &str = "swiss_avg_weak_top24";
pub const METRIC_BASELINE_TOP2: &str = "baseline_avg_weak_top2";
pub const METRIC_BASELINE_WINNERS: &str = "baseline_avg_weak_group_winners";
pub const METRIC_SEASONS: &str = "n_seasons";

/// Results of running both formats under the same configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub swiss: SwissAverages,
    pub baseline: BaselineAverages,
    pub n_seasons: u32,
    pub weak_threshold: i32,
    pub draw_prob: f64,
    pub seed: u64,
}

impl ComparisonSummary {
    pub fn new(config: &SimConfig, swiss: SwissAverages, baseline: BaselineAverages) -> Self {
        Self {
            swiss,
            baseline,
            n_seasons: config.n_seasons,
            weak_threshold: config.weak_threshold,
            draw_prob: config.draw_prob,
            seed: config.seed,
        }
    }

    /// `(metric, value)` rows in file order
    pub fn rows(&self) -> Vec<(&'static str, f64)> {
        vec![
            (METRIC_SWISS_TOP8, self.swiss.avg_weak_top8),
            (METRIC_SWISS_TOP24, self.swiss.avg_weak_top24),
            (METRIC_BASELINE_TOP2, self.baseline.avg_weak_qualified),
            (METRIC_BASELINE_WINNERS, self.baseline.avg_weak_group_winners),
            (METRIC_SEASONS, f64::from(self.n_seasons)),
        ]
    }

    /// Generate a text summary of both formats
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str("=== SUMMARY ===\n");
        report.push_str(&format!(
            "Swiss:    avg. weak teams in Top 8   = {:.2}\n",
            self.swiss.avg_weak_top8
        ));
        report.push_str(&format!(
            "Swiss:    avg. weak teams in Top 24  = {:.2}\n",
            self.swiss.avg_weak_top24
        ));
        report.push_str(&format!(
            "Baseline: avg. weak teams in Top 2   = {:.2}\n",
            self.baseline.avg_weak_qualified
        ));
        report.push_str(&format!(
            "Baseline: avg. weak group winners    = {:.2}\n",
            self.baseline.avg_weak_group_winners
        ));
        report.push_str(&"=".repeat(15));
        report.push('\n');
        report
    }
}

fn header(lines: &[&str], config: &SimConfig, n_seasons: u32) -> String {
    let rule = "-".repeat(41);
    let mut out = format!("{rule}\n");
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("Weak rating threshold: < {}\n", config.weak_threshold));
    out.push_str(&format!("Draw probability: {:.2}\n", config.draw_prob));
    out.push_str(&format!("Simulated seasons: {n_seasons}\n"));
    out.push_str(&format!("{rule}\n"));
    out
}

/// Console block for a group-stage run
pub fn baseline_report(config: &SimConfig, n_seasons: u32, averages: &BaselineAverages) -> String {
    let mut out = header(
        &[
            "BASELINE FORMAT SIMULATION (GROUP STAGE)",
            "32 teams, 8 groups, double round-robin",
        ],
        config,
        n_seasons,
    );
    out.push_str(&format!(
        "Avg. weak teams qualifying (Top 2): {:.2}\n",
        averages.avg_weak_qualified
    ));
    out.push_str(&format!(
        "Avg. weak group winners:            {:.2}\n",
        averages.avg_weak_group_winners
    ));
    out.push_str("Note: simplified model (no tie-breakers, no home/away).\n");
    out.push_str(&"-".repeat(41));
    out
}

/// Console block for a Swiss run
pub fn swiss_report(config: &SimConfig, n_seasons: u32, averages: &SwissAverages) -> String {
    let mut out = header(
        &[
            "SWISS FORMAT SIMULATION (simplified)",
            "4 pots, 2 opponents per pot (8 matches)",
        ],
        config,
        n_seasons,
    );
    out.push_str(&format!(
        "Avg. weak teams in TOP 8 :  {:.2} per season\n",
        averages.avg_weak_top8
    ));
    out.push_str(&format!(
        "Avg. weak teams in TOP 24:  {:.2} per season\n",
        averages.avg_weak_top24
    ));
    out.push_str("Note: simplified Swiss (no draw constraints, no tie-breakers).\n");
    out.push_str(&"-".repeat(41));
    out
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
