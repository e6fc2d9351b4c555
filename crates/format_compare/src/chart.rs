//! Text bar chart comparing the knockout-stage metric of both formats

use std::collections::HashMap;

use season_core::{METRIC_BASELINE_TOP2, METRIC_SWISS_TOP24};

use crate::error::CompareResult;
use crate::results::require_metric;

/// Width of the longest bar, in characters
pub const BAR_WIDTH: usize = 40;

pub const CHART_TITLE: &str = "Weak teams reaching knockout stage: Swiss vs Baseline";

/// Render the Swiss top-24 and baseline top-2 averages as two bars.
///
/// Both metrics must be present in `data`.
pub fn render_comparison_chart(data: &HashMap<String, f64>) -> CompareResult<String> {
    let bars = [
        ("Swiss (Top 24)", require_metric(data, METRIC_SWISS_TOP24)?),
        ("Baseline (Top 2)", require_metric(data, METRIC_BASELINE_TOP2)?),
    ];
    Ok(render_bars(CHART_TITLE, "Average number of weak teams per season", &bars))
}

fn render_bars(title: &str, y_label: &str, bars: &[(&str, f64)]) -> String {
    let max = bars.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max);
    let label_width = bars.iter().map(|(l, _)| l.len()).max().unwrap_or(0);

    let mut out = format!("{title}\n{y_label}\n\n");
    for &(label, value) in bars {
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<width$} | {} {:.2}\n",
            label,
            "#".repeat(len),
            value,
            width = label_width
        ));
    }
    out
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod chart_tests;
