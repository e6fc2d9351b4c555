//! Comparison results storage: the `metric,value` summary table and the
//! JSON run report

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use season_core::{ComparisonSummary, SimConfig};

use crate::error::{CompareError, CompareResult};

/// Everything needed to reproduce and read back one comparison run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Name/description of the run
    pub name: String,
    /// Configuration used
    pub config: SimConfig,
    /// Parallel workers (1 = sequential)
    pub workers: usize,
    /// Averaged results
    pub summary: ComparisonSummary,
}

impl RunReport {
    pub fn new(name: &str, config: SimConfig, workers: usize, summary: ComparisonSummary) -> Self {
        Self {
            name: name.to_string(),
            config,
            workers,
            summary,
        }
    }

    /// Save report to a JSON file
    pub fn save(&self, path: &Path) -> CompareResult<()> {
        ensure_parent(path)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load report from a JSON file
    pub fn load(path: &Path) -> CompareResult<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn ensure_parent(path: &Path) -> CompareResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Write the summary as a two-column `metric,value` CSV.
pub fn write_summary_csv(path: &Path, summary: &ComparisonSummary) -> CompareResult<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["metric", "value"])?;
    for (metric, value) in summary.rows() {
        writer.write_record([metric, value.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a `metric,value` CSV back into a map. The header is skipped, as is
/// any row without exactly two fields.
pub fn load_summary_csv(path: &Path) -> CompareResult<HashMap<String, f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut data = HashMap::new();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            continue;
        }
        let (metric, value) = (&record[0], &record[1]);
        let parsed = value.parse::<f64>().map_err(|_| CompareError::InvalidValue {
            metric: metric.to_string(),
            value: value.to_string(),
        })?;
        data.insert(metric.to_string(), parsed);
    }
    Ok(data)
}

/// Look up a metric that must be present.
pub fn require_metric(data: &HashMap<String, f64>, metric: &str) -> CompareResult<f64> {
    data.get(metric)
        .copied()
        .ok_or_else(|| CompareError::MissingMetric(metric.to_string()))
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
