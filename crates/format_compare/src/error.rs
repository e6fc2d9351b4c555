//! Errors raised by the file adapters around the simulation core

use season_core::SimError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Summary is missing metric `{0}`")]
    MissingMetric(String),

    #[error("Metric `{metric}` has non-numeric value `{value}`")]
    InvalidValue { metric: String, value: String },

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type CompareResult<T> = Result<T, CompareError>;
