//! Error types for season simulation

use thiserror::Error;

use crate::config::FormatKind;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("{format} needs exactly {expected} teams, got {actual}")]
    PoolSize {
        format: FormatKind,
        expected: usize,
        actual: usize,
    },

    #[error(
        "team {team} cannot draw {needed} opponents from pot {pot}: only {available} candidates left"
    )]
    InsufficientCandidates {
        team: usize,
        pot: usize,
        available: usize,
        needed: usize,
    },

    #[error("Monte Carlo run needs at least one season")]
    NoSeasons,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type SimResult<T> = Result<T, SimError>;
