//! Season simulator for comparing tournament formats
//!
//! This crate provides:
//! - A rating-based match model with a fixed draw probability
//! - Tiered team pool generation
//! - The classic 8x4 group stage and a pot-based Swiss league phase
//! - Monte Carlo averaging of how many weak teams advance
//!
//! All randomness flows through one explicitly passed generator, so a run is
//! reproducible from its seed.
//!
//! # Usage
//!
//! ```no_run
//! use season_core::{seeded_rng, MonteCarloRunner, SimConfig};
//!
//! let config = SimConfig::default();
//! let runner = MonteCarloRunner::new(config.clone())?;
//! let swiss = runner.run_swiss_simulation(1000, &mut seeded_rng(config.seed))?;
//! println!("{:.2} weak teams in the top 24", swiss.avg_weak_top24);
//! # Ok::<(), season_core::SimError>(())
//! ```

mod config;
mod error;
mod group_stage;
mod match_model;
mod monte_carlo;
mod report;
mod rng;
mod season;
mod swiss;
mod team;

pub use config::*;
pub use error::*;
pub use group_stage::*;
pub use match_model::*;
pub use monte_carlo::*;
pub use report::*;
pub use rng::*;
pub use season::*;
pub use swiss::*;
pub use team::*;
