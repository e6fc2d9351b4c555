//! Format comparison tooling built on `season_core`
//!
//! This crate provides infrastructure for:
//! - Writing and reading the `metric,value` summary table
//! - Saving full run reports as JSON
//! - Rendering the Swiss vs baseline comparison chart
//! - Counting weak teams in a real league-phase table
//!
//! # Usage
//!
//! ```bash
//! # Run both formats and write data/summary.csv
//! cargo run -p format_compare -- --seasons 20000 compare
//!
//! # Chart the stored summary
//! cargo run -p format_compare -- plot
//! ```

mod chart;
mod error;
mod results;
mod validation;

pub use chart::*;
pub use error::*;
pub use results::*;
pub use validation::*;
