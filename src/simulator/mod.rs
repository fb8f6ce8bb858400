//! Fight balance simulator for Monte Carlo analysis.
//!
//! Runs a roster through thousands of fights to see how the matchup
//! actually shakes out: win/loss rates per fighter and how long fights
//! take. Each run gets its own seeded RNG, so a seeded simulation is
//! reproducible fight for fight.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{FighterStats, SimReport};
pub use runner::run_simulation;
