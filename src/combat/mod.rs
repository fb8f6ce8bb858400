//! Fight resolution engine.
//!
//! Layered like the rest of the crate: pure per-attack math at the bottom
//! (`math`), action and target selection above it (`selector`), the
//! buffered round loop (`round`) and the fight orchestrator (`engine`)
//! on top. All randomness is drawn from an injected `rand::Rng`.

pub mod engine;
pub mod math;
pub mod round;
pub mod selector;
pub mod types;

pub use engine::{run_fight, run_fight_series};
pub use types::{FightOutcome, FightSettings, Fighter, FighterResult};
