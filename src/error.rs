//! Error types for fight resolution and roster management.

use thiserror::Error;

/// Errors surfaced by the fight engine and its collaborators.
///
/// The set is closed on purpose: everything else the engine can compute
/// (odd stats, nonsensical settings) flows through as a computed result
/// rather than an error, matching the inherited rules of the game.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FightError {
    /// A fight needs at least two fighters.
    #[error("not enough fighters to fight: found {found}, need at least 2")]
    InsufficientFighters { found: usize },

    /// An attacker ended up with nobody to target. Guarded against even
    /// though the two-fighter precondition should make it unreachable.
    #[error("no opponent available for {attacker}")]
    NoOpponent { attacker: String },

    /// A fight series must run at least once.
    #[error("fight series must run at least once, got {times}")]
    InvalidTimes { times: u32 },

    /// Clearing fight results matched none of the requested ids.
    #[error("no fighters found to clear fight results")]
    NoneCleared,
}
