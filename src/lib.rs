//! Arena - Turn-Based RPG Fight Engine
//!
//! Resolves multi-fighter battles round by round: weapon, skill and punch
//! attacks with random targets, counter-attacks, critical hits and finishing
//! blows, until one side (or a tie of survivors) remains standing. The engine
//! performs no I/O of its own; the roster store and the balance simulator
//! live alongside it and are the only parts that touch disk.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod error;
pub mod simulator;
pub mod store;
