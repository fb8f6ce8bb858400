//! Batch simulation runner.
//!
//! Drives the fight engine over a working copy of the roster. Every fight
//! gets its own RNG: `seed + fight index` when seeded, fresh entropy
//! otherwise. Sharing one stateful generator across runs would tie the
//! runs together and break per-fight reproducibility.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::Character;
use crate::combat::types::FightSettings;
use crate::combat::{run_fight, FightOutcome};
use crate::error::FightError;
use crate::store;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Runs the configured number of fights and aggregates the record.
///
/// The caller's roster is untouched; counters accumulate on an internal
/// working copy that the report is built from.
pub fn run_simulation(
    roster: &[Character],
    settings: &FightSettings,
    config: &SimConfig,
) -> Result<SimReport, FightError> {
    let mut working: Vec<Character> = roster.to_vec();
    let mut rounds_per_fight = Vec::with_capacity(config.num_fights as usize);

    for fight_idx in 0..config.num_fights {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + fight_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let outcome = run_fight(&working, settings, &mut rng)?;
        store::apply_results(&mut working, &outcome);
        rounds_per_fight.push(outcome.rounds);

        if config.verbosity >= 2 {
            print_fight_line(fight_idx + 1, config.num_fights, &outcome);
        }
    }

    Ok(SimReport::from_results(&working, &rounds_per_fight))
}

fn print_fight_line(fight_no: u32, total: u32, outcome: &FightOutcome) {
    let winners: Vec<&str> = outcome.winners.iter().map(|w| w.name.as_str()).collect();
    println!(
        "Fight {}/{} - {} rounds, {} wins with {} HP",
        fight_no,
        total,
        outcome.rounds,
        winners.join(", "),
        outcome.winner_hp
    );
}
