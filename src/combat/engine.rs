//! Fight orchestration.
//!
//! Builds per-fight [`Fighter`] views from roster characters, runs the
//! round loop until somebody falls, then books the result: victories and
//! defeats for the parties involved, one fight for everyone, health reset
//! to full so the next fight starts clean. Persistence stays with the
//! caller; the outcome carries everything the store needs to merge.

use rand::Rng;

use crate::character::Character;
use crate::combat::round::{self, RoundVerdict};
use crate::combat::types::{FightOutcome, FightSettings, Fighter, FighterResult};
use crate::error::FightError;
use crate::store;

/// Resolves one fight between everyone in `roster`.
///
/// Needs at least two characters. The roster itself is not mutated; the
/// returned outcome carries the updated counters (see
/// [`store::apply_results`]).
pub fn run_fight(
    roster: &[Character],
    settings: &FightSettings,
    rng: &mut impl Rng,
) -> Result<FightOutcome, FightError> {
    if roster.len() < 2 {
        return Err(FightError::InsufficientFighters {
            found: roster.len(),
        });
    }

    let mut fighters: Vec<Fighter> = roster
        .iter()
        .map(|c| Fighter::from_character(c, settings))
        .collect();
    // Display order for the log, not a turn-order bias: everyone still
    // acts exactly once per round.
    fighters.sort_by(|a, b| a.class.cmp(&b.class).then_with(|| a.name.cmp(&b.name)));

    let mut log = Vec::new();
    let mut rounds = 0u32;
    let verdict: RoundVerdict = loop {
        rounds += 1;
        log.push(format!("           Round {rounds}"));
        if let Some(verdict) = round::resolve_round(&mut fighters, settings, rng, &mut log)? {
            break verdict;
        }
    };

    for &idx in &verdict.winners {
        fighters[idx].victories += 1;
    }
    for &idx in &verdict.losers {
        fighters[idx].defeats += 1;
    }

    // Snapshot winners and losers with their end-of-fight health before
    // the reset below wipes it.
    let winners: Vec<FighterResult> = verdict.winners.iter().map(|&i| fighters[i].result()).collect();
    let losers: Vec<FighterResult> = verdict.losers.iter().map(|&i| fighters[i].result()).collect();

    let loser_names = join_names(&losers);
    let winner_names = join_names(&winners);
    log.push(format!("{loser_names} has been defeated!"));
    log.push(format!(
        "{winner_names} wins with {} HP left!",
        verdict.winner_hp
    ));

    for fighter in fighters.iter_mut() {
        fighter.fights += 1;
        fighter.hp = fighter.max_hp;
    }

    let results = fighters.iter().map(Fighter::result).collect();
    Ok(FightOutcome {
        log,
        winners,
        losers,
        winner_hp: verdict.winner_hp,
        rounds,
        results,
    })
}

/// Runs `times` fights back to back over the same roster, merging each
/// outcome's counters before the next fight so the record accumulates.
/// Health starts full every fight.
pub fn run_fight_series(
    roster: &mut [Character],
    settings: &FightSettings,
    times: u32,
    rng: &mut impl Rng,
) -> Result<Vec<FightOutcome>, FightError> {
    if times < 1 {
        return Err(FightError::InvalidTimes { times });
    }

    let mut outcomes = Vec::with_capacity(times as usize);
    for _ in 0..times {
        let outcome = run_fight(roster, settings, rng)?;
        store::apply_results(roster, &outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn join_names(results: &[FighterResult]) -> String {
    results
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
