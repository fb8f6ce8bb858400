//! Round resolution.
//!
//! One round means every fighter acts exactly once, in the fixed display
//! order established at fight start. All attacks book into `hp_delta`
//! buffers; only when the round settles do the buffers hit live health.
//! An attack therefore never sees damage queued earlier in the same round,
//! which keeps the iteration order from deciding who dies.

use rand::Rng;

use crate::character::SkillKind;
use crate::combat::math;
use crate::combat::selector::{self, ActionChoice};
use crate::combat::types::{FightSettings, Fighter};
use crate::error::FightError;

/// Outcome of a round in which at least one fighter fell. Indices refer
/// to the fight's display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundVerdict {
    pub winners: Vec<usize>,
    pub losers: Vec<usize>,
    pub winner_hp: i32,
}

/// Runs one full round. Returns `None` while everyone is still standing,
/// `Some(verdict)` once the round's settlement leaves somebody at 0 HP.
pub fn resolve_round(
    fighters: &mut [Fighter],
    settings: &FightSettings,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> Result<Option<RoundVerdict>, FightError> {
    for attacker_idx in 0..fighters.len() {
        take_turn(attacker_idx, fighters, settings, rng, log)?;
    }

    // Round ends: settle every buffer, then look for the fallen.
    for fighter in fighters.iter_mut() {
        fighter.settle_round();
    }

    let mut losers = Vec::new();
    for (idx, fighter) in fighters.iter_mut().enumerate() {
        if fighter.hp <= 0 {
            fighter.hp = 0;
            losers.push(idx);
        }
    }

    let verdict = if losers.is_empty() {
        None
    } else {
        // Winners share the highest health across ALL fighters, the fallen
        // included, so a simultaneous wipe is a tie at 0 HP.
        let winner_hp = fighters.iter().map(|f| f.hp).max().unwrap_or(0);
        let winners = fighters
            .iter()
            .enumerate()
            .filter(|(_, f)| f.hp == winner_hp)
            .map(|(idx, _)| idx)
            .collect();
        Some(RoundVerdict {
            winners,
            losers,
            winner_hp,
        })
    };

    log.push("Round ends:".to_string());
    for fighter in fighters.iter() {
        log.push(format!("           {:<10} {:>3} HP", fighter.name, fighter.hp));
    }
    log.push("-----------------------------------------------------".to_string());

    Ok(verdict)
}

/// One attacker's turn: pick a target, pick an action, resolve it.
fn take_turn(
    attacker_idx: usize,
    fighters: &mut [Fighter],
    settings: &FightSettings,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> Result<(), FightError> {
    let opponent_idx = selector::pick_opponent(attacker_idx, fighters, rng)?;
    let action = selector::pick_action(&fighters[attacker_idx], rng);

    match action {
        ActionChoice::Weapon => {
            // pick_action only yields Weapon for an armed fighter; guard
            // anyway and let an unarmed fighter fall back to a punch.
            if let Some(weapon) = fighters[attacker_idx].weapon.clone() {
                let (attacker, opponent) = pair_mut(fighters, attacker_idx, opponent_idx);
                math::weapon_attack(attacker, opponent, &weapon, rng, log);
            } else {
                let (attacker, opponent) = pair_mut(fighters, attacker_idx, opponent_idx);
                math::punch(attacker, opponent, settings, rng, log);
            }
        }
        ActionChoice::Skill(skill_idx) => {
            let skill = fighters[attacker_idx].skills[skill_idx].clone();
            match skill.kind {
                SkillKind::Combat { damage } => {
                    let (attacker, opponent) = pair_mut(fighters, attacker_idx, opponent_idx);
                    math::skill_attack(attacker, opponent, &skill, damage, rng, log);
                }
                SkillKind::Heal { heal } => {
                    math::heal(&mut fighters[attacker_idx], &skill, heal, log);
                }
                SkillKind::LifeLeech { percentage } => {
                    let (attacker, opponent) = pair_mut(fighters, attacker_idx, opponent_idx);
                    math::life_leech(attacker, opponent, &skill, percentage, log);
                }
            }
        }
        ActionChoice::Punch => {
            let (attacker, opponent) = pair_mut(fighters, attacker_idx, opponent_idx);
            math::punch(attacker, opponent, settings, rng, log);
        }
    }
    Ok(())
}

/// Mutable references to two distinct fighters.
fn pair_mut(fighters: &mut [Fighter], a: usize, b: usize) -> (&mut Fighter, &mut Fighter) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = fighters.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = fighters.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
