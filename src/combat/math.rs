//! Per-attack combat math.
//!
//! Pure attack resolvers: each takes the attacker and the opponent, draws
//! what it needs from the injected RNG, books the result into the round's
//! `hp_delta` buffers and appends its log lines. Live `hp` is never written
//! here; the round resolver settles the buffers once everyone has acted.
//!
//! The finishing punch and life leech intentionally read the opponent's
//! pre-round `hp` (not `hp + hp_delta`), so damage already queued this
//! round cannot change whether a finishing blow triggers.

use rand::Rng;

use crate::character::{Skill, Weapon};
use crate::combat::types::{FightSettings, Fighter};

/// What a single attack did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub damage: i32,
    pub countered: bool,
}

/// Round half away from zero, the rounding the damage formulas use.
pub fn round_away(x: f64) -> i32 {
    x.round() as i32
}

/// Counter-attack roll. Triggers with probability `diff² / defender_stat²`
/// where `diff = defender_stat - attacker_stat`: exactly 0 without a stat
/// gap, creeping toward certainty as the gap widens.
pub fn counter_triggers(attacker_stat: i32, defender_stat: i32, rng: &mut impl Rng) -> bool {
    if defender_stat <= attacker_stat || defender_stat <= 0 {
        return false;
    }
    let diff = (defender_stat - attacker_stat) as i64;
    let bound = defender_stat as i64 * defender_stat as i64;
    rng.gen_range(0..bound) < diff * diff
}

/// Weapon attack: damage scales with the attacker's strength against the
/// opponent's defense, and a stronger opponent may counter, taking no
/// damage and dealing the full amount back.
pub fn weapon_attack(
    attacker: &mut Fighter,
    opponent: &mut Fighter,
    weapon: &Weapon,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> AttackReport {
    let raw = weapon.damage as f64 * attacker.strength as f64 / opponent.defense as f64;
    let damage = round_away(raw);

    let countered = counter_triggers(attacker.strength, opponent.strength, rng);
    if countered {
        attacker.hp_delta -= damage;
        log.push(format!(
            "{} attacks {} with {},",
            attacker.name, opponent.name, weapon.name
        ));
        log.push(format!(
            "    but {} defends and counter-attacks, dealing {} damage to {}!",
            opponent.name, damage, attacker.name
        ));
    } else {
        opponent.hp_delta -= damage;
        log.push(format!(
            "{} attacks {} with {}, dealing {} damage.",
            attacker.name, opponent.name, weapon.name, damage
        ));
    }
    AttackReport { damage, countered }
}

/// Combat-skill attack: the weapon formula with skill damage and
/// intelligence substituted in, counter check included.
pub fn skill_attack(
    attacker: &mut Fighter,
    opponent: &mut Fighter,
    skill: &Skill,
    skill_damage: i32,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> AttackReport {
    let raw = skill_damage as f64 * attacker.intelligence as f64 / opponent.defense as f64;
    let damage = round_away(raw);

    let countered = counter_triggers(attacker.intelligence, opponent.intelligence, rng);
    if countered {
        attacker.hp_delta -= damage;
        log.push(format!(
            "{} attacks {} with {},",
            attacker.name, opponent.name, skill.name
        ));
        log.push(format!(
            "    but {} defends and counter-attacks, dealing {} damage to {}!",
            opponent.name, damage, attacker.name
        ));
    } else {
        opponent.hp_delta -= damage;
        log.push(format!(
            "{} attacks {} with {}, dealing {} damage.",
            attacker.name, opponent.name, skill.name, damage
        ));
    }
    AttackReport { damage, countered }
}

/// Heal skill: restores the user's own HP. Not capped at `max_hp`.
pub fn heal(user: &mut Fighter, skill: &Skill, amount: i32, log: &mut Vec<String>) {
    user.hp_delta += amount;
    log.push(format!(
        "{} uses {} to heal themselves, restoring {} HP.",
        user.name, skill.name, amount
    ));
}

/// Life leech: drains a percentage of the opponent's current (pre-round)
/// HP and restores the same amount to the attacker. No counter check.
pub fn life_leech(
    attacker: &mut Fighter,
    opponent: &mut Fighter,
    skill: &Skill,
    percentage: i32,
    log: &mut Vec<String>,
) -> i32 {
    let leech = round_away(opponent.hp as f64 * percentage as f64 / 100.0);
    opponent.hp_delta -= leech;
    attacker.hp_delta += leech;
    log.push(format!(
        "{} attacks {} with {}, draining and restoring {} HP!",
        attacker.name, opponent.name, skill.name, leech
    ));
    leech
}

/// Unarmed punch. Three draws, always in the same order: the critical
/// roll, the finishing roll, and the regular damage roll in [1, 5].
///
/// A critical deals the fixed settings damage regardless of stats. The
/// finishing blow only arms when the opponent entered the round below
/// 10 HP, and deals exactly that HP. Punches cannot be countered.
pub fn punch(
    attacker: &mut Fighter,
    opponent: &mut Fighter,
    settings: &FightSettings,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> AttackReport {
    let critical = rng.gen_range(0..100);
    let one_pun = rng.gen_range(0..100);
    let regular = rng.gen_range(1..6);

    let damage;
    if critical < settings.critical_punch_rate {
        damage = settings.critical_punch_damage;
        log.push(format!(
            "    CRITICAL HIT!! {} gives {} a solid punch, dealing {} damage!!",
            attacker.name, opponent.name, damage
        ));
    } else if opponent.hp < 10 && one_pun < settings.one_punch_rate {
        damage = opponent.hp;
        log.push(format!(
            "    One punch! {} gives {} a {} damage punch to death!",
            attacker.name, opponent.name, damage
        ));
    } else {
        damage = regular;
        log.push(format!(
            "{} punches {}, dealing {} damage.",
            attacker.name, opponent.name, damage
        ));
    }
    opponent.hp_delta -= damage;
    AttackReport {
        damage,
        countered: false,
    }
}
