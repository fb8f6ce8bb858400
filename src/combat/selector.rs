//! Action, target and skill selection for one turn.

use rand::Rng;

use crate::character::Skill;
use crate::combat::types::Fighter;
use crate::error::FightError;

/// What the attacker does this turn. A flat three-way choice; exactly one
/// of these runs per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    Weapon,
    /// Index into the attacker's skill list.
    Skill(usize),
    Punch,
}

/// Picks a uniformly random opponent: any fighter but the attacker.
pub fn pick_opponent(
    attacker_idx: usize,
    fighters: &[Fighter],
    rng: &mut impl Rng,
) -> Result<usize, FightError> {
    let count = fighters.len();
    if count < 2 {
        return Err(FightError::NoOpponent {
            attacker: fighters
                .get(attacker_idx)
                .map(|f| f.name.clone())
                .unwrap_or_default(),
        });
    }
    // Draw over the others and skip past the attacker's own slot.
    let pick = rng.gen_range(0..count - 1);
    Ok(if pick >= attacker_idx { pick + 1 } else { pick })
}

/// Decides between weapon, skill and punch for this turn.
///
/// One percentage roll against the attacker's weapon-use rate gates the
/// weapon (if owned); otherwise a weighted skill is drawn, and a fighter
/// with neither — or with skills whose weights sum to zero — punches.
pub fn pick_action(attacker: &Fighter, rng: &mut impl Rng) -> ActionChoice {
    let use_weapon = rng.gen_range(0..100) < attacker.weapon_use_rate;
    if use_weapon && attacker.weapon.is_some() {
        return ActionChoice::Weapon;
    }

    let total = attacker.total_activation_rate();
    if !attacker.skills.is_empty() && total > 0 {
        let roll = rng.gen_range(0..total);
        return ActionChoice::Skill(weighted_skill_index(&attacker.skills, roll));
    }

    ActionChoice::Punch
}

/// Walks the skill list subtracting each weight from the roll; the skill
/// that takes the running value below zero is the pick. `roll` must lie
/// in `[0, total_weight)`, which makes the walk total and guarantees the
/// fallback index is never reached.
pub fn weighted_skill_index(skills: &[Skill], roll: i32) -> usize {
    let mut remaining = roll;
    for (idx, skill) in skills.iter().enumerate() {
        remaining -= skill.activation_rate;
        if remaining < 0 {
            return idx;
        }
    }
    skills.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Character, CharacterClass, Skill, SkillKind, Weapon};
    use crate::combat::types::FightSettings;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn skill(name: &str, rate: i32) -> Skill {
        Skill::new(name, SkillKind::Combat { damage: 10 }, rate)
    }

    fn fighter_from(c: Character) -> Fighter {
        Fighter::from_character(&c, &FightSettings::default())
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_pick_opponent_never_self() {
        let fighters: Vec<Fighter> = (0..4)
            .map(|i| fighter_from(Character::new(i, format!("F{i}"), CharacterClass::Melee)))
            .collect();
        let mut r = rng();
        for _ in 0..1000 {
            for attacker in 0..fighters.len() {
                let target = pick_opponent(attacker, &fighters, &mut r).unwrap();
                assert_ne!(target, attacker);
                assert!(target < fighters.len());
            }
        }
    }

    #[test]
    fn test_pick_opponent_fails_alone() {
        let fighters = vec![fighter_from(Character::new(1, "Last", CharacterClass::Melee))];
        let err = pick_opponent(0, &fighters, &mut rng()).unwrap_err();
        assert_eq!(
            err,
            FightError::NoOpponent {
                attacker: "Last".into()
            }
        );
    }

    #[test]
    fn test_pick_opponent_covers_everyone() {
        let fighters: Vec<Fighter> = (0..3)
            .map(|i| fighter_from(Character::new(i, format!("F{i}"), CharacterClass::Melee)))
            .collect();
        let mut r = rng();
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[pick_opponent(0, &fighters, &mut r).unwrap()] = true;
        }
        assert!(!seen[0] && seen[1] && seen[2]);
    }

    #[test]
    fn test_weighted_index_boundaries() {
        let skills = vec![skill("a", 10), skill("b", 30), skill("c", 60)];
        assert_eq!(weighted_skill_index(&skills, 0), 0);
        assert_eq!(weighted_skill_index(&skills, 9), 0);
        assert_eq!(weighted_skill_index(&skills, 10), 1);
        assert_eq!(weighted_skill_index(&skills, 39), 1);
        assert_eq!(weighted_skill_index(&skills, 40), 2);
        assert_eq!(weighted_skill_index(&skills, 99), 2);
    }

    #[test]
    fn test_weighted_index_skips_zero_weight() {
        let skills = vec![skill("never", 0), skill("always", 5)];
        for roll in 0..5 {
            assert_eq!(weighted_skill_index(&skills, roll), 1);
        }
    }

    #[test]
    fn test_weighted_selection_converges_to_shares() {
        let c = Character::new(1, "Caster", CharacterClass::Support)
            .with_skill(skill("a", 10))
            .with_skill(skill("b", 30))
            .with_skill(skill("c", 60));
        let mut f = fighter_from(c);
        f.weapon_use_rate = 0;
        let mut r = rng();

        let mut counts = [0u32; 3];
        let trials = 100_000;
        for _ in 0..trials {
            match pick_action(&f, &mut r) {
                ActionChoice::Skill(idx) => counts[idx] += 1,
                other => panic!("expected a skill, got {other:?}"),
            }
        }
        let share = |i: usize| counts[i] as f64 / trials as f64;
        assert!((share(0) - 0.10).abs() < 0.01, "a: {}", share(0));
        assert!((share(1) - 0.30).abs() < 0.01, "b: {}", share(1));
        assert!((share(2) - 0.60).abs() < 0.01, "c: {}", share(2));
    }

    #[test]
    fn test_weapon_rate_zero_never_swings() {
        let c = Character::new(1, "Pacifist", CharacterClass::Support)
            .with_weapon(Weapon::new("Stick", 1));
        let mut f = fighter_from(c);
        f.weapon_use_rate = 0;
        let mut r = rng();
        for _ in 0..1000 {
            assert_eq!(pick_action(&f, &mut r), ActionChoice::Punch);
        }
    }

    #[test]
    fn test_weapon_rate_full_always_swings() {
        let c = Character::new(1, "Berserk", CharacterClass::Melee)
            .with_weapon(Weapon::new("Axe", 10))
            .with_skill(skill("unused", 100));
        let mut f = fighter_from(c);
        f.weapon_use_rate = 100;
        let mut r = rng();
        for _ in 0..1000 {
            assert_eq!(pick_action(&f, &mut r), ActionChoice::Weapon);
        }
    }

    #[test]
    fn test_weapon_roll_without_weapon_falls_through_to_skills() {
        let c = Character::new(1, "Caster", CharacterClass::Melee).with_skill(skill("only", 50));
        let mut f = fighter_from(c);
        f.weapon_use_rate = 100;
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(pick_action(&f, &mut r), ActionChoice::Skill(0));
        }
    }

    #[test]
    fn test_zero_total_weight_falls_back_to_punch() {
        // Degenerate roster data: skills exist but can never activate.
        let c = Character::new(1, "Stuck", CharacterClass::Support)
            .with_skill(skill("dead-a", 0))
            .with_skill(skill("dead-b", 0));
        let mut f = fighter_from(c);
        f.weapon_use_rate = 0;
        let mut r = rng();
        for _ in 0..100 {
            assert_eq!(pick_action(&f, &mut r), ActionChoice::Punch);
        }
    }
}
