//! Persistent roster records.
//!
//! A [`Character`] is what the roster store keeps between fights: identity,
//! base stats, equipment and the accumulated fight record. The fight engine
//! never mutates these directly; it works on [`crate::combat::Fighter`]
//! views built from them and hands back counter updates.

use serde::{Deserialize, Serialize};

/// Character class. Only used to pick the weapon-use rate for a fight,
/// and to order the fight log.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CharacterClass {
    #[default]
    Melee,
    Arcane,
    Support,
}

impl CharacterClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterClass::Melee => "Melee",
            CharacterClass::Arcane => "Arcane",
            CharacterClass::Support => "Support",
        }
    }
}

/// A weapon. At most one per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// What a skill does when it activates. Exactly one payload per skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    /// Damages one opponent, scaled by intelligence vs. defense.
    Combat { damage: i32 },
    /// Restores the user's own HP by a flat amount.
    Heal { heal: i32 },
    /// Drains a percentage of the opponent's current HP and restores it
    /// to the user.
    LifeLeech { percentage: i32 },
}

/// A learned skill with its relative activation weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    /// Relative weight among this character's skills. Weights need not
    /// sum to 100; a skill with weight 0 is never picked.
    pub activation_rate: i32,
    /// Reserved in the roster schema; consumed by no formula yet.
    #[serde(default)]
    pub revive: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>, kind: SkillKind, activation_rate: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            activation_rate,
            revive: false,
        }
    }
}

/// A roster entry. `hp` is the stored (maximum) health; live health only
/// exists on the per-fight `Fighter` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub hp: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: CharacterClass,
    #[serde(default)]
    pub weapon: Option<Weapon>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub fights: u32,
    #[serde(default)]
    pub victories: u32,
    #[serde(default)]
    pub defeats: u32,
}

impl Character {
    /// Creates a bare character with default stats (100 HP, 15 in every
    /// attribute) and no weapon or skills.
    pub fn new(id: u32, name: impl Into<String>, class: CharacterClass) -> Self {
        Self {
            id,
            name: name.into(),
            hp: 100,
            strength: 15,
            defense: 15,
            intelligence: 15,
            class,
            weapon: None,
            skills: Vec::new(),
            fights: 0,
            victories: 0,
            defeats: 0,
        }
    }

    pub fn with_stats(mut self, hp: i32, strength: i32, defense: i32, intelligence: i32) -> Self {
        self.hp = hp;
        self.strength = strength;
        self.defense = defense;
        self.intelligence = intelligence;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Win percentage over all recorded fights, rounded to the nearest
    /// whole percent. 0 when no fight has been recorded.
    pub fn win_percent(&self) -> u32 {
        percent_of(self.victories, self.fights)
    }

    /// Loss percentage, same rounding as [`Self::win_percent`].
    pub fn lose_percent(&self) -> u32 {
        percent_of(self.defeats, self.fights)
    }
}

pub(crate) fn percent_of(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as u32
}

/// A small built-in roster used by the simulator binary when no roster
/// file is supplied, and by tests that need a plausible three-way fight.
pub fn demo_roster() -> Vec<Character> {
    vec![
        Character::new(1, "Aragorn", CharacterClass::Melee)
            .with_stats(100, 18, 12, 8)
            .with_weapon(Weapon::new("Longsword", 12)),
        Character::new(2, "Morgana", CharacterClass::Arcane)
            .with_stats(80, 8, 10, 20)
            .with_skill(Skill::new("Fireball", SkillKind::Combat { damage: 14 }, 60))
            .with_skill(Skill::new(
                "Siphon Soul",
                SkillKind::LifeLeech { percentage: 10 },
                40,
            )),
        Character::new(3, "Elwyn", CharacterClass::Support)
            .with_stats(90, 10, 14, 16)
            .with_skill(Skill::new("Smite", SkillKind::Combat { damage: 10 }, 50))
            .with_skill(Skill::new("Prayer", SkillKind::Heal { heal: 8 }, 50)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_ordering_matches_display_order() {
        // The fight log sorts by class first; Melee leads, Support trails.
        assert!(CharacterClass::Melee < CharacterClass::Arcane);
        assert!(CharacterClass::Arcane < CharacterClass::Support);
    }

    #[test]
    fn test_win_percent_rounds_to_nearest() {
        let mut c = Character::new(1, "Test", CharacterClass::Melee);
        c.fights = 3;
        c.victories = 1;
        c.defeats = 2;
        assert_eq!(c.win_percent(), 33);
        assert_eq!(c.lose_percent(), 67);
    }

    #[test]
    fn test_win_percent_zero_fights() {
        let c = Character::new(1, "Test", CharacterClass::Melee);
        assert_eq!(c.win_percent(), 0);
        assert_eq!(c.lose_percent(), 0);
    }

    #[test]
    fn test_character_json_round_trip() {
        let roster = demo_roster();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Vec<Character> = serde_json::from_str(&json).unwrap();
        assert_eq!(roster, back);
    }

    #[test]
    fn test_skill_optional_fields_default() {
        // Older roster files carry neither counters nor the revive flag.
        let json = r#"{
            "id": 7, "name": "Bare", "hp": 50,
            "strength": 10, "defense": 10, "intelligence": 10,
            "class": "Melee"
        }"#;
        let c: Character = serde_json::from_str(json).unwrap();
        assert!(c.weapon.is_none());
        assert!(c.skills.is_empty());
        assert_eq!(c.fights, 0);
    }
}
