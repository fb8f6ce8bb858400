//! Simulation-scoped combat types.
//!
//! A [`Fighter`] is the mutable per-fight view of a roster
//! [`Character`](crate::character::Character): live health, the round's
//! buffered health change, and the counters the fight will bump. Fighters
//! are built fresh at the start of every fight and discarded afterwards.

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterClass, Skill, Weapon};

/// Tunable fight parameters. Weapon-use rates are per class; the punch
/// rates drive the critical and finishing-blow branches. All rates are
/// percentages in [0, 100].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightSettings {
    pub weapon_rate_melee: i32,
    pub weapon_rate_arcane: i32,
    pub weapon_rate_support: i32,
    pub critical_punch_rate: i32,
    pub critical_punch_damage: i32,
    pub one_punch_rate: i32,
}

impl Default for FightSettings {
    fn default() -> Self {
        Self {
            weapon_rate_melee: 80,
            weapon_rate_arcane: 35,
            weapon_rate_support: 10,
            critical_punch_rate: 15,
            critical_punch_damage: 40,
            one_punch_rate: 50,
        }
    }
}

impl FightSettings {
    /// Weapon-use rate for a class.
    pub fn weapon_rate(&self, class: CharacterClass) -> i32 {
        match class {
            CharacterClass::Melee => self.weapon_rate_melee,
            CharacterClass::Arcane => self.weapon_rate_arcane,
            CharacterClass::Support => self.weapon_rate_support,
        }
    }
}

/// Per-fight view of one participant.
#[derive(Debug, Clone)]
pub struct Fighter {
    pub id: u32,
    pub name: String,
    /// Live health. Only touched at round boundaries; mid-round changes
    /// accumulate in `hp_delta`.
    pub hp: i32,
    pub max_hp: i32,
    /// Buffered health change for the current round. Applied and cleared
    /// when the round settles, so attacks within a round never see each
    /// other's damage.
    pub hp_delta: i32,
    pub strength: i32,
    pub defense: i32,
    pub intelligence: i32,
    pub class: CharacterClass,
    pub weapon_use_rate: i32,
    pub weapon: Option<Weapon>,
    pub skills: Vec<Skill>,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl Fighter {
    /// Builds the fight view of a roster character. Health starts full,
    /// the weapon-use rate comes from the character's class and the
    /// settings, and the counters carry over so a fight series can keep
    /// accumulating them.
    pub fn from_character(character: &Character, settings: &FightSettings) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            hp: character.hp,
            max_hp: character.hp,
            hp_delta: 0,
            strength: character.strength,
            defense: character.defense,
            intelligence: character.intelligence,
            class: character.class,
            weapon_use_rate: settings.weapon_rate(character.class),
            weapon: character.weapon.clone(),
            skills: character.skills.clone(),
            fights: character.fights,
            victories: character.victories,
            defeats: character.defeats,
        }
    }

    /// Applies the buffered round delta to live health and clears it.
    pub fn settle_round(&mut self) {
        self.hp += self.hp_delta;
        self.hp_delta = 0;
    }

    /// Sum of all skill activation weights. Zero means skill selection is
    /// degenerate and the attacker falls back to a punch.
    pub fn total_activation_rate(&self) -> i32 {
        self.skills.iter().map(|s| s.activation_rate).sum()
    }

    pub fn result(&self) -> FighterResult {
        FighterResult {
            id: self.id,
            name: self.name.clone(),
            hp: self.hp,
            fights: self.fights,
            victories: self.victories,
            defeats: self.defeats,
        }
    }
}

/// Snapshot of one fighter at the end of a fight: final health plus the
/// updated counters for the store to merge back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterResult {
    pub id: u32,
    pub name: String,
    pub hp: i32,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

/// The product of one fight: the full log, who won and who fell, and the
/// per-fighter results in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightOutcome {
    pub log: Vec<String>,
    pub winners: Vec<FighterResult>,
    pub losers: Vec<FighterResult>,
    /// Health the winners finished with (ties share it; 0 on an all-dead tie).
    pub winner_hp: i32,
    pub rounds: u32,
    /// Every participant, in the fight's display order.
    pub results: Vec<FighterResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::demo_roster;

    #[test]
    fn test_weapon_rate_follows_class() {
        let settings = FightSettings::default();
        assert_eq!(settings.weapon_rate(CharacterClass::Melee), 80);
        assert_eq!(settings.weapon_rate(CharacterClass::Arcane), 35);
        assert_eq!(settings.weapon_rate(CharacterClass::Support), 10);
    }

    #[test]
    fn test_fighter_starts_at_full_health() {
        let roster = demo_roster();
        let fighter = Fighter::from_character(&roster[1], &FightSettings::default());
        assert_eq!(fighter.hp, roster[1].hp);
        assert_eq!(fighter.max_hp, roster[1].hp);
        assert_eq!(fighter.hp_delta, 0);
        assert_eq!(fighter.weapon_use_rate, 35);
    }

    #[test]
    fn test_settle_round_clears_delta() {
        let roster = demo_roster();
        let mut fighter = Fighter::from_character(&roster[0], &FightSettings::default());
        fighter.hp_delta = -30;
        fighter.settle_round();
        assert_eq!(fighter.hp, 70);
        assert_eq!(fighter.hp_delta, 0);
    }

    #[test]
    fn test_total_activation_rate_sums_weights() {
        let roster = demo_roster();
        let settings = FightSettings::default();
        let morgana = Fighter::from_character(&roster[1], &settings);
        assert_eq!(morgana.total_activation_rate(), 100);
        let aragorn = Fighter::from_character(&roster[0], &settings);
        assert_eq!(aragorn.total_activation_rate(), 0);
    }
}
