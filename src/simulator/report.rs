//! Simulation report generation.

use serde::Serialize;

use crate::character::{percent_of, Character};

/// Aggregated results from a batch of simulated fights.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_fights: u32,
    pub avg_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    pub fighters: Vec<FighterStats>,
}

/// One fighter's record over the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct FighterStats {
    pub name: String,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
    pub win_percent: u32,
    pub lose_percent: u32,
}

impl SimReport {
    /// Builds the report from the post-simulation roster and the recorded
    /// round counts.
    pub fn from_results(roster: &[Character], rounds_per_fight: &[u32]) -> Self {
        let num_fights = rounds_per_fight.len() as u32;
        let avg_rounds = if rounds_per_fight.is_empty() {
            0.0
        } else {
            rounds_per_fight.iter().map(|&r| r as f64).sum::<f64>() / num_fights as f64
        };

        let fighters = roster
            .iter()
            .map(|c| FighterStats {
                name: c.name.clone(),
                fights: c.fights,
                victories: c.victories,
                defeats: c.defeats,
                win_percent: percent_of(c.victories, c.fights),
                lose_percent: percent_of(c.defeats, c.fights),
            })
            .collect();

        Self {
            num_fights,
            avg_rounds,
            min_rounds: rounds_per_fight.iter().copied().min().unwrap_or(0),
            max_rounds: rounds_per_fight.iter().copied().max().unwrap_or(0),
            fighters,
        }
    }

    /// Human-readable summary table.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("═══════════════ SIMULATION REPORT ═══════════════\n");
        out.push_str(&format!("Fights simulated:  {}\n", self.num_fights));
        out.push_str(&format!(
            "Rounds per fight:  avg {:.1}  (min {}, max {})\n",
            self.avg_rounds, self.min_rounds, self.max_rounds
        ));
        out.push('\n');
        out.push_str(&format!(
            "{:<12} {:>7} {:>10} {:>8} {:>6} {:>6}\n",
            "Fighter", "Fights", "Victories", "Defeats", "Win%", "Lose%"
        ));
        for f in &self.fighters {
            out.push_str(&format!(
                "{:<12} {:>7} {:>10} {:>8} {:>5}% {:>5}%\n",
                f.name, f.fights, f.victories, f.defeats, f.win_percent, f.lose_percent
            ));
        }
        out
    }

    /// JSON form for dashboards and regression diffs.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
