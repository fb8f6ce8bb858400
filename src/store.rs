//! Roster persistence and fight-record bookkeeping.
//!
//! The fight engine never touches disk; this module is the collaborator
//! that loads rosters before a fight and merges counters back afterwards.
//! The binary roster file is checksummed: version magic, payload length,
//! bincode payload, SHA-256 trailer. A JSON import/export pair exists for
//! hand-edited rosters.

use crate::character::Character;
use crate::combat::types::FightOutcome;
use crate::error::FightError;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Bumped whenever the serialized roster layout changes.
const ROSTER_VERSION_MAGIC: u64 = 0x4152_454E_4100_0001; // "ARENA" + layout 1

/// Stores the roster as a checksummed binary file.
pub struct RosterStore {
    roster_path: PathBuf,
}

impl RosterStore {
    /// Creates a store at the platform config location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "arena").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            roster_path: config_dir.join("roster.dat"),
        })
    }

    /// Creates a store at an explicit path. Used by tests and by callers
    /// that manage their own data directory.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            roster_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.roster_path
    }

    /// Saves the roster with checksum verification.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized roster (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, roster: &[Character]) -> io::Result<()> {
        let data = bincode::serialize(roster)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(ROSTER_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.roster_path)?;
        file.write_all(&ROSTER_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Loads the roster, verifying the version magic and the checksum.
    pub fn load(&self) -> io::Result<Vec<Character>> {
        let mut file = fs::File::open(&self.roster_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);
        if version != ROSTER_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid roster version: expected 0x{:016X}, got 0x{:016X}",
                    ROSTER_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let checksum = hasher.finalize();
        if checksum.as_slice() != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Roster checksum mismatch",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Loads a hand-editable JSON roster file.
pub fn load_json(path: impl AsRef<Path>) -> io::Result<Vec<Character>> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Writes the roster as pretty-printed JSON.
pub fn save_json(path: impl AsRef<Path>, roster: &[Character]) -> io::Result<()> {
    let text = serde_json::to_string_pretty(roster)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, text)
}

/// Resolves a fight request's id list against the roster. Ids that match
/// nothing are silently dropped; the engine's two-fighter precondition
/// catches requests that collapse below a real fight.
pub fn select_by_ids(roster: &[Character], ids: &[u32]) -> Vec<Character> {
    roster
        .iter()
        .filter(|c| ids.contains(&c.id))
        .cloned()
        .collect()
}

/// Merges a fight outcome's counters back into the roster. Health and
/// stats are untouched; only the fight record moves.
pub fn apply_results(roster: &mut [Character], outcome: &FightOutcome) {
    for result in &outcome.results {
        if let Some(character) = roster.iter_mut().find(|c| c.id == result.id) {
            character.fights = result.fights;
            character.victories = result.victories;
            character.defeats = result.defeats;
        }
    }
}

/// Resets fights/victories/defeats to zero for exactly the given ids.
/// Everything else about the characters is left alone.
pub fn clear_fight_results(roster: &mut [Character], ids: &[u32]) -> Result<usize, FightError> {
    let mut cleared = 0;
    for character in roster.iter_mut().filter(|c| ids.contains(&c.id)) {
        character.fights = 0;
        character.victories = 0;
        character.defeats = 0;
        cleared += 1;
    }
    if cleared == 0 {
        return Err(FightError::NoneCleared);
    }
    Ok(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::demo_roster;
    use std::env;

    fn temp_store(name: &str) -> RosterStore {
        let path = env::temp_dir().join(format!("arena_store_test_{}_{}.dat", name, std::process::id()));
        let _ = fs::remove_file(&path);
        RosterStore::at_path(path)
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store("round_trip");
        let roster = demo_roster();
        store.save(&roster).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(roster, loaded);
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_load_rejects_corrupted_payload() {
        let store = temp_store("corrupt");
        store.save(&demo_roster()).unwrap();

        // Flip one payload byte; the checksum must catch it.
        let mut bytes = fs::read(store.path()).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        fs::write(store.path(), &bytes).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_load_rejects_wrong_magic() {
        let store = temp_store("magic");
        store.save(&demo_roster()).unwrap();

        let mut bytes = fs::read(store.path()).unwrap();
        bytes[0] ^= 0x01;
        fs::write(store.path(), &bytes).unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_json_round_trip() {
        let path = env::temp_dir().join(format!("arena_roster_{}.json", std::process::id()));
        let roster = demo_roster();
        save_json(&path, &roster).unwrap();
        let loaded = load_json(&path).unwrap();
        assert_eq!(roster, loaded);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_select_by_ids_drops_unknown() {
        let roster = demo_roster();
        let picked = select_by_ids(&roster, &[1, 3, 999]);
        let names: Vec<&str> = picked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Aragorn", "Elwyn"]);
    }

    #[test]
    fn test_clear_fight_results_exact_ids() {
        let mut roster = demo_roster();
        for c in roster.iter_mut() {
            c.fights = 10;
            c.victories = 6;
            c.defeats = 4;
        }
        let stats_before: Vec<_> = roster
            .iter()
            .map(|c| (c.hp, c.strength, c.defense, c.intelligence))
            .collect();

        let cleared = clear_fight_results(&mut roster, &[1, 2]).unwrap();
        assert_eq!(cleared, 2);

        assert_eq!((roster[0].fights, roster[0].victories, roster[0].defeats), (0, 0, 0));
        assert_eq!((roster[1].fights, roster[1].victories, roster[1].defeats), (0, 0, 0));
        // Id 3 untouched.
        assert_eq!((roster[2].fights, roster[2].victories, roster[2].defeats), (10, 6, 4));

        // Health and stats never move.
        let stats_after: Vec<_> = roster
            .iter()
            .map(|c| (c.hp, c.strength, c.defense, c.intelligence))
            .collect();
        assert_eq!(stats_before, stats_after);
    }

    #[test]
    fn test_clear_fight_results_no_match_is_error() {
        let mut roster = demo_roster();
        let err = clear_fight_results(&mut roster, &[42]).unwrap_err();
        assert_eq!(err, FightError::NoneCleared);
    }
}
