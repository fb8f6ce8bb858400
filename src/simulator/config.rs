//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of fights to simulate
    pub num_fights: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-fight)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_fights: 1000,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast balance check
    pub fn quick() -> Self {
        Self {
            num_fights: 100,
            ..Default::default()
        }
    }

    /// Reproducible config for regression comparisons
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }
}
