//! Run configuration, read from the environment.

use std::env;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::{GRAVITY_TICKS, TICK_MS};

/// Settings for the terminal game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub tick_ms: u32,
    pub gravity_ticks: u32,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            gravity_ticks: GRAVITY_TICKS,
            seed: None,
            log_path: None,
        }
    }
}

impl RunConfig {
    /// Create from `MINO_TETRIS_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let tick_ms = non_empty("MINO_TETRIS_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let gravity_ticks = non_empty("MINO_TETRIS_GRAVITY_TICKS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.gravity_ticks);

        let seed = non_empty("MINO_TETRIS_SEED").and_then(|s| s.parse().ok());
        let log_path = non_empty("MINO_TETRIS_LOG_PATH");

        Self {
            tick_ms,
            gravity_ticks,
            seed,
            log_path,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_ms))
    }

    /// Seeded generator if a seed is configured, OS entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
