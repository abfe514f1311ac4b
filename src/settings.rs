//! Headless driver settings
//!
//! Gameplay constants are compiled in (`crate::consts`); these only control
//! how the driver runs matches. Stored as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the RNG seed
pub const SEED_ENV: &str = "BATTLE_BOTS_SEED";

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for spawn positions
    pub seed: u64,
    /// Stop after this many ticks in total (0 = no limit)
    pub max_ticks: u64,
    /// Stop after this many decided matches
    pub matches: u32,
    /// Clock units (ms) advanced per tick
    pub frame_ms: u64,
    /// Let the autopilot drive the player; otherwise the player stands still
    pub autopilot: bool,
    /// Print a JSON snapshot when each match ends
    pub dump_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            max_ticks: 60 * 60 * 10,
            matches: 1,
            frame_ms: 1000 / crate::consts::FPS as u64,
            autopilot: true,
            dump_snapshot: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply overrides from the environment
    pub fn apply_env(&mut self) {
        if let Ok(raw) = std::env::var(SEED_ENV) {
            self.apply_seed_override(&raw);
        }
    }

    fn apply_seed_override(&mut self, raw: &str) {
        match raw.trim().parse() {
            Ok(seed) => self.seed = seed,
            Err(_) => log::warn!("Ignoring {}={:?}: not a number", SEED_ENV, raw),
        }
    }

    /// Frame duration, never zero
    pub fn effective_frame_ms(&self) -> u64 {
        self.frame_ms.max(1)
    }

    /// Whether the tick budget is spent
    pub fn ticks_exhausted(&self, ticks: u64) -> bool {
        self.max_ticks != 0 && ticks >= self.max_ticks
    }
}
