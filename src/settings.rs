//! Game settings and preferences
//!
//! Persisted as JSON under a single key. Malformed or missing data falls
//! back to hard-coded defaults rather than failing.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::storage::KvStore;

/// How the player steers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Touch,
    Swipe,
    Tilt,
}

impl ControlMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlMode::Touch => "touch",
            ControlMode::Swipe => "swipe",
            ControlMode::Tilt => "tilt",
        }
    }
}

/// Persisted player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub sound: bool,
    pub vibration: bool,
    pub control_mode: ControlMode,
    pub difficulty: Difficulty,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sound: true,
            vibration: true,
            control_mode: ControlMode::Touch,
            difficulty: Difficulty::Medium,
        }
    }
}

impl GameSettings {
    const STORAGE_KEY: &'static str = "emoji_dash_settings";

    /// Load settings, falling back to defaults on absence or corruption
    pub fn load(store: &dyn KvStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                return settings;
            }
            log::warn!("corrupt settings, using defaults");
        }
        Self::default()
    }

    /// Persist settings (best-effort)
    pub fn save(&self, store: &dyn KvStore) {
        match serde_json::to_string(self) {
            Ok(json) => store.set(Self::STORAGE_KEY, &json),
            Err(e) => log::warn!("failed to serialize settings: {e}"),
        }
    }
}
