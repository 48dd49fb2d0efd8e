//! Difficulty presets
//!
//! Each preset scales scroll speed, obstacle spawn rate, and power-up spawn
//! rate. Selected once per run; read-only afterwards.

use serde::{Deserialize, Serialize};

/// Named difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            "extreme" => Some(Difficulty::Extreme),
            _ => None,
        }
    }

    /// Multipliers applied to the run for this preset
    pub fn profile(&self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                speed: 0.8,
                obstacles: 0.8,
                powerups: 1.3,
            },
            Difficulty::Medium => DifficultyProfile {
                speed: 1.0,
                obstacles: 1.0,
                powerups: 1.0,
            },
            Difficulty::Hard => DifficultyProfile {
                speed: 1.3,
                obstacles: 1.4,
                powerups: 0.8,
            },
            Difficulty::Extreme => DifficultyProfile {
                speed: 1.6,
                obstacles: 1.8,
                powerups: 0.6,
            },
        }
    }
}

/// Per-difficulty multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Scroll speed multiplier
    pub speed: f32,
    /// Obstacle spawn probability multiplier
    pub obstacles: f32,
    /// Power-up spawn probability multiplier
    pub powerups: f32,
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Difficulty::Medium.profile()
    }
}
