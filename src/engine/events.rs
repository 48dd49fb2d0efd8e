//! Per-tick run events
//!
//! The engine reports what happened each tick so the presentation layer can
//! render particles, update the HUD, and fire haptics. Purely informational:
//! consuming (or ignoring) events never changes engine state, and emitting
//! them never blocks the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::PowerUpKind;

/// Haptic intensity a collaborator should play for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// Error-style buzz (obstacle hit)
    Error,
    /// Medium impact (power-up collected)
    Medium,
    /// Light impact (coin collected)
    Light,
}

/// Event payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEventData {
    /// Player overlapped an obstacle this tick
    ObstacleHit {
        /// Lives remaining after the hit
        lives_left: u8,
        /// True if a shield absorbed the hit (no life lost)
        shielded: bool,
    },
    /// A power-up was collected and its effect activated
    PowerUpCollected { kind: PowerUpKind, pos: Vec2 },
    /// A coin was collected
    CoinCollected {
        pos: Vec2,
        /// 1, or 2 while double-points is active
        value: u32,
    },
    /// The run reached a new level; speed was recomputed
    LevelUp { level: u32, speed: f32 },
    /// Lives hit zero; the run is over
    GameOver { score: u64, coins: u32 },
}

/// A run event stamped with the tick it occurred on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunEvent {
    pub tick: u64,
    pub data: RunEventData,
}

impl RunEvent {
    pub fn new(tick: u64, data: RunEventData) -> Self {
        Self { tick, data }
    }

    /// Haptic feedback this event maps to, if any
    pub fn feedback(&self) -> Option<Feedback> {
        match &self.data {
            RunEventData::ObstacleHit { shielded: false, .. } => Some(Feedback::Error),
            RunEventData::ObstacleHit { shielded: true, .. } => None,
            RunEventData::PowerUpCollected { .. } => Some(Feedback::Medium),
            RunEventData::CoinCollected { .. } => Some(Feedback::Light),
            RunEventData::LevelUp { .. } | RunEventData::GameOver { .. } => None,
        }
    }
}
