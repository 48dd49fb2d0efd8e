//! Deterministic endless-runner simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod events;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod update;

pub use collision::{CollisionOutcome, Rect};
pub use effects::{ActiveEffect, EffectRegistry};
pub use events::{Feedback, RunEvent, RunEventData};
pub use player::LaneShift;
pub use state::{
    Coin, EngineState, GamePhase, Obstacle, ObstacleKind, Player, PowerUp, PowerUpKind, RunState,
};
pub use tick::{TickInput, pause, restart, resume, tick};
