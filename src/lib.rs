//! Emoji Dash - A lane-based endless runner game engine
//!
//! Core modules:
//! - `engine`: Deterministic simulation (player physics, spawning, collisions, run state)
//! - `session`: Command surface, fixed-step scheduler, end-of-run persistence
//! - `settings`/`progress`: Persisted preferences and player progress
//! - `storage`: Key-value store abstraction (LocalStorage on web, in-memory elsewhere)

pub mod difficulty;
pub mod engine;
pub mod progress;
pub mod session;
pub mod settings;
pub mod storage;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use session::GameSession;
pub use settings::{ControlMode, GameSettings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: f32 = 16.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions (logical pixels; entities scroll downward, +y is down)
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 800.0;
    /// Height of the ground strip at the bottom of the arena
    pub const GROUND_HEIGHT: f32 = 150.0;
    /// Entities past ARENA_HEIGHT + this margin are culled
    pub const OFFSCREEN_MARGIN: f32 = 100.0;

    /// Number of discrete lanes the player can occupy
    pub const LANES: usize = 3;

    /// Player physics (per-tick forward Euler)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_FORCE: f32 = -15.0;
    /// Fraction of the remaining lane gap closed each tick
    pub const LANE_SMOOTHING: f32 = 0.15;
    /// Extra downward velocity added by a quick-drop while airborne
    pub const QUICK_DROP_BOOST: f32 = 5.0;

    /// Scroll speed and progression
    pub const BASE_SPEED: f32 = 3.0;
    pub const SPEED_INCREASE_PER_LEVEL: f32 = 0.3;
    pub const POINTS_PER_LEVEL: u64 = 500;
    pub const MAX_LIVES: u8 = 3;

    /// Per-tick spawn probabilities (before difficulty multipliers)
    pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.02;
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.008;
    pub const COIN_SPAWN_CHANCE: f64 = 0.015;
    /// Minimum vertical distance the newest obstacle must scroll before
    /// another may spawn
    pub const OBSTACLE_MIN_GAP: f32 = 200.0;

    /// Spawn y offsets (just above the visible top)
    pub const OBSTACLE_SPAWN_Y: f32 = -50.0;
    pub const POWERUP_SPAWN_Y: f32 = -30.0;
    pub const COIN_SPAWN_Y: f32 = -20.0;

    /// Hitbox edge lengths (all boxes centered on entity position)
    pub const PLAYER_HITBOX: f32 = 40.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;
    pub const POWERUP_HITBOX: f32 = 30.0;
    pub const COIN_HITBOX: f32 = 20.0;

    /// Power-up effect durations in milliseconds
    pub const SHIELD_DURATION_MS: f32 = 5000.0;
    pub const SLOWMOTION_DURATION_MS: f32 = 3000.0;
    pub const DOUBLEPOINTS_DURATION_MS: f32 = 10000.0;
}

/// Route `log` output to the browser console (WASM only; native binaries
/// use env_logger).
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The y coordinate of the ground line the player stands on
#[inline]
pub fn ground_y() -> f32 {
    consts::ARENA_HEIGHT - consts::GROUND_HEIGHT
}

/// Width of a single lane
#[inline]
pub fn lane_width() -> f32 {
    consts::ARENA_WIDTH / consts::LANES as f32
}

/// The x coordinate of the center of a lane
#[inline]
pub fn lane_center_x(lane: usize) -> f32 {
    lane_width() * lane as f32 + lane_width() / 2.0
}
