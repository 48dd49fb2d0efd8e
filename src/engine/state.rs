//! Run state and core entity types
//!
//! Everything that must be serialized for replay/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::EffectRegistry;
use super::events::RunEvent;
use crate::consts::*;
use crate::difficulty::DifficultyProfile;
use crate::{ground_y, lane_center_x};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, ticking
    Running,
    /// Loop suspended, resumable
    Paused,
    /// Run ended, terminal until restart
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Screen position (center of the hitbox)
    pub pos: Vec2,
    /// Current lane index, always in [0, LANES)
    pub lane: usize,
    /// Airborne flag; gravity only applies while set
    pub jumping: bool,
    /// Velocity; only the y component is integrated
    pub vel: Vec2,
}

impl Player {
    /// Spawn standing on the ground in the middle lane
    pub fn new() -> Self {
        let lane = LANES / 2;
        Self {
            pos: Vec2::new(lane_center_x(lane), ground_y()),
            lane,
            jumping: false,
            vel: Vec2::ZERO,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Obstacle shape variants, unlocked progressively by level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Spike,
    Block,
    /// Unlocked at level 3
    Ball,
    /// Unlocked at level 5
    Zigzag,
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Center position
    pub pos: Vec2,
    /// Hitbox size (width, height)
    pub size: Vec2,
    /// Scroll speed captured at spawn time, not recalculated live
    pub speed: f32,
    /// Lane it spawned in
    pub lane: usize,
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    SlowMotion,
    DoublePoints,
}

impl PowerUpKind {
    /// Full effect duration when collected
    pub fn duration_ms(&self) -> f32 {
        match self {
            PowerUpKind::Shield => SHIELD_DURATION_MS,
            PowerUpKind::SlowMotion => SLOWMOTION_DURATION_MS,
            PowerUpKind::DoublePoints => DOUBLEPOINTS_DURATION_MS,
        }
    }
}

/// A collectible power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub collected: bool,
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub collected: bool,
}

/// User-facing run state, reset on restart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub phase: GamePhase,
    /// One point per tick survived
    pub score: u64,
    /// Coins collected this run
    pub coins: u32,
    /// Remaining lives, in [0, MAX_LIVES]; 0 forces game over
    pub lives: u8,
    /// Monotonically non-decreasing within a run
    pub level: u32,
    /// Current scroll speed, derived from level and difficulty
    pub speed: f32,
    /// Consecutive ticks survived without an unshielded hit
    pub streak: u32,
}

impl RunState {
    pub fn new(profile: &DifficultyProfile) -> Self {
        Self {
            phase: GamePhase::Running,
            score: 0,
            coins: 0,
            lives: MAX_LIVES,
            level: 1,
            speed: BASE_SPEED * profile.speed,
            streak: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete engine state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all spawn decisions
    pub rng: Pcg32,
    /// Difficulty multipliers, fixed for the run
    pub profile: DifficultyProfile,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Score/lives/level aggregate
    pub run: RunState,
    pub player: Player,
    /// Live obstacles, in spawn (ID) order
    pub obstacles: Vec<Obstacle>,
    /// Live power-ups, in spawn (ID) order
    pub powerups: Vec<PowerUp>,
    /// Live coins, in spawn (ID) order
    pub coins: Vec<Coin>,
    /// Active timed effects
    pub effects: EffectRegistry,
    /// Obstacles that scrolled out without ending the run (challenge stat)
    pub obstacles_dodged: u32,
    /// Feedback/transition events since the last drain
    #[serde(skip)]
    pub events: Vec<RunEvent>,
    /// Next entity ID
    next_id: u32,
}

impl EngineState {
    /// Create a fresh run with the given seed and difficulty
    pub fn new(seed: u64, profile: DifficultyProfile) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            profile,
            time_ticks: 0,
            run: RunState::new(&profile),
            player: Player::new(),
            obstacles: Vec::new(),
            powerups: Vec::new(),
            coins: Vec::new(),
            effects: EffectRegistry::default(),
            obstacles_dodged: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID, unique within the run
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset for a new run: score/lives/level back to initial values, player
    /// re-centered, all live entities and active effects cleared. The RNG
    /// stream continues; the ID counter keeps climbing so IDs never repeat
    /// across restarts within a session.
    pub fn reset(&mut self) {
        self.run = RunState::new(&self.profile);
        self.player = Player::new();
        self.obstacles.clear();
        self.powerups.clear();
        self.coins.clear();
        self.effects = EffectRegistry::default();
        self.obstacles_dodged = 0;
        self.events.clear();
        self.time_ticks = 0;
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    #[test]
    fn test_new_run_initial_values() {
        let state = EngineState::new(7, Difficulty::Medium.profile());
        assert_eq!(state.run.phase, GamePhase::Running);
        assert_eq!(state.run.score, 0);
        assert_eq!(state.run.lives, MAX_LIVES);
        assert_eq!(state.run.level, 1);
        assert!((state.run.speed - BASE_SPEED).abs() < f32::EPSILON);
        assert_eq!(state.player.lane, 1);
        assert!((state.player.pos.y - ground_y()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_entity_ids_monotonic() {
        let mut state = EngineState::new(7, Difficulty::Medium.profile());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);

        // IDs keep climbing across a restart
        state.reset();
        let c = state.next_entity_id();
        assert!(c > b);
    }

    #[test]
    fn test_hard_difficulty_scales_initial_speed() {
        let state = EngineState::new(7, Difficulty::Hard.profile());
        assert!((state.run.speed - BASE_SPEED * 1.3).abs() < 1e-5);
    }
}
