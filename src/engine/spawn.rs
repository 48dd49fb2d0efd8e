//! Stochastic entity spawning
//!
//! Once per tick, each entity class gets an independent Bernoulli trial
//! against the seeded run RNG. Difficulty scales obstacle and power-up
//! probabilities; coins spawn at a fixed rate.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, EngineState, Obstacle, ObstacleKind, PowerUp, PowerUpKind};
use crate::consts::*;
use crate::lane_center_x;

/// Obstacle shapes available at the given level. {Spike, Block} always;
/// Ball from level 3; Zigzag from level 5.
fn unlocked_obstacles(level: u32) -> Vec<ObstacleKind> {
    let mut kinds = vec![ObstacleKind::Spike, ObstacleKind::Block];
    if level >= 3 {
        kinds.push(ObstacleKind::Ball);
    }
    if level >= 5 {
        kinds.push(ObstacleKind::Zigzag);
    }
    kinds
}

/// The newest obstacle must have scrolled at least OBSTACLE_MIN_GAP below
/// the spawn line before another may spawn. Prevents unavoidable stacks.
fn obstacle_gap_clear(state: &EngineState) -> bool {
    state
        .obstacles
        .last()
        .is_none_or(|o| o.pos.y - OBSTACLE_SPAWN_Y >= OBSTACLE_MIN_GAP)
}

/// Roll the obstacle trial for this tick and push a new obstacle on success.
pub fn spawn_obstacles(state: &mut EngineState) {
    let chance = OBSTACLE_SPAWN_CHANCE * state.profile.obstacles as f64;
    if state.rng.random_bool(chance.min(1.0)) && obstacle_gap_clear(state) {
        let kinds = unlocked_obstacles(state.run.level);
        let kind = kinds[state.rng.random_range(0..kinds.len())];
        let lane = state.rng.random_range(0..LANES);

        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind,
            pos: Vec2::new(lane_center_x(lane), OBSTACLE_SPAWN_Y),
            size: Vec2::splat(OBSTACLE_SIZE),
            // Captured now; stays fixed even when the run speeds up
            speed: state.run.speed,
            lane,
        });
    }
}

/// Roll the power-up and coin trials for this tick.
pub fn spawn_collectibles(state: &mut EngineState) {
    let powerup_chance = POWERUP_SPAWN_CHANCE * state.profile.powerups as f64;
    if state.rng.random_bool(powerup_chance.min(1.0)) {
        let kinds = [
            PowerUpKind::Shield,
            PowerUpKind::SlowMotion,
            PowerUpKind::DoublePoints,
        ];
        let kind = kinds[state.rng.random_range(0..kinds.len())];
        let lane = state.rng.random_range(0..LANES);

        let id = state.next_entity_id();
        state.powerups.push(PowerUp {
            id,
            kind,
            pos: Vec2::new(lane_center_x(lane), POWERUP_SPAWN_Y),
            collected: false,
        });
    }

    if state.rng.random_bool(COIN_SPAWN_CHANCE) {
        let lane = state.rng.random_range(0..LANES);

        let id = state.next_entity_id();
        state.coins.push(Coin {
            id,
            pos: Vec2::new(lane_center_x(lane), COIN_SPAWN_Y),
            collected: false,
        });
    }
}
