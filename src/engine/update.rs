//! Per-tick entity advancement and lifetime culling
//!
//! Obstacles fall at the speed captured when they spawned; power-ups and
//! coins fall at the run's current speed. Anything collected or past the
//! off-screen line is dropped, which bounds both memory and the collision
//! sweep. `Vec::retain` keeps insertion (ID) order, so iteration stays
//! deterministic.

use super::state::EngineState;
use crate::consts::*;

/// Y coordinate past which entities are purged
#[inline]
fn cull_line() -> f32 {
    ARENA_HEIGHT + OFFSCREEN_MARGIN
}

/// Advance all live obstacles and drop the ones that scrolled out. Each
/// culled obstacle counts as dodged for challenge tracking.
pub fn update_obstacles(state: &mut EngineState) {
    let mut dodged = 0;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.y += obstacle.speed;
        if obstacle.pos.y < cull_line() {
            true
        } else {
            dodged += 1;
            false
        }
    });
    state.obstacles_dodged += dodged;
}

/// Advance power-ups and coins at the current run speed, dropping collected
/// and off-screen entries.
pub fn update_collectibles(state: &mut EngineState) {
    let speed = state.run.speed;

    state.powerups.retain_mut(|powerup| {
        if powerup.collected {
            return false;
        }
        powerup.pos.y += speed;
        powerup.pos.y < cull_line()
    });

    state.coins.retain_mut(|coin| {
        if coin.collected {
            return false;
        }
        coin.pos.y += speed;
        coin.pos.y < cull_line()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;
    use crate::engine::state::{Coin, Obstacle, ObstacleKind, PowerUp, PowerUpKind};
    use glam::Vec2;

    fn state_with_entities() -> EngineState {
        let mut state = EngineState::new(1, Difficulty::Medium.profile());
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Block,
            pos: Vec2::new(200.0, 100.0),
            size: Vec2::splat(OBSTACLE_SIZE),
            speed: 5.0,
            lane: 1,
        });
        let id = state.next_entity_id();
        state.powerups.push(PowerUp {
            id,
            kind: PowerUpKind::Shield,
            pos: Vec2::new(200.0, 100.0),
            collected: false,
        });
        let id = state.next_entity_id();
        state.coins.push(Coin {
            id,
            pos: Vec2::new(200.0, 100.0),
            collected: false,
        });
        state
    }

    #[test]
    fn test_obstacles_advance_by_own_speed() {
        let mut state = state_with_entities();
        state.run.speed = 99.0; // Run speed must not affect obstacles
        update_obstacles(&mut state);
        assert_eq!(state.obstacles[0].pos.y, 105.0);
    }

    #[test]
    fn test_collectibles_advance_by_run_speed() {
        let mut state = state_with_entities();
        state.run.speed = 4.0;
        update_collectibles(&mut state);
        assert_eq!(state.powerups[0].pos.y, 104.0);
        assert_eq!(state.coins[0].pos.y, 104.0);
    }

    #[test]
    fn test_offscreen_entities_culled() {
        let mut state = state_with_entities();
        state.obstacles[0].pos.y = ARENA_HEIGHT + OFFSCREEN_MARGIN;
        state.powerups[0].pos.y = ARENA_HEIGHT + OFFSCREEN_MARGIN;
        state.coins[0].pos.y = 100.0;

        update_obstacles(&mut state);
        update_collectibles(&mut state);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.obstacles_dodged, 1);
        assert!(state.powerups.is_empty());
        assert_eq!(state.coins.len(), 1);
    }

    #[test]
    fn test_collected_entities_dropped() {
        let mut state = state_with_entities();
        state.powerups[0].collected = true;
        state.coins[0].collected = true;
        update_collectibles(&mut state);
        assert!(state.powerups.is_empty());
        assert!(state.coins.is_empty());
    }
}
