//! Fixed timestep game loop
//!
//! One call advances the whole simulation by a single tick, in a fixed
//! order: player motion, score/level bookkeeping, spawning, entity
//! advancement, effect timers, collision resolution, result application.
//! Everything is deterministic given the run seed and the input sequence.

use super::collision;
use super::events::{RunEvent, RunEventData};
use super::player::{self, LaneShift};
use super::spawn;
use super::state::{EngineState, GamePhase, PowerUpKind};
use super::update;
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Start a jump (no-op while airborne)
    pub jump: bool,
    /// Shift one lane left or right
    pub shift: Option<LaneShift>,
    /// Cut the current jump short
    pub quick_drop: bool,
}

/// Suspend the loop. Only valid from Running.
pub fn pause(state: &mut EngineState) {
    if state.run.phase == GamePhase::Running {
        state.run.phase = GamePhase::Paused;
    }
}

/// Resume a paused run.
pub fn resume(state: &mut EngineState) {
    if state.run.phase == GamePhase::Paused {
        state.run.phase = GamePhase::Running;
    }
}

/// Reset to a fresh run and return to Running. Valid from any phase.
pub fn restart(state: &mut EngineState) {
    state.reset();
    log::info!("run restarted (seed {})", state.seed);
}

/// Advance the game by one fixed tick. Does nothing while paused or after
/// game over; no partial tick is ever applied.
pub fn tick(state: &mut EngineState, input: &TickInput, dt_ms: f32) {
    if state.run.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Movement commands, then physics
    if input.jump {
        player::jump(&mut state.player);
    }
    if let Some(dir) = input.shift {
        player::change_lane(&mut state.player, dir);
    }
    if input.quick_drop {
        player::quick_drop(&mut state.player);
    }
    player::advance(&mut state.player);

    // One survived tick is one point
    state.run.score += 1;
    state.run.streak += 1;

    advance_level(state);

    spawn::spawn_obstacles(state);
    spawn::spawn_collectibles(state);

    update::update_obstacles(state);
    update::update_collectibles(state);

    state.effects.tick(dt_ms);

    let outcome = collision::resolve(
        &state.player,
        &state.obstacles,
        &mut state.powerups,
        &mut state.coins,
    );
    apply_outcome(state, outcome);
}

/// Recompute level from score. Level never decreases; speed is recomputed
/// only when the level rises.
fn advance_level(state: &mut EngineState) {
    let from_score = (state.run.score / POINTS_PER_LEVEL) as u32 + 1;
    if from_score > state.run.level {
        state.run.level = from_score;
        state.run.speed = (BASE_SPEED
            + (from_score - 1) as f32 * SPEED_INCREASE_PER_LEVEL)
            * state.profile.speed;
        state.events.push(RunEvent::new(
            state.time_ticks,
            RunEventData::LevelUp {
                level: from_score,
                speed: state.run.speed,
            },
        ));
        log::debug!("level {} reached, speed {:.2}", from_score, state.run.speed);
    }
}

fn apply_outcome(state: &mut EngineState, outcome: collision::CollisionOutcome) {
    let tick = state.time_ticks;

    // Power-ups first so a double-points pickup counts for coins grabbed
    // on the same tick
    for powerup in &outcome.collected_powerups {
        state.effects.activate(powerup.kind);
        state.events.push(RunEvent::new(
            tick,
            RunEventData::PowerUpCollected {
                kind: powerup.kind,
                pos: powerup.pos,
            },
        ));
    }

    for coin in &outcome.collected_coins {
        let value = if state.effects.is_active(PowerUpKind::DoublePoints) {
            2
        } else {
            1
        };
        state.run.coins += value;
        state.events.push(RunEvent::new(
            tick,
            RunEventData::CoinCollected {
                pos: coin.pos,
                value,
            },
        ));
    }

    if outcome.hit_obstacle {
        if state.effects.is_active(PowerUpKind::Shield) {
            state.events.push(RunEvent::new(
                tick,
                RunEventData::ObstacleHit {
                    lives_left: state.run.lives,
                    shielded: true,
                },
            ));
        } else {
            state.run.lives = state.run.lives.saturating_sub(1);
            state.events.push(RunEvent::new(
                tick,
                RunEventData::ObstacleHit {
                    lives_left: state.run.lives,
                    shielded: false,
                },
            ));

            if state.run.lives == 0 {
                state.run.phase = GamePhase::GameOver;
                state.events.push(RunEvent::new(
                    tick,
                    RunEventData::GameOver {
                        score: state.run.score,
                        coins: state.run.coins,
                    },
                ));
                log::info!(
                    "game over at tick {}: score {}, coins {}",
                    tick,
                    state.run.score,
                    state.run.coins
                );
            } else {
                state.run.streak = 0;
            }
        }
    }
}
