//! Game session: command surface and scheduling shell around the engine
//!
//! Owns the engine state, the storage handle, and cached progress. Frames
//! feed wall-clock time into a fixed-step accumulator; input commands are
//! latched and consumed by the next tick. Persistence is best-effort and
//! never sits on the tick path: a finished run is folded into progress
//! exactly once, on the game-over transition (or on an early restart).

use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::engine::{self, EngineState, LaneShift, RunEvent, TickInput};
use crate::progress::Progress;
use crate::storage::KvStore;

/// A playable session over one engine instance
pub struct GameSession {
    state: EngineState,
    store: Box<dyn KvStore>,
    progress: Progress,
    input: TickInput,
    accumulator_ms: f32,
    run_recorded: bool,
}

impl GameSession {
    /// Start a session with the given seed and difficulty, loading progress
    /// from the store.
    pub fn new(seed: u64, difficulty: Difficulty, store: Box<dyn KvStore>) -> Self {
        let progress = Progress::load(store.as_ref());
        log::info!(
            "session start: seed {seed}, difficulty {}, best score {}",
            difficulty.as_str(),
            progress.best_score
        );
        Self {
            state: EngineState::new(seed, difficulty.profile()),
            store,
            progress,
            input: TickInput::default(),
            accumulator_ms: 0.0,
            run_recorded: false,
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    // --- Commands (all no-ops while paused or game over, except restart) ---

    pub fn jump(&mut self) {
        if self.state.run.is_playing() {
            self.input.jump = true;
        }
    }

    pub fn move_left(&mut self) {
        if self.state.run.is_playing() {
            self.input.shift = Some(LaneShift::Left);
        }
    }

    pub fn move_right(&mut self) {
        if self.state.run.is_playing() {
            self.input.shift = Some(LaneShift::Right);
        }
    }

    pub fn quick_drop(&mut self) {
        if self.state.run.is_playing() {
            self.input.quick_drop = true;
        }
    }

    /// Stop scheduling ticks. Immediate: the pending frame accumulator is
    /// dropped so no tick fires after the pause.
    pub fn pause(&mut self) {
        engine::pause(&mut self.state);
        self.accumulator_ms = 0.0;
        self.input = TickInput::default();
    }

    pub fn resume(&mut self) {
        engine::resume(&mut self.state);
    }

    /// Record the current run (if not already recorded) and start fresh.
    pub fn restart(&mut self) {
        self.record_run_once();
        engine::restart(&mut self.state);
        self.input = TickInput::default();
        self.accumulator_ms = 0.0;
        self.run_recorded = false;
    }

    /// Feed a frame's wall-clock delta in. Runs as many fixed ticks as fit
    /// (bounded to avoid the spiral of death) and returns the events they
    /// produced. While paused or game over nothing ticks.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<RunEvent> {
        if !self.state.run.is_playing() {
            return Vec::new();
        }

        self.accumulator_ms += dt_ms.min(250.0);

        let mut substeps = 0;
        while self.accumulator_ms >= TICK_MS && substeps < MAX_SUBSTEPS {
            let input = self.input;
            engine::tick(&mut self.state, &input, TICK_MS);
            self.accumulator_ms -= TICK_MS;
            substeps += 1;

            // One-shot inputs are consumed by the tick they land on
            self.input = TickInput::default();

            if self.state.run.is_game_over() {
                self.accumulator_ms = 0.0;
                self.record_run_once();
                break;
            }
        }

        self.state.drain_events()
    }

    /// Fold the finished run into progress and persist. Guarded so a run
    /// is never banked twice.
    fn record_run_once(&mut self) {
        if self.run_recorded {
            return;
        }
        self.run_recorded = true;

        let run = &self.state.run;
        let new_best = self.progress.record_run(
            run.score,
            run.coins,
            self.state.obstacles_dodged,
        );
        if new_best {
            log::info!("new best score: {}", run.score);
        }
        self.progress.save(self.store.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::{GamePhase, Obstacle, ObstacleKind};
    use crate::storage::{KvStore, MemoryStore};
    use glam::Vec2;

    fn session_with_store() -> (GameSession, MemoryStore) {
        let store = MemoryStore::new();
        let session = GameSession::new(42, Difficulty::Medium, Box::new(store.clone()));
        (session, store)
    }

    /// Park an obstacle on the player so every tick is an unshielded hit
    fn park_obstacle(session: &mut GameSession) {
        let id = session.state.next_entity_id();
        let pos = session.state.player.pos;
        let lane = session.state.player.lane;
        session.state.obstacles.push(Obstacle {
            id,
            kind: ObstacleKind::Block,
            pos,
            size: Vec2::splat(OBSTACLE_SIZE),
            speed: 0.0,
            lane,
        });
    }

    #[test]
    fn test_advance_runs_fixed_substeps() {
        let (mut session, _) = session_with_store();
        session.advance(TICK_MS * 3.0);
        assert_eq!(session.state().time_ticks, 3);

        // Leftover fraction carries into the next frame
        session.advance(TICK_MS * 0.5);
        assert_eq!(session.state().time_ticks, 3);
        session.advance(TICK_MS * 0.5);
        assert_eq!(session.state().time_ticks, 4);
    }

    #[test]
    fn test_substeps_bounded() {
        let (mut session, _) = session_with_store();
        session.advance(10_000.0);
        assert_eq!(session.state().time_ticks, MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_pause_stops_ticks_immediately() {
        let (mut session, _) = session_with_store();
        session.advance(TICK_MS);
        session.pause();
        assert!(session.state().run.is_paused());

        let events = session.advance(TICK_MS * 10.0);
        assert!(events.is_empty());
        assert_eq!(session.state().time_ticks, 1);

        session.resume();
        session.advance(TICK_MS);
        assert_eq!(session.state().time_ticks, 2);
    }

    #[test]
    fn test_commands_noop_while_paused() {
        let (mut session, _) = session_with_store();
        session.pause();
        session.jump();
        session.move_left();
        session.resume();
        session.advance(TICK_MS);
        assert!(!session.state().player.jumping);
        assert_eq!(session.state().player.lane, 1);
    }

    #[test]
    fn test_latched_input_consumed_by_one_tick() {
        let (mut session, _) = session_with_store();
        session.move_left();
        session.advance(TICK_MS * 2.0);
        // Shift applied once, not twice
        assert_eq!(session.state().player.lane, 0);
    }

    #[test]
    fn test_game_over_persists_best_and_coins() {
        let (mut session, store) = session_with_store();
        store.set("emoji_dash_best_score", "800");
        session.progress = Progress::load(&store);

        session.state.run.score = 1200;
        session.state.run.coins = 25;
        session.state.run.lives = 1;
        park_obstacle(&mut session);

        session.advance(TICK_MS);
        assert!(session.state().run.is_game_over());
        assert_eq!(store.get("emoji_dash_best_score"), Some("1201".to_string()));
        assert_eq!(store.get("emoji_dash_total_coins"), Some("75".to_string()));
    }

    #[test]
    fn test_restart_persists_once_and_resets() {
        let (mut session, store) = session_with_store();
        session.state.run.score = 1200;
        session.state.run.coins = 10;

        session.restart();
        assert_eq!(store.get("emoji_dash_best_score"), Some("1200".to_string()));
        assert_eq!(session.state().run.score, 0);
        assert_eq!(session.state().run.phase, GamePhase::Running);

        // The recorded flag resets with the new run: finishing it banks again
        session.state.run.lives = 1;
        park_obstacle(&mut session);
        session.advance(TICK_MS);
        assert!(session.state().run.is_game_over());
        assert_eq!(session.progress().best_score, 1200);
    }

    #[test]
    fn test_lower_score_does_not_beat_best() {
        let (mut session, store) = session_with_store();
        store.set("emoji_dash_best_score", "5000");
        session.progress = Progress::load(&store);

        session.state.run.score = 100;
        session.restart();
        assert_eq!(store.get("emoji_dash_best_score"), Some("5000".to_string()));
    }
}
