//! Emoji Dash headless runner
//!
//! Drives the engine at a fixed 16 ms cadence with a simple autopilot, then
//! prints the run summary. Useful for balance checks and soak testing the
//! tick loop without a frontend.

use std::time::{Duration, Instant};

use emoji_dash::consts::*;
use emoji_dash::engine::RunEventData;
use emoji_dash::storage::default_store;
use emoji_dash::{Difficulty, GameSession, GameSettings};

/// How far above the player an obstacle counts as a threat
const DANGER_WINDOW: f32 = 160.0;

/// Decide a dodge for this tick: sidestep to a clear adjacent lane, or jump
/// when boxed in.
fn autopilot(session: &mut GameSession) {
    let state = session.state();
    let lane = state.player.lane;
    let player_y = state.player.pos.y;

    let threat_in = |l: usize| {
        state.obstacles.iter().any(|o| {
            o.lane == l && o.pos.y > player_y - DANGER_WINDOW && o.pos.y < player_y + 20.0
        })
    };

    if !threat_in(lane) {
        return;
    }

    let left_clear = lane > 0 && !threat_in(lane - 1);
    let right_clear = lane + 1 < LANES && !threat_in(lane + 1);
    if left_clear {
        session.move_left();
    } else if right_clear {
        session.move_right();
    } else {
        session.jump();
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let store = default_store();
    let settings = GameSettings::load(store.as_ref());
    let difficulty: Difficulty = settings.difficulty;
    log::info!(
        "starting headless run: seed {seed}, difficulty {}",
        difficulty.as_str()
    );

    let mut session = GameSession::new(seed, difficulty, store);

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last = Instant::now();
    loop {
        let now = Instant::now();
        let dt_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        last = now;

        autopilot(&mut session);
        for event in session.advance(dt_ms) {
            match event.data {
                RunEventData::LevelUp { level, speed } => {
                    log::info!("level {level} (speed {speed:.2})");
                }
                RunEventData::ObstacleHit {
                    lives_left,
                    shielded,
                } => {
                    log::info!("hit! shielded={shielded}, lives left {lives_left}");
                }
                RunEventData::GameOver { score, coins } => {
                    log::info!("game over: score {score}, coins {coins}");
                }
                _ => {}
            }
        }

        if session.state().run.is_game_over() {
            break;
        }
        std::thread::sleep(tick);
    }

    let run = &session.state().run;
    let progress = session.progress();
    println!(
        "run finished: score {}, coins {}, level {}, dodged {}",
        run.score,
        run.coins,
        run.level,
        session.state().obstacles_dodged
    );
    println!(
        "best score {}, coin bank {}",
        progress.best_score, progress.total_coins
    );
}
