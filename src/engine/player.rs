//! Player motion model
//!
//! Gravity-driven jump/fall as per-tick forward-Euler integration, plus a
//! critically-damped exponential approach toward the center of the current
//! lane. No bounce, no double-jump.

use super::state::Player;
use crate::consts::*;
use crate::{ground_y, lane_center_x};

/// Direction for a lane change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneShift {
    Left,
    Right,
}

/// Advance the player by one tick: integrate gravity while airborne and
/// close 15% of the remaining gap toward the current lane's center.
pub fn advance(player: &mut Player) {
    if player.jumping {
        player.vel.y += GRAVITY;
        player.pos.y += player.vel.y;

        // Land when reaching the ground line
        if player.pos.y >= ground_y() {
            player.pos.y = ground_y();
            player.jumping = false;
            player.vel.y = 0.0;
        }
    }

    let target_x = lane_center_x(player.lane);
    player.pos.x += (target_x - player.pos.x) * LANE_SMOOTHING;
}

/// Start a jump. No-op while already airborne.
pub fn jump(player: &mut Player) {
    if !player.jumping {
        player.jumping = true;
        player.vel.y = JUMP_FORCE;
    }
}

/// Shift one lane over, clamped to the arena bounds. Moving past the edge
/// is a no-op, not an error.
pub fn change_lane(player: &mut Player, dir: LaneShift) {
    player.lane = match dir {
        LaneShift::Left => player.lane.saturating_sub(1),
        LaneShift::Right => (player.lane + 1).min(LANES - 1),
    };
}

/// Add downward velocity to cut a jump short. No-op on the ground.
pub fn quick_drop(player: &mut Player) {
    if player.jumping {
        player.vel.y += QUICK_DROP_BOOST;
    }
}
