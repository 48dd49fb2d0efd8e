//! Axis-aligned collision detection
//!
//! All hitboxes are axis-aligned rectangles centered on entity positions.
//! Touching edges do not count as a collision (strict inequalities), so a
//! pixel-perfect graze is forgiven.

use glam::Vec2;

use super::state::{Coin, Obstacle, Player, PowerUp};
use crate::consts::*;

/// An axis-aligned rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `pos`
    pub fn centered(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            x: pos.x - width / 2.0,
            y: pos.y - height / 2.0,
            width,
            height,
        }
    }

    /// Strict-inequality overlap test; shared edges are not an overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// The player's fixed hitbox (smaller than the sprite's visual bounds)
pub fn player_bounds(player: &Player) -> Rect {
    Rect::centered(player.pos, PLAYER_HITBOX, PLAYER_HITBOX)
}

fn obstacle_bounds(obstacle: &Obstacle) -> Rect {
    Rect::centered(obstacle.pos, obstacle.size.x, obstacle.size.y)
}

fn powerup_bounds(powerup: &PowerUp) -> Rect {
    Rect::centered(powerup.pos, POWERUP_HITBOX, POWERUP_HITBOX)
}

fn coin_bounds(coin: &Coin) -> Rect {
    Rect::centered(coin.pos, COIN_HITBOX, COIN_HITBOX)
}

/// What the resolver found this tick
#[derive(Debug, Clone, Default)]
pub struct CollisionOutcome {
    /// True if ANY live obstacle overlaps the player. Shield suppression is
    /// the orchestrator's job; the resolver always reports the raw overlap.
    pub hit_obstacle: bool,
    /// Every power-up collected this tick (all simultaneous pickups honored)
    pub collected_powerups: Vec<PowerUp>,
    /// Every coin collected this tick
    pub collected_coins: Vec<Coin>,
}

/// Cross-check the player's bounds against all live entities. Collected
/// power-ups and coins are flagged in place and returned; nothing else is
/// mutated.
pub fn resolve(
    player: &Player,
    obstacles: &[Obstacle],
    powerups: &mut [PowerUp],
    coins: &mut [Coin],
) -> CollisionOutcome {
    let bounds = player_bounds(player);

    let hit_obstacle = obstacles
        .iter()
        .any(|o| bounds.overlaps(&obstacle_bounds(o)));

    let mut collected_powerups = Vec::new();
    for powerup in powerups.iter_mut() {
        if !powerup.collected && bounds.overlaps(&powerup_bounds(powerup)) {
            powerup.collected = true;
            collected_powerups.push(powerup.clone());
        }
    }

    let mut collected_coins = Vec::new();
    for coin in coins.iter_mut() {
        if !coin.collected && bounds.overlaps(&coin_bounds(coin)) {
            coin.collected = true;
            collected_coins.push(coin.clone());
        }
    }

    CollisionOutcome {
        hit_obstacle,
        collected_powerups,
        collected_coins,
    }
}
