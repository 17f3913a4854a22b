//! Player snapshot and the host's demo blob
//!
//! The level only ever reads a `PlayerSnapshot`. `Blob` is the minimal
//! free-flying player the binary drives with the keyboard.

use crate::world::LevelConfig;

/// Read-only player state handed to the renderer each frame (world coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    /// Center X
    pub x: f32,
    /// Center Y
    pub y: f32,
    /// Collision radius
    pub r: f32,
}

impl PlayerSnapshot {
    pub const fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r }
    }

    /// Distance between the player's center and a point
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Keyboard-driven blob, no gravity or platform collision
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    /// Movement speed in world units per second
    pub speed: f32,
}

impl Blob {
    pub const DEFAULT_SPEED: f32 = 320.0;

    /// Spawn at the level's start point
    pub fn spawn(level: &LevelConfig) -> Self {
        Self {
            x: level.start.x,
            y: level.start.y,
            r: level.start.r,
            speed: Self::DEFAULT_SPEED,
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::new(self.x, self.y, self.r)
    }

    /// Move along `(dx, dy)` (each -1..1) for `dt` seconds, staying inside the
    /// world horizontally. Returns true when the blob fell past the death
    /// plane and was sent back to the start.
    pub fn step(&mut self, dx: f32, dy: f32, dt: f32, level: &LevelConfig) -> bool {
        self.x = (self.x + dx * self.speed * dt).clamp(self.r, (level.world_width - self.r).max(self.r));
        self.y += dy * self.speed * dt;

        if level.is_below_death_plane(self.y) {
            log::info!("Fell below y={} at x={:.0}; respawning", level.death_y, self.x);
            *self = Self::spawn(level);
            return true;
        }
        false
    }
}
