//! Level geometry and state types
//!
//! Plain data for a single side-scrolling level:
//! - Platforms (solid rectangles, top-left anchored)
//! - Theme colors for background, platforms and the player blob
//! - Spawn point and world bounds
//! - Sun collectibles with a one-way collected flag
//!
//! Everything here is built by `LevelConfig::from_record` (see `config.rs`)
//! and owned exclusively by the level.

use macroquad::prelude::Color;

/// Solid level geometry: an axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Platform {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Color palette for a level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Cleared behind everything each frame
    pub background: Color,
    /// Fill for every platform
    pub platform: Color,
    /// Player blob color (drawn by the host, carried here so levels can restyle it)
    pub blob: Color,
}

/// Spawn point plus the player's collision radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartPoint {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// A mini sun pickup.
///
/// `collected` only ever goes from false to true; the registry in
/// `game::collectibles` is the only writer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectible {
    pub x: f32,
    pub y: f32,
    pub collected: bool,
}

impl Collectible {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, collected: false }
    }
}

/// A fully resolved level. Every field holds a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub name: String,
    pub theme: Theme,

    // Physics knobs, passed through to the host's physics
    pub gravity: f32,
    pub jump_velocity: f32,

    /// Camera smoothing factor (fraction of the remaining distance per frame)
    pub camera_lerp: f32,

    pub world_width: f32,
    pub world_height: f32,
    /// Anything below this line has fallen out of the level
    pub death_y: f32,

    pub start: StartPoint,
    pub platforms: Vec<Platform>,
    pub collectibles: Vec<Collectible>,
}

impl LevelConfig {
    /// Has the given y coordinate fallen past the death plane?
    pub fn is_below_death_plane(&self, y: f32) -> bool {
        y > self.death_y
    }

    /// Number of collectibles already picked up
    pub fn collected_count(&self) -> usize {
        self.collectibles.iter().filter(|c| c.collected).count()
    }

    /// True once every collectible is gone (vacuously true for levels without any)
    pub fn all_collected(&self) -> bool {
        self.collectibles.iter().all(|c| c.collected)
    }

    /// Put every collectible back, as on a fresh load of the same level.
    pub fn reset_collectibles(&mut self) {
        for sun in &mut self.collectibles {
            sun.collected = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collectible_counts() {
        let mut level = LevelConfig::default();
        assert!(level.all_collected());

        level.collectibles = vec![Collectible::new(0.0, 0.0), Collectible::new(50.0, 0.0)];
        assert_eq!(level.collected_count(), 0);
        assert!(!level.all_collected());

        level.collectibles[1].collected = true;
        assert_eq!(level.collected_count(), 1);

        level.collectibles[0].collected = true;
        assert!(level.all_collected());

        level.reset_collectibles();
        assert_eq!(level.collected_count(), 0);
    }

    #[test]
    fn test_death_plane() {
        let level = LevelConfig::default();
        assert!(!level.is_below_death_plane(level.death_y));
        assert!(level.is_below_death_plane(level.death_y + 0.5));
    }
}
