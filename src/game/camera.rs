//! Follow camera for side-scrolling
//!
//! Eases toward centering the player each frame by a fixed fraction
//! (`LevelConfig::camera_lerp`) and never shows anything outside the world.

use macroquad::prelude::{vec2, Vec2};

/// Top-left corner of the view in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub x: f32,
    pub y: f32,
    /// Fraction of the remaining distance covered per update (0 = frozen, 1 = locked on)
    pub lerp: f32,
}

impl FollowCamera {
    pub fn new(lerp: f32) -> Self {
        Self { x: 0.0, y: 0.0, lerp }
    }

    /// Jump straight to the target (level start, respawn)
    pub fn snap_to(&mut self, target: Vec2, view: Vec2, world: Vec2) {
        let goal = Self::goal(target, view, world);
        self.x = goal.x;
        self.y = goal.y;
    }

    /// Ease toward the target
    pub fn update(&mut self, target: Vec2, view: Vec2, world: Vec2) {
        let goal = Self::goal(target, view, world);
        let t = self.lerp.clamp(0.0, 1.0);
        self.x += (goal.x - self.x) * t;
        self.y += (goal.y - self.y) * t;
    }

    /// View origin that centers `target`, clamped to the world
    fn goal(target: Vec2, view: Vec2, world: Vec2) -> Vec2 {
        vec2(
            clamp_axis(target.x - view.x * 0.5, view.x, world.x),
            clamp_axis(target.y - view.y * 0.5, view.y, world.y),
        )
    }

    /// Translation from world to screen coordinates
    pub fn offset(&self) -> Vec2 {
        vec2(-self.x, -self.y)
    }
}

fn clamp_axis(origin: f32, view: f32, world: f32) -> f32 {
    if view >= world {
        // World smaller than the screen: center it
        (world - view) * 0.5
    } else {
        origin.clamp(0.0, world - view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Vec2 = Vec2::new(800.0, 360.0);
    const WORLD: Vec2 = Vec2::new(2400.0, 360.0);

    #[test]
    fn test_snap_centers_target() {
        let mut cam = FollowCamera::new(0.12);
        cam.snap_to(vec2(1200.0, 180.0), VIEW, WORLD);
        assert_eq!((cam.x, cam.y), (800.0, 0.0));
        assert_eq!(cam.offset(), vec2(-800.0, 0.0));
    }

    #[test]
    fn test_snap_clamps_to_world_edges() {
        let mut cam = FollowCamera::new(0.12);
        cam.snap_to(vec2(10.0, 180.0), VIEW, WORLD);
        assert_eq!(cam.x, 0.0);

        cam.snap_to(vec2(2390.0, 180.0), VIEW, WORLD);
        assert_eq!(cam.x, 1600.0);
    }

    #[test]
    fn test_update_moves_by_lerp_fraction() {
        let mut cam = FollowCamera::new(0.5);
        cam.update(vec2(1200.0, 180.0), VIEW, WORLD);
        assert_eq!(cam.x, 400.0);
        cam.update(vec2(1200.0, 180.0), VIEW, WORLD);
        assert_eq!(cam.x, 600.0);
    }

    #[test]
    fn test_zero_lerp_never_moves() {
        let mut cam = FollowCamera::new(0.0);
        cam.update(vec2(2000.0, 180.0), VIEW, WORLD);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }

    #[test]
    fn test_small_world_is_centered() {
        let mut cam = FollowCamera::new(1.0);
        cam.update(vec2(100.0, 100.0), VIEW, vec2(400.0, 200.0));
        assert_eq!((cam.x, cam.y), (-200.0, -80.0));
    }
}
