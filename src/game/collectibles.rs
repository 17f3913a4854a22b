//! Sun collectibles
//!
//! Each frame the uncollected suns are drawn and tested against the player.
//! A sun is picked up once the player's circle reaches the tips of its rays;
//! from then on it is skipped entirely (no draw, no test).

use std::f32::consts::PI;
use crate::world::Collectible;
use super::canvas::{style_scope, Canvas};
use super::palette::{MINI_SUN_FILL, MINI_SUN_STROKE};
use super::player::PlayerSnapshot;

/// Mini sun disc diameter
pub const DISC_DIAMETER: f32 = 32.0;
/// Number of rays around a mini sun (30° apart)
pub const RAY_COUNT: usize = 12;
/// Rays start here...
pub const RAY_INNER: f32 = 18.0;
/// ...and end here. Also the pickup radius.
pub const RAY_OUTER: f32 = 26.0;

impl Collectible {
    /// Does the player's circle reach this sun's ray tips?
    pub fn touches(&self, player: &PlayerSnapshot) -> bool {
        player.distance_to(self.x, self.y) <= player.r + RAY_OUTER
    }

    /// Mark collected if the player touches it. Returns true only on the
    /// transition; an already collected sun never changes.
    pub fn try_collect(&mut self, player: &PlayerSnapshot) -> bool {
        if self.collected || !self.touches(player) {
            return false;
        }
        self.collected = true;
        true
    }
}

/// Draw a mini sun: disc plus rays
pub fn draw_mini_sun<C: Canvas + ?Sized>(canvas: &mut C, x: f32, y: f32) {
    let mut canvas = style_scope(canvas);
    canvas.fill(MINI_SUN_FILL);
    canvas.stroke(MINI_SUN_STROKE);
    canvas.stroke_weight(2.0);
    canvas.ellipse(x, y, DISC_DIAMETER, DISC_DIAMETER);

    for i in 0..RAY_COUNT {
        let a = i as f32 * (PI / 6.0);
        let (sin, cos) = a.sin_cos();
        canvas.line(
            x + cos * RAY_INNER,
            y + sin * RAY_INNER,
            x + cos * RAY_OUTER,
            y + sin * RAY_OUTER,
        );
    }
}

/// Draw every uncollected sun and collect the ones the player touches.
///
/// Without a player the suns are drawn but nothing is collected.
/// Returns how many suns were collected by this call.
pub fn update_and_draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    collectibles: &mut [Collectible],
    player: Option<&PlayerSnapshot>,
) -> usize {
    let mut newly_collected = 0;

    for (i, sun) in collectibles.iter_mut().enumerate() {
        if sun.collected {
            continue;
        }

        draw_mini_sun(canvas, sun.x, sun.y);

        if let Some(player) = player {
            if sun.try_collect(player) {
                log::debug!("Collected sun #{} at ({:.0}, {:.0})", i, sun.x, sun.y);
                newly_collected += 1;
            }
        }
    }

    newly_collected
}
