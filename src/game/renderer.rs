//! World Renderer
//!
//! Draws one frame of a level, back to front:
//! 1. Background (theme color)
//! 2. Sun and beam, only when there is a player
//! 3. Clouds
//! 4. Collectibles (also collects the ones the player touches)
//! 5. Platforms
//!
//! Every group of style changes runs inside a style scope so nothing leaks
//! from one layer into the next.

use std::f32::consts::PI;
use macroquad::prelude::vec2;
use crate::world::LevelConfig;
use super::canvas::{style_scope, Canvas};
use super::collectibles;
use super::palette::{BEAM_FILL, CLOUD_FILL, SUN_FILL, SUN_STROKE};
use super::player::PlayerSnapshot;

/// Sun height above the top of the world (it is always centered horizontally)
pub const SUN_Y: f32 = 80.0;
pub const SUN_RADIUS: f32 = 35.0;
pub const SUN_RAY_COUNT: usize = 16;
pub const SUN_RAY_INNER: f32 = 40.0;
pub const SUN_RAY_OUTER: f32 = 60.0;
/// Width of the beam where it meets the player
pub const BEAM_WIDTH: f32 = 300.0;

/// First cloud x
pub const CLOUD_START_X: f32 = 80.0;
pub const CLOUD_SPACING: f32 = 220.0;
/// Cloud heights, cycled by cloud index
pub const CLOUD_Y: [f32; 4] = [50.0, 60.0, 70.0, 80.0];
/// Puffs making up one cloud: (dx, dy, w, h) around the anchor
pub const CLOUD_PUFFS: [(f32, f32, f32, f32); 6] = [
    (0.0, 0.0, 90.0, 50.0),
    (35.0, -10.0, 70.0, 40.0),
    (-25.0, 10.0, 60.0, 35.0),
    (15.0, 15.0, 50.0, 30.0),
    (-30.0, -5.0, 40.0, 25.0),
    (50.0, 5.0, 55.0, 28.0),
];

/// Draw a full frame of `level`.
///
/// Returns the number of collectibles picked up this frame.
pub fn draw_world<C: Canvas + ?Sized>(
    canvas: &mut C,
    level: &mut LevelConfig,
    player: Option<&PlayerSnapshot>,
) -> usize {
    canvas.background(level.theme.background);

    if let Some(player) = player {
        draw_sun_and_beam(canvas, level.world_width, player);
    }

    draw_clouds(canvas, level.world_width);

    let collected = collectibles::update_and_draw(canvas, &mut level.collectibles, player);
    if collected > 0 {
        log::info!(
            "'{}': {}/{} suns collected",
            level.name,
            level.collected_count(),
            level.collectibles.len(),
        );
    }

    draw_platforms(canvas, level);
    collected
}

/// Fixed sun position for a world of the given width
pub fn sun_anchor(world_width: f32) -> (f32, f32) {
    (world_width / 2.0, SUN_Y)
}

/// Beam from the sun down to the bottom of the player, then the sun itself
pub fn draw_sun_and_beam<C: Canvas + ?Sized>(canvas: &mut C, world_width: f32, player: &PlayerSnapshot) {
    let (sun_x, sun_y) = sun_anchor(world_width);
    let bottom = player.y + player.r;

    {
        let mut canvas = style_scope(canvas);
        canvas.no_stroke();
        canvas.fill(BEAM_FILL);
        canvas.polygon(&[
            vec2(sun_x, sun_y),
            vec2(player.x - BEAM_WIDTH / 2.0, bottom),
            vec2(player.x + BEAM_WIDTH / 2.0, bottom),
        ]);
    }

    let mut canvas = style_scope(canvas);
    canvas.fill(SUN_FILL);
    canvas.stroke(SUN_STROKE);
    canvas.stroke_weight(3.0);
    canvas.ellipse(sun_x, sun_y, SUN_RADIUS * 2.0, SUN_RADIUS * 2.0);

    for i in 0..SUN_RAY_COUNT {
        let a = i as f32 * (PI / 8.0);
        let (sin, cos) = a.sin_cos();
        canvas.line(
            sun_x + cos * SUN_RAY_INNER,
            sun_y + sin * SUN_RAY_INNER,
            sun_x + cos * SUN_RAY_OUTER,
            sun_y + sin * SUN_RAY_OUTER,
        );
    }
}

/// Cloud anchors `(x, y_base)` across a world of the given width.
/// A non-finite width has no anchors.
pub fn cloud_anchors(world_width: f32) -> impl Iterator<Item = (f32, f32)> {
    (0usize..)
        .map(|i| (CLOUD_START_X + i as f32 * CLOUD_SPACING, CLOUD_Y[i % CLOUD_Y.len()]))
        .take_while(move |&(x, _)| world_width.is_finite() && x < world_width)
}

/// One cloud cluster per anchor
pub fn draw_clouds<C: Canvas + ?Sized>(canvas: &mut C, world_width: f32) {
    let mut canvas = style_scope(canvas);
    canvas.no_stroke();
    canvas.fill(CLOUD_FILL);

    for (x, y) in cloud_anchors(world_width) {
        for (dx, dy, w, h) in CLOUD_PUFFS {
            canvas.ellipse(x + dx, y + dy, w, h);
        }
    }
}

/// Platforms in level order, filled with the theme color
pub fn draw_platforms<C: Canvas + ?Sized>(canvas: &mut C, level: &LevelConfig) {
    let mut canvas = style_scope(canvas);
    canvas.no_stroke();
    canvas.fill(level.theme.platform);

    for p in &level.platforms {
        canvas.rect(p.x(), p.y(), p.width(), p.height());
    }
}
