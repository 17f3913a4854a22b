//! SUNBEAM: a one-level side-scroller sandbox
//!
//! Loads a level (JSON, RON or brotli-compressed), flies a blob around it and
//! draws the world every frame:
//! - Theme background
//! - A sun at the top of the level with a beam down to the player
//! - Clouds, mini sun collectibles, platforms
//!
//! Usage: `sunbeam [LEVEL_FILE]`. Arrow keys or WASD move, R resets the
//! level, Escape quits.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod world;

use macroquad::prelude::*;
use game::canvas::style_scope;
use game::palette::HUD_TEXT;
use game::{draw_world, Blob, Canvas, FollowCamera, MacroquadCanvas, PlayerSnapshot};
use world::{load_level, load_level_from_str, LevelConfig};

/// Level used when no file is given or the given file fails to load
const BUNDLED_LEVEL: &str = include_str!("../assets/levels/sunny_meadow.json");

fn window_conf() -> Conf {
    Conf {
        window_title: format!("SUNBEAM v{}", VERSION),
        window_width: 960,
        window_height: 540,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Logging via env_logger; override the `info` default with RUST_LOG
#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();
}

fn load_startup_level() -> LevelConfig {
    if let Some(path) = std::env::args().nth(1) {
        match load_level(&path) {
            Ok(level) => return level,
            Err(e) => log::error!("Could not load {}: {}; using the bundled level", path, e),
        }
    }

    match load_level_from_str(BUNDLED_LEVEL) {
        Ok(level) => level,
        Err(e) => {
            log::error!("Bundled level is invalid: {}; using defaults", e);
            LevelConfig::default()
        }
    }
}

/// Arrow keys / WASD as a direction, each axis in -1..=1
fn movement_input() -> (f32, f32) {
    let axis = |neg: bool, pos: bool| pos as i32 as f32 - neg as i32 as f32;
    (
        axis(
            is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        ),
        axis(
            is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        ),
    )
}

fn draw_blob<C: Canvas + ?Sized>(canvas: &mut C, player: &PlayerSnapshot, color: Color) {
    let mut canvas = style_scope(canvas);
    canvas.no_stroke();
    canvas.fill(color);
    canvas.ellipse(player.x, player.y, player.r * 2.0, player.r * 2.0);
}

fn draw_hud(level: &LevelConfig) {
    let status = if !level.collectibles.is_empty() && level.all_collected() {
        format!("{}  |  all suns collected!", level.name)
    } else {
        format!(
            "{}  |  suns {}/{}",
            level.name,
            level.collected_count(),
            level.collectibles.len(),
        )
    };
    draw_text(&status, 16.0, 28.0, 24.0, HUD_TEXT);
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    let mut level = load_startup_level();
    log::info!(
        "Level '{}': world {}x{}, death y {}, gravity {}, jump {}, camera lerp {}",
        level.name,
        level.world_width,
        level.world_height,
        level.death_y,
        level.gravity,
        level.jump_velocity,
        level.camera_lerp,
    );

    let world_size = vec2(level.world_width, level.world_height);
    let mut blob = Blob::spawn(&level);
    let mut camera = FollowCamera::new(level.camera_lerp);
    let mut canvas = MacroquadCanvas::new();
    camera.snap_to(vec2(blob.x, blob.y), vec2(screen_width(), screen_height()), world_size);

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let view = vec2(screen_width(), screen_height());

        if is_key_pressed(KeyCode::R) {
            log::info!("Resetting '{}'", level.name);
            level.reset_collectibles();
            blob = Blob::spawn(&level);
            camera.snap_to(vec2(blob.x, blob.y), view, world_size);
        }

        let (dx, dy) = movement_input();
        if blob.step(dx, dy, get_frame_time(), &level) {
            camera.snap_to(vec2(blob.x, blob.y), view, world_size);
        } else {
            camera.update(vec2(blob.x, blob.y), view, world_size);
        }

        canvas.begin_frame();
        canvas.set_offset(camera.offset());

        let player = blob.snapshot();
        draw_world(&mut canvas, &mut level, Some(&player));
        draw_blob(&mut canvas, &player, level.theme.blob);
        draw_hud(&level);

        next_frame().await;
    }
}
