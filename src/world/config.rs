//! Level configuration merge
//!
//! Turns a loosely-structured level record (any field may be missing, at any
//! depth) into a fully resolved `LevelConfig`. Every field has exactly one
//! entry in the `defaults` table below; the merge is "first defined value
//! wins": a present value overrides, even when it is 0 or an empty string,
//! while a missing or `null` value falls through to the default.
//!
//! Wrong-shape input is never an error. A value of the wrong type is treated
//! as absent (for a nested object, the whole subtree defaults) and a warning
//! is logged.

use macroquad::prelude::Color;
use serde_json::Value;
use super::{Collectible, LevelConfig, Platform, StartPoint, Theme};

/// The default table. One entry per `LevelConfig` field.
pub mod defaults {
    pub const NAME: &str = "Level";

    /// Theme colors as RGBA bytes (`#F0F0F0`, `#C8C8C8`, `#1478FF`)
    pub const BACKGROUND: [u8; 4] = [240, 240, 240, 255];
    pub const PLATFORM: [u8; 4] = [200, 200, 200, 255];
    pub const BLOB: [u8; 4] = [20, 120, 255, 255];

    pub const GRAVITY: f32 = 0.65;
    pub const JUMP_VELOCITY: f32 = -11.0;
    pub const CAMERA_LERP: f32 = 0.12;

    pub const WORLD_WIDTH: f32 = 2400.0;
    pub const WORLD_HEIGHT: f32 = 360.0;
    /// `death_y` defaults to the resolved world height plus this margin
    pub const DEATH_MARGIN: f32 = 200.0;

    pub const START_X: f32 = 80.0;
    pub const START_Y: f32 = 220.0;
    pub const START_R: f32 = 26.0;

    /// Missing coordinates/sizes inside platform and collectible entries
    pub const ENTRY_FIELD: f32 = 0.0;
}

/// Bounds on numeric level fields
pub mod limits {
    /// Largest magnitude accepted for any number (coordinates, sizes, knobs)
    pub const MAX_VALUE: f32 = 1_000_000.0;
}

/// Check that a resolved number is usable (finite and within bounds)
fn is_valid_number(v: f32) -> bool {
    v.is_finite() && v.abs() <= limits::MAX_VALUE
}

static ABSENT: Value = Value::Null;

impl LevelConfig {
    /// Build a level from a partial record, filling every gap from `defaults`.
    pub fn from_record(record: &Value) -> Self {
        if !record.is_object() && !record.is_null() {
            log::warn!("level record is {}, not an object; using an empty level", kind(record));
        }

        let theme = section(record, "theme");
        let camera = section(record, "camera");
        let world = section(record, "world");
        let start = section(record, "start");

        let world_height = number(world, "h", defaults::WORLD_HEIGHT);

        Self {
            name: string(record, "name", defaults::NAME),
            theme: Theme {
                background: color(theme, "bg", rgba(defaults::BACKGROUND)),
                platform: color(theme, "platform", rgba(defaults::PLATFORM)),
                blob: color(theme, "blob", rgba(defaults::BLOB)),
            },
            gravity: number(record, "gravity", defaults::GRAVITY),
            jump_velocity: number(record, "jumpV", defaults::JUMP_VELOCITY),
            camera_lerp: number(camera, "lerp", defaults::CAMERA_LERP),
            world_width: number(world, "w", defaults::WORLD_WIDTH),
            world_height,
            death_y: number(world, "deathY", world_height + defaults::DEATH_MARGIN),
            start: StartPoint {
                x: number(start, "x", defaults::START_X),
                y: number(start, "y", defaults::START_Y),
                r: number(start, "r", defaults::START_R),
            },
            platforms: entries(record, "platforms")
                .map(|p| Platform::new(
                    number(p, "x", defaults::ENTRY_FIELD),
                    number(p, "y", defaults::ENTRY_FIELD),
                    number(p, "w", defaults::ENTRY_FIELD),
                    number(p, "h", defaults::ENTRY_FIELD),
                ))
                .collect(),
            // Pickup state is never carried in from data: every sun starts uncollected
            collectibles: entries(record, "collectibles")
                .map(|c| Collectible::new(
                    number(c, "x", defaults::ENTRY_FIELD),
                    number(c, "y", defaults::ENTRY_FIELD),
                ))
                .collect(),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::from_record(&ABSENT)
    }
}

/// Build a color from RGBA bytes
pub fn rgba([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba(r, g, b, a)
}

/// Parse a theme color: `"#RGB"`, `"#RRGGBB"`, `"#RRGGBBAA"`, `[r, g, b]` or `[r, g, b, a]`.
pub fn parse_color(value: &Value) -> Option<Color> {
    match value {
        Value::String(s) => parse_hex_color(s),
        Value::Array(parts) => {
            let channels = parts.iter().map(channel).collect::<Option<Vec<u8>>>()?;
            match channels.as_slice() {
                &[r, g, b] => Some(rgba([r, g, b, 255])),
                &[r, g, b, a] => Some(rgba([r, g, b, a])),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Parse a CSS-style hex color
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => {
            // Shorthand: each nibble is doubled (#abc == #aabbcc)
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                *slot = c.to_digit(16)? as u8 * 17;
            }
            Some(rgba([rgb[0], rgb[1], rgb[2], 255]))
        }
        6 => Some(rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field accessors
// ─────────────────────────────────────────────────────────────────────────────

fn channel(value: &Value) -> Option<u8> {
    value
        .as_f64()
        .filter(|c| (0.0..=255.0).contains(c))
        .map(|c| c.round() as u8)
}

/// Nested object at `key`, or an absent value whose lookups all miss.
fn section<'a>(parent: &'a Value, key: &str) -> &'a Value {
    match parent.get(key) {
        Some(value @ Value::Object(_)) => value,
        None | Some(Value::Null) => &ABSENT,
        Some(other) => {
            log::warn!("level field `{}` is {}, not an object; using defaults", key, kind(other));
            &ABSENT
        }
    }
}

fn number(parent: &Value, key: &str, default: f32) -> f32 {
    match parent.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Number(n)) => match n.as_f64().map(|v| v as f32) {
            Some(v) if is_valid_number(v) => v,
            _ => {
                log::warn!("level field `{}` = {} is out of range; using {}", key, n, default);
                default
            }
        },
        Some(other) => {
            log::warn!("level field `{}` is {}, not a number; using {}", key, kind(other), default);
            default
        }
    }
}

fn string(parent: &Value, key: &str, default: &str) -> String {
    match parent.get(key) {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => default.to_string(),
        Some(other) => {
            log::warn!("level field `{}` is {}, not a string; using {:?}", key, kind(other), default);
            default.to_string()
        }
    }
}

fn color(parent: &Value, key: &str, default: Color) -> Color {
    match parent.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => parse_color(value).unwrap_or_else(|| {
            log::warn!("theme color `{}` = {} is not a color; using default", key, value);
            default
        }),
    }
}

/// Object entries of the list at `key`, in input order. Non-object entries are skipped.
fn entries<'a>(parent: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    let items: &[Value] = match parent.get(key) {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => &[],
        Some(other) => {
            log::warn!("level field `{}` is {}, not a list; using an empty list", key, kind(other));
            &[]
        }
    };
    let key = key.to_string();
    items.iter().enumerate().filter_map(move |(i, item)| {
        if item.is_object() {
            Some(item)
        } else {
            log::warn!("{}[{}] is {}, not an object; skipped", key, i, kind(item));
            None
        }
    })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
