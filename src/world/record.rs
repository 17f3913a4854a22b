//! RON level records
//!
//! RON reads structs by name, so a RON level is deserialized into these typed
//! sections first and then serialized into the same JSON-shaped record a JSON
//! level produces. Leaf values stay loose (`serde_json::Value`) so the merge
//! rules in `config.rs` still decide what a wrong-typed leaf means. Absent
//! fields are skipped on the way out, which keeps them absent in the record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::LevelError;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonLevel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<RonTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Value>,
    #[serde(rename = "jumpV", skip_serializing_if = "Option::is_none")]
    pub jump_v: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<RonCamera>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub world: Option<RonWorld>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<RonStart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<RonPlatform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collectibles: Option<Vec<RonPoint>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blob: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonCamera {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lerp: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonWorld {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<Value>,
    #[serde(rename = "deathY", skip_serializing_if = "Option::is_none")]
    pub death_y: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonStart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonPlatform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RonPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Value>,
}

/// Parse RON level text into the JSON-shaped record
///
/// `IMPLICIT_SOME` lets level files write `gravity: 0.55` instead of
/// `gravity: Some(0.55)`; `None` still reads as absent.
pub fn parse_ron_record(contents: &str) -> Result<Value, LevelError> {
    let options = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    let level: RonLevel = options.from_str(contents)?;
    Ok(serde_json::to_value(level)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::LevelConfig;
    use serde_json::json;

    #[test]
    fn test_struct_sections_become_objects() {
        let record = parse_ron_record(
            "(name: \"Steps\", jumpV: -12.5, world: (w: 1800, h: 480), start: (r: 22))",
        ).unwrap();
        assert_eq!(record, json!({
            "name": "Steps",
            "jumpV": -12.5,
            "world": { "w": 1800, "h": 480 },
            "start": { "r": 22 },
        }));
    }

    #[test]
    fn test_none_and_missing_stay_absent() {
        let record = parse_ron_record("(gravity: None, world: (w: 900))").unwrap();
        assert_eq!(record, json!({ "world": { "w": 900 } }));
        assert_eq!(parse_ron_record("()").unwrap(), json!({}));
    }

    #[test]
    fn test_lists_keep_order() {
        let record = parse_ron_record(
            "(platforms: [(x: 1, y: 2, w: 3, h: 4), (x: 5)], collectibles: [(x: 7, y: 8)])",
        ).unwrap();
        assert_eq!(record["platforms"], json!([
            { "x": 1, "y": 2, "w": 3, "h": 4 },
            { "x": 5 },
        ]));
        assert_eq!(record["collectibles"], json!([{ "x": 7, "y": 8 }]));
    }

    #[test]
    fn test_wrong_typed_leaves_in_sections_fall_back() {
        let record = parse_ron_record(
            "(world: (w: \"wide\", h: 500), theme: (bg: 12, blob: \"#FF0000\"), start: (x: [1, 2], y: 40))",
        ).unwrap();
        let level = LevelConfig::from_record(&record);
        let defaults = LevelConfig::default();

        assert_eq!(level.world_width, defaults.world_width);
        assert_eq!(level.world_height, 500.0);
        assert_eq!(level.death_y, 700.0);
        assert_eq!(level.theme.background, defaults.theme.background);
        assert_eq!(level.theme.blob, macroquad::color::Color::from_rgba(255, 0, 0, 255));
        assert_eq!(level.start.x, defaults.start.x);
        assert_eq!(level.start.y, 40.0);
    }

    #[test]
    fn test_section_must_be_struct_shaped() {
        assert!(matches!(parse_ron_record("(world: \"wide\")"), Err(LevelError::RonError(_))));
    }
}
