//! Fixed colors for the sun, beam, mini suns and clouds
//!
//! Theme colors (background, platforms, blob) come from the level; these are
//! the same in every level.

use macroquad::prelude::Color;

// =============================================================================
// Sun & Beam
// =============================================================================

/// Translucent warm beam from the sun down to the player
pub const BEAM_FILL: Color = Color::new(1.0, 1.0, 0.470_588_24, 0.313_725_5); // ~255, 255, 120, 80

/// Sun disc
pub const SUN_FILL: Color = Color::new(1.0, 1.0, 0.0, 1.0); // 255, 255, 0

/// Sun outline and rays
pub const SUN_STROKE: Color = Color::new(1.0, 0.862_745_1, 0.0, 1.0); // ~255, 220, 0

// =============================================================================
// Collectibles
// =============================================================================

/// Mini sun disc
pub const MINI_SUN_FILL: Color = Color::new(1.0, 0.862_745_1, 0.0, 1.0); // ~255, 220, 0

/// Mini sun outline and rays
pub const MINI_SUN_STROKE: Color = Color::new(1.0, 0.705_882_4, 0.0, 1.0); // ~255, 180, 0

// =============================================================================
// Decoration
// =============================================================================

/// Cloud puffs
pub const CLOUD_FILL: Color = Color::new(1.0, 1.0, 1.0, 0.901_960_8); // ~255, 255, 255, 230

/// HUD text
pub const HUD_TEXT: Color = Color::new(0.15, 0.15, 0.18, 1.0);
