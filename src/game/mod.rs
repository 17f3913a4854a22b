//! Game Module
//!
//! Per-frame side of a level:
//! - Canvas: drawing primitives with a scoped style stack
//! - Renderer: background, sun and beam, clouds, collectibles, platforms
//! - Collectibles: mini sun pickup test and draw
//! - Camera and the host's demo blob
//!
//! The level renderer only sees a `PlayerSnapshot`; movement, physics and
//! input belong to the host.

pub mod camera;
pub mod canvas;
pub mod collectibles;
pub mod palette;
pub mod player;
pub mod renderer;

#[cfg(test)]
pub mod recorder;

// Re-export main types
pub use camera::FollowCamera;
pub use canvas::{Canvas, MacroquadCanvas};
pub use player::{Blob, PlayerSnapshot};
pub use renderer::draw_world;
