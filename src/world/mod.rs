//! World module - side-scrolling level model
//!
//! - Level geometry, theme and collectibles (`geometry`)
//! - Data-driven construction with a single default table (`config`)
//! - Level file loading: JSON, RON, brotli (`level`)
//! - Typed RON sections read into the loose record (`record`)

mod config;
mod geometry;
mod level;
mod record;

pub use geometry::*;
pub use level::*;
