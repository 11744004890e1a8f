//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod geometry;
pub mod glyph;
pub mod hash_input;
pub mod markers;
pub mod params;
pub mod primitive;
pub mod profile;
pub mod svg_format;
pub mod tuning;
