//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations and render targets.

pub mod render_target;
pub mod svg_io;
