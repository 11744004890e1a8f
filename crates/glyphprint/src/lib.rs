//! glyphprint - Deterministic vector fingerprints for 32-byte hash values
//!
//! This crate provides functionality to:
//! - Derive drawing parameters from a 64-character hex hash
//! - Compose waves, border markers and a center glyph into an SVG document
//! - Render batches of hashes and write them to render targets

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use constants::*;
pub use app::batch::{render_batch, render_batch_with_progress};
#[cfg(feature = "parallel")]
pub use app::batch::{render_batch_parallel, render_batch_parallel_with_progress};
pub use app::fingerprint::{Fingerprint, describe};
pub use app::generator::{GenerateError, Options, generate, generate_from_input};
pub use domain::glyph::GlyphKind;
pub use domain::hash_input::{HashInput, ValidationError};
pub use infra::render_target::{RenderError, RenderTarget, render_to_string, update_target};
