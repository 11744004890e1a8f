//! Render targets
//!
//! Narrow seam between the pure generator and whatever displays its output.
//! A target may carry its own hash and size attributes, used when the caller
//! does not supply them.

use crate::app::generator::{GenerateError, Options, generate};
use crate::constants::DEFAULT_SIZE;
use crate::infra::svg_io::save_svg;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Render target errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that displays a rendered fingerprint
pub trait RenderTarget {
    /// Hash attribute of the target, if any
    fn current_hash(&self) -> Option<String>;

    /// Size attribute of the target, if any
    fn current_size(&self) -> Option<f64>;

    /// Replace the target's content with a rendered document
    fn replace(&mut self, svg: &str) -> io::Result<()>;
}

/// In-memory target
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StringTarget {
    pub hash: Option<String>,
    pub size: Option<f64>,
    pub content: String,
}

impl StringTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }
}

impl RenderTarget for StringTarget {
    fn current_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn current_size(&self) -> Option<f64> {
        self.size
    }

    fn replace(&mut self, svg: &str) -> io::Result<()> {
        self.content.clear();
        self.content.push_str(svg);
        Ok(())
    }
}

/// File target, written atomically
#[derive(Clone, Debug, PartialEq)]
pub struct FileTarget {
    path: PathBuf,
    pub hash: Option<String>,
    pub size: Option<f64>,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            hash: None,
            size: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderTarget for FileTarget {
    fn current_hash(&self) -> Option<String> {
        self.hash.clone()
    }

    fn current_size(&self) -> Option<f64> {
        self.size
    }

    fn replace(&mut self, svg: &str) -> io::Result<()> {
        save_svg(&self.path, svg)
    }
}

/// Render into a target
///
/// `hash` and `size` default to the target's own attributes (size falls back
/// to 120). A missing target is a silent no-op and returns `Ok(false)`.
/// A missing hash fails validation like any other malformed hash.
pub fn update_target<T: RenderTarget + ?Sized>(
    target: Option<&mut T>,
    hash: Option<&str>,
    size: Option<f64>,
    show_grid: bool,
) -> Result<bool, RenderError> {
    let Some(target) = target else {
        debug!("render target not found, skipping");
        return Ok(false);
    };

    let hash = match hash {
        Some(h) => h.to_string(),
        None => target.current_hash().unwrap_or_default(),
    };
    let size = size.or_else(|| target.current_size()).unwrap_or(DEFAULT_SIZE);

    let svg = generate(&hash, &Options { size, show_grid })?;
    target.replace(&svg)?;

    Ok(true)
}

/// Pass-through string facade
pub fn render_to_string(hash: &str, size: f64, show_grid: bool) -> Result<String, GenerateError> {
    generate(hash, &Options { size, show_grid })
}
