//! Fingerprint generation entry points
//!
//! `generate` is a pure function of (hash, size, show_grid): no hidden state,
//! no I/O, safe to call from any number of threads.

use crate::app::composer::compose;
use crate::constants::DEFAULT_SIZE;
use crate::domain::hash_input::{HashInput, ValidationError};
use crate::domain::svg_format::to_svg;
use thiserror::Error;

/// Generation options
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options {
    /// Canvas side in pixels (must be finite and positive)
    pub size: f64,
    /// Draw the diagnostic guide grid
    pub show_grid: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            show_grid: false,
        }
    }
}

impl Options {
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    /// Check the canvas size
    pub fn validate(&self) -> Result<(), GenerateError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(GenerateError::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// Generation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// Hash is not 64 hex characters
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Canvas size is not a finite positive number
    #[error("Invalid canvas size: {0} (must be a finite positive number)")]
    InvalidSize(f64),
}

/// Generate the SVG fingerprint for a 64-character hex hash
pub fn generate(hash: &str, options: &Options) -> Result<String, GenerateError> {
    let input = HashInput::parse(hash)?;
    generate_from_input(&input, options)
}

/// Generate the SVG fingerprint for an already decoded input
pub fn generate_from_input(input: &HashInput, options: &Options) -> Result<String, GenerateError> {
    options.validate()?;
    let primitives = compose(input, options.size, options.show_grid);
    Ok(to_svg(options.size, &primitives))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.size, 120.0);
        assert!(!options.show_grid);
    }

    #[test]
    fn test_generate_validation_error() {
        let result = generate(&"0".repeat(63), &Options::default());
        assert!(matches!(
            result,
            Err(GenerateError::Validation(ValidationError::InvalidLength { found: 63 }))
        ));
    }

    #[test]
    fn test_generate_rejects_bad_size() {
        for size in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let result = generate(ZERO_HASH, &Options::default().with_size(size));
            assert!(matches!(result, Err(GenerateError::InvalidSize(_))));
        }
    }

    #[test]
    fn test_huge_size_yields_finite_document() {
        for size in [1e15, 1e307, f64::MAX / 2.0] {
            let options = Options::default().with_size(size).with_grid(true);
            let svg = generate(ZERO_HASH, &options).unwrap();
            assert!(!svg.contains("inf"), "size {}", size);
            assert!(!svg.contains("NaN"), "size {}", size);
        }
    }

    #[test]
    fn test_hash_checked_before_size() {
        let result = generate("xyz", &Options::default().with_size(-1.0));
        assert!(matches!(result, Err(GenerateError::Validation(_))));
    }

    #[test]
    fn test_generate_document_dimensions() {
        let svg = generate(ZERO_HASH, &Options::default().with_size(64.0)).unwrap();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"64\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_generate_idempotent() {
        let options = Options::default().with_grid(true);
        let a = generate(ZERO_HASH, &options).unwrap();
        let b = generate(ZERO_HASH, &options).unwrap();
        assert_eq!(a, b);
    }
}
