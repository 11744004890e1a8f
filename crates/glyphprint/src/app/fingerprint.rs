//! Fingerprint description
//!
//! Exposes the derived values behind a fingerprint without rendering it.

use crate::app::composer::Plan;
use crate::app::generator::{GenerateError, Options};
use crate::domain::hash_input::HashInput;
use crate::domain::markers::marker_count;
use std::fmt;

/// Summary of the values a fingerprint is drawn from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fingerprint {
    pub plan: Plan,
    pub marker_count: usize,
}

impl Fingerprint {
    pub fn from_input(input: &HashInput, options: &Options) -> Result<Self, GenerateError> {
        options.validate()?;
        Ok(Self {
            plan: Plan::new(input, options.size),
            marker_count: marker_count(input),
        })
    }

    /// Whether a center glyph is drawn
    pub fn has_glyph(&self) -> bool {
        self.plan.geometry.center_radius() > 0.0
    }
}

/// Describe the fingerprint of a 64-character hex hash
pub fn describe(hash: &str, options: &Options) -> Result<Fingerprint, GenerateError> {
    let input = HashInput::parse(hash)?;
    Fingerprint::from_input(&input, options)
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.plan.params;
        let s = &self.plan.shape;
        let g = &self.plan.geometry;

        writeln!(f, "hash:       {}", self.plan.input.to_hex())?;
        writeln!(f, "size:       {}", g.size)?;
        writeln!(f, "waves:      {} (freq2 {})", p.n_waves, p.freq2)?;
        writeln!(
            f,
            "shape:      f1 {} (from {}), gamma {:.2}, amp {:.3} x {:.3}",
            s.f1, p.freq1, s.gamma, s.amplitude, s.amp_scale
        )?;
        writeln!(f, "pseudo:     {}", p.pseudo)?;
        writeln!(
            f,
            "glyph:      {} ({}), accent {}",
            self.plan.glyph,
            if p.center_hollow { "hollow" } else { "filled" },
            p.inner_accent
        )?;
        writeln!(f, "keepout:    {:.2} px", g.keepout)?;
        write!(f, "markers:    {}/128", self.marker_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::glyph::GlyphKind;

    #[test]
    fn test_describe_zero_hash() {
        let fp = describe(&"0".repeat(64), &Options::default()).unwrap();
        assert_eq!(fp.marker_count, 0);
        assert_eq!(fp.plan.glyph, GlyphKind::Polygon { sides: 8 });
        assert!(fp.has_glyph());

        let text = fp.to_string();
        assert!(text.contains("polygon(8) (hollow), accent 9"));
        assert!(text.ends_with("markers:    0/128"));
    }

    #[test]
    fn test_describe_all_ones_markers() {
        let fp = describe(&"f".repeat(64), &Options::default()).unwrap();
        assert_eq!(fp.marker_count, 128);
    }

    #[test]
    fn test_glyph_presence_matches_accent() {
        for b in 0..=255u8 {
            let input = HashInput::from_bytes([b; 32]);
            let fp = Fingerprint::from_input(&input, &Options::default()).unwrap();
            assert_eq!(fp.has_glyph(), fp.plan.params.inner_accent != 4);
        }
    }
}
