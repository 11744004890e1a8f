//! Drawing parameter derivation
//!
//! Maps segment hashes of the input to bounded drawing parameters.

use crate::domain::hash_input::HashInput;

/// Parameters derived from the input bytes, before wave tuning
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedParameters {
    /// Primary wave frequency (3-7, clamped to 4 for low amplitude)
    pub freq1: u32,
    /// Pseudo-random selector (0-1023)
    pub pseudo: u32,
    /// Normalized wave amplitude (0.35-0.70)
    pub amplitude: f64,
    /// Center glyph selector (0-9)
    pub inner_accent: u32,
    /// Draw the center glyph as an outline
    pub center_hollow: bool,
    /// Number of waves (3-5)
    pub n_waves: u32,
    /// Wave rotation rate (4-8)
    pub freq2: u32,
}

impl DerivedParameters {
    /// Derive all parameters from the input
    pub fn derive(input: &HashInput) -> Self {
        let pseudo = input.hash_segment(8, 8) % 1024;
        let amplitude = (input.hash_segment(16, 8) % 1000) as f64 / 1000.0 * 0.35 + 0.35;

        let mut freq1 = input.hash_segment(0, 8) % 5 + 3;
        if amplitude < 0.5 && freq1 > 4 {
            freq1 = 4;
        }

        Self {
            freq1,
            pseudo,
            amplitude,
            inner_accent: input.hash_segment(30, 2) % 10,
            center_hollow: input.hash_segment(29, 1) & 1 == 1,
            n_waves: (pseudo >> 6) % 3 + 3,
            freq2: ((pseudo >> 2) & 15) % 5 + 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HASH_BYTES;

    #[test]
    fn test_derive_zero_input() {
        let input = HashInput::from_bytes([0; HASH_BYTES]);
        let params = DerivedParameters::derive(&input);

        let pseudo = input.hash_segment(8, 8) % 1024;
        assert_eq!(params.pseudo, pseudo);
        assert_eq!(params.n_waves, (pseudo >> 6) % 3 + 3);
        assert_eq!(params.inner_accent, 9);
        assert!(params.center_hollow);
    }

    #[test]
    fn test_derive_bounds_exhaustive_bytes() {
        for b in 0..=255u8 {
            let params = DerivedParameters::derive(&HashInput::from_bytes([b; HASH_BYTES]));

            assert!((3..=7).contains(&params.freq1));
            assert!(params.pseudo < 1024);
            assert!((0.35..=0.70).contains(&params.amplitude));
            assert!(params.inner_accent < 10);
            assert!((3..=5).contains(&params.n_waves));
            assert!((4..=8).contains(&params.freq2));
        }
    }

    #[test]
    fn test_low_amplitude_clamps_freq1() {
        for b in 0..=255u8 {
            let params = DerivedParameters::derive(&HashInput::from_bytes([b; HASH_BYTES]));
            if params.amplitude < 0.5 {
                assert!(params.freq1 <= 4);
            }
        }
    }

    #[test]
    fn test_derive_deterministic() {
        let input = HashInput::from_bytes(std::array::from_fn(|i| (i * 7) as u8));
        assert_eq!(
            DerivedParameters::derive(&input),
            DerivedParameters::derive(&input)
        );
    }
}
