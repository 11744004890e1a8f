//! Radial profile evaluation

use crate::domain::tuning::WaveShape;

/// Evaluates bounded wave radii for one canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialProfile {
    shape: WaveShape,
    curve_max: f64,
    keepout: f64,
    /// Oscillation stretch applied to keep the half-swing visible (1.0 = none)
    stretch: f64,
}

impl RadialProfile {
    /// Build a profile; `keepout` must not exceed `curve_max`
    pub fn new(shape: WaveShape, curve_max: f64, keepout: f64, thickness: f64) -> Self {
        let min_swing = (3.0 * thickness).max(2.0);
        let swing = 0.5 * shape.amplitude * shape.amp_scale * curve_max;
        let stretch = if swing > 0.0 && swing < min_swing {
            min_swing / swing
        } else {
            1.0
        };

        Self {
            shape,
            curve_max,
            keepout,
            stretch,
        }
    }

    /// Pixel radius at profile angle `u`, clamped to `[keepout, curve_max]`
    pub fn radius_at(&self, u: f64) -> f64 {
        let mut norm = self.shape.normalized(u);
        if self.stretch != 1.0 {
            let mean = self.shape.mean();
            norm = mean + (norm - mean) * self.stretch;
        }

        (norm * self.curve_max).clamp(self.keepout, self.curve_max)
    }
}
