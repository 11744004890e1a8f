//! Wave shape tuning
//!
//! Relaxes amplitude scale, shape exponent and frequency so that the two
//! opposite-phase radii of a wave stay visibly apart. The heuristic may stop
//! without reaching the target gap; whatever it ends with is used.

use crate::constants::{
    AMP_SCALE_MAX, F1_MIN, GAMMA_MAX, GAMMA_START, GAMMA_STEP, TUNE_ITERATIONS, TUNE_SAMPLES,
};
use std::f64::consts::{PI, TAU};
use tracing::{debug, trace};

/// Tuned wave shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveShape {
    /// Normalized amplitude (from the derived parameters)
    pub amplitude: f64,
    /// Tuned primary frequency (>= 3)
    pub f1: u32,
    /// Shape exponent (1.35-1.7)
    pub gamma: f64,
    /// Amplitude scale (1.0-1.25)
    pub amp_scale: f64,
}

impl WaveShape {
    /// Untuned starting shape
    pub fn initial(freq1: u32, amplitude: f64) -> Self {
        Self {
            amplitude,
            f1: freq1,
            gamma: GAMMA_START,
            amp_scale: 1.0,
        }
    }

    /// Normalized radius for profile angle `u`
    #[inline]
    pub fn normalized(&self, u: f64) -> f64 {
        self.amplitude * (1.0 + 0.5 * signed_pow(u.sin(), self.gamma)) * self.amp_scale
    }

    /// Normalized mean radius
    #[inline]
    pub fn mean(&self) -> f64 {
        self.amplitude * self.amp_scale
    }
}

/// `sign(x) * |x|^gamma`
#[inline]
pub fn signed_pow(x: f64, gamma: f64) -> f64 {
    if x < 0.0 {
        -(-x).powf(gamma)
    } else {
        x.powf(gamma)
    }
}

/// Minimum gap in pixels the tuner aims for
pub fn min_gap_px(thickness: f64) -> f64 {
    (7.0 * thickness).max(6.0)
}

/// Smallest pixel gap between a wave and its half-period shift over one turn
pub fn min_opposite_gap(shape: &WaveShape, curve_max: f64) -> f64 {
    let f1 = shape.f1 as f64;
    let mut min_gap = f64::INFINITY;

    for k in 0..TUNE_SAMPLES {
        let t = k as f64 / TUNE_SAMPLES as f64 * TAU;
        let r1 = shape.normalized(f1 * t);
        let r2 = shape.normalized(f1 * (t + PI / f1));
        min_gap = min_gap.min((r1 - r2).abs() * curve_max);
    }

    min_gap
}

/// Tune the wave shape for a canvas with the given curve bound
///
/// Runs at most three iterations. Each failing iteration applies one step:
/// 0. scale amplitude up (at most 1.25)
/// 1. raise the shape exponent by 0.2 (at most 1.7)
/// 2. lower the frequency by one (not below 3)
pub fn tune_wave(freq1: u32, amplitude: f64, curve_max: f64, thickness: f64) -> WaveShape {
    let mut shape = WaveShape::initial(freq1, amplitude);
    let target = min_gap_px(thickness);

    for iteration in 0..TUNE_ITERATIONS {
        let min_gap = min_opposite_gap(&shape, curve_max);
        trace!(iteration, min_gap, target, "wave tuning sample");

        if min_gap >= target {
            debug!(iteration, f1 = shape.f1, gamma = shape.gamma, amp_scale = shape.amp_scale, "wave tuning converged");
            return shape;
        }

        match iteration {
            // target / 0 yields +inf, which the ceiling absorbs
            0 => shape.amp_scale = (shape.amp_scale * (target / min_gap).sqrt()).min(AMP_SCALE_MAX),
            1 => shape.gamma = (shape.gamma + GAMMA_STEP).min(GAMMA_MAX),
            _ => {
                if shape.f1 > F1_MIN {
                    shape.f1 -= 1;
                }
            }
        }
    }

    debug!(f1 = shape.f1, gamma = shape.gamma, amp_scale = shape.amp_scale, "wave tuning exhausted");
    shape
}
