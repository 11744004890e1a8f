//! Fingerprint composition
//!
//! Assembles every drawing stage into one ordered primitive list:
//! background, optional grid, border, waves, markers, center glyph.

use crate::constants::{
    BACKGROUND_COLOR, GRID_COLOR, GRID_LINES, GRID_OPACITY, INK_COLOR, MARKER_SLOTS,
    RING_SCALES, WAVE_DETAIL,
};
use crate::domain::geometry::Geometry;
use crate::domain::glyph::{GlyphKind, render_glyph};
use crate::domain::hash_input::HashInput;
use crate::domain::markers::place_markers;
use crate::domain::params::DerivedParameters;
use crate::domain::primitive::{Paint, Primitive, Stroke};
use crate::domain::profile::RadialProfile;
use crate::domain::tuning::{WaveShape, tune_wave};
use std::f64::consts::TAU;
use tracing::debug;

/// Everything derived from one input at one canvas size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plan {
    pub input: HashInput,
    pub params: DerivedParameters,
    pub glyph: GlyphKind,
    pub geometry: Geometry,
    pub shape: WaveShape,
}

impl Plan {
    pub fn new(input: &HashInput, size: f64) -> Self {
        let params = DerivedParameters::derive(input);
        let glyph = GlyphKind::from_accent(params.inner_accent);
        let geometry = Geometry::new(size, glyph);
        let shape = tune_wave(
            params.freq1,
            params.amplitude,
            geometry.curve_max,
            geometry.thickness,
        );

        Self {
            input: *input,
            params,
            glyph,
            geometry,
            shape,
        }
    }

    pub fn profile(&self) -> RadialProfile {
        RadialProfile::new(
            self.shape,
            self.geometry.curve_max,
            self.geometry.keepout,
            self.geometry.thickness,
        )
    }

    /// Sample points of wave `w` (`WAVE_DETAIL + 1` points, one full turn)
    pub fn wave_points(&self, profile: &RadialProfile, w: u32) -> Vec<(f64, f64)> {
        let geo = &self.geometry;
        let offset = w as f64 * TAU / self.params.n_waves as f64;
        let f1 = self.shape.f1 as f64;
        let freq2 = self.params.freq2 as f64;

        (0..=WAVE_DETAIL)
            .map(|j| {
                let t = j as f64 / WAVE_DETAIL as f64 * TAU;
                let rho = profile.radius_at(f1 * t + freq2 * offset);
                let phi = t + offset;
                (geo.cx + rho * phi.cos(), geo.cy + rho * phi.sin())
            })
            .collect()
    }
}

fn background(geo: &Geometry) -> Primitive {
    Primitive::Rect {
        x: 0.0,
        y: 0.0,
        width: geo.size,
        height: geo.size,
        paint: Paint::filled(BACKGROUND_COLOR),
    }
}

/// Diagnostic guide lines: all vertical, then all horizontal
fn grid(geo: &Geometry) -> Vec<Primitive> {
    let stroke = Stroke::new(GRID_COLOR, geo.thickness).with_opacity(GRID_OPACITY);
    let step = geo.size / (GRID_LINES + 1) as f64;
    let positions: Vec<f64> = (1..=GRID_LINES).map(|k| k as f64 * step).collect();

    let vertical = positions
        .iter()
        .map(|&x| Primitive::line((x, 0.0), (x, geo.size), stroke));
    let horizontal = positions
        .iter()
        .map(|&y| Primitive::line((0.0, y), (geo.size, y), stroke));

    vertical.chain(horizontal).collect()
}

fn border(geo: &Geometry) -> Primitive {
    Primitive::Rect {
        x: geo.border_origin,
        y: geo.border_origin,
        width: geo.border_side,
        height: geo.border_side,
        paint: Paint::outlined(Stroke::new(INK_COLOR, geo.border_stroke)),
    }
}

/// Background and border
const FRAME_PRIMITIVES: usize = 2;

/// Upper bound of `n_waves`
const MAX_WAVES: usize = 5;

/// Upper bound of a full composition (grid on, every marker set, rings glyph)
const MAX_PRIMITIVES: usize =
    FRAME_PRIMITIVES + 2 * GRID_LINES + MAX_WAVES + MARKER_SLOTS + RING_SCALES.len();

/// Compose the ordered primitive list for a plan
pub fn compose_plan(plan: &Plan, show_grid: bool) -> Vec<Primitive> {
    let geo = &plan.geometry;
    let profile = plan.profile();
    let mut primitives = Vec::with_capacity(MAX_PRIMITIVES);

    primitives.push(background(geo));
    if show_grid {
        primitives.extend(grid(geo));
    }
    primitives.push(border(geo));

    let wave_paint = Paint::outlined(Stroke::new(INK_COLOR, geo.thickness));
    for w in 0..plan.params.n_waves {
        primitives.push(Primitive::Path {
            points: plan.wave_points(&profile, w),
            closed: false,
            paint: wave_paint,
        });
    }

    primitives.extend(place_markers(&plan.input, geo));
    primitives.extend(render_glyph(plan.glyph, plan.params.center_hollow, geo));

    debug!(
        n_waves = plan.params.n_waves,
        glyph = %plan.glyph,
        primitives = primitives.len(),
        "composed fingerprint"
    );

    primitives
}

/// Compose the ordered primitive list for an input
pub fn compose(input: &HashInput, size: f64, show_grid: bool) -> Vec<Primitive> {
    compose_plan(&Plan::new(input, size), show_grid)
}
