//! Canvas geometry derived from the requested size
//!
//! Everything here scales with the canvas size except the stroke widths,
//! which stay at their fixed values for every size.

use crate::constants::{
    BORDER_FRACTION, BORDER_STROKE_SCALE, CURVE_FRACTION, KEEPOUT_CAP_FRACTION,
    MARKER_GAP_FRACTION, MARKER_LENGTH_FRACTION, MARKER_WIDTH_FRACTION, THICKNESS,
};
use crate::domain::glyph::GlyphKind;

/// Geometry constants for one canvas size and glyph category
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Canvas side in pixels
    pub size: f64,
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Max radius (border half-side)
    pub max_radius: f64,
    /// Outer bound of every wave radius
    pub curve_max: f64,
    /// Inner bound of every wave radius (0 when no glyph is drawn)
    pub keepout: f64,
    /// Border square top-left corner (both axes)
    pub border_origin: f64,
    /// Border square side
    pub border_side: f64,
    /// Marker length along the outward axis
    pub marker_length: f64,
    /// Marker width along the border side
    pub marker_width: f64,
    /// Gap between border and marker
    pub marker_gap: f64,
    /// Stroke thickness
    pub thickness: f64,
    /// Border stroke thickness
    pub border_stroke: f64,
}

impl Geometry {
    pub fn new(size: f64, glyph: GlyphKind) -> Self {
        let max_radius = size * 0.5 * BORDER_FRACTION;
        let curve_max = max_radius * CURVE_FRACTION;
        let border_side = size * BORDER_FRACTION;

        Self {
            size,
            cx: size / 2.0,
            cy: size / 2.0,
            max_radius,
            curve_max,
            keepout: (size * glyph.keepout_fraction()).min(curve_max * KEEPOUT_CAP_FRACTION),
            border_origin: (size - border_side) / 2.0,
            border_side,
            marker_length: size * MARKER_LENGTH_FRACTION,
            marker_width: size * MARKER_WIDTH_FRACTION,
            marker_gap: size * MARKER_GAP_FRACTION,
            thickness: THICKNESS,
            border_stroke: THICKNESS * BORDER_STROKE_SCALE,
        }
    }

    /// Radius of the center glyph (0 when no glyph is drawn)
    pub fn center_radius(&self) -> f64 {
        self.keepout * crate::constants::CENTER_R_SCALE
    }
}
