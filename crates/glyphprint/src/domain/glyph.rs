//! Center glyph selection and rendering
//!
//! The glyph category is a closed set keyed by the inner accent value.
//! Accent 4 is an explicit empty category: no glyph and no keepout.

use crate::constants::{INK_COLOR, RING_SCALES, RING_STROKE_SCALE, STAR_INNER_SCALE};
use crate::domain::geometry::Geometry;
use crate::domain::primitive::{Paint, Primitive, Stroke};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Center glyph category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlyphKind {
    /// Five-pointed star (accent 0)
    Star,
    /// Equilateral triangle (accent 1)
    Triangle,
    /// Filled circle, hollow flag ignored (accent 2)
    Disc,
    /// Three concentric rings (accent 3)
    Ring,
    /// No glyph (accent 4)
    Empty,
    /// Regular polygon with 4-8 sides (accents 5-9)
    Polygon { sides: u32 },
}

impl GlyphKind {
    /// Every category, one polygon per side count
    pub const ALL: [GlyphKind; 10] = [
        Self::Star,
        Self::Triangle,
        Self::Disc,
        Self::Ring,
        Self::Empty,
        Self::Polygon { sides: 4 },
        Self::Polygon { sides: 5 },
        Self::Polygon { sides: 6 },
        Self::Polygon { sides: 7 },
        Self::Polygon { sides: 8 },
    ];

    /// Select the category for an inner accent value (taken mod 10)
    pub fn from_accent(accent: u32) -> Self {
        match accent % 10 {
            0 => Self::Star,
            1 => Self::Triangle,
            2 => Self::Disc,
            3 => Self::Ring,
            4 => Self::Empty,
            n => Self::Polygon { sides: n - 1 },
        }
    }

    /// Keepout radius relative to canvas size (before the cap)
    pub fn keepout_fraction(self) -> f64 {
        match self {
            Self::Star => 0.16,
            Self::Triangle => 0.15,
            Self::Disc => 0.12,
            Self::Ring => 0.14,
            Self::Empty => 0.0,
            Self::Polygon { .. } => 0.13,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Disc => "disc",
            Self::Ring => "ring",
            Self::Empty => "empty",
            Self::Polygon { .. } => "polygon",
        }
    }
}

impl std::fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Polygon { sides } => write!(f, "polygon({})", sides),
            other => f.write_str(other.name()),
        }
    }
}

/// Render the center glyph, if any
pub fn render_glyph(kind: GlyphKind, hollow: bool, geo: &Geometry) -> Vec<Primitive> {
    let r = geo.center_radius();
    if r <= 0.0 {
        return Vec::new();
    }

    let paint = if hollow {
        Paint::outlined(Stroke::new(INK_COLOR, geo.thickness))
    } else {
        Paint::filled(INK_COLOR)
    };

    match kind {
        GlyphKind::Star => {
            let points = (0..10)
                .map(|k| {
                    let radius = if k % 2 == 0 { r } else { r * STAR_INNER_SCALE };
                    vertex(geo, radius, -FRAC_PI_2 + k as f64 * TAU / 10.0)
                })
                .collect();
            vec![polygon(points, paint)]
        }
        GlyphKind::Triangle => vec![polygon(regular_polygon(geo, r, 3), paint)],
        GlyphKind::Disc => vec![Primitive::Circle {
            cx: geo.cx,
            cy: geo.cy,
            r,
            paint: Paint::filled(INK_COLOR),
        }],
        GlyphKind::Ring => RING_SCALES
            .iter()
            .map(|scale| Primitive::Circle {
                cx: geo.cx,
                cy: geo.cy,
                r: r * scale,
                paint: Paint::outlined(Stroke::new(INK_COLOR, geo.thickness * RING_STROKE_SCALE)),
            })
            .collect(),
        GlyphKind::Empty => Vec::new(),
        GlyphKind::Polygon { sides } => vec![polygon(regular_polygon(geo, r, sides), paint)],
    }
}

/// Vertex at `angle` on a circle around the canvas center (y down, so clockwise)
fn vertex(geo: &Geometry, radius: f64, angle: f64) -> (f64, f64) {
    (geo.cx + radius * angle.cos(), geo.cy + radius * angle.sin())
}

/// Regular polygon starting at the top
fn regular_polygon(geo: &Geometry, radius: f64, sides: u32) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|k| vertex(geo, radius, -FRAC_PI_2 + k as f64 * TAU / sides as f64))
        .collect()
}

fn polygon(points: Vec<(f64, f64)>, paint: Paint) -> Primitive {
    Primitive::Path {
        points,
        closed: true,
        paint,
    }
}
