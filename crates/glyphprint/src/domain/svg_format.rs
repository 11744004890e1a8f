//! SVG document format
//!
//! Serializes primitives one per line. All numbers are rounded to two
//! decimal places (half away from zero) and printed in shortest form.

use crate::domain::primitive::{Paint, Primitive};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Magnitude from which an f64 carries no fractional digits worth rounding
const ROUND_EXACT_LIMIT: f64 = 1e15;

/// Round to two decimal places
///
/// Large magnitudes are returned unchanged so `v * 100` cannot overflow.
#[inline]
pub fn round2(v: f64) -> f64 {
    if v.abs() >= ROUND_EXACT_LIMIT {
        return v;
    }
    (v * 100.0).round() / 100.0
}

/// Format a number rounded to two decimal places (`60`, `12.5`, `0.63`)
pub fn fmt_num(v: f64) -> String {
    let r = round2(v);
    if r == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", r)
}

fn write_paint(out: &mut String, paint: &Paint) {
    let _ = write!(out, " fill=\"{}\"", paint.fill.unwrap_or("none"));
    if let Some(stroke) = paint.stroke {
        let _ = write!(
            out,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color,
            fmt_num(stroke.width)
        );
        if let Some(opacity) = stroke.opacity {
            let _ = write!(out, " stroke-opacity=\"{}\"", fmt_num(opacity));
        }
    }
}

fn write_points(out: &mut String, points: &[(f64, f64)]) {
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", fmt_num(*x), fmt_num(*y));
    }
}

/// Append one primitive as a single SVG element (no trailing newline)
pub fn write_primitive(out: &mut String, primitive: &Primitive) {
    match primitive {
        Primitive::Rect {
            x,
            y,
            width,
            height,
            paint,
        } => {
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(*width),
                fmt_num(*height)
            );
            write_paint(out, paint);
        }
        Primitive::Path {
            points,
            closed,
            paint,
        } => {
            out.push_str(if *closed { "<polygon points=\"" } else { "<polyline points=\"" });
            write_points(out, points);
            out.push('"');
            write_paint(out, paint);
        }
        Primitive::Circle { cx, cy, r, paint } => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r)
            );
            write_paint(out, paint);
        }
    }
    out.push_str("/>");
}

/// Serialize a full `size x size` document
pub fn to_svg(size: f64, primitives: &[Primitive]) -> String {
    let s = fmt_num(size);
    let mut out = String::with_capacity(4096 + primitives.len() * 64);

    let _ = writeln!(
        out,
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        SVG_NS, s, s, s, s
    );
    for primitive in primitives {
        write_primitive(&mut out, primitive);
        out.push('\n');
    }
    out.push_str("</svg>");

    out
}
