//! Border marker placement
//!
//! Each of the 128 marker slots maps to a distinct position around the
//! border square through `p(i) = (i * 73) mod 128`. Because 73 is odd the
//! mapping is a bijection, so markers never overlap.

use crate::constants::{INK_COLOR, MARKER_SLOTS, MARKER_STRIDE, MARKERS_PER_SIDE};
use crate::domain::geometry::Geometry;
use crate::domain::hash_input::HashInput;
use crate::domain::primitive::{Paint, Primitive};

/// Border side a marker sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }
}

/// Position of slot `i` on the border
#[inline]
pub fn slot_position(i: usize) -> usize {
    (i * MARKER_STRIDE) % MARKER_SLOTS
}

/// Side and fractional offset of a border position
pub fn side_and_fraction(position: usize) -> (Side, f64) {
    let side = Side::from_index(position / MARKERS_PER_SIDE);
    let frac = (position % MARKERS_PER_SIDE) as f64 / MARKERS_PER_SIDE as f64;
    (side, frac)
}

/// Marker rectangle for a border position
///
/// Offsets run clockwise: top left to right, right top to bottom,
/// bottom right to left, left bottom to top.
pub fn marker_rect(position: usize, geo: &Geometry) -> Primitive {
    let (side, frac) = side_and_fraction(position);
    let b0 = geo.border_origin;
    let b1 = geo.border_origin + geo.border_side;
    let offset = (frac + 0.5 / MARKERS_PER_SIDE as f64) * geo.border_side;
    let (w, len, gap) = (geo.marker_width, geo.marker_length, geo.marker_gap);

    let (x, y, width, height) = match side {
        Side::Top => (b0 + offset - w / 2.0, b0 - gap - len, w, len),
        Side::Right => (b1 + gap, b0 + offset - w / 2.0, len, w),
        Side::Bottom => (b1 - offset - w / 2.0, b1 + gap, w, len),
        Side::Left => (b0 - gap - len, b1 - offset - w / 2.0, len, w),
    };

    Primitive::Rect {
        x,
        y,
        width,
        height,
        paint: Paint::filled(INK_COLOR),
    }
}

/// One marker rectangle per set bit of the first 16 bytes, in slot order
pub fn place_markers(input: &HashInput, geo: &Geometry) -> Vec<Primitive> {
    (0..MARKER_SLOTS)
        .filter(|&i| input.marker_bit(i))
        .map(|i| marker_rect(slot_position(i), geo))
        .collect()
}

/// Number of markers an input produces
pub fn marker_count(input: &HashInput) -> usize {
    input.bytes()[..MARKER_SLOTS / 8]
        .iter()
        .map(|b| b.count_ones() as usize)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HASH_BYTES;
    use crate::domain::glyph::GlyphKind;
    use std::collections::HashSet;

    fn geo() -> Geometry {
        Geometry::new(120.0, GlyphKind::Empty)
    }

    #[test]
    fn test_slot_position_bijection() {
        let positions: HashSet<usize> = (0..MARKER_SLOTS).map(slot_position).collect();
        assert_eq!(positions.len(), MARKER_SLOTS);
        assert!(positions.iter().all(|&p| p < MARKER_SLOTS));
    }

    #[test]
    fn test_side_and_fraction() {
        assert_eq!(side_and_fraction(0), (Side::Top, 0.0));
        assert_eq!(side_and_fraction(33), (Side::Right, 1.0 / 32.0));
        assert_eq!(side_and_fraction(80), (Side::Bottom, 0.5));
        assert_eq!(side_and_fraction(127), (Side::Left, 31.0 / 32.0));
    }

    #[test]
    fn test_markers_outside_border_inside_canvas() {
        let geo = geo();
        let b0 = geo.border_origin;
        let b1 = b0 + geo.border_side;
        for p in 0..MARKER_SLOTS {
            let Primitive::Rect { x, y, width, height, .. } = marker_rect(p, &geo) else {
                panic!("marker should be a rect");
            };
            assert!(x >= 0.0 && y >= 0.0);
            assert!(x + width <= geo.size && y + height <= geo.size);
            let outside = y + height <= b0 || x >= b1 || y >= b1 || x + width <= b0;
            assert!(outside, "marker {} overlaps the border square", p);
        }
    }

    #[test]
    fn test_marker_long_axis_points_outward() {
        let geo = geo();
        for (p, vertical) in [(0, true), (40, false), (70, true), (100, false)] {
            let Primitive::Rect { width, height, .. } = marker_rect(p, &geo) else {
                panic!("marker should be a rect");
            };
            assert_eq!(height > width, vertical, "position {}", p);
        }
    }

    #[test]
    fn test_place_markers_counts_bits() {
        let geo = geo();
        assert!(place_markers(&HashInput::from_bytes([0; HASH_BYTES]), &geo).is_empty());

        let full = HashInput::from_bytes([0xff; HASH_BYTES]);
        assert_eq!(place_markers(&full, &geo).len(), 128);
        assert_eq!(marker_count(&full), 128);

        let mut bytes = [0u8; HASH_BYTES];
        bytes[3] = 0b1010_0001;
        bytes[16] = 0xff; // beyond the marker bytes
        let input = HashInput::from_bytes(bytes);
        assert_eq!(place_markers(&input, &geo).len(), 3);
        assert_eq!(marker_count(&input), 3);
    }
}
