//! Fingerprint generation constants
//!
//! Note: every value here feeds the rendered geometry. Changing any of them
//! changes the fingerprint of every input.

// =============================================================================
// Input parameters
// =============================================================================

/// Number of hex characters in a valid input
pub const HASH_HEX_LEN: usize = 64;

/// Number of bytes in a decoded input
pub const HASH_BYTES: usize = HASH_HEX_LEN / 2;

/// Initial accumulator of the windowed segment hash
pub const SEGMENT_SEED: u32 = 5381;

/// Multiplier of the windowed segment hash
pub const SEGMENT_MULTIPLIER: u32 = 33;

// =============================================================================
// Canvas defaults
// =============================================================================

/// Default canvas size in pixels
pub const DEFAULT_SIZE: f64 = 120.0;

/// Stroke thickness (fixed, independent of canvas size)
pub const THICKNESS: f64 = 0.7;

/// Border stroke relative to `THICKNESS`
pub const BORDER_STROKE_SCALE: f64 = 0.9;

/// Border square side relative to canvas size (8% margin on each side)
pub const BORDER_FRACTION: f64 = 0.84;

/// Curve bound relative to the max radius
pub const CURVE_FRACTION: f64 = 0.9;

/// Keepout cap relative to the curve bound
pub const KEEPOUT_CAP_FRACTION: f64 = 0.4;

// =============================================================================
// Markers
// =============================================================================

/// Number of marker slots (one per bit of the first 16 bytes)
pub const MARKER_SLOTS: usize = 128;

/// Slots per border side
pub const MARKERS_PER_SIDE: usize = MARKER_SLOTS / 4;

/// Slot permutation multiplier (coprime with `MARKER_SLOTS`)
pub const MARKER_STRIDE: usize = 73;

/// Marker length (outward axis) relative to canvas size
pub const MARKER_LENGTH_FRACTION: f64 = 0.035;

/// Marker width (along the side) relative to canvas size
pub const MARKER_WIDTH_FRACTION: f64 = 0.012;

/// Gap between border and marker relative to canvas size
pub const MARKER_GAP_FRACTION: f64 = 0.008;

// =============================================================================
// Waves
// =============================================================================

/// Segments per wave polyline (detail + 1 points)
pub const WAVE_DETAIL: usize = 720;

/// Angles sampled per tuning iteration
pub const TUNE_SAMPLES: usize = 64;

/// Maximum number of tuning iterations
pub const TUNE_ITERATIONS: usize = 3;

/// Initial shape exponent
pub const GAMMA_START: f64 = 1.35;

/// Shape exponent increment of the second tuning step
pub const GAMMA_STEP: f64 = 0.2;

/// Shape exponent ceiling
pub const GAMMA_MAX: f64 = 1.7;

/// Amplitude scale ceiling
pub const AMP_SCALE_MAX: f64 = 1.25;

/// Frequency floor
pub const F1_MIN: u32 = 3;

// =============================================================================
// Center glyph
// =============================================================================

/// Glyph radius relative to the keepout radius
pub const CENTER_R_SCALE: f64 = 0.75;

/// Star inner radius relative to the glyph radius
pub const STAR_INNER_SCALE: f64 = 0.4;

/// Concentric ring radii relative to the glyph radius
pub const RING_SCALES: [f64; 3] = [0.4, 0.7, 1.0];

/// Ring stroke relative to `THICKNESS`
pub const RING_STROKE_SCALE: f64 = 0.8;

// =============================================================================
// Diagnostic grid
// =============================================================================

/// Guide lines per axis
pub const GRID_LINES: usize = 10;

/// Guide line opacity
pub const GRID_OPACITY: f64 = 0.2;

// =============================================================================
// Palette
// =============================================================================

pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const INK_COLOR: &str = "#111111";
pub const GRID_COLOR: &str = "#000000";
