//! Vector drawing primitives

/// Stroke attributes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    /// Stroke opacity (omitted when `None`)
    pub opacity: Option<f64>,
}

impl Stroke {
    pub fn new(color: &'static str, width: f64) -> Self {
        Self {
            color,
            width,
            opacity: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

/// Fill and stroke attribute set
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Fill color (`None` = unfilled)
    pub fill: Option<&'static str>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    /// Solid fill, no stroke
    pub fn filled(color: &'static str) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Outline only
    pub fn outlined(stroke: Stroke) -> Self {
        Self {
            fill: None,
            stroke: Some(stroke),
        }
    }

    pub fn is_filled(&self) -> bool {
        self.fill.is_some()
    }
}

/// One drawing primitive
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    /// Polyline (open) or polygon (closed)
    Path {
        points: Vec<(f64, f64)>,
        closed: bool,
        paint: Paint,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        paint: Paint,
    },
}

impl Primitive {
    pub fn paint(&self) -> &Paint {
        match self {
            Self::Rect { paint, .. } | Self::Path { paint, .. } | Self::Circle { paint, .. } => {
                paint
            }
        }
    }

    /// Straight line segment as an open two-point path
    pub fn line(from: (f64, f64), to: (f64, f64), stroke: Stroke) -> Self {
        Self::Path {
            points: vec![from, to],
            closed: false,
            paint: Paint::outlined(stroke),
        }
    }
}
