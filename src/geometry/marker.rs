use std::fmt;

use crate::math::Point2;

/// What a marked point represents on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// A real root / x-intercept.
    Root,
    /// A y-intercept.
    Intercept,
    /// Parabola vertex or ellipse axis endpoint.
    Vertex,
    /// Zero of the first derivative.
    Critical,
    /// Zero of the second derivative.
    Inflection,
    /// Ellipse focus.
    Focus,
    /// Start of a trigonometric period.
    PhaseShift,
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Root => "root",
            Self::Intercept => "intercept",
            Self::Vertex => "vertex",
            Self::Critical => "critical",
            Self::Inflection => "inflection",
            Self::Focus => "focus",
            Self::PhaseShift => "phase shift",
        };
        f.write_str(name)
    }
}

/// A labelled point handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkedPoint {
    /// Coordinates in curve space.
    pub position: Point2,
    /// Human readable label.
    pub label: String,
    /// Category used for styling.
    pub kind: PointKind,
}

impl MarkedPoint {
    /// Creates a new marked point.
    #[must_use]
    pub fn new(x: f64, y: f64, label: impl Into<String>, kind: PointKind) -> Self {
        Self {
            position: Point2::new(x, y),
            label: label.into(),
            kind,
        }
    }
}

/// Orientation of a [`ReferenceLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `y = position`.
    Horizontal,
    /// `x = position`.
    Vertical,
}

/// A straight guide line (axis of symmetry, amplitude bound, ellipse axis).
///
/// `extent` bounds the line along its own direction; `None` spans the
/// whole plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    /// Horizontal or vertical.
    pub orientation: Orientation,
    /// Constant coordinate of the line.
    pub position: f64,
    /// Optional `(from, to)` range along the line.
    pub extent: Option<(f64, f64)>,
    /// Human readable label.
    pub label: String,
}

impl ReferenceLine {
    /// Creates an unbounded horizontal line `y = position`.
    #[must_use]
    pub fn horizontal(position: f64, label: impl Into<String>) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            position,
            extent: None,
            label: label.into(),
        }
    }

    /// Creates an unbounded vertical line `x = position`.
    #[must_use]
    pub fn vertical(position: f64, label: impl Into<String>) -> Self {
        Self {
            orientation: Orientation::Vertical,
            position,
            extent: None,
            label: label.into(),
        }
    }

    /// Restricts the line to `from..=to` along its direction.
    #[must_use]
    pub fn with_extent(mut self, from: f64, to: f64) -> Self {
        self.extent = Some((from, to));
        self
    }
}
