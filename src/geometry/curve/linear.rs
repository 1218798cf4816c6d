use std::fmt;

use crate::geometry::{MarkedPoint, PointKind, PropertyTable};
use crate::math::{Point2, SampleDomain, LEADING_COEFF_TOLERANCE};

use super::{Analyze, Curve};

/// A straight line `y = m x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    slope: f64,
    intercept: f64,
}

/// Whether the line rises, falls or stays flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
    Horizontal,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Horizontal => "horizontal",
        })
    }
}

/// Analytic properties of a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProperties {
    pub slope: f64,
    pub y_intercept: f64,
    /// `-c / m`, or `None` for a horizontal line.
    pub x_intercept: Option<f64>,
    pub parallel_to_x: bool,
    pub direction: Direction,
}

impl Linear {
    /// Creates the line `y = slope * x + intercept`.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the slope `m`.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the y-intercept `c`.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates `m x + c`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Returns the sign of the slope as a direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        if self.slope > 0.0 {
            Direction::Increasing
        } else if self.slope < 0.0 {
            Direction::Decreasing
        } else {
            Direction::Horizontal
        }
    }

    /// Computes slope, intercepts and orientation.
    #[must_use]
    pub fn properties(&self) -> LinearProperties {
        let parallel_to_x = self.slope.abs() < LEADING_COEFF_TOLERANCE;
        if parallel_to_x {
            tracing::debug!(slope = self.slope, "horizontal line, no x-intercept");
        }
        LinearProperties {
            slope: self.slope,
            y_intercept: self.intercept,
            x_intercept: (!parallel_to_x).then(|| -self.intercept / self.slope),
            parallel_to_x,
            direction: self.direction(),
        }
    }
}

impl Curve for Linear {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(t, self.value_at(t))
    }
}

impl Analyze for Linear {
    fn property_table(&self, _range: SampleDomain) -> PropertyTable {
        let p = self.properties();
        PropertyTable::new()
            .with("slope", p.slope)
            .with("y_intercept", p.y_intercept)
            .with("x_intercept", p.x_intercept)
            .with("parallel_to_x", p.parallel_to_x)
            .with("direction", p.direction.to_string())
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        let p = self.properties();
        let mut points = vec![MarkedPoint::new(
            0.0,
            p.y_intercept,
            format!("y-int ({:.2})", p.y_intercept),
            PointKind::Intercept,
        )];
        if let Some(xi) = p.x_intercept.filter(|&xi| range.contains(xi)) {
            points.push(MarkedPoint::new(
                xi,
                0.0,
                format!("x-int ({xi:.2})"),
                PointKind::Root,
            ));
        }
        points
    }
}

impl fmt::Display for Linear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.intercept >= 0.0 {
            write!(f, "y = {:.2}x + {:.2}", self.slope, self.intercept)
        } else {
            write!(f, "y = {:.2}x - {:.2}", self.slope, self.intercept.abs())
        }
    }
}
