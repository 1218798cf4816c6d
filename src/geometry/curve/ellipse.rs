use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{GeometryError, Result};
use crate::geometry::{MarkedPoint, PointKind, PropertyTable, ReferenceLine};
use crate::math::{Point2, SampleDomain, ELLIPSE_AXIS_TOLERANCE, FOCUS_TOLERANCE};

use super::{Analyze, Curve, CurveDomain};

/// An axis-aligned ellipse `x^2/a^2 + y^2/b^2 = 1` centred at the origin.
///
/// Parametrized as `P(t) = (a cos t, b sin t)` for `t` in `[0, 2π]`.
/// Either semi-axis may be zero or negative: the curve still samples, but
/// [`Ellipse::properties`] reports the degeneracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    a: f64,
    b: f64,
}

/// Coordinate axis carrying the major axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorAxis {
    X,
    Y,
}

impl fmt::Display for MajorAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x-axis",
            Self::Y => "y-axis",
        })
    }
}

/// Geometry of a non-degenerate ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipseProperties {
    pub semi_major: f64,
    pub semi_minor: f64,
    pub area: f64,
    pub eccentricity: f64,
    /// `c = sqrt(max(a^2 - b^2, 0))`, zero unless the x semi-axis is the
    /// longer one.
    pub focal_distance: f64,
    pub major_axis_length: f64,
    pub minor_axis_length: f64,
    pub major_axis_along: MajorAxis,
}

impl Ellipse {
    /// Creates the ellipse with semi-axis `a` along x and `b` along y.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Returns the x semi-axis parameter.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the y semi-axis parameter.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Computes the ellipse geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if either semi-axis has
    /// magnitude below `1e-9`.
    pub fn properties(&self) -> Result<EllipseProperties> {
        let (a, b) = (self.a.abs(), self.b.abs());
        if a < ELLIPSE_AXIS_TOLERANCE || b < ELLIPSE_AXIS_TOLERANCE {
            tracing::debug!(a = self.a, b = self.b, "degenerate ellipse");
            return Err(GeometryError::Degenerate("semi-axes must be non-zero".into()).into());
        }

        let major = a.max(b);
        let minor = a.min(b);
        Ok(EllipseProperties {
            semi_major: major,
            semi_minor: minor,
            area: PI * a * b,
            eccentricity: (1.0 - (minor / major).powi(2)).sqrt(),
            focal_distance: (a * a - b * b).max(0.0).sqrt(),
            major_axis_length: 2.0 * major,
            minor_axis_length: 2.0 * minor,
            major_axis_along: if a >= b { MajorAxis::X } else { MajorAxis::Y },
        })
    }

    /// Returns whether the two semi-axes agree within `1e-6`.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        (self.a.abs() - self.b.abs()).abs() < FOCUS_TOLERANCE
    }

    /// The foci `(±c, 0)` on the x-axis, or an empty list when `c` vanishes
    /// (a circle, a tall ellipse, or a degenerate one).
    #[must_use]
    pub fn foci(&self) -> Vec<Point2> {
        let Ok(p) = self.properties() else {
            return Vec::new();
        };
        let c = p.focal_distance;
        if c <= FOCUS_TOLERANCE {
            return Vec::new();
        }
        vec![Point2::new(c, 0.0), Point2::new(-c, 0.0)]
    }

    /// Axis endpoints `(a, 0)`, `(-a, 0)`, `(0, b)`, `(0, -b)`.
    #[must_use]
    pub fn vertices(&self) -> [Point2; 4] {
        [
            Point2::new(self.a, 0.0),
            Point2::new(-self.a, 0.0),
            Point2::new(0.0, self.b),
            Point2::new(0.0, -self.b),
        ]
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(self.a * t.cos(), self.b * t.sin())
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn default_sample_count(&self) -> usize {
        800
    }
}

impl Analyze for Ellipse {
    fn property_table(&self, _range: SampleDomain) -> PropertyTable {
        match self.properties() {
            Ok(p) => PropertyTable::new()
                .with("semi_major", p.semi_major)
                .with("semi_minor", p.semi_minor)
                .with("area", p.area)
                .with("eccentricity", p.eccentricity)
                .with("focal_distance", p.focal_distance)
                .with("major_axis_length", p.major_axis_length)
                .with("minor_axis_length", p.minor_axis_length)
                .with("major_axis_along", p.major_axis_along.to_string())
                .with("is_circle", self.is_circle()),
            Err(err) => PropertyTable::error(err.to_string()),
        }
    }

    fn marked_points(&self, _range: SampleDomain) -> Vec<MarkedPoint> {
        if self.properties().is_err() {
            return Vec::new();
        }
        let labels = ["A(a,0)", "A'(-a,0)", "B(0,b)", "B'(0,-b)"];
        let mut points: Vec<MarkedPoint> = self
            .vertices()
            .iter()
            .zip(labels)
            .map(|(v, label)| MarkedPoint::new(v.x, v.y, label, PointKind::Vertex))
            .collect();
        points.extend(self.foci().into_iter().map(|f| {
            MarkedPoint::new(
                f.x,
                f.y,
                format!("Focus ({:.2},{:.2})", f.x, f.y),
                PointKind::Focus,
            )
        }));
        points
    }

    fn guides(&self, _range: SampleDomain) -> Vec<ReferenceLine> {
        let (ea, eb) = (self.a.abs() * 1.1, self.b.abs() * 1.1);
        vec![
            ReferenceLine::horizontal(0.0, "x axis").with_extent(-ea, ea),
            ReferenceLine::vertical(0.0, "y axis").with_extent(-eb, eb),
        ]
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x²/{:.2}² + y²/{:.2}² = 1", self.a, self.b)
    }
}
