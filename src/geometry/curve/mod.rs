mod cubic;
mod ellipse;
mod family;
mod linear;
mod polynomial;
mod quadratic;
mod trigonometric;

pub use cubic::{CriticalPoint, Cubic, Extremum};
pub use ellipse::{Ellipse, EllipseProperties, MajorAxis};
pub use family::{CurveFamily, FamilyKind};
pub use linear::{Direction, Linear, LinearProperties};
pub use polynomial::{EndBehavior, Limit, Polynomial};
pub use quadratic::{Opening, Quadratic, QuadraticProperties, RootNature};
pub use trigonometric::{TrigFunction, TrigProperties, Trigonometric};

use crate::geometry::{MarkedPoint, PropertyTable, ReferenceLine};
use crate::math::{Point2, SampleDomain};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The whole real line, used by explicit functions `y = f(x)`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Returns whether both ends are finite.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.t_min.is_finite() && self.t_max.is_finite()
    }
}

/// A plane curve that can be sampled.
///
/// Explicit functions are parametrized by `x` itself, so `evaluate(x)`
/// returns `(x, f(x))` and the domain is unbounded. Parametric curves
/// report their own bounded parameter domain.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain {
        CurveDomain::unbounded()
    }

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool {
        false
    }

    /// Number of samples used when the caller does not choose one.
    fn default_sample_count(&self) -> usize {
        1000
    }
}

/// Analytic properties and plot annotations of a curve.
pub trait Analyze {
    /// Returns the property table for display.
    ///
    /// `range` only matters for properties that are searched for inside
    /// the visible domain (critical points, roots in range).
    fn property_table(&self, range: SampleDomain) -> PropertyTable;

    /// Returns the notable points that fall inside `range`.
    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint>;

    /// Returns guide lines relevant inside `range`.
    fn guides(&self, _range: SampleDomain) -> Vec<ReferenceLine> {
        Vec::new()
    }
}
