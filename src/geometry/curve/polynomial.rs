use std::fmt;

use crate::error::{ParameterError, Result};
use crate::geometry::{MarkedPoint, PointKind, PropertyTable};
use crate::math::polynomial;
use crate::math::{Point2, SampleDomain, LEADING_COEFF_TOLERANCE};

use super::{Analyze, Curve};

/// A general polynomial of degree 1 to 6, coefficients highest degree first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

/// Limit of `p(x)` as `x` runs off one end of the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    PositiveInfinity,
    NegativeInfinity,
    /// Every coefficient is zero.
    Flat,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PositiveInfinity => "→ +∞",
            Self::NegativeInfinity => "→ −∞",
            Self::Flat => "→ 0",
        })
    }
}

/// Behaviour at both ends of the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndBehavior {
    /// As `x → +∞`.
    pub right: Limit,
    /// As `x → −∞`.
    pub left: Limit,
}

impl Polynomial {
    /// Smallest accepted degree.
    pub const MIN_DEGREE: usize = 1;
    /// Largest accepted degree.
    pub const MAX_DEGREE: usize = 6;

    /// Creates a polynomial from `[a_n, ..., a_0]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is empty or its degree
    /// (`len - 1`) falls outside `1..=6`.
    pub fn new(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            return Err(ParameterError::EmptyCoefficients.into());
        }
        let degree = coeffs.len() - 1;
        if !(Self::MIN_DEGREE..=Self::MAX_DEGREE).contains(&degree) {
            return Err(ParameterError::DegreeOutOfRange {
                degree,
                min: Self::MIN_DEGREE,
                max: Self::MAX_DEGREE,
            }
            .into());
        }
        Ok(Self { coeffs })
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Nominal degree, `len - 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficient of the highest nominal power.
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[0]
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        polynomial::evaluate_at(&self.coeffs, x)
    }

    /// All real roots, ascending.
    #[must_use]
    pub fn real_roots(&self) -> Vec<f64> {
        polynomial::real_roots(&self.coeffs)
    }

    /// Number of real roots, counted with multiplicity.
    #[must_use]
    pub fn real_root_count(&self) -> usize {
        self.real_roots().len()
    }

    /// Real roots inside `range`, ascending.
    #[must_use]
    pub fn roots_in_range(&self, range: SampleDomain) -> Vec<f64> {
        self.real_roots()
            .into_iter()
            .filter(|&r| range.contains(r))
            .collect()
    }

    /// End behaviour from the sign of the leading coefficient.
    ///
    /// Leading coefficients below `1e-12` are skipped, so a nominal quartic
    /// with `a_4 = 0` behaves like the cubic it really is.
    #[must_use]
    pub fn end_behavior(&self) -> EndBehavior {
        let n = self.degree();
        let effective = self
            .coeffs
            .iter()
            .enumerate()
            .find(|(_, c)| c.abs() >= LEADING_COEFF_TOLERANCE);
        let Some((i, &lead)) = effective else {
            return EndBehavior {
                right: Limit::Flat,
                left: Limit::Flat,
            };
        };
        if i > 0 {
            tracing::debug!(nominal = n, effective = n - i, "polynomial degree collapsed");
        }

        let right = if lead > 0.0 {
            Limit::PositiveInfinity
        } else {
            Limit::NegativeInfinity
        };
        let even = (n - i) % 2 == 0;
        let left = match (right, even) {
            (r, true) => r,
            (Limit::PositiveInfinity, false) => Limit::NegativeInfinity,
            (_, false) => Limit::PositiveInfinity,
        };
        EndBehavior { right, left }
    }

    /// `(power, coefficient)` pairs, highest power first.
    #[must_use]
    pub fn coefficient_table(&self) -> Vec<(usize, f64)> {
        let n = self.degree();
        self.coeffs
            .iter()
            .enumerate()
            .map(|(i, &c)| (n - i, c))
            .collect()
    }
}

impl Curve for Polynomial {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(t, self.value_at(t))
    }

    fn default_sample_count(&self) -> usize {
        1200
    }
}

impl Analyze for Polynomial {
    #[allow(clippy::cast_precision_loss)]
    fn property_table(&self, range: SampleDomain) -> PropertyTable {
        // Row names must be 'static, so powers index a fixed set.
        const NAMES: [&str; 7] = ["x^0", "x^1", "x^2", "x^3", "x^4", "x^5", "x^6"];
        let ends = self.end_behavior();
        let mut table = PropertyTable::new()
            .with("degree", self.degree() as f64)
            .with("leading_coefficient", self.leading_coefficient())
            .with("end_behavior_right", ends.right.to_string())
            .with("end_behavior_left", ends.left.to_string())
            .with("real_roots", self.real_roots())
            .with("roots_in_range", self.roots_in_range(range));
        for (power, c) in self.coefficient_table() {
            table.insert(NAMES[power], c);
        }
        table
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        self.roots_in_range(range)
            .into_iter()
            .map(|r| MarkedPoint::new(r, 0.0, format!("Root ({r:.3})"), PointKind::Root))
            .collect()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.degree();
        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| c.abs() >= LEADING_COEFF_TOLERANCE)
            .map(|(i, c)| match n - i {
                0 => format!("{c:.2}"),
                1 => format!("{c:.2}x"),
                deg => format!("{c:.2}x^{deg}"),
            })
            .collect();
        if terms.is_empty() {
            f.write_str("y = 0")
        } else {
            write!(f, "y = {}", terms.join(" + "))
        }
    }
}
