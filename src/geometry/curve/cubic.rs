use std::fmt;

use crate::geometry::{MarkedPoint, PointKind, PropertyTable};
use crate::math::clip::clip_in_place;
use crate::math::polynomial;
use crate::math::{Point2, SampleDomain, CLIP_LIMIT, LEADING_COEFF_TOLERANCE};
use crate::tessellation::CurveSamples;

use super::{Analyze, Curve};

/// A cubic `y = a x^3 + b x^2 + c x + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

/// Kind of stationary point, decided by the sign of `f''`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    LocalMaximum,
    LocalMinimum,
    /// `f''` vanishes too (e.g. `x^3` at the origin).
    Stationary,
}

/// A zero of `f'` together with the curve value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriticalPoint {
    pub position: Point2,
    pub kind: Extremum,
}

impl Cubic {
    /// Creates the cubic `y = a x^3 + b x^2 + c x + d`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns `[a, b, c, d]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluates the cubic at `x`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        polynomial::evaluate_at(&self.coefficients(), x)
    }

    /// `f'(x) = 3a x^2 + 2b x + c` as `(3a, 2b, c)`.
    #[must_use]
    pub fn derivative_coeffs(&self) -> (f64, f64, f64) {
        (3.0 * self.a, 2.0 * self.b, self.c)
    }

    /// `f''(x) = 6a x + 2b` as `(6a, 2b)`.
    #[must_use]
    pub fn second_derivative_coeffs(&self) -> (f64, f64) {
        (6.0 * self.a, 2.0 * self.b)
    }

    /// Zeros of `f'` inside `range`, ascending, with their classification.
    #[must_use]
    pub fn critical_points(&self, range: SampleDomain) -> Vec<CriticalPoint> {
        let (s2, s1) = self.second_derivative_coeffs();
        polynomial::critical_points(&self.coefficients(), range)
            .into_iter()
            .map(|x| {
                let curvature = s2 * x + s1;
                let kind = if curvature.abs() < LEADING_COEFF_TOLERANCE {
                    Extremum::Stationary
                } else if curvature < 0.0 {
                    Extremum::LocalMaximum
                } else {
                    Extremum::LocalMinimum
                };
                CriticalPoint {
                    position: Point2::new(x, self.value_at(x)),
                    kind,
                }
            })
            .collect()
    }

    /// The unique zero of `f''`, `x = -b / 3a`.
    ///
    /// Returns `None` when `a ≈ 0` (the curve is at most quadratic).
    #[must_use]
    pub fn inflection(&self) -> Option<Point2> {
        if self.a.abs() < LEADING_COEFF_TOLERANCE {
            tracing::debug!(a = self.a, "cubic collapsed, no inflection point");
            return None;
        }
        let x = -self.b / (3.0 * self.a);
        Some(Point2::new(x, self.value_at(x)))
    }

    /// Samples `f'` over `range` with `count` points, clipped to `±1e6`.
    #[must_use]
    pub fn derivative_samples(&self, range: SampleDomain, count: usize) -> CurveSamples {
        let (da, db, dc) = self.derivative_coeffs();
        let xs = crate::math::sample(range.x_min, range.x_max, count);
        let mut ys = polynomial::evaluate(&[da, db, dc], &xs);
        clip_in_place(&mut ys, CLIP_LIMIT);
        CurveSamples::new(xs, ys)
    }
}

impl Curve for Cubic {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(t, self.value_at(t))
    }
}

impl Analyze for Cubic {
    fn property_table(&self, range: SampleDomain) -> PropertyTable {
        let (da, db, dc) = self.derivative_coeffs();
        let (s2, s1) = self.second_derivative_coeffs();
        let critical = self.critical_points(range);
        PropertyTable::new()
            .with("first_derivative", vec![da, db, dc])
            .with("second_derivative", vec![s2, s1])
            .with(
                "critical_x",
                critical.iter().map(|cp| cp.position.x).collect::<Vec<_>>(),
            )
            .with(
                "critical_y",
                critical.iter().map(|cp| cp.position.y).collect::<Vec<_>>(),
            )
            .with("inflection_x", self.inflection().map(|p| p.x))
            .with("inflection_y", self.inflection().map(|p| p.y))
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        let mut points: Vec<MarkedPoint> = self
            .critical_points(range)
            .into_iter()
            .map(|cp| {
                let (x, y) = (cp.position.x, cp.position.y);
                MarkedPoint::new(x, y, format!("Crit ({x:.2},{y:.2})"), PointKind::Critical)
            })
            .collect();
        if let Some(p) = self.inflection().filter(|p| range.contains(p.x)) {
            points.push(MarkedPoint::new(
                p.x,
                p.y,
                format!("Infl ({:.2},{:.2})", p.x, p.y),
                PointKind::Inflection,
            ));
        }
        points
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "y = {:.2}x³ + {:.2}x² + {:.2}x + {:.2}",
            self.a, self.b, self.c, self.d
        )
    }
}
