use std::fmt;

use crate::geometry::{MarkedPoint, PointKind, PropertyTable, ReferenceLine};
use crate::math::{Point2, SampleDomain, DISCRIMINANT_TOLERANCE, LEADING_COEFF_TOLERANCE};

use super::{Analyze, Curve};

/// A parabola `y = a x^2 + b x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

/// Classification of the roots of a quadratic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootNature {
    /// `a` and `b` are both zero.
    Constant,
    /// `a` is zero, leaving one linear root.
    Linear,
    /// Positive discriminant.
    TwoReal { discriminant: f64 },
    /// Discriminant within tolerance of zero.
    Repeated,
    /// Negative discriminant; the conjugate pair is `re ± im i`.
    Complex { re: f64, im: f64, discriminant: f64 },
}

impl fmt::Display for RootNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant => f.write_str("Constant (no roots)"),
            Self::Linear => f.write_str("Linear (one root)"),
            Self::TwoReal { discriminant } => {
                write!(f, "Two distinct real roots (D={discriminant:.4})")
            }
            Self::Repeated => f.write_str("One repeated real root (D≈0)"),
            Self::Complex {
                re,
                im,
                discriminant,
            } => write!(
                f,
                "Two complex roots: {re:.3} ± {:.3}i (D={discriminant:.4})",
                im.abs()
            ),
        }
    }
}

/// Which way the parabola opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    Upward,
    Downward,
    /// `a == 0`: the curve is a line.
    Flat,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upward => "upward",
            Self::Downward => "downward",
            Self::Flat => "flat (degenerate)",
        })
    }
}

/// Analytic properties of a quadratic.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticProperties {
    pub discriminant: f64,
    pub nature: RootNature,
    /// Real roots, ascending.
    pub roots: Vec<f64>,
    pub vertex: Point2,
    pub axis_of_symmetry: f64,
    pub opening: Opening,
}

impl Quadratic {
    /// Creates the parabola `y = a x^2 + b x + c`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns `[a, b, c]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluates `a x^2 + b x + c`.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        self.a * x * x + self.b * x + self.c
    }

    /// `D = b^2 - 4ac`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Classifies the roots and returns the real ones in ascending order.
    ///
    /// Degenerate coefficients are checked before the discriminant: with
    /// `a ≈ 0` the equation is linear (or constant when `b ≈ 0` too).
    #[must_use]
    pub fn roots(&self) -> (RootNature, Vec<f64>) {
        let (a, b, c) = (self.a, self.b, self.c);
        if a.abs() < LEADING_COEFF_TOLERANCE {
            if b.abs() < LEADING_COEFF_TOLERANCE {
                tracing::debug!(a, b, "quadratic collapsed to a constant");
                return (RootNature::Constant, Vec::new());
            }
            tracing::debug!(a, "quadratic collapsed to a line");
            return (RootNature::Linear, vec![-c / b]);
        }

        let d = self.discriminant();
        if d > DISCRIMINANT_TOLERANCE {
            let sqrt_d = d.sqrt();
            let r1 = (-b + sqrt_d) / (2.0 * a);
            let r2 = (-b - sqrt_d) / (2.0 * a);
            (
                RootNature::TwoReal { discriminant: d },
                vec![r1.min(r2), r1.max(r2)],
            )
        } else if d.abs() <= DISCRIMINANT_TOLERANCE {
            (RootNature::Repeated, vec![-b / (2.0 * a)])
        } else {
            let nature = RootNature::Complex {
                re: -b / (2.0 * a),
                im: (-d).sqrt() / (2.0 * a),
                discriminant: d,
            };
            (nature, Vec::new())
        }
    }

    /// Vertex `(-b/2a, f(-b/2a))`, or `(0, c)` when `a ≈ 0`.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        if self.a.abs() < LEADING_COEFF_TOLERANCE {
            return Point2::new(0.0, self.c);
        }
        let xv = -self.b / (2.0 * self.a);
        Point2::new(xv, self.value_at(xv))
    }

    /// Vertical line through the vertex.
    #[must_use]
    pub fn axis_of_symmetry(&self) -> f64 {
        self.vertex().x
    }

    /// Sign of the leading coefficient as an opening direction.
    #[must_use]
    pub fn opening(&self) -> Opening {
        if self.a > 0.0 {
            Opening::Upward
        } else if self.a < 0.0 {
            Opening::Downward
        } else {
            Opening::Flat
        }
    }

    /// Computes discriminant, roots, vertex and opening.
    #[must_use]
    pub fn properties(&self) -> QuadraticProperties {
        let (nature, roots) = self.roots();
        let vertex = self.vertex();
        QuadraticProperties {
            discriminant: self.discriminant(),
            nature,
            roots,
            vertex,
            axis_of_symmetry: vertex.x,
            opening: self.opening(),
        }
    }
}

impl Curve for Quadratic {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(t, self.value_at(t))
    }
}

impl Analyze for Quadratic {
    fn property_table(&self, _range: SampleDomain) -> PropertyTable {
        let p = self.properties();
        PropertyTable::new()
            .with("discriminant", p.discriminant)
            .with("nature", p.nature.to_string())
            .with("roots", p.roots)
            .with("vertex", p.vertex)
            .with("axis_of_symmetry", p.axis_of_symmetry)
            .with("opening", p.opening.to_string())
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        let vertex = self.vertex();
        let mut points = vec![MarkedPoint::new(
            vertex.x,
            vertex.y,
            format!("Vertex ({:.2},{:.2})", vertex.x, vertex.y),
            PointKind::Vertex,
        )];
        let (_, roots) = self.roots();
        points.extend(
            roots
                .iter()
                .enumerate()
                .filter(|(_, r)| range.contains(**r))
                .map(|(i, &r)| {
                    MarkedPoint::new(r, 0.0, format!("Root {} ({r:.3})", i + 1), PointKind::Root)
                }),
        );
        points
    }

    fn guides(&self, range: SampleDomain) -> Vec<ReferenceLine> {
        let xv = self.axis_of_symmetry();
        if range.contains(xv) {
            vec![ReferenceLine::vertical(xv, format!("x={xv:.2}"))]
        } else {
            Vec::new()
        }
    }
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = |v: f64| if v >= 0.0 { '+' } else { '-' };
        write!(
            f,
            "y = {:.2}x² {} {:.2}x {} {:.2}",
            self.a,
            sign(self.b),
            self.b.abs(),
            sign(self.c),
            self.c.abs()
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn two_real_roots() {
        let p = Quadratic::new(1.0, 0.0, -4.0).properties();
        assert_abs_diff_eq!(p.discriminant, 16.0);
        assert_eq!(p.roots, vec![-2.0, 2.0]);
        assert_abs_diff_eq!(p.vertex.x, 0.0);
        assert_abs_diff_eq!(p.vertex.y, -4.0);
        assert!(matches!(p.nature, RootNature::TwoReal { .. }));
        assert!(p.nature.to_string().starts_with("Two distinct real roots"));
    }

    #[test]
    fn roots_ascending_for_negative_leading() {
        // -(x - 1)(x - 3) = -x^2 + 4x - 3
        let (_, roots) = Quadratic::new(-1.0, 4.0, -3.0).roots();
        assert_eq!(roots.len(), 2);
        assert_abs_diff_eq!(roots[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(roots[1], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_degeneracy() {
        let (nature, roots) = Quadratic::new(0.0, 2.0, -4.0).roots();
        assert_eq!(nature, RootNature::Linear);
        assert_eq!(nature.to_string(), "Linear (one root)");
        assert_eq!(roots, vec![2.0]);
    }

    #[test]
    fn constant_degeneracy() {
        let (nature, roots) = Quadratic::new(0.0, 0.0, 3.0).roots();
        assert_eq!(nature, RootNature::Constant);
        assert!(roots.is_empty());
    }

    #[test]
    fn repeated_root() {
        // (x - 1)^2
        let (nature, roots) = Quadratic::new(1.0, -2.0, 1.0).roots();
        assert_eq!(nature, RootNature::Repeated);
        assert_eq!(roots, vec![1.0]);
    }

    #[test]
    fn complex_roots_yield_no_real_roots() {
        let (nature, roots) = Quadratic::new(1.0, 2.0, 5.0).roots();
        assert!(roots.is_empty());
        match nature {
            RootNature::Complex { re, im, .. } => {
                assert_abs_diff_eq!(re, -1.0);
                assert_abs_diff_eq!(im, 2.0);
            }
            other => panic!("expected complex roots, got {other:?}"),
        }
    }

    #[test]
    fn vertex_of_flat_curve() {
        let v = Quadratic::new(0.0, 3.0, 7.0).vertex();
        assert_abs_diff_eq!(v.x, 0.0);
        assert_abs_diff_eq!(v.y, 7.0);
        assert_eq!(Quadratic::new(0.0, 3.0, 7.0).opening(), Opening::Flat);
    }

    #[test]
    fn vertex_off_origin() {
        // (x - 3)^2 + 2 = x^2 - 6x + 11
        let v = Quadratic::new(1.0, -6.0, 11.0).vertex();
        assert_abs_diff_eq!(v.x, 3.0);
        assert_abs_diff_eq!(v.y, 2.0);
    }

    #[test]
    fn markers_and_guides() {
        let q = Quadratic::new(1.0, 0.0, -4.0);
        let range = SampleDomain::new(-10.0, 10.0);
        let points = q.marked_points(range);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].kind, PointKind::Vertex);
        assert!(points[1..].iter().all(|p| p.kind == PointKind::Root));
        assert_eq!(q.guides(range).len(), 1);

        let narrow = SampleDomain::new(1.0, 10.0);
        assert_eq!(q.marked_points(narrow).len(), 2);
        assert!(q.guides(narrow).is_empty());
    }

    #[test]
    fn property_table_rows() {
        let table = Quadratic::new(1.0, 0.0, -4.0).property_table(SampleDomain::new(-10.0, 10.0));
        assert_eq!(table.scalar("discriminant"), Some(16.0));
        assert_eq!(
            table.get("roots").and_then(|v| v.as_sequence()),
            Some(&[-2.0, 2.0][..])
        );
    }

    #[test]
    fn display_equation() {
        assert_eq!(
            Quadratic::new(1.0, -2.0, 3.0).to_string(),
            "y = 1.00x² - 2.00x + 3.00"
        );
    }
}
