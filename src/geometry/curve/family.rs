use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;
use crate::geometry::{MarkedPoint, PropertyTable, ReferenceLine};
use crate::math::{Point2, SampleDomain};

use super::{
    Analyze, Cubic, Curve, CurveDomain, Ellipse, Linear, Polynomial, Quadratic, Trigonometric,
};

/// Names of the supported curve families, as offered by a family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    Linear,
    Quadratic,
    Cubic,
    Polynomial,
    Ellipse,
    Trigonometric,
}

impl FamilyKind {
    /// Every family, in selector order.
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::Quadratic,
        Self::Cubic,
        Self::Polynomial,
        Self::Ellipse,
        Self::Trigonometric,
    ];
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
            Self::Cubic => "cubic",
            Self::Polynomial => "polynomial",
            Self::Ellipse => "ellipse",
            Self::Trigonometric => "trigonometric",
        })
    }
}

impl FromStr for FamilyKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParameterError::UnknownFamily(s.to_owned()))
    }
}

/// Any of the supported curves, for callers that switch family at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveFamily {
    Linear(Linear),
    Quadratic(Quadratic),
    Cubic(Cubic),
    Polynomial(Polynomial),
    Ellipse(Ellipse),
    Trigonometric(Trigonometric),
}

macro_rules! dispatch {
    ($self:expr, $curve:ident => $body:expr) => {
        match $self {
            CurveFamily::Linear($curve) => $body,
            CurveFamily::Quadratic($curve) => $body,
            CurveFamily::Cubic($curve) => $body,
            CurveFamily::Polynomial($curve) => $body,
            CurveFamily::Ellipse($curve) => $body,
            CurveFamily::Trigonometric($curve) => $body,
        }
    };
}

impl CurveFamily {
    /// Returns which family this curve belongs to.
    #[must_use]
    pub fn kind(&self) -> FamilyKind {
        match self {
            Self::Linear(_) => FamilyKind::Linear,
            Self::Quadratic(_) => FamilyKind::Quadratic,
            Self::Cubic(_) => FamilyKind::Cubic,
            Self::Polynomial(_) => FamilyKind::Polynomial,
            Self::Ellipse(_) => FamilyKind::Ellipse,
            Self::Trigonometric(_) => FamilyKind::Trigonometric,
        }
    }
}

impl Curve for CurveFamily {
    fn evaluate(&self, t: f64) -> Point2 {
        dispatch!(self, c => c.evaluate(t))
    }

    fn domain(&self) -> CurveDomain {
        dispatch!(self, c => c.domain())
    }

    fn is_closed(&self) -> bool {
        dispatch!(self, c => c.is_closed())
    }

    fn default_sample_count(&self) -> usize {
        dispatch!(self, c => c.default_sample_count())
    }
}

impl Analyze for CurveFamily {
    fn property_table(&self, range: SampleDomain) -> PropertyTable {
        dispatch!(self, c => c.property_table(range))
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        dispatch!(self, c => c.marked_points(range))
    }

    fn guides(&self, range: SampleDomain) -> Vec<ReferenceLine> {
        dispatch!(self, c => c.guides(range))
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for CurveFamily {
                fn from(curve: $variant) -> Self {
                    Self::$variant(curve)
                }
            }
        )*
    };
}

impl_from!(Linear, Quadratic, Cubic, Polynomial, Ellipse, Trigonometric);
