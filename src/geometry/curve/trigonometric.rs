use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::ParameterError;
use crate::geometry::{MarkedPoint, PointKind, PropertyTable, ReferenceLine};
use crate::math::{Point2, SampleDomain, LEADING_COEFF_TOLERANCE};

use super::{Analyze, Curve};

/// Which trigonometric function drives the wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrigFunction {
    Sin,
    Cos,
}

impl TrigFunction {
    /// Applies the function.
    #[must_use]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
        }
    }
}

impl FromStr for TrigFunction {
    type Err = ParameterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            other => Err(ParameterError::UnknownTrigFunction(other.to_owned())),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        })
    }
}

/// A sinusoid `y = A f(B x + C)` with `f` either sine or cosine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigonometric {
    function: TrigFunction,
    amplitude: f64,
    angular_frequency: f64,
    phase: f64,
}

/// Analytic properties of a sinusoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrigProperties {
    /// `|A|`.
    pub amplitude: f64,
    /// `B`, or `0` when `|B| < 1e-12`.
    pub angular_frequency: f64,
    /// `2π / |B|`, infinite when `|B| < 1e-12`.
    pub period: f64,
    /// `|B| / 2π`.
    pub frequency: f64,
    /// `-C / B`.
    pub phase_shift: f64,
}

impl Trigonometric {
    /// Creates `y = amplitude * function(angular_frequency * x + phase)`.
    #[must_use]
    pub fn new(function: TrigFunction, amplitude: f64, angular_frequency: f64, phase: f64) -> Self {
        Self {
            function,
            amplitude,
            angular_frequency,
            phase,
        }
    }

    /// Returns the driving function.
    #[must_use]
    pub fn function(&self) -> TrigFunction {
        self.function
    }

    /// Returns the same wave with `offset` added to its phase.
    #[must_use]
    pub fn with_phase_offset(&self, offset: f64) -> Self {
        Self {
            phase: self.phase + offset,
            ..*self
        }
    }

    /// Evaluates the wave at `x`.
    ///
    /// With `B` exactly zero the curve is identically zero, not `A f(C)`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn value_at(&self, x: f64) -> f64 {
        if self.angular_frequency == 0.0 {
            return 0.0;
        }
        self.amplitude
            * self
                .function
                .apply(self.angular_frequency * x + self.phase)
    }

    /// Computes amplitude, period, frequency and phase shift.
    #[must_use]
    pub fn properties(&self) -> TrigProperties {
        let amplitude = self.amplitude.abs();
        let b = self.angular_frequency;
        if b.abs() < LEADING_COEFF_TOLERANCE {
            tracing::debug!(b, "zero angular frequency, infinite period");
            return TrigProperties {
                amplitude,
                angular_frequency: 0.0,
                period: f64::INFINITY,
                frequency: 0.0,
                phase_shift: 0.0,
            };
        }
        TrigProperties {
            amplitude,
            angular_frequency: b,
            period: TAU / b.abs(),
            frequency: b.abs() / TAU,
            phase_shift: -self.phase / b,
        }
    }

    /// `(-|A|, |A|)`.
    #[must_use]
    pub fn vertical_range(&self) -> (f64, f64) {
        let a = self.amplitude.abs();
        (-a, a)
    }
}

impl Curve for Trigonometric {
    fn evaluate(&self, t: f64) -> Point2 {
        Point2::new(t, self.value_at(t))
    }
}

impl Analyze for Trigonometric {
    fn property_table(&self, _range: SampleDomain) -> PropertyTable {
        let p = self.properties();
        let (low, high) = self.vertical_range();
        PropertyTable::new()
            .with("function", self.function.to_string())
            .with("amplitude", p.amplitude)
            .with("angular_frequency", p.angular_frequency)
            .with("period", p.period)
            .with("frequency", p.frequency)
            .with("phase_shift", p.phase_shift)
            .with("vertical_range", vec![low, high])
    }

    fn marked_points(&self, range: SampleDomain) -> Vec<MarkedPoint> {
        let ps = self.properties().phase_shift;
        if !range.contains(ps) {
            return Vec::new();
        }
        vec![MarkedPoint::new(
            ps,
            self.value_at(ps),
            format!("Phase ({ps:.2})"),
            PointKind::PhaseShift,
        )]
    }

    fn guides(&self, _range: SampleDomain) -> Vec<ReferenceLine> {
        let a = self.amplitude;
        vec![
            ReferenceLine::horizontal(a, format!("Amp +{a:.2}")),
            ReferenceLine::horizontal(-a, format!("Amp −{a:.2}")),
        ]
    }
}

impl fmt::Display for Trigonometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = if self.phase >= 0.0 {
            format!("+{:.2}", self.phase)
        } else {
            format!("{:.2}", self.phase)
        };
        write!(
            f,
            "y = {:.2}·{}({:.2}x {phase})",
            self.amplitude, self.function, self.angular_frequency
        )
    }
}
