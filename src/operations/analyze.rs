use crate::geometry::{Analyze, Curve, MarkedPoint, PropertyTable, ReferenceLine};
use crate::math::SampleDomain;
use crate::tessellation::{CurveSamples, SampleCurve, SamplingParams};

/// Everything a renderer needs to draw one curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveReport {
    /// Sampled coordinates, already clipped.
    pub samples: CurveSamples,
    /// Analytic properties for display.
    pub properties: PropertyTable,
    /// Notable points to annotate.
    pub markers: Vec<MarkedPoint>,
    /// Reference lines to draw behind the curve.
    pub guides: Vec<ReferenceLine>,
}

/// Runs a full analysis of a curve over an x range.
///
/// This is the single recomputation performed per parameter change: the
/// curve is sampled, its properties are extracted and its annotations are
/// collected, all against the same guarded range.
pub struct AnalyzeCurve<'a, C: Curve + Analyze + ?Sized> {
    curve: &'a C,
    range: SampleDomain,
    params: SamplingParams,
}

impl<'a, C: Curve + Analyze + ?Sized> AnalyzeCurve<'a, C> {
    /// Creates a new `AnalyzeCurve` operation over `[-10, 10]`.
    #[must_use]
    pub fn new(curve: &'a C) -> Self {
        Self {
            curve,
            range: SampleDomain::new(-10.0, 10.0),
            params: SamplingParams::default(),
        }
    }

    /// Sets the x range.
    #[must_use]
    pub fn with_range(mut self, x_min: f64, x_max: f64) -> Self {
        self.range = SampleDomain::new(x_min, x_max);
        self
    }

    /// Sets custom sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: SamplingParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the analysis.
    #[must_use]
    pub fn execute(&self) -> CurveReport {
        let range = self.range.guarded();
        let samples = SampleCurve::new(self.curve)
            .with_range(range.x_min, range.x_max)
            .with_params(self.params)
            .execute();

        CurveReport {
            samples,
            properties: self.curve.property_table(range),
            markers: self.curve.marked_points(range),
            guides: self.curve.guides(range),
        }
    }
}
