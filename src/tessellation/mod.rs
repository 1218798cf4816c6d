mod phase_sweep;
mod sample_curve;

pub use phase_sweep::{PhaseFrame, PhaseSweep};
pub use sample_curve::SampleCurve;

use crate::math::CLIP_LIMIT;

/// Parameters controlling how a curve is sampled for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    /// Number of samples; `None` uses the curve's own default.
    pub count: Option<usize>,
    /// Magnitude bound applied to sampled values; `None` disables clipping.
    pub clip_limit: Option<f64>,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            count: None,
            clip_limit: Some(CLIP_LIMIT),
        }
    }
}

/// Paired sample coordinates of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSamples {
    /// Horizontal coordinates.
    pub xs: Vec<f64>,
    /// Vertical coordinates, same length as `xs`.
    pub ys: Vec<f64>,
}

impl CurveSamples {
    /// Pairs two coordinate sequences.
    ///
    /// Both sequences are truncated to the shorter length.
    #[must_use]
    pub fn new(mut xs: Vec<f64>, mut ys: Vec<f64>) -> Self {
        let n = xs.len().min(ys.len());
        xs.truncate(n);
        ys.truncate(n);
        Self { xs, ys }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns whether there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterates `(x, y)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
