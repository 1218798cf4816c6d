use std::f64::consts::TAU;

use crate::geometry::curve::Trigonometric;
use crate::math::sampling::linspace;
use crate::math::SampleDomain;

use super::{CurveSamples, SampleCurve, SamplingParams};

/// One snapshot of a travelling wave.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseFrame {
    /// Phase offset added to `C` for this frame.
    pub phase: f64,
    /// Curve samples with that offset applied.
    pub samples: CurveSamples,
}

/// Sweeps an extra phase offset over `[0, 2π]` to animate a sinusoid.
///
/// Every frame is sampled through the same evaluation as a still curve,
/// so a zero angular frequency gives flat frames.
pub struct PhaseSweep<'a> {
    wave: &'a Trigonometric,
    range: SampleDomain,
    params: SamplingParams,
    frames: usize,
}

impl<'a> PhaseSweep<'a> {
    /// Default number of frames in one sweep.
    pub const DEFAULT_FRAMES: usize = 60;

    /// Creates a new `PhaseSweep` over `[-2π, 2π]`.
    #[must_use]
    pub fn new(wave: &'a Trigonometric) -> Self {
        Self {
            wave,
            range: SampleDomain::new(-TAU, TAU),
            params: SamplingParams::default(),
            frames: Self::DEFAULT_FRAMES,
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

    /// Sets the number of frames.
    #[must_use]
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    /// Executes the sweep, returning one frame per phase offset.
    #[must_use]
    pub fn execute(&self) -> Vec<PhaseFrame> {
        tracing::trace!(frames = self.frames, "sweeping phase");
        linspace(0.0, TAU, self.frames)
            .into_iter()
            .map(|phase| {
                let shifted = self.wave.with_phase_offset(phase);
                let samples = SampleCurve::new(&shifted)
                    .with_range(self.range.x_min, self.range.x_max)
                    .with_params(self.params)
                    .execute();
                PhaseFrame { phase, samples }
            })
            .collect()
    }
}
