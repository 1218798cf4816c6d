use crate::geometry::Curve;
use crate::math::clip::clip_in_place;
use crate::math::sampling::linspace;
use crate::math::SampleDomain;

use super::{CurveSamples, SamplingParams};

/// Samples a curve into paired coordinate sequences.
///
/// Explicit functions are sampled over the requested x range. Parametric
/// curves with a bounded domain (the ellipse) ignore the range and sweep
/// their own parameter interval.
pub struct SampleCurve<'a, C: Curve + ?Sized> {
    curve: &'a C,
    range: SampleDomain,
    params: SamplingParams,
}

impl<'a, C: Curve + ?Sized> SampleCurve<'a, C> {
    /// Creates a new `SampleCurve` operation over `[-10, 10]`.
    #[must_use]
    pub fn new(curve: &'a C) -> Self {
        Self {
            curve,
            range: SampleDomain::new(-10.0, 10.0),
            params: SamplingParams::default(),
        }
    }

    /// Sets the x range for explicit functions.
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

    /// Executes the sampling.
    ///
    /// Never fails: a collapsed range is widened and out-of-range
    /// magnitudes are clipped.
    #[must_use]
    pub fn execute(&self) -> CurveSamples {
        let count = self
            .params
            .count
            .unwrap_or_else(|| self.curve.default_sample_count());

        let domain = self.curve.domain();
        let params = if domain.is_bounded() {
            linspace(domain.t_min, domain.t_max, count)
        } else {
            let range = self.range.guarded();
            linspace(range.x_min, range.x_max, count)
        };
        tracing::trace!(count, bounded = domain.is_bounded(), "sampling curve");

        let (mut xs, mut ys): (Vec<f64>, Vec<f64>) = params
            .into_iter()
            .map(|t| {
                let p = self.curve.evaluate(t);
                (p.x, p.y)
            })
            .unzip();

        if let Some(limit) = self.params.clip_limit {
            // x stays untouched for explicit functions; it is the parameter.
            if domain.is_bounded() {
                clip_in_place(&mut xs, limit);
            }
            clip_in_place(&mut ys, limit);
        }
        CurveSamples::new(xs, ys)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Cubic, Ellipse, Linear, Polynomial, TrigFunction, Trigonometric};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn samples_explicit_function_over_range() {
        let line = Linear::new(2.0, 1.0);
        let samples = SampleCurve::new(&line).with_range(-1.0, 1.0).execute();
        assert_eq!(samples.len(), 1000);
        assert_abs_diff_eq!(samples.xs[0], -1.0);
        assert_abs_diff_eq!(samples.ys[0], -1.0);
        assert_abs_diff_eq!(*samples.xs.last().unwrap(), 1.0);
        assert_abs_diff_eq!(*samples.ys.last().unwrap(), 3.0);
    }

    #[test]
    fn family_default_counts() {
        let poly = Polynomial::new(vec![1.0, 0.0, 0.0]).unwrap();
        assert_eq!(SampleCurve::new(&poly).execute().len(), 1200);
        assert_eq!(SampleCurve::new(&Ellipse::new(5.0, 3.0)).execute().len(), 800);
    }

    #[test]
    fn custom_count() {
        let line = Linear::new(1.0, 0.0);
        let params = SamplingParams {
            count: Some(17),
            ..SamplingParams::default()
        };
        assert_eq!(SampleCurve::new(&line).with_params(params).execute().len(), 17);
    }

    #[test]
    fn ellipse_ignores_range() {
        let e = Ellipse::new(5.0, 3.0);
        let samples = SampleCurve::new(&e).with_range(100.0, 200.0).execute();
        assert_abs_diff_eq!(samples.xs[0], 5.0);
        assert_abs_diff_eq!(samples.ys[0], 0.0);
        assert!(samples.xs.iter().all(|x| x.abs() <= 5.0 + 1e-12));
        assert!(samples.ys.iter().all(|y| y.abs() <= 3.0 + 1e-12));
    }

    #[test]
    fn large_values_are_clipped() {
        let cubic = Cubic::new(10.0, 0.0, 0.0, 0.0);
        let samples = SampleCurve::new(&cubic).with_range(-1000.0, 1000.0).execute();
        assert_abs_diff_eq!(samples.ys[0], -1e6);
        assert_abs_diff_eq!(*samples.ys.last().unwrap(), 1e6);
        assert_abs_diff_eq!(samples.xs[0], -1000.0);
    }

    #[test]
    fn clipping_can_be_disabled() {
        let cubic = Cubic::new(10.0, 0.0, 0.0, 0.0);
        let params = SamplingParams {
            clip_limit: None,
            ..SamplingParams::default()
        };
        let samples = SampleCurve::new(&cubic)
            .with_range(-1000.0, 1000.0)
            .with_params(params)
            .execute();
        assert_abs_diff_eq!(samples.ys[0], -1e10);
    }

    #[test]
    fn collapsed_range_is_widened() {
        let line = Linear::new(1.0, 0.0);
        let samples = SampleCurve::new(&line).with_range(5.0, 5.0).execute();
        assert_eq!(samples.len(), 1000);
        assert_abs_diff_eq!(samples.xs[0], 5.0);
        assert!(*samples.xs.last().unwrap() > 5.0);
    }

    #[test]
    fn flat_wave_samples_to_zero() {
        let wave = Trigonometric::new(TrigFunction::Sin, 3.0, 0.0, FRAC_PI_2);
        let samples = SampleCurve::new(&wave).execute();
        assert!(samples.ys.iter().all(|&y| y == 0.0));
    }

    #[test]
    fn sampling_is_deterministic() {
        let poly = Polynomial::new(vec![0.5, -1.0, 2.0, 3.0]).unwrap();
        let a = SampleCurve::new(&poly).with_range(-4.0, 4.0).execute();
        let b = SampleCurve::new(&poly).with_range(-4.0, 4.0).execute();
        assert_eq!(a, b);
    }
}
