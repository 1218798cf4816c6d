//! Evenly spaced evaluation points over a guarded domain.

use super::DOMAIN_WIDENING;

/// A closed sampling interval `[x_min, x_max]`.
///
/// After [`SampleDomain::guarded`] the interval always satisfies
/// `x_min < x_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleDomain {
    /// Lower bound.
    pub x_min: f64,
    /// Upper bound.
    pub x_max: f64,
}

impl SampleDomain {
    /// Creates a new domain without any guarding.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64) -> Self {
        Self { x_min, x_max }
    }

    /// Returns the domain widened to `[x_min, x_min + 1e-6]` when it is
    /// empty or inverted.
    ///
    /// Far from the origin, where `1e-6` is below the spacing of `f64`,
    /// the widening grows to a few ulps of `x_min` so the result is still
    /// strictly increasing. Non-finite bounds are returned as they are.
    #[must_use]
    pub fn guarded(self) -> Self {
        if self.x_min >= self.x_max {
            tracing::debug!(
                x_min = self.x_min,
                x_max = self.x_max,
                "collapsed sample domain, widening"
            );
            let width = DOMAIN_WIDENING.max(self.x_min.abs() * f64::EPSILON * 4.0);
            Self::new(self.x_min, self.x_min + width)
        } else {
            self
        }
    }

    /// Returns whether `x` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.x_min <= x && x <= self.x_max
    }
}

impl From<(f64, f64)> for SampleDomain {
    fn from((x_min, x_max): (f64, f64)) -> Self {
        Self::new(x_min, x_max)
    }
}

/// Returns `count` evenly spaced values covering `[x_min, x_max]`.
///
/// Both endpoints are included. An empty or inverted domain is silently
/// widened (see [`SampleDomain::guarded`]). `count == 1` yields `[x_min]`.
#[must_use]
pub fn sample(x_min: f64, x_max: f64, count: usize) -> Vec<f64> {
    let domain = SampleDomain::new(x_min, x_max).guarded();
    linspace(domain.x_min, domain.x_max, count)
}

/// Unguarded evenly spaced values, endpoint inclusive.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            // Pin the last sample so rounding never overshoots the bound.
            values[count - 1] = end;
            values
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_are_included() {
        let xs = sample(-10.0, 10.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_abs_diff_eq!(xs[0], -10.0);
        assert_abs_diff_eq!(*xs.last().unwrap(), 10.0);
    }

    #[test]
    fn spacing_is_even() {
        let xs = sample(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn samples_are_strictly_increasing() {
        let xs = sample(-3.0, 7.5, 800);
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let xs = sample(5.0, 5.0, 100);
        assert_eq!(xs.len(), 100);
        assert_abs_diff_eq!(xs[0], 5.0);
        let width = xs.last().unwrap() - xs[0];
        assert!(width > 0.0);
        assert_abs_diff_eq!(width, DOMAIN_WIDENING, epsilon = 1e-12);
    }

    #[test]
    fn widening_stays_strict_far_from_origin() {
        for x in [1e10, -1e12, 3.5e15] {
            let d = SampleDomain::new(x, x).guarded();
            assert_eq!(d.x_min, x);
            assert!(d.x_min < d.x_max, "{x}");
        }
        let slider = SampleDomain::new(-10.0, -10.0).guarded();
        assert_abs_diff_eq!(slider.x_max - slider.x_min, DOMAIN_WIDENING, epsilon = 1e-12);
    }

    #[test]
    fn inverted_domain_starts_at_x_min() {
        let xs = sample(3.0, -3.0, 10);
        assert_abs_diff_eq!(xs[0], 3.0);
        assert!(*xs.last().unwrap() > 3.0);
    }

    #[test]
    fn zero_and_one_sample() {
        assert!(sample(0.0, 1.0, 0).is_empty());
        assert_eq!(sample(2.0, 4.0, 1), vec![2.0]);
    }

    #[test]
    fn contains_is_inclusive() {
        let d = SampleDomain::new(-1.0, 1.0);
        assert!(d.contains(-1.0));
        assert!(d.contains(1.0));
        assert!(!d.contains(1.000_001));
    }
}
