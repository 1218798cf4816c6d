//! Polynomial evaluation, differentiation and real root finding.
//!
//! Coefficients are always ordered highest degree first: `[a_n, ..., a_1, a_0]`
//! represents `a_n x^n + ... + a_1 x + a_0`.

use nalgebra::{DMatrix, Schur};

use super::{SampleDomain, ROOT_IMAG_TOLERANCE};

/// Evaluates the polynomial at a single point using Horner's scheme.
///
/// An empty coefficient sequence evaluates to zero.
#[must_use]
pub fn evaluate_at(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluates the polynomial at every point of `xs`.
#[must_use]
pub fn evaluate(coeffs: &[f64], xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| evaluate_at(coeffs, x)).collect()
}

/// Returns the coefficients of the first derivative.
///
/// For `n` input coefficients the result has `n - 1` entries, with
/// `out[i] = coeffs[i] * (n - 1 - i)`. Constants (and the empty sequence)
/// differentiate to `[0.0]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derivative(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    if n <= 1 {
        return vec![0.0];
    }
    coeffs[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &c)| c * (n - 1 - i) as f64)
        .collect()
}

/// Finds the real roots of the polynomial, sorted ascending.
///
/// All complex roots are computed as eigenvalues of the companion matrix,
/// then those with `|im| >= 1e-8` are discarded. Leading zeros are
/// stripped first and trailing zeros contribute exact roots at `0.0`, so
/// an all-zero (or constant) sequence yields no roots. Non-finite input
/// also yields no roots.
#[must_use]
pub fn real_roots(coeffs: &[f64]) -> Vec<f64> {
    if coeffs.iter().any(|c| !c.is_finite()) {
        tracing::debug!(?coeffs, "non-finite coefficients, no roots");
        return Vec::new();
    }

    let Some(start) = coeffs.iter().position(|&c| c != 0.0) else {
        return Vec::new();
    };
    if start > 0 {
        tracing::debug!(stripped = start, "leading zero coefficients removed");
    }
    let trimmed = &coeffs[start..];
    let trailing = trimmed.iter().rev().take_while(|&&c| c == 0.0).count();
    let core = &trimmed[..trimmed.len() - trailing];

    let mut roots = vec![0.0; trailing];
    match core.len() {
        0 | 1 => {}
        2 => roots.push(-core[1] / core[0]),
        _ => roots.extend(companion_real_eigenvalues(core)),
    }

    roots.sort_by(f64::total_cmp);
    roots
}

/// Iteration cap for one Schur decomposition of a companion matrix.
const SCHUR_MAX_ITER: usize = 500;

/// Variable shifts tried, in order, when the Schur iteration stalls.
///
/// Companion matrices of `x^n ± k` are scaled permutations on which the
/// unshifted Francis iteration never deflates. Solving for `p(y + s)`
/// breaks that symmetry without changing the imaginary parts.
const ROOT_SHIFTS: [f64; 4] = [0.0, 0.5, -0.75, 1.25];

/// Real eigenvalues of the companion matrix of `core` (leading coefficient
/// non-zero, degree at least 2).
///
/// Always returns; if no shift converges the roots are reported as none.
fn companion_real_eigenvalues(core: &[f64]) -> Vec<f64> {
    let found = ROOT_SHIFTS.iter().find_map(|&shift| {
        let shifted = taylor_shift(core, shift);
        let roots = shifted_companion_roots(&shifted)?;
        if shift != 0.0 {
            tracing::debug!(shift, "companion solve converged after shifting");
        }
        Some(roots.into_iter().map(|y| y + shift).collect::<Vec<_>>())
    });
    found.unwrap_or_else(|| {
        tracing::debug!(?core, "companion eigen-solve did not converge, no roots");
        Vec::new()
    })
}

/// Coefficients of `q(y) = p(y + shift)`, highest degree first.
fn taylor_shift(coeffs: &[f64], shift: f64) -> Vec<f64> {
    let mut out = coeffs.to_vec();
    if shift == 0.0 {
        return out;
    }
    let n = out.len();
    for i in 0..n.saturating_sub(1) {
        for j in 1..n - i {
            out[j] += shift * out[j - 1];
        }
    }
    out
}

/// `None` when the companion matrix overflows or the Schur iteration
/// hits its cap.
fn shifted_companion_roots(core: &[f64]) -> Option<Vec<f64>> {
    let degree = core.len() - 1;
    let lead = core[0];

    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for (j, &c) in core[1..].iter().enumerate() {
        companion[(0, j)] = -c / lead;
    }
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }

    if companion.iter().any(|v| !v.is_finite()) {
        tracing::debug!(lead, "companion matrix overflowed");
        return None;
    }
    tracing::trace!(degree, "solving companion matrix eigenvalues");

    let schur = Schur::try_new(companion, f64::EPSILON, SCHUR_MAX_ITER)?;
    Some(
        schur
            .complex_eigenvalues()
            .iter()
            .filter(|z| z.im.abs() < ROOT_IMAG_TOLERANCE)
            .map(|z| z.re)
            .collect(),
    )
}

/// Real roots of the first derivative that lie inside `range`.
///
/// Returns an empty sequence when the derivative is identically zero.
#[must_use]
pub fn critical_points(coeffs: &[f64], range: SampleDomain) -> Vec<f64> {
    roots_in_range(&derivative(coeffs), range)
}

/// Real roots of the second derivative that lie inside `range`.
///
/// Returns an empty sequence when the second derivative is identically zero.
#[must_use]
pub fn inflection_points(coeffs: &[f64], range: SampleDomain) -> Vec<f64> {
    roots_in_range(&derivative(&derivative(coeffs)), range)
}

fn roots_in_range(coeffs: &[f64], range: SampleDomain) -> Vec<f64> {
    if coeffs.iter().all(|&c| c == 0.0) {
        return Vec::new();
    }
    real_roots(coeffs)
        .into_iter()
        .filter(|&r| range.contains(r))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn assert_roots(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "roots: {actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a, e, epsilon = 1e-9);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn naive(coeffs: &[f64], x: f64) -> f64 {
        let n = coeffs.len();
        coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi((n - 1 - i) as i32))
            .sum()
    }

    #[test]
    fn evaluate_cubic() {
        // x^3 - 2x + 1
        let ys = evaluate(&[1.0, 0.0, -2.0, 1.0], &[-2.0, 0.0, 1.0, 3.0]);
        assert_eq!(ys, vec![-3.0, 1.0, 0.0, 22.0]);
    }

    #[test]
    fn evaluate_empty_is_zero() {
        assert_eq!(evaluate(&[], &[1.0, 2.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn constant_evaluates_everywhere() {
        assert_eq!(evaluate(&[4.5], &[-1e3, 0.0, 7.0]), vec![4.5; 3]);
    }

    #[test]
    fn derivative_of_cubic() {
        assert_eq!(derivative(&[2.0, -3.0, 5.0, 7.0]), vec![6.0, -6.0, 5.0]);
    }

    #[test]
    fn second_derivative_of_x_cubed() {
        let d2 = derivative(&derivative(&[1.0, 0.0, 0.0, 0.0]));
        assert_eq!(d2, vec![6.0, 0.0]);
    }

    #[test]
    fn derivative_of_constant() {
        assert_eq!(derivative(&[3.0]), vec![0.0]);
        assert_eq!(derivative(&[]), vec![0.0]);
    }

    #[test]
    fn roots_of_x_squared_minus_one() {
        assert_roots(&real_roots(&[1.0, 0.0, -1.0]), &[-1.0, 1.0]);
    }

    #[test]
    fn roots_are_ascending() {
        // (x - 3)(x + 1)(x - 0.5) = x^3 - 2.5x^2 - 2x + 1.5
        assert_roots(&real_roots(&[1.0, -2.5, -2.0, 1.5]), &[-1.0, 0.5, 3.0]);
    }

    #[test]
    fn complex_roots_are_discarded() {
        // x^2 + 1 has only complex roots.
        assert!(real_roots(&[1.0, 0.0, 1.0]).is_empty());
        // (x - 2)(x^2 + 1) = x^3 - 2x^2 + x - 2
        assert_roots(&real_roots(&[1.0, -2.0, 1.0, -2.0]), &[2.0]);
    }

    #[test]
    fn quintic_roots() {
        // (x+2)(x+1)x(x-1)(x-2) = x^5 - 5x^3 + 4x
        assert_roots(
            &real_roots(&[1.0, 0.0, -5.0, 0.0, 4.0, 0.0]),
            &[-2.0, -1.0, 0.0, 1.0, 2.0],
        );
    }

    #[test]
    fn leading_zeros_collapse_degree() {
        // 0x^3 + 0x^2 + 2x - 4
        assert_roots(&real_roots(&[0.0, 0.0, 2.0, -4.0]), &[2.0]);
    }

    #[test]
    fn trailing_zeros_give_zero_roots() {
        assert_roots(&real_roots(&[1.0, 0.0, 0.0]), &[0.0, 0.0]);
    }

    #[test]
    fn degenerate_inputs_have_no_roots() {
        assert!(real_roots(&[]).is_empty());
        assert!(real_roots(&[0.0, 0.0, 0.0]).is_empty());
        assert!(real_roots(&[5.0]).is_empty());
        assert!(real_roots(&[1.0, f64::NAN, 2.0]).is_empty());
    }

    #[test]
    fn cyclic_companion_matrices_terminate() {
        // x^n + k has a scaled-permutation companion matrix.
        assert!(real_roots(&[1.0, 0.0, 0.0, 0.0, 1.0]).is_empty());
        assert!(real_roots(&[1.0, 0.0, 0.0, 0.0, 2.0]).is_empty());
        assert!(real_roots(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]).is_empty());
        assert_roots(&real_roots(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0]), &[-1.0, 1.0]);
        assert_roots(&real_roots(&[1.0, 0.0, 0.0, 0.0, -16.0]), &[-2.0, 2.0]);
    }

    #[test]
    fn taylor_shift_expands_binomial() {
        // (y + 1)^2 = y^2 + 2y + 1
        assert_eq!(taylor_shift(&[1.0, 0.0, 0.0], 1.0), vec![1.0, 2.0, 1.0]);
        // (y - 2)^3 = y^3 - 6y^2 + 12y - 8
        assert_eq!(
            taylor_shift(&[1.0, 0.0, 0.0, 0.0], -2.0),
            vec![1.0, -6.0, 12.0, -8.0]
        );
        assert_eq!(taylor_shift(&[3.0, 4.0], 0.0), vec![3.0, 4.0]);
    }

    #[test]
    fn critical_points_of_cubic() {
        // x^3 - 3x has extrema at -1 and 1.
        let range = SampleDomain::new(-5.0, 5.0);
        assert_roots(&critical_points(&[1.0, 0.0, -3.0, 0.0], range), &[-1.0, 1.0]);
    }

    #[test]
    fn critical_points_are_range_filtered() {
        let range = SampleDomain::new(0.0, 5.0);
        assert_roots(&critical_points(&[1.0, 0.0, -3.0, 0.0], range), &[1.0]);
    }

    #[test]
    fn critical_points_of_line_are_empty() {
        let range = SampleDomain::new(-5.0, 5.0);
        assert!(critical_points(&[2.0, 1.0], range).is_empty());
        assert!(critical_points(&[7.0], range).is_empty());
    }

    #[test]
    fn inflection_points_of_quartic() {
        // x^4 - 6x^2: f'' = 12x^2 - 12, zeros at +-1
        let range = SampleDomain::new(-3.0, 3.0);
        assert_roots(
            &inflection_points(&[1.0, 0.0, -6.0, 0.0, 0.0], range),
            &[-1.0, 1.0],
        );
    }

    #[test]
    fn inflection_points_of_quadratic_are_empty() {
        let range = SampleDomain::new(-3.0, 3.0);
        assert!(inflection_points(&[1.0, 2.0, 3.0], range).is_empty());
    }

    proptest! {
        #[test]
        fn horner_matches_power_sum(
            coeffs in prop::collection::vec(-10.0f64..10.0, 1..8),
            x in -5.0f64..5.0,
        ) {
            let horner = evaluate(&coeffs, &[x])[0];
            let reference = naive(&coeffs, x);
            prop_assert!((horner - reference).abs() <= 1e-9 * reference.abs().max(1.0));
        }

        #[test]
        fn slider_polynomial_roots_are_sorted_zeros(
            steps in prop::collection::vec(-100i32..=100, 2..=7),
        ) {
            let coeffs: Vec<f64> = steps.iter().map(|&s| f64::from(s) / 10.0).collect();
            let roots = real_roots(&coeffs);
            prop_assert!(roots.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(roots.len() < coeffs.len());
            let scale: f64 = coeffs.iter().map(|c| c.abs()).sum();
            for &r in &roots {
                let magnitude = r.abs().max(1.0).powi(6);
                prop_assert!(
                    evaluate_at(&coeffs, r).abs() <= 1e-4 * scale * magnitude,
                    "p({r}) = {} for {coeffs:?}",
                    evaluate_at(&coeffs, r)
                );
            }
        }
    }
}
