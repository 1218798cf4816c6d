/// Clamps every value into `[-limit, limit]`.
///
/// NaN passes through unchanged.
#[must_use]
pub fn clip(values: &[f64], limit: f64) -> Vec<f64> {
    let mut clipped = values.to_vec();
    clip_in_place(&mut clipped, limit);
    clipped
}

/// In-place variant of [`clip`].
pub fn clip_in_place(values: &mut [f64], limit: f64) {
    if limit.is_nan() {
        return;
    }
    let limit = limit.abs();
    for v in values.iter_mut() {
        *v = v.clamp(-limit, limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::CLIP_LIMIT;

    #[test]
    fn bounds_large_magnitudes() {
        let clipped = clip(&[-5e7, -3.0, 0.0, 2.5, 1e9], CLIP_LIMIT);
        assert_eq!(clipped, vec![-1e6, -3.0, 0.0, 2.5, 1e6]);
    }

    #[test]
    fn infinities_are_bounded() {
        let clipped = clip(&[f64::INFINITY, f64::NEG_INFINITY], 10.0);
        assert_eq!(clipped, vec![10.0, -10.0]);
    }

    #[test]
    fn nan_is_preserved() {
        let clipped = clip(&[f64::NAN], 1.0);
        assert!(clipped[0].is_nan());
    }

    #[test]
    fn in_place_matches_copy() {
        let mut values = vec![3.0, -7.0, 12.0];
        clip_in_place(&mut values, 5.0);
        assert_eq!(values, clip(&[3.0, -7.0, 12.0], 5.0));
    }
}
