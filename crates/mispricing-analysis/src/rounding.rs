//! Rounding applied at the boundary of each component's public output.
//!
//! Ties round to even. Non-finite values become zero so that no NaN or
//! infinity ever leaves the crate.

/// Round to the nearest whole number.
pub(crate) fn round_whole(value: f64) -> i64 {
    if value.is_finite() {
        value.round_ties_even() as i64
    } else {
        0
    }
}

/// Round to `decimals` decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round_ties_even() / scale;
    if rounded.is_finite() { rounded } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_whole_ties_to_even() {
        assert_eq!(round_whole(2.5), 2);
        assert_eq!(round_whole(3.5), 4);
        assert_eq!(round_whole(-2.5), -2);
        assert_eq!(round_whole(719.6), 720);
    }

    #[test]
    fn test_round_whole_non_finite() {
        assert_eq!(round_whole(f64::NAN), 0);
        assert_eq!(round_whole(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_to_two_decimals() {
        assert_relative_eq!(round_to(6.4000000001, 2), 6.4);
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(-0.456, 2), -0.46);
        assert_eq!(round_to(f64::NAN, 2), 0.0);
    }
}
