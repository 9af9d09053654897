pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Rounds to two decimal places.
pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Nearest whole set count; negative inputs saturate at zero.
pub fn round_sets(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else {
        v.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_values() {
        assert_eq!(mean(&[10.0, 10.0, 10.0, 10.0]), 10.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }

    #[test]
    fn round_float_two_places() {
        assert_eq!(round_float(102.499_999_999_999_99), 102.5);
        assert_eq!(round_float(97.5), 97.5);
        assert_eq!(round_float(3.14159), 3.14);
    }

    #[test]
    fn round_sets_saturates() {
        assert_eq!(round_sets(7.5), 8);
        assert_eq!(round_sets(7.49), 7);
        assert_eq!(round_sets(-3.0), 0);
        assert_eq!(round_sets(f64::NAN), 0);
    }
}
