//! Assertion helpers for gesture and animation values.

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that every value is at least as large as the one before it.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for (index, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: value {} at index {} dropped below {} in {:?}",
            msg,
            pair[1],
            index + 1,
            pair[0],
            values
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_accepts_values_within_tolerance() {
        assert_approx_eq(0.9001, 0.9, 0.001, "scale");
    }

    #[test]
    #[should_panic(expected = "progress")]
    fn non_decreasing_rejects_a_drop() {
        assert_non_decreasing(&[0.1, 0.4, 0.3], "progress");
    }
}
