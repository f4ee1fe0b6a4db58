//! Overflow-safe log-domain summation.

/// Compute `log(exp(x₀) + exp(x₁) + …)` without overflow or underflow.
///
/// Factors out the maximum element `M` and sums `exp(xᵢ − M)`, so the
/// largest term contributes exactly 1.0 to the inner sum regardless of
/// magnitude.
///
/// If every element is `-inf` (a zero-probability vector in log space),
/// returns `-inf` immediately; without the early return the first term
/// would evaluate `exp(-inf - (-inf))` and produce NaN.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn logsum(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "logsum requires at least one value");

    let max = values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if max == f64::NEG_INFINITY {
        return f64::NEG_INFINITY;
    }

    let sum: f64 = values.iter().map(|&v| (v - max).exp()).sum();
    sum.ln() + max
}

/// Two-operand convenience form of [`logsum`].
pub fn logsum2(a: f64, b: f64) -> f64 {
    logsum(&[a, b])
}

/// Three-operand convenience form of [`logsum`].
pub fn logsum3(a: f64, b: f64, c: f64) -> f64 {
    logsum(&[a, b, c])
}
