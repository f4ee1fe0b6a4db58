//! Hard genotype calling from a likelihood vector.

/// Index of the maximum element, first occurrence winning ties.
///
/// Scans left to right and only a strictly greater element displaces
/// the current winner, so for `[3.0, 7.0, 7.0, 2.0]` the result is 1.
/// NaN entries never compare greater and therefore never win; the input
/// is expected to contain at least one non-NaN entry.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn arg_max(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "arg_max requires at least one value");

    let mut winner = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > max {
            winner = i;
            max = v;
        }
    }
    winner
}

/// Collapse a likelihood vector to a one-hot call at its maximum, in place.
///
/// Zeroes every entry and sets the arg-max entry to 1. With `log_scale`
/// set, the one-hot vector is then mapped through natural log, giving
/// `0` at the called genotype and `-inf` everywhere else. No
/// allocation.
///
/// # Panics
///
/// Panics if `likelihoods` is empty.
pub fn hard_call(likelihoods: &mut [f64], log_scale: bool) {
    let winner = arg_max(likelihoods);

    for v in likelihoods.iter_mut() {
        *v = 0.0;
    }
    likelihoods[winner] = 1.0;

    if log_scale {
        map_in_place(likelihoods, f64::ln);
    }
}

/// Apply a unary function to every element of a buffer, in place.
///
/// The original routed this through a raw function pointer; a closure
/// parameter covers the same uses (log-space and linear-space
/// conversion) without the indirection.
pub fn map_in_place(values: &mut [f64], f: impl Fn(f64) -> f64) {
    for v in values.iter_mut() {
        *v = f(*v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_max_first_tie_wins() {
        assert_eq!(arg_max(&[3.0, 7.0, 7.0, 2.0]), 1);
    }

    #[test]
    fn arg_max_single_element() {
        assert_eq!(arg_max(&[f64::NEG_INFINITY]), 0);
    }

    #[test]
    fn arg_max_skips_nan() {
        assert_eq!(arg_max(&[f64::NAN, 1.0, 2.0]), 2);
    }

    #[test]
    #[should_panic(expected = "at least one value")]
    fn arg_max_empty_panics() {
        arg_max(&[]);
    }

    #[test]
    fn hard_call_linear() {
        let mut geno = [0.1, 0.6, 0.3];
        hard_call(&mut geno, false);
        assert_eq!(geno, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn hard_call_log_scale() {
        let mut geno = [0.1, 0.6, 0.3];
        hard_call(&mut geno, true);
        assert_eq!(geno, [f64::NEG_INFINITY, 0.0, f64::NEG_INFINITY]);
    }

    #[test]
    fn hard_call_works_on_log_inputs() {
        let mut geno = [(0.1f64).ln(), (0.6f64).ln(), (0.3f64).ln()];
        hard_call(&mut geno, false);
        assert_eq!(geno, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn map_in_place_applies_closure() {
        let mut values = [1.0, 2.0, 3.0];
        map_in_place(&mut values, |v| v * 2.0);
        assert_eq!(values, [2.0, 4.0, 6.0]);
    }
}
