//! Probability clamping against numerical noise.

use glt_core::NumericError;

/// Tolerance inside which a probability is considered numerically 0 or 1.
const ERR_TOL: f64 = 1e-5;

/// Guard a probability-like value against numerical noise.
///
/// NaN is an unrecoverable data error and returns
/// [`NumericError::NanProbability`]; callers at the binary boundary are
/// expected to report it and terminate. Otherwise the value goes
/// through one else-if chain: anything below `1e-5` (negative noise
/// included) snaps to exactly `0`, anything above `1 − 1e-5` snaps to
/// exactly `1`, and everything else passes through unchanged.
///
/// With `verbose` set, a warning is printed to stderr if the snapped
/// result is still outside `[0, 1]`. The snapping immediately upstream
/// makes that condition unreachable; the branch is retained verbatim
/// from the original design and pinned by test, pending the original
/// author's call on removing it.
pub fn clamp_probability(value: f64, verbose: bool) -> Result<f64, NumericError> {
    if value.is_nan() {
        return Err(NumericError::NanProbability {
            context: "clamp_probability".into(),
        });
    }

    let mut value = value;
    if value < ERR_TOL {
        value = 0.0;
        if verbose && value < 0.0 {
            eprintln!("\nWARN: value {value} < 0!");
        }
    } else if value > 1.0 - ERR_TOL {
        value = 1.0;
        if verbose && value > 1.0 {
            eprintln!("\nWARN: value {value} > 1!");
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_near_zero_to_exactly_zero() {
        assert_eq!(clamp_probability(1e-6, false).unwrap(), 0.0);
        assert_eq!(clamp_probability(-1e-6, false).unwrap(), 0.0);
        assert_eq!(clamp_probability(0.0, false).unwrap(), 0.0);
    }

    #[test]
    fn snaps_near_one_to_exactly_one() {
        assert_eq!(clamp_probability(1.0 - 1e-6, false).unwrap(), 1.0);
        assert_eq!(clamp_probability(1.0 + 1e-6, false).unwrap(), 1.0);
        assert_eq!(clamp_probability(1.0, false).unwrap(), 1.0);
    }

    #[test]
    fn out_of_range_values_snap_rather_than_pass() {
        // The original's else-if chain catches every value below the
        // tolerance, not just those near zero.
        assert_eq!(clamp_probability(-0.5, false).unwrap(), 0.0);
        assert_eq!(clamp_probability(1.5, false).unwrap(), 1.0);
    }

    #[test]
    fn interior_values_pass_through_unchanged() {
        assert_eq!(clamp_probability(0.5, false).unwrap(), 0.5);
        assert_eq!(clamp_probability(1e-4, false).unwrap(), 1e-4);
        assert_eq!(clamp_probability(1.0 - 1e-4, false).unwrap(), 1.0 - 1e-4);
    }

    #[test]
    fn nan_is_an_error() {
        let err = clamp_probability(f64::NAN, false).unwrap_err();
        assert!(matches!(err, NumericError::NanProbability { .. }));
    }

    #[test]
    fn verbose_mode_result_is_always_in_range() {
        // Pins the quirk: the warning condition checks the post-snap
        // value, so no verbose input can produce an out-of-range result
        // (or, therefore, a warning).
        for v in [-10.0, -1e-6, 0.0, 0.3, 1.0 - 1e-6, 1.0, 10.0] {
            let clamped = clamp_probability(v, true).unwrap();
            assert!((0.0..=1.0).contains(&clamped), "value {v} escaped [0,1]");
        }
    }
}
