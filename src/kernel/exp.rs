//! Exponential function by direct Maclaurin summation.

use super::{Series, EPS, MAX_TERMS};

/// Computes `e^x`.
///
/// Sums `1 + x + x²/2! + …` until a term drops to [`EPS`] or below. There is
/// no range reduction, so the number of terms grows with `|x|` and large
/// arguments overflow to an infinite sum. Negative arguments are evaluated
/// as `1 / e^{-x}`, so the alternating series is never summed.
///
/// # Examples
///
/// ```
/// assert_eq!(detlibm::kernel::exp(0.0), 1.0);
/// assert!((detlibm::kernel::exp(1.0) - std::f64::consts::E).abs() < 1e-15);
/// ```
pub fn exp(x: f64) -> f64 {
    exp_series(x).value
}

pub(crate) fn exp_series(x: f64) -> Series {
    if x.is_nan() {
        return Series::exact(f64::NAN);
    }
    if x.is_infinite() {
        return Series::exact(if x > 0.0 { f64::INFINITY } else { 0.0 });
    }
    if x < 0.0 {
        let series = exp_series(-x);

        return Series {
            value: 1.0 / series.value,
            ..series
        };
    }

    let mut term = 1.0;
    let mut div = 1.0;
    let mut sum = 0.0;
    let mut terms = 0;

    while f64::abs(term) > EPS {
        sum += term;
        terms += 1;

        if !sum.is_finite() {
            break;
        }
        if terms == MAX_TERMS {
            log::warn!("exp({x}) stopped after {terms} terms");
            break;
        }

        term *= x;
        term /= div;
        div += 1.0;
    }

    log::trace!("exp({x}) summed {terms} terms");

    Series { value: sum, terms }
}
