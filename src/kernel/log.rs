//! Natural and common logarithms.

use super::constants::LN10_INV;
use super::{Series, EPS, MAX_TERMS};

/// 2^64, used to lift subnormal arguments into range.
const TWO_POW_64: f64 = 18446744073709551616.0;

/// Computes the natural logarithm of `x`.
///
/// The argument is first mapped to `[1, ∞)` by taking its reciprocal, then
/// square-rooted until it falls below 1.1, doubling a multiplier each
/// time. What remains is summed as `ln(1 − t) = −Σ tⁿ/n` with `|t| < 0.1`,
/// so the series needs only a handful of terms regardless of the input
/// magnitude.
///
/// Negative arguments give NaN, zero gives −∞.
pub fn ln(x: f64) -> f64 {
    ln_series(x).value
}

/// Computes the base-10 logarithm of `x` as `ln(x) / ln(10)`.
pub fn log10(x: f64) -> f64 {
    ln(x) * LN10_INV
}

pub(crate) fn ln_series(x: f64) -> Series {
    if x.is_nan() || x < 0.0 {
        return Series::exact(f64::NAN);
    }
    if x == 0.0 {
        return Series::exact(f64::NEG_INFINITY);
    }
    if x == f64::INFINITY {
        return Series::exact(f64::INFINITY);
    }

    // The reciprocal of a subnormal overflows.
    if x < 1.0 && (1.0 / x).is_infinite() {
        let lifted = ln_series(x * TWO_POW_64);

        return Series {
            value: lifted.value - 64.0 * core::f64::consts::LN_2,
            terms: lifted.terms,
        };
    }

    let negative = x < 1.0;
    let mut x = if negative { 1.0 / x } else { x };
    let mut multiplier = 1.0;

    while x >= 1.1 {
        multiplier *= 2.0;
        x = x.sqrt();
    }

    let t = 1.0 - x;
    let mut tpow = t;
    let mut divisor = 1.0;
    let mut result = 0.0;
    let mut terms = 0;

    loop {
        let term = tpow / divisor;

        if f64::abs(term) <= EPS {
            break;
        }
        if terms == MAX_TERMS {
            log::warn!("ln series stopped after {terms} terms");
            break;
        }

        result -= term;
        tpow *= t;
        divisor += 1.0;
        terms += 1;
    }

    log::trace!("ln summed {terms} terms at multiplier {multiplier}");

    let value = multiplier * result;

    Series {
        value: if negative { -value } else { value },
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::exp;

    #[test]
    fn special_values() {
        assert_eq!(ln(1.0), 0.0);
        assert_eq!(ln(0.0), f64::NEG_INFINITY);
        assert_eq!(ln(f64::INFINITY), f64::INFINITY);
        assert!(ln(-1.0).is_nan());
        assert!(ln(f64::NAN).is_nan());
    }

    #[test]
    fn accuracy() {
        for x in [1e-300, 1e-6, 0.3, 0.5, 2.0, 10.0, 12345.678, 1e300] {
            let err = (ln(x) - x.ln()).abs();

            assert!(err < 1e-9, "ln({x}) error {err}");
        }

        assert!((log10(1000.0) - 3.0).abs() < 1e-12);
        assert!((log10(0.01) + 2.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_scales() {
        use crate::kernel::constants::{LN10_INV, LN2_INV};

        assert!((1.0 / ln(2.0) - LN2_INV).abs() < 1e-14);
        assert!((1.0 / ln(10.0) - LN10_INV).abs() < 1e-14);
    }

    #[test]
    fn subnormal() {
        let x = 5e-324;

        assert!((ln(x) - x.ln()).abs() < 1e-9);
    }

    #[test]
    fn round_trip() {
        for x in [0.5, 1.0, 2.0, 10.0, 100.0] {
            assert!((ln(exp(x)) - x).abs() < 1e-9);
            assert!((exp(ln(x)) - x).abs() / x < 1e-9);
        }
    }

    #[test]
    fn convergence() {
        let mut x = 1e-6;

        while x <= 1e6 {
            assert!(ln_series(x).terms < 200, "ln({x}) did not converge");
            x *= 1.01;
        }
    }
}
