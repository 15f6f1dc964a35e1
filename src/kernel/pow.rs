//! Real powers.

use super::{exp, ln};

/// Exclusive magnitude bound for exponents taking the integer path (2^63).
const IPOW_LIMIT: f64 = 9223372036854775808.0;

/// Computes `base` raised to `exponent`.
///
/// Integral exponents are evaluated exactly by repeated squaring, which also
/// handles negative bases. Integral exponents too large for that are even, so
/// they go through the logarithm at `|base|`. Any other exponent goes through
/// `exp(exponent · ln(base))` and yields NaN for a negative base.
///
/// # Examples
///
/// ```
/// use detlibm::kernel::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert_eq!(pow(-3.0, 3.0), -27.0);
/// assert!(pow(-8.0, 1.0 / 3.0).is_nan());
/// ```
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.trunc() != exponent {
        fpow(base, exponent)
    } else if exponent.abs() < IPOW_LIMIT {
        ipow(base, exponent as i64)
    } else {
        // Every double of at least 2^63 is an even integer.
        fpow(base.abs(), exponent)
    }
}

fn fpow(base: f64, exponent: f64) -> f64 {
    if base < 0.0 {
        return f64::NAN;
    }

    exp(exponent * ln(base))
}

/// Exponentiation by squaring over the binary digits of `|exponent|`.
pub(super) fn ipow(mut base: f64, exponent: i64) -> f64 {
    let mut n = exponent.unsigned_abs();
    let mut acc = if n & 1 != 0 { base } else { 1.0 };

    n >>= 1;

    while n != 0 {
        base *= base;

        if n & 1 != 0 {
            acc *= base;
        }

        n >>= 1;
    }

    if exponent < 0 {
        1.0 / acc
    } else {
        acc
    }
}
