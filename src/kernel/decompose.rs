//! Splitting numbers into parts.

use super::constants::LN2_INV;
use super::ln;
use super::pow::ipow;

/// Largest binary shift applied in a single multiplication.
const SHIFT_STEP: i64 = 1000;
/// Shifts are clamped here; every finite value has saturated long before.
const MAX_SHIFT: i64 = 3000;

/// Splits `x` into its integral and fractional parts, both carrying the sign
/// of `x`.
///
/// # Examples
///
/// ```
/// assert_eq!(detlibm::kernel::modf(-3.25), (-3.0, -0.25));
/// ```
pub fn modf(x: f64) -> (f64, f64) {
    let negate = x < 0.0;
    let x = if negate { -x } else { x };

    let int_part = x.floor();
    let frac_part = if int_part.is_infinite() {
        0.0
    } else {
        x - int_part
    };

    if negate {
        (-int_part, -frac_part)
    } else {
        (int_part, frac_part)
    }
}

/// Computes the remainder of `x / y`, truncated towards zero.
///
/// The result takes the sign of the dividend.
pub fn fmod(x: f64, y: f64) -> f64 {
    if x.is_infinite() || x.is_nan() {
        return f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }

    let y = y.abs();
    let negate = x < 0.0;
    let x = if negate { -x } else { x };

    let res = x - (x / y).floor() * y;

    if negate {
        -res
    } else {
        res
    }
}

/// Splits `x` into a mantissa and a power-of-two exponent.
///
/// The exponent is estimated as `⌈log₂|x|⌉` through the logarithm, so the
/// mantissa magnitude falls in `(0.5, 1]` rather than IEEE's `[0.5, 1)`, and
/// near exact powers of two the estimate may land one step either way.
/// Zero, infinities and NaN come back unchanged with a zero exponent.
pub fn frexp(x: f64) -> (f64, f64) {
    if !x.is_finite() || x == 0.0 {
        return (x, 0.0);
    }

    let e = (ln(x.abs()) * LN2_INV).ceil();

    (scale(x, -(e as i64)), e)
}

/// Computes `m · 2^⌊e⌋`.
///
/// If `m + e` is not finite the shift is meaningless and `m` is returned as
/// is.
pub fn ldexp(m: f64, e: f64) -> f64 {
    if !(m + e).is_finite() {
        return m;
    }

    scale(m, e.floor() as i64)
}

/// Multiplies `x` by `2^e` without overflowing intermediate powers.
fn scale(mut x: f64, e: i64) -> f64 {
    let mut e = e.clamp(-MAX_SHIFT, MAX_SHIFT);

    while e > SHIFT_STEP {
        x *= ipow(2.0, SHIFT_STEP);
        e -= SHIFT_STEP;
    }
    while e < -SHIFT_STEP {
        x *= ipow(2.0, -SHIFT_STEP);
        e += SHIFT_STEP;
    }

    x * ipow(2.0, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modf_parts() {
        assert_eq!(modf(3.25), (3.0, 0.25));
        assert_eq!(modf(-3.25), (-3.0, -0.25));
        assert_eq!(modf(5.0), (5.0, 0.0));
        assert_eq!(modf(f64::INFINITY), (f64::INFINITY, 0.0));
        assert_eq!(modf(f64::NEG_INFINITY), (f64::NEG_INFINITY, -0.0));

        let (int_part, frac_part) = modf(f64::NAN);
        assert!(int_part.is_nan() && frac_part.is_nan());
    }

    #[test]
    fn fmod_sign_follows_dividend() {
        assert_eq!(fmod(5.0, 3.0), 2.0);
        assert_eq!(fmod(-5.0, 3.0), -2.0);
        assert_eq!(fmod(5.0, -3.0), 2.0);
        assert_eq!(fmod(-5.0, -3.0), -2.0);
        assert_eq!(fmod(5.5, 2.0), 1.5);
    }

    #[test]
    fn fmod_special_values() {
        assert!(fmod(f64::INFINITY, 2.0).is_nan());
        assert!(fmod(f64::NAN, 2.0).is_nan());
        assert!(fmod(1.0, 0.0).is_nan());
        assert_eq!(fmod(7.0, f64::INFINITY), 7.0);
        assert_eq!(fmod(-7.0, f64::NEG_INFINITY), -7.0);
    }

    #[test]
    fn frexp_splits() {
        assert_eq!(frexp(3.0), (0.75, 2.0));
        assert_eq!(frexp(-3.0), (-0.75, 2.0));
        assert_eq!(frexp(0.3), (0.6, -1.0));
        assert_eq!(frexp(1000.0), (0.9765625, 10.0));
        assert_eq!(frexp(0.0), (0.0, 0.0));
        assert_eq!(frexp(f64::INFINITY), (f64::INFINITY, 0.0));

        let (m, e) = frexp(f64::NAN);
        assert!(m.is_nan());
        assert_eq!(e, 0.0);
    }

    #[test]
    fn frexp_extremes() {
        for x in [f64::MAX, f64::MIN_POSITIVE, 5e-324, 1e-310, 6.02e23] {
            let (m, e) = frexp(x);

            assert!(m > 0.25 && m <= 2.0, "frexp({x}) mantissa {m}");
            assert_eq!(ldexp(m, e), x);
        }
    }

    #[test]
    fn ldexp_scales() {
        assert_eq!(ldexp(0.75, 2.0), 3.0);
        assert_eq!(ldexp(1.0, -3.0), 0.125);
        assert_eq!(ldexp(1.0, 2.7), 4.0);
        assert_eq!(ldexp(1.0, -2.5), 0.125);
        assert_eq!(ldexp(1.0, 1024.0), f64::INFINITY);
        assert_eq!(ldexp(1.0, -1075.0), 0.0);
        assert_eq!(ldexp(2f64.powi(1000), -1070.0), 2f64.powi(-70));
        assert_eq!(ldexp(1.0, 1e300), f64::INFINITY);
    }

    #[test]
    fn ldexp_non_finite_shift() {
        assert_eq!(ldexp(3.0, f64::INFINITY), 3.0);
        assert_eq!(ldexp(f64::INFINITY, 2.0), f64::INFINITY);
        assert!(ldexp(f64::NAN, 2.0).is_nan());
    }
}
