//! Inverse sine and cosine in terms of the arctangent.

use super::atan;
use super::constants::PIO2;

/// Computes the arcsine of `x`, in radians, or NaN outside `[-1, 1]`.
///
/// Uses `asin(x) = atan(x / √(1 − x²))`, switching to the complementary form
/// `π/2 − atan(√(1 − x²) / x)` above 0.7 where the first quotient loses
/// precision.
pub fn asin(x: f64) -> f64 {
    let negative = x < 0.0;
    let arg = if negative { -x } else { x };

    if arg > 1.0 {
        return f64::NAN;
    }

    let temp = (1.0 - arg * arg).sqrt();

    let result = if arg > 0.7 {
        PIO2 - atan(temp / arg)
    } else {
        atan(arg / temp)
    };

    if negative {
        -result
    } else {
        result
    }
}

/// Computes the arccosine of `x`, in radians, or NaN outside `[-1, 1]`.
pub fn acos(x: f64) -> f64 {
    if !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }

    PIO2 - asin(x)
}
