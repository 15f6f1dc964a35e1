//! Hyperbolic functions.
//!
//! Each function makes a single call to [`exp`] at a non-negative argument
//! and recovers negative arguments by parity, so the alternating form of the
//! series is never summed.

use super::exp;

/// Computes the hyperbolic cosine of `x`.
pub fn cosh(x: f64) -> f64 {
    let exp_x = exp(x.abs());

    (exp_x + 1.0 / exp_x) * 0.5
}

/// Computes the hyperbolic sine of `x`.
pub fn sinh(x: f64) -> f64 {
    let exp_x = exp(x.abs());
    let res = (exp_x - 1.0 / exp_x) * 0.5;

    if x < 0.0 {
        -res
    } else {
        res
    }
}

/// Computes the hyperbolic tangent of `x`.
///
/// Saturates to `±1` once `e^{2|x|}` overflows.
pub fn tanh(x: f64) -> f64 {
    let exp_x = exp(2.0 * x.abs());

    let res = if exp_x.is_infinite() {
        1.0
    } else {
        (exp_x - 1.0) / (exp_x + 1.0)
    };

    if x < 0.0 {
        -res
    } else {
        res
    }
}
