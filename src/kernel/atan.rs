//! Arctangent by rational approximation.
//!
//! The degree-(4,4) rational function in `mxatan` is only accurate for
//! arguments of magnitude at most √2 − 1. Larger arguments are folded into
//! that interval with the identities
//!
//! * `atan(a) = π/2 − atan(1/a)` for `a > √2 + 1`, and
//! * `atan(a) = π/4 + atan((a − 1)/(a + 1))` in between.

use super::constants::*;

/// Computes the arctangent of `x`, in radians.
pub fn atan(x: f64) -> f64 {
    if x > 0.0 {
        msatan(x)
    } else {
        -msatan(-x)
    }
}

/// Computes the four-quadrant arctangent of `y / x`, in radians.
///
/// A vanishing `x` (or an infinite `y` that swallows it) gives `±π/2`, or `0`
/// when `y` is zero as well.
pub fn atan2(y: f64, x: f64) -> f64 {
    if y + x == y {
        return if y > 0.0 {
            PIO2
        } else if y < 0.0 {
            -PIO2
        } else {
            0.0
        };
    }

    let a = atan(y / x);

    if x < 0.0 {
        if a <= 0.0 {
            a + PI
        } else {
            a - PI
        }
    } else {
        a
    }
}

/// Rational approximation, valid for `|arg| ≤ √2 − 1`.
fn mxatan(arg: f64) -> f64 {
    let argsq = arg * arg;

    let num = (((P4 * argsq + P3) * argsq + P2) * argsq + P1) * argsq + P0;
    let den =
        ((((argsq + Q4) * argsq + Q3) * argsq + Q2) * argsq + Q1) * argsq + Q0;

    num / den * arg
}

/// Reduces a non-negative argument into the range of `mxatan`.
fn msatan(arg: f64) -> f64 {
    if arg < SQ2M1 {
        mxatan(arg)
    } else if arg > SQ2P1 {
        PIO2 - mxatan(1.0 / arg)
    } else {
        PIO2 / 2.0 + mxatan((arg - 1.0) / (arg + 1.0))
    }
}
