//! Calling convention for library functions.

use std::error::Error;
use std::fmt;

use smallvec::{smallvec, SmallVec};

use super::functions::{MathFn, Native};

/// Results of a library call, in order.
pub type Values = SmallVec<[f64; 2]>;

/// A function was called with fewer arguments than it consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentCountError {
    pub function: MathFn,
    pub expected: usize,
    pub got: usize,
}

impl fmt::Display for ArgumentCountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "bad argument count for `{}`: expected at least {}, got {}",
            self.function.name(),
            self.expected,
            self.got
        )
    }
}

impl Error for ArgumentCountError {}

/// Calls `function` on `args`.
///
/// Surplus arguments are ignored. Numeric domain errors are not reported
/// here; they show up as NaN or infinite values.
pub fn invoke(
    function: MathFn,
    args: &[f64],
) -> Result<Values, ArgumentCountError> {
    let native = function.native();
    let expected = native.arity();

    if args.len() < expected {
        return Err(ArgumentCountError {
            function,
            expected,
            got: args.len(),
        });
    }

    let values = match native {
        Native::Unary(f) => smallvec![f(args[0])],
        Native::Binary(f) => smallvec![f(args[0], args[1])],
        Native::Split(f) => {
            let (first, second) = f(args[0]);

            smallvec![first, second]
        }
    };

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn too_few_arguments() {
        for &f in MathFn::ALL {
            let args = vec![1.0; f.arity() - 1];

            assert_eq!(
                invoke(f, &args),
                Err(ArgumentCountError {
                    function: f,
                    expected: f.arity(),
                    got: f.arity() - 1,
                })
            );
        }
    }

    #[test]
    fn enough_arguments() {
        for &f in MathFn::ALL {
            let values = invoke(f, &[0.5, 0.5]).unwrap();

            assert_eq!(values.len(), f.native().results(), "{}", f.name());
        }
    }

    #[test]
    fn results_in_order() {
        let call = |f, args: &[f64]| invoke(f, args).unwrap().to_vec();

        assert_eq!(call(MathFn::Modf, &[-3.25]), [-3.0, -0.25]);
        assert_eq!(call(MathFn::Frexp, &[3.0]), [0.75, 2.0]);
        assert_eq!(call(MathFn::Atan2, &[1.0, 0.0]), [FRAC_PI_2]);
        assert_eq!(call(MathFn::Pow, &[2.0, 10.0, 99.0]), [1024.0]);
    }

    #[test]
    fn domain_errors_are_values() {
        assert!(invoke(MathFn::Log, &[-1.0]).unwrap()[0].is_nan());
        assert!(invoke(MathFn::Asin, &[2.0]).unwrap()[0].is_nan());
        assert_eq!(invoke(MathFn::Log, &[0.0]).unwrap()[0], f64::NEG_INFINITY);
    }

    #[test]
    fn error_message() {
        let err = invoke(MathFn::Atan2, &[1.0]).unwrap_err();

        assert_eq!(
            err.to_string(),
            "bad argument count for `atan2`: expected at least 2, got 1"
        );
    }
}
