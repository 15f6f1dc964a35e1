//! Deterministic elementary functions.
//!
//! Every function here is computed from first principles (series summation,
//! range reduction, rational approximation, repeated squaring) using only
//! IEEE-754 basic arithmetic and `sqrt`, both of which are correctly rounded.
//! Results are therefore identical on every host.

mod atan;
mod constants;
mod decompose;
mod exp;
mod hyperbolic;
mod inverse;
mod log;
mod pow;

pub use atan::{atan, atan2};
pub use decompose::{fmod, frexp, ldexp, modf};
pub use exp::exp;
pub use hyperbolic::{cosh, sinh, tanh};
pub use inverse::{acos, asin};
pub use log::{ln, log10};
pub use pow::pow;

/// Termination threshold shared by all series summations.
pub const EPS: f64 = 1e-15;

/// Upper bound on the number of terms any series may accumulate.
pub const MAX_TERMS: u32 = 4096;

/// A series evaluation together with the number of terms it consumed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Series {
    pub value: f64,
    pub terms: u32,
}

impl Series {
    /// A value produced without summing any terms.
    pub(crate) fn exact(value: f64) -> Series {
        Series { value, terms: 0 }
    }
}
