//! Library functions and constants.

use strum::{EnumCount, VariantArray};
use strum_macros::{EnumCount, EnumString, IntoStaticStr, VariantArray};

use crate::kernel;

/// A function exported by the math library.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumString,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase")]
#[rustfmt::skip]
pub enum MathFn {
    Abs,   Acos,  Asin,  Atan,  Atan2, Ceil,
    Cos,   Cosh,  Deg,   Exp,   Floor, Fmod,
    Frexp, Ldexp, Log,   Log10, Modf,  Pow,
    Rad,   Sin,   Sinh,  Sqrt,  Tan,   Tanh,
}

/// Native entry point of a library function.
#[derive(Clone, Copy)]
pub enum Native {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
    /// One argument, two results.
    Split(fn(f64) -> (f64, f64)),
}

impl Native {
    /// Minimum number of arguments the function consumes.
    pub const fn arity(&self) -> usize {
        match self {
            Native::Unary(_) | Native::Split(_) => 1,
            Native::Binary(_) => 2,
        }
    }

    /// Number of values the function produces.
    pub const fn results(&self) -> usize {
        match self {
            Native::Unary(_) | Native::Binary(_) => 1,
            Native::Split(_) => 2,
        }
    }
}

impl MathFn {
    pub const ALL: &'static [MathFn] = <Self as VariantArray>::VARIANTS;
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Looks up a function by name, with or without a `math.` prefix.
    pub fn resolve(name: &str) -> Option<MathFn> {
        name.strip_prefix("math.").unwrap_or(name).parse().ok()
    }

    pub fn native(self) -> Native {
        match self {
            MathFn::Abs => Native::Unary(f64::abs),
            MathFn::Acos => Native::Unary(kernel::acos),
            MathFn::Asin => Native::Unary(kernel::asin),
            MathFn::Atan => Native::Unary(kernel::atan),
            MathFn::Atan2 => Native::Binary(kernel::atan2),
            MathFn::Ceil => Native::Unary(f64::ceil),
            MathFn::Cos => Native::Unary(f64::cos),
            MathFn::Cosh => Native::Unary(kernel::cosh),
            MathFn::Deg => Native::Unary(f64::to_degrees),
            MathFn::Exp => Native::Unary(kernel::exp),
            MathFn::Floor => Native::Unary(f64::floor),
            MathFn::Fmod => Native::Binary(kernel::fmod),
            MathFn::Frexp => Native::Split(kernel::frexp),
            MathFn::Ldexp => Native::Binary(kernel::ldexp),
            MathFn::Log => Native::Unary(kernel::ln),
            MathFn::Log10 => Native::Unary(kernel::log10),
            MathFn::Modf => Native::Split(kernel::modf),
            MathFn::Pow => Native::Binary(kernel::pow),
            MathFn::Rad => Native::Unary(f64::to_radians),
            MathFn::Sin => Native::Unary(f64::sin),
            MathFn::Sinh => Native::Unary(kernel::sinh),
            MathFn::Sqrt => Native::Unary(f64::sqrt),
            MathFn::Tan => Native::Unary(f64::tan),
            MathFn::Tanh => Native::Unary(kernel::tanh),
        }
    }

    pub fn arity(self) -> usize {
        self.native().arity()
    }
}

/// A constant exported by the math library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MathConst {
    Pi,
    /// The largest finite double.
    Huge,
}

impl MathConst {
    pub fn resolve(name: &str) -> Option<MathConst> {
        name.strip_prefix("math.").unwrap_or(name).parse().ok()
    }

    pub fn value(self) -> f64 {
        match self {
            MathConst::Pi => std::f64::consts::PI,
            MathConst::Huge => f64::MAX,
        }
    }
}
