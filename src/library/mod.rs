//! The math library as seen by a script: named functions, named constants
//! and the convention for calling them.

mod call;
mod functions;

pub use call::{invoke, ArgumentCountError, Values};
pub use functions::{MathConst, MathFn, Native};
