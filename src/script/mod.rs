//! Script front end.
//!
//! A script is a sequence of expressions, optionally separated by `;`. Each
//! expression is a number, a library constant, a library call, a negation or
//! a parenthesised expression. Library names may carry a `math.` prefix.

pub mod ast;
mod eval;
mod parser;

pub use eval::{eval, EvalError, EvalErrorKind};
pub use parser::{Rule, ScriptParser};
