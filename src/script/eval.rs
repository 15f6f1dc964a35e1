//! Evaluation of script expressions against the math library.

use std::error::Error;
use std::fmt;

use itertools::{Itertools, Position};
use smallvec::{smallvec, SmallVec};

use super::ast::{ExprKind, Expression, Span};
use crate::library::{self, ArgumentCountError, MathConst, MathFn, Values};
use crate::utils::Diagnostic;

#[derive(Debug)]
pub enum EvalErrorKind {
    UnknownFunction(String),
    UnknownConstant(String),
    ArgumentCount(ArgumentCountError),
}

#[derive(Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

impl EvalError {
    fn new(kind: EvalErrorKind, span: Span) -> EvalError {
        EvalError { kind, span }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error().with_message(self.to_string());

        match &self.kind {
            EvalErrorKind::UnknownFunction(_) => diagnostic
                .with_primary(self.span, "not a library function")
                .with_note(format!(
                    "available functions: {}",
                    MathFn::ALL.iter().map(|f| f.name()).join(", ")
                )),
            EvalErrorKind::UnknownConstant(_) => diagnostic
                .with_primary(self.span, "not a library constant")
                .with_note("available constants: pi, huge"),
            EvalErrorKind::ArgumentCount(err) => diagnostic.with_primary(
                self.span,
                format!("called with {} argument(s)", err.got),
            ),
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            EvalErrorKind::UnknownFunction(name) => {
                write!(f, "unknown function `{name}`")
            }
            EvalErrorKind::UnknownConstant(name) => {
                write!(f, "unknown constant `{name}`")
            }
            EvalErrorKind::ArgumentCount(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl Error for EvalError {}

/// Evaluates an expression to all of its values.
///
/// A call in the last argument position passes on every value it produces;
/// elsewhere, and under negation or parentheses, only the first value is
/// kept.
pub fn eval(expr: &Expression) -> Result<Values, EvalError> {
    match &expr.kind {
        ExprKind::Num(value) => Ok(smallvec![*value]),
        ExprKind::Const(name) => {
            let constant = MathConst::resolve(&name.id).ok_or_else(|| {
                EvalError::new(
                    EvalErrorKind::UnknownConstant(name.id.clone()),
                    name.span,
                )
            })?;

            Ok(smallvec![constant.value()])
        }
        ExprKind::Neg(arg) => Ok(smallvec![-first(&eval(arg)?)]),
        ExprKind::Paren(inner) => Ok(smallvec![first(&eval(inner)?)]),
        ExprKind::Call(name, args) => {
            let function = MathFn::resolve(&name.id).ok_or_else(|| {
                EvalError::new(
                    EvalErrorKind::UnknownFunction(name.id.clone()),
                    name.span,
                )
            })?;

            let args = eval_arguments(args)?;

            log::debug!(
                "calling `{}` with ({})",
                function.name(),
                args.iter().join(", ")
            );

            library::invoke(function, &args).map_err(|err| {
                EvalError::new(EvalErrorKind::ArgumentCount(err), expr.span)
            })
        }
    }
}

fn eval_arguments(
    args: &[Expression],
) -> Result<SmallVec<[f64; 4]>, EvalError> {
    let mut values = SmallVec::new();

    for (pos, arg) in args.iter().with_position() {
        let result = eval(arg)?;

        if matches!(pos, Position::Last | Position::Only) {
            values.extend(result);
        } else {
            values.push(first(&result));
        }
    }

    Ok(values)
}

fn first(values: &Values) -> f64 {
    // Every expression yields at least one value.
    values[0]
}
