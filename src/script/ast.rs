//! Abstract syntax for scripts.

use std::ops::Range;

use pest::error::InputLocation;

/// A byte range in the script source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span {
            start: span.start(),
            end: span.end(),
        }
    }
}

impl From<InputLocation> for Span {
    fn from(location: InputLocation) -> Self {
        match location {
            InputLocation::Pos(pos) => Span {
                start: pos,
                end: pos,
            },
            InputLocation::Span((start, end)) => Span { start, end },
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

#[derive(Debug)]
pub enum ExprKind {
    Num(f64),
    Const(Symbol),
    Neg(Box<Expression>),
    /// A parenthesised expression, which keeps only its first value.
    Paren(Box<Expression>),
    Call(Symbol, Vec<Expression>),
}

#[derive(Debug)]
pub struct Expression {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug)]
pub struct Symbol {
    pub id: String,
    pub span: Span,
}
