//! Parser for scripts.

use std::str::FromStr;

use pest::error::{Error, ErrorVariant};
use pest_consume::{match_nodes, Parser};

use super::ast;

#[derive(Parser)]
#[grammar = "script/syntax.pest"]
pub struct ScriptParser;

impl ScriptParser {
    /// Parses a script into its sequence of statements.
    pub fn parse_file(
        src: &str,
    ) -> Result<Vec<ast::Expression>, Box<Error<Rule>>> {
        let nodes = ScriptParser::parse(Rule::file, src)?;

        ScriptParser::file(nodes.single()?).map_err(Box::new)
    }
}

type ParseResult<T> = Result<T, Error<Rule>>;
type Node<'i> = pest_consume::Node<'i, Rule, ()>;

#[pest_consume::parser]
impl ScriptParser {
    fn EOI(_input: Node) -> ParseResult<()> {
        Ok(())
    }

    fn file(input: Node) -> ParseResult<Vec<ast::Expression>> {
        Ok(match_nodes!(input.into_children();
            [expr(statements).., EOI(_)] => statements.collect(),
        ))
    }

    fn expr(input: Node) -> ParseResult<ast::Expression> {
        let span = ast::Span::from(input.as_span());

        let kind = match_nodes!(input.into_children();
            [minus(_), expr(arg)] => ast::ExprKind::Neg(Box::new(arg)),
            [call((name, args))] => ast::ExprKind::Call(name, args),
            [number(value)] => ast::ExprKind::Num(value),
            [symbol(name)] => ast::ExprKind::Const(name),
            [expr(inner)] => ast::ExprKind::Paren(Box::new(inner)),
        );

        Ok(ast::Expression { kind, span })
    }

    fn call(input: Node) -> ParseResult<(ast::Symbol, Vec<ast::Expression>)> {
        Ok(match_nodes!(input.into_children();
            [symbol(name), expr(args)..] => (name, args.collect()),
        ))
    }

    fn minus(_input: Node) -> ParseResult<()> {
        Ok(())
    }

    fn number(input: Node) -> ParseResult<f64> {
        parse_node(&input)
    }

    fn symbol(input: Node) -> ParseResult<ast::Symbol> {
        Ok(ast::Symbol {
            id: input.as_str().into(),
            span: ast::Span::from(input.as_span()),
        })
    }
}

#[allow(clippy::result_large_err)]
fn parse_node<T>(input: &Node) -> ParseResult<T>
where
    T: FromStr,
    T::Err: ToString,
{
    input.as_str().parse().map_err(|err: T::Err| {
        Error::new_from_span(
            ErrorVariant::CustomError {
                message: err.to_string(),
            },
            input.as_span(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ast::ExprKind;

    #[test]
    fn statements() {
        let src = "exp(1); pi\n-- comment\n2.5e-3";
        let stmts = ScriptParser::parse_file(src).unwrap();

        assert_eq!(stmts.len(), 3);
        assert!(matches!(
            &stmts[0].kind,
            ExprKind::Call(name, args) if name.id == "exp" && args.len() == 1
        ));
        assert!(matches!(
            &stmts[1].kind,
            ExprKind::Const(name) if name.id == "pi"
        ));
        assert!(matches!(stmts[2].kind, ExprKind::Num(v) if v == 2.5e-3));
    }

    #[test]
    fn nesting() {
        let stmts = ScriptParser::parse_file("math.atan2(-(1), .5)").unwrap();

        let ExprKind::Call(name, args) = &stmts[0].kind else {
            panic!("expected a call");
        };

        assert_eq!(name.id, "math.atan2");
        assert!(matches!(
            &args[0].kind,
            ExprKind::Neg(inner) if matches!(inner.kind, ExprKind::Paren(_))
        ));
        assert!(matches!(args[1].kind, ExprKind::Num(v) if v == 0.5));
    }

    #[test]
    fn spans() {
        let stmts = ScriptParser::parse_file("  modf(3.25)").unwrap();

        assert_eq!(stmts[0].span, ast::Span { start: 2, end: 12 });
    }

    #[test]
    fn empty() {
        assert!(ScriptParser::parse_file("  -- nothing\n").unwrap().is_empty());
    }

    #[test]
    fn syntax_errors() {
        assert!(ScriptParser::parse_file("exp(1").is_err());
        assert!(ScriptParser::parse_file("pow(1,,2)").is_err());
        assert!(ScriptParser::parse_file("1 +").is_err());
    }
}
