use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, block::parse_block, utils::unexpected_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is exactly one block. Anything after its closing brace is an
/// error, as is an empty token stream.
///
/// # Parameters
/// - `tokens`: The complete token stream produced by the lexer.
///
/// # Returns
/// The root `Statement::Block`.
///
/// # Errors
/// Returns the first syntax error encountered; there is no recovery.
///
/// # Example
/// ```
/// use doorlang::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program, source::Source},
/// };
///
/// let lexed = tokenize(&Source::from_text("{ x = 1; show(x); }"));
/// let program = parse_program(&lexed.tokens).unwrap();
///
/// assert!(matches!(program, Statement::Block { ref statements, .. } if statements.len() == 2));
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let parsed = match iter.next() {
        Some((Token::LBrace, line)) => parse_block(&mut iter, *line),
        Some((tok, line)) => Err(unexpected_token(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: last_line }),
    };

    // Inner productions cannot see where the input stopped.
    let program = parsed.map_err(|e| match e {
                            ParseError::UnexpectedEndOfInput { .. } => {
                                ParseError::UnexpectedEndOfInput { line: last_line }
                            },
                            other => other,
                        })?;

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                          line:  *line, });
    }

    tracing::debug!("parsed program");
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical_or(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, LiteralValue, UnaryOperator},
        interpreter::{lexer::tokenize, parser::utils::MAX_NESTING, source::Source},
    };

    fn parse(text: &str) -> ParseResult<Statement> {
        parse_program(&tokenize(&Source::from_text(text)).tokens)
    }

    fn parse_expr(text: &str) -> Expr {
        match parse(&format!("{{ x = {text}; }}")) {
            Ok(Statement::Block { mut statements, .. }) => match statements.remove(0) {
                Statement::Assignment { value, .. } => value,
                other => panic!("expected assignment, got {other:?}"),
            },
            other => panic!("expected block, got {other:?}"),
        }
    }

    fn int(n: i64) -> Expr {
        Expr::Literal { value: LiteralValue::Integer(n),
                        line:  1, }
    }

    fn var(name: &str) -> Expr {
        Expr::Variable { name: name.to_string(),
                         line: 1, }
    }

    fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
        Expr::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line: 1 }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse_expr("1 + 2 * 3"),
                   binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
    }

    #[test]
    fn binary_operators_are_left_associative() {
        assert_eq!(parse_expr("a - b - c"),
                   binary(binary(var("a"), BinaryOperator::Sub, var("b")),
                          BinaryOperator::Sub,
                          var("c")));
        assert_eq!(parse_expr("a == b != c"),
                   binary(binary(var("a"), BinaryOperator::Equal, var("b")),
                          BinaryOperator::NotEqual,
                          var("c")));
    }

    #[test]
    fn or_binds_looser_than_and() {
        assert_eq!(parse_expr("a or b and c"),
                   binary(var("a"),
                          BinaryOperator::Or,
                          binary(var("b"), BinaryOperator::And, var("c"))));
    }

    #[test]
    fn comparison_binds_looser_than_arithmetic() {
        assert_eq!(parse_expr("a + 1 > b == true"),
                   binary(binary(binary(var("a"), BinaryOperator::Add, int(1)),
                                 BinaryOperator::Greater,
                                 var("b")),
                          BinaryOperator::Equal,
                          Expr::Literal { value: LiteralValue::Bool(true),
                                          line:  1, }));
    }

    #[test]
    fn unary_operators_nest_to_the_right() {
        assert_eq!(parse_expr("!-a * b"),
                   binary(Expr::UnaryOp { op:   UnaryOperator::Not,
                                          expr: Box::new(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                                         expr: Box::new(var("a")),
                                                                         line: 1, }),
                                          line: 1, },
                          BinaryOperator::Mul,
                          var("b")));
    }

    #[test]
    fn parentheses_become_groupings() {
        assert_eq!(parse_expr("(1 + 2) * 3"),
                   binary(Expr::Grouping { expr: Box::new(binary(int(1),
                                                                 BinaryOperator::Add,
                                                                 int(2))),
                                           line: 1, },
                          BinaryOperator::Mul,
                          int(3)));
    }

    #[test]
    fn strings_lose_their_quotes() {
        assert_eq!(parse_expr("\"hello world\""),
                   Expr::Literal { value: LiteralValue::String("hello world".to_string()),
                                   line:  1, });
    }

    #[test]
    fn door_is_an_input_expression() {
        assert_eq!(parse_expr("door()"), Expr::Input { line: 1 });
    }

    #[test]
    fn chained_relational_operators_are_rejected() {
        assert_eq!(parse("{ x = a > b > c; }"),
                   Err(ParseError::UnexpectedToken { token: ">".to_string(),
                                                     line:  1, }));
    }

    #[test]
    fn dangling_else_binds_to_the_nearest_if() {
        let program = parse("{ if (a) if (b) x = 1; else x = 2; }").unwrap();
        let Statement::Block { statements, .. } = program else {
            panic!("expected block");
        };
        let Statement::Condition { then_branch,
                                   else_branch, .. } = &statements[0]
        else {
            panic!("expected condition");
        };
        assert!(else_branch.is_none());
        assert!(matches!(then_branch.as_ref(),
                         Statement::Condition { else_branch: Some(_), .. }));
    }

    #[test]
    fn blocks_keep_commands_in_order() {
        let program = parse("{ a = 1; { b = 2; c = 3; } d = 4; }").unwrap();
        let Statement::Block { statements, .. } = program else {
            panic!("expected block");
        };
        assert_eq!(statements.len(), 3);
        assert!(matches!(&statements[1], Statement::Block { statements, .. } if statements.len() == 2));
        assert!(matches!(&statements[2], Statement::Assignment { name, .. } if name == "d"));
    }

    #[test]
    fn empty_block_is_rejected() {
        assert_eq!(parse("{ }"), Err(ParseError::EmptyBlock { line: 1 }));
    }

    #[test]
    fn program_must_be_a_block() {
        assert_eq!(parse("x = 1;"),
                   Err(ParseError::UnexpectedToken { token: "x".to_string(),
                                                     line:  1, }));
        assert_eq!(parse(""), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse("{ x = 1; }\nshow(x);"),
                   Err(ParseError::UnexpectedTrailingTokens { token: "show".to_string(),
                                                              line:  2, }));
    }

    #[test]
    fn missing_semicolon_names_the_next_token() {
        assert_eq!(parse("{\nx = 1\ny = 2;\n}"),
                   Err(ParseError::UnexpectedToken { token: "y".to_string(),
                                                     line:  3, }));
    }

    #[test]
    fn unclosed_block_reports_the_last_line() {
        assert_eq!(parse("{\nx = 1;\nshow(x);"),
                   Err(ParseError::UnexpectedEndOfInput { line: 3 }));
    }

    #[test]
    fn reserved_keywords_are_rejected() {
        assert_eq!(parse("{ toolkit = 1; }"),
                   Err(ParseError::ReservedKeyword { keyword: "toolkit".to_string(),
                                                     line:    1, }));
        assert_eq!(parse("{ x = recover; }"),
                   Err(ParseError::ReservedKeyword { keyword: "recover".to_string(),
                                                     line:    1, }));
    }

    #[test]
    fn nesting_within_the_limit_is_accepted() {
        let text = format!("{{ x = {}1{}; }}", "(".repeat(64), ")".repeat(64));
        assert!(parse(&text).is_ok());
        assert!(parse(&format!("{{ x = {}1; }}", "- ".repeat(64))).is_ok());
    }

    #[test]
    fn deep_nesting_is_rejected() {
        let depth = 200_000;
        let text = format!("{{ x = {}1{}; }}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse(&text),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  1, }));

        let text = format!("{{ x = {}1; }}", "!".repeat(depth));
        assert_eq!(parse(&text),
                   Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                                    line:  1, }));

        let text = format!("{{\n{}x = 1;\n}}", "if (true)\n".repeat(depth));
        assert!(matches!(parse(&text), Err(ParseError::NestingTooDeep { .. })));
    }

    #[test]
    fn parsing_is_repeatable() {
        let text = "{ x = 0; until (x < 3) { show(x); x = x + 1; } }";
        assert_eq!(parse(text), parse(text));
    }
}
