use std::fmt;

use logos::Logos;

use crate::{error::LexError, interpreter::source::{LineMap, Source}};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// String literal tokens; the text keeps its surrounding quotes.
    #[token("\"", lex_string)]
    Str(String),
    /// Identifier tokens such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `toolkit` (reserved)
    #[token("toolkit")]
    Toolkit,
    /// `recover` (reserved)
    #[token("recover")]
    Recover,
    /// `door`
    #[token("door")]
    Door,
    /// `show`
    #[token("show")]
    Show,
    /// `until`
    #[token("until")]
    Until,
    /// `over` (reserved)
    #[token("over")]
    Over,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `or`
    #[token("or")]
    Or,
    /// `and`
    #[token("and")]
    And,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `// Comments` running to the end of their original line.
    #[token("//", skip_comment)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Str(s) | Self::Identifier(s) => return f.write_str(s),
            Self::Toolkit => "toolkit",
            Self::Recover => "recover",
            Self::Door => "door",
            Self::Show => "show",
            Self::Until => "until",
            Self::Over => "over",
            Self::If => "if",
            Self::Else => "else",
            Self::Or => "or",
            Self::And => "and",
            Self::True => "true",
            Self::False => "false",
            Self::Comment => "//",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Equals => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Bang => "!",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Semicolon => ";",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Ignored => " ",
        };
        f.write_str(text)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Holds the line layout of the original file so that string literals and
/// comments can be bounded by the line they start on, even though the lexer
/// itself sees the lines joined together.
#[derive(Default)]
pub struct LexerExtras {
    /// Offsets of the original lines inside the joined text.
    pub lines: LineMap,
}

/// The output of [`tokenize`].
#[derive(Debug, Default)]
pub struct Lexed {
    /// Tokens paired with the original line they start on.
    pub tokens: Vec<(Token, usize)>,
    /// Diagnostics for input that could not be tokenized. Lexing continues
    /// past each of them.
    pub errors: Vec<LexError>,
}

/// Converts a prepared source into tokens.
///
/// Unrecognized input never stops the lexer: it is recorded in
/// [`Lexed::errors`] and skipped.
///
/// # Example
/// ```
/// use doorlang::interpreter::{lexer::{Token, tokenize}, source::Source};
///
/// let lexed = tokenize(&Source::from_text("x = 1 @;"));
///
/// assert_eq!(lexed.errors.len(), 1);
/// assert_eq!(lexed.tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::Equals, 1),
///                 (Token::Number(1), 1),
///                 (Token::Semicolon, 1)]);
/// ```
#[must_use]
pub fn tokenize(source: &Source) -> Lexed {
    let mut lexed = Lexed::default();
    let extras = LexerExtras { lines: source.lines().clone() };
    let mut lexer = Token::lexer_with_extras(source.text(), extras);

    while let Some(token) = lexer.next() {
        let line = lexer.extras.lines.line_of(lexer.span().start);
        match token {
            Ok(tok) => lexed.tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice();
                let error = if slice.len() > 1 && slice.bytes().all(|b| b.is_ascii_digit()) {
                    LexError::LiteralTooLarge { literal: slice.to_string(),
                                                line }
                } else {
                    LexError::InvalidCharacter { character: slice.chars().next().unwrap_or(' '),
                                                 line }
                };
                tracing::warn!(%error, "lexical error");
                lexed.errors.push(error);
            },
        }
    }

    tracing::debug!(tokens = lexed.tokens.len(),
                    errors = lexed.errors.len(),
                    "tokenized source");
    lexed
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit into an `i64`, which surfaces
/// as a lexical error covering the whole run of digits.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extends an opening `"` up to the last `"` on the same original line.
///
/// Returns `None` when there is no closing quote on that line, so only the
/// opening quote is reported and skipped.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let line_end = lex.extras.lines.line_end(lex.span().start);
    let rest = lex.source().get(lex.span().end..line_end)?;
    let close = rest.rfind('"')?;
    lex.bump(close + 1);
    Some(lex.slice().to_string())
}

/// Skips a `//` comment up to the end of the original line it ends on.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let line_end = lex.extras.lines.line_end(lex.span().end - 1);
    lex.bump(line_end.saturating_sub(lex.span().end));
    logos::Skip
}
