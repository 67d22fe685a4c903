use logos::Logos;

use crate::operator::Operator;

/// Represents a lexical token of an arithmetic expression.
///
/// The lexer never fails: any character that is not an operator symbol is
/// part of a literal, including whitespace.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token<'a> {
    /// One of `+ - * / ^ ( )`.
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    #[token("^", parse_operator)]
    #[token("(", parse_operator)]
    #[token(")", parse_operator)]
    Operator(Operator),
    /// Everything between two operators, such as `3.14`, `1e5` or ` 2`.
    #[regex(r"[^+\-*/^()]+", |lex| lex.slice(), allow_greedy = true)]
    Literal(&'a str),
}

/// Maps the current single-character slice to its operator.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Operator)`: The operator written by the slice.
/// - `None`: If the slice is not an operator symbol.
fn parse_operator<'a>(lex: &logos::Lexer<'a, Token<'a>>) -> Option<Operator> {
    lex.slice().chars().next().and_then(Operator::from_symbol)
}
