//! # stackcalc
//!
//! stackcalc evaluates infix arithmetic expressions over `+ - * / ^ ( )`.
//! It applies the usual precedence rules, reads `+`/`-` as a sign at the start
//! of an expression or right after `(`, and treats `^` as right-associative.
//!
//! Evaluation is a single streaming pass with an operand stack and an operator
//! stack; no syntax tree is built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{engine::core::Evaluator, error::EvalResult};

/// Drives the evaluation of an expression.
///
/// This module ties the lexer to the two-stack reduction loop. The lexer cuts
/// the input into operators and literals; the evaluator consumes them in one
/// pass and produces the final value.
///
/// # Responsibilities
/// - Splits the input into operator tokens and literal runs.
/// - Rewrites leading signs into subtractions from zero.
/// - Reduces operators against their operands in precedence order.
pub mod engine;
/// Provides the error type for evaluation.
///
/// This module defines every error that evaluation can raise, each carrying
/// the byte offset in the input where it was detected.
pub mod error;
/// Defines the closed set of operators.
///
/// This module declares the binary arithmetic operators and the parentheses,
/// the precedence relation between them, and the numeric reduction of the
/// arithmetic ones.
///
/// # Responsibilities
/// - Maps symbols to operators and back.
/// - Decides whether a stacked operator reduces before an incoming one.
/// - Computes `left <op> right` for the arithmetic operators.
pub mod operator;
/// General helpers used by the engine.
pub mod util;

/// Evaluates an arithmetic expression.
///
/// Whitespace is not skipped: it is read as part of a literal and makes the
/// evaluation fail. Division by zero is not an error and yields an infinity
/// or NaN.
///
/// # Errors
/// Returns an error if the expression is empty, contains a malformed number,
/// has an operator without operands, or has unbalanced parentheses.
///
/// # Examples
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
/// assert_eq!(evaluate("-5+10").unwrap(), 5.0);
/// assert!(evaluate("2+").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}

/// Returns whether [`evaluate`] succeeds on `expression`.
///
/// # Examples
/// ```
/// use stackcalc::is_valid;
///
/// assert!(is_valid("(2+3)*4"));
/// assert!(!is_valid(""));
/// assert!(!is_valid("3+-5"));
/// ```
#[must_use]
pub fn is_valid(expression: &str) -> bool {
    evaluate(expression).is_ok()
}
