/// Evaluation errors.
///
/// Defines every failure that can surface while scanning and reducing an
/// expression: malformed numeric literals, operand stack underflow, stray or
/// unclosed parentheses and leftover operands.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
