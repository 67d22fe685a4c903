use log::{debug, trace};
use logos::Logos;

use crate::{
    engine::lexer::Token,
    error::{EvalError, EvalResult},
    operator::{Operator, Paren, Precedence},
    util::literal::parse_literal,
};

/// Holds the state of a single evaluation.
///
/// ## Usage
///
/// An `Evaluator` is created for one expression and consumed by
/// [`Evaluator::evaluate`], so no state is shared between calls. Both stacks
/// are owned by the evaluator and dropped with it.
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Values waiting to be combined.
    pub operands:  Vec<f64>,
    /// Operators waiting to be applied, with the offset they were scanned at.
    pub operators: Vec<(Operator, usize)>,
}

impl Evaluator {
    /// Creates an evaluator with empty stacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates `expression` in a single left-to-right pass.
    ///
    /// A `+` or `-` at the very start of the expression or directly after `(`
    /// is read as a sign: a `0` operand is pushed in front of it, so `-5`
    /// evaluates as `0-5`. Signs anywhere else (`3+-5`, `--5`) are not
    /// recognized and make the evaluation fail.
    ///
    /// # Parameters
    /// - `expression`: The infix expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// Returns an [`EvalError`] if a literal is malformed, an operator lacks
    /// an operand, a parenthesis is unbalanced, or operands are left over.
    ///
    /// # Example
    /// ```
    /// use stackcalc::engine::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::new().evaluate("(-5+10)*2").unwrap(), 10.0);
    /// ```
    pub fn evaluate(mut self, expression: &str) -> EvalResult<f64> {
        let mut operand_start = true;

        for (token, span) in Token::lexer(expression).spanned() {
            let Ok(token) = token else {
                return Err(EvalError::MalformedLiteral { literal:  expression[span.clone()].to_string(),
                                                         position: span.start, });
            };

            match token {
                Token::Literal(text) => {
                    self.operands.push(parse_literal(text, span.start)?);
                    operand_start = false;
                },
                Token::Operator(op) => {
                    if operand_start && op.is_sign() {
                        self.operands.push(0.0);
                    }
                    self.push_operator(op, span.start)?;
                    operand_start = op == Operator::Paren(Paren::Left);
                },
            }
        }

        let value = self.finish(expression.len())?;
        debug!("evaluated {expression:?} to {value}");
        Ok(value)
    }

    /// Handles an incoming operator.
    ///
    /// Reduces the stack while its top takes precedence, then either discards
    /// a matched `(` or pushes `incoming`.
    fn push_operator(&mut self, incoming: Operator, position: usize) -> EvalResult<()> {
        while let Some(&(top, top_position)) = self.operators.last() {
            match top.precede(incoming) {
                Precedence::Higher => {
                    self.operators.pop();
                    self.reduce(top, top_position)?;
                },
                Precedence::Equal => {
                    self.operators.pop();
                    trace!("matched parentheses at {top_position} and {position}");
                    return Ok(());
                },
                Precedence::Lower => break,
            }
        }

        self.operators.push((incoming, position));
        Ok(())
    }

    /// Applies `op` to the two most recent operands and pushes the result.
    ///
    /// # Errors
    /// Returns [`EvalError::UnbalancedParenthesis`] if `op` is a parenthesis
    /// and [`EvalError::StackUnderflow`] if fewer than two operands remain.
    fn reduce(&mut self, op: Operator, position: usize) -> EvalResult<()> {
        let Operator::Binary(op) = op else {
            return Err(EvalError::UnbalancedParenthesis { position });
        };

        let right = self.pop_operand(position)?;
        let left = self.pop_operand(position)?;
        let value = op.apply(left, right);
        trace!("reduced {left} {op} {right} to {value}");

        self.operands.push(value);
        Ok(())
    }

    fn pop_operand(&mut self, position: usize) -> EvalResult<f64> {
        self.operands.pop().ok_or(EvalError::StackUnderflow { position })
    }

    /// Drains the operator stack and extracts the single remaining operand.
    fn finish(mut self, end: usize) -> EvalResult<f64> {
        while let Some((top, position)) = self.operators.pop() {
            self.reduce(top, position)?;
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::StackUnderflow { position: end }),
            rest => Err(EvalError::DanglingOperands { count: rest.len() }),
        }
    }
}
