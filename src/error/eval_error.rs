/// Result type used by the evaluation engine.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the expression passed by the caller.
pub enum EvalError {
    /// A run of non-operator characters could not be read as a number.
    MalformedLiteral {
        /// The offending text.
        literal:  String,
        /// Offset of the first character of the literal.
        position: usize,
    },
    /// A reduction needed an operand that was not there.
    StackUnderflow {
        /// Offset of the operator being reduced, or the input length when
        /// the expression produced no value.
        position: usize,
    },
    /// A parenthesis reached the reduction step without its partner.
    UnbalancedParenthesis {
        /// Offset of the parenthesis.
        position: usize,
    },
    /// The scan ended with more than one operand left over.
    DanglingOperands {
        /// The number of operands left on the stack.
        count: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedLiteral { literal, position } => {
                write!(f, "Error at {position}: Malformed number literal '{literal}'.")
            },
            Self::StackUnderflow { position } => {
                write!(f, "Error at {position}: Missing operand.")
            },
            Self::UnbalancedParenthesis { position } => {
                write!(f, "Error at {position}: Unbalanced parenthesis.")
            },
            Self::DanglingOperands { count } => write!(f,
                                                       "Error: Expression left {count} operands without an operator between them."),
        }
    }
}

impl std::error::Error for EvalError {}
