/// The two-stack reduction loop.
///
/// Scans the token stream once from left to right, keeping an operand stack
/// and an operator stack, and reduces whenever the operator on top of the
/// stack takes precedence over the incoming one.
pub mod core;
/// The lexer splits an expression into operators and literals.
///
/// Each of `+ - * / ^ ( )` is its own token. Every maximal run of other
/// characters becomes one literal token, which is later converted to a number
/// or rejected.
pub mod lexer;
