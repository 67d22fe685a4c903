use crate::error::{EvalError, EvalResult};

/// Checks whether `text` has the shape of a plain decimal literal.
///
/// A literal is made of ASCII digits with at most one `.` and at least one
/// digit. Exponents, signs, whitespace and named values such as `inf` are
/// rejected.
///
/// ## Example
/// ```
/// use stackcalc::util::literal::is_decimal_literal;
///
/// assert!(is_decimal_literal("3.25"));
/// assert!(is_decimal_literal(".5"));
/// assert!(!is_decimal_literal("1e10"));
/// assert!(!is_decimal_literal(" 7"));
/// assert!(!is_decimal_literal("."));
/// ```
#[must_use]
pub fn is_decimal_literal(text: &str) -> bool {
    let mut digits = 0_usize;
    let mut dots = 0_usize;

    for byte in text.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}

/// Converts a numeric literal to `f64`.
///
/// ## Errors
/// Returns [`EvalError::MalformedLiteral`] if `text` is not a plain decimal
/// literal.
///
/// ## Parameters
/// - `text`: The literal as it appears in the expression.
/// - `position`: Offset of the literal, used for error reporting.
///
/// ## Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(EvalError::MalformedLiteral { .. })`: If the text is not a number.
///
/// ## Example
/// ```
/// use stackcalc::{error::EvalError, util::literal::parse_literal};
///
/// assert_eq!(parse_literal("42.5", 0).unwrap(), 42.5);
///
/// let err = parse_literal("4x", 3).unwrap_err();
/// assert!(matches!(err, EvalError::MalformedLiteral { position: 3, .. }));
/// ```
pub fn parse_literal(text: &str, position: usize) -> EvalResult<f64> {
    let malformed = || EvalError::MalformedLiteral { literal: text.to_string(),
                                                     position };

    if !is_decimal_literal(text) {
        return Err(malformed());
    }

    text.parse().map_err(|_| malformed())
}
