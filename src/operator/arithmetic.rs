use crate::operator::BinaryOperator;

impl BinaryOperator {
    /// Reduces `left` and `right` with this operator.
    ///
    /// Floating-point semantics apply throughout: dividing by zero yields an
    /// infinity or NaN instead of an error, and `^` is computed with `powf`.
    ///
    /// # Parameters
    /// - `left`: The operand scanned first.
    /// - `right`: The operand scanned second.
    ///
    /// # Returns
    /// The value of `left <op> right`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::operator::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(10.0, 4.0), 6.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}
