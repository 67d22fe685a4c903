use crate::operator::{BinaryOperator, Operator, Paren};

/// Outcome of comparing the operator on top of the stack with an incoming one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Precedence {
    /// Reduce the stacked operator before going on.
    Higher,
    /// A `(` met its `)`: discard both without reducing.
    Equal,
    /// Push the incoming operator and keep scanning.
    Lower,
}

impl Operator {
    /// Compares `self`, the operator on top of the stack, with `incoming`.
    ///
    /// `+ -` and `* /` reduce against their own level and every level below,
    /// which makes them left-associative. `^` against `^` is `Lower`, which
    /// makes exponentiation right-associative. `(` never reduces and is only
    /// removed by a matching `)`. A stray `)` on the stack reports `Higher`
    /// against everything so that the engine rejects it right away.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::operator::{BinaryOperator, Operator, Paren, Precedence};
    ///
    /// let pow = Operator::Binary(BinaryOperator::Pow);
    /// let mul = Operator::Binary(BinaryOperator::Mul);
    ///
    /// assert_eq!(mul.precede(mul), Precedence::Higher);
    /// assert_eq!(pow.precede(pow), Precedence::Lower);
    /// assert_eq!(Operator::Paren(Paren::Left).precede(Operator::Paren(Paren::Right)),
    ///            Precedence::Equal);
    /// ```
    #[must_use]
    pub const fn precede(self, incoming: Self) -> Precedence {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};
        use Precedence::{Equal, Higher, Lower};

        match (self, incoming) {
            (Self::Paren(Paren::Left), Self::Paren(Paren::Right)) => Equal,
            (Self::Paren(Paren::Left), _) | (Self::Binary(_), Self::Paren(Paren::Left)) => Lower,
            (Self::Paren(Paren::Right), _) | (Self::Binary(_), Self::Paren(Paren::Right)) => Higher,
            (Self::Binary(top), Self::Binary(next)) => match (top, next) {
                (Add | Sub, Add | Sub)
                | (Mul | Div, Add | Sub | Mul | Div)
                | (Pow, Add | Sub | Mul | Div) => Higher,
                (Add | Sub, Mul | Div | Pow) | (Mul | Div | Pow, Pow) => Lower,
            },
        }
    }
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let relation = match self {
            Self::Higher => "higher",
            Self::Equal => "equal",
            Self::Lower => "lower",
        };
        write!(f, "{relation}")
    }
}
