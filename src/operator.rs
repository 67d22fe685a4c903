/// Numeric reduction for the binary arithmetic operators.
///
/// Only [`BinaryOperator`] carries an `apply` function, so parentheses can
/// never be handed to numeric reduction.
pub mod arithmetic;
/// The three-valued precedence relation between a stacked operator and an
/// incoming one.
///
/// The relation is not a numeric binding power: it encodes associativity
/// directly (exponentiation is right-associative, everything else is
/// left-associative) and signals a matched pair of parentheses.
pub mod precedence;

pub use precedence::Precedence;

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a grouping parenthesis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Left,
    /// `)`
    Right,
}

/// Any symbol recognized as an operator by the evaluation engine.
///
/// The set is closed: the five arithmetic operators and the two parentheses.
/// Every other character belongs to a numeric literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// An arithmetic operator that reduces two operands.
    Binary(BinaryOperator),
    /// A parenthesis, which only ever groups.
    Paren(Paren),
}

impl Operator {
    /// All seven operators, in table order.
    pub const ALL: [Self; 7] = [Self::Binary(BinaryOperator::Add),
                                Self::Binary(BinaryOperator::Sub),
                                Self::Binary(BinaryOperator::Mul),
                                Self::Binary(BinaryOperator::Div),
                                Self::Binary(BinaryOperator::Pow),
                                Self::Paren(Paren::Left),
                                Self::Paren(Paren::Right)];

    /// Looks up the operator written as `symbol`.
    ///
    /// ## Example
    /// ```
    /// use stackcalc::operator::{BinaryOperator, Operator, Paren};
    ///
    /// assert_eq!(Operator::from_symbol('^'), Some(Operator::Binary(BinaryOperator::Pow)));
    /// assert_eq!(Operator::from_symbol(')'), Some(Operator::Paren(Paren::Right)));
    /// assert_eq!(Operator::from_symbol('?'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Binary(BinaryOperator::Add)),
            '-' => Some(Self::Binary(BinaryOperator::Sub)),
            '*' => Some(Self::Binary(BinaryOperator::Mul)),
            '/' => Some(Self::Binary(BinaryOperator::Div)),
            '^' => Some(Self::Binary(BinaryOperator::Pow)),
            '(' => Some(Self::Paren(Paren::Left)),
            ')' => Some(Self::Paren(Paren::Right)),
            _ => None,
        }
    }

    /// Returns the literal symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Paren(paren) => paren.symbol(),
        }
    }

    /// Whether this operator is a sign when it opens an operand position.
    #[must_use]
    pub const fn is_sign(self) -> bool {
        matches!(self, Self::Binary(BinaryOperator::Add | BinaryOperator::Sub))
    }
}

impl BinaryOperator {
    /// Returns the literal symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl Paren {
    /// Returns the literal symbol of the parenthesis.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Left => '(',
            Self::Right => ')',
        }
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl From<Paren> for Operator {
    fn from(paren: Paren) -> Self {
        Self::Paren(paren)
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(symbol)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Paren {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
