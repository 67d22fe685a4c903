use stackcalc::operator::{BinaryOperator, Operator, Paren, Precedence};

const H: Precedence = Precedence::Higher;
const E: Precedence = Precedence::Equal;
const L: Precedence = Precedence::Lower;

/// Rows are the stacked operator, columns the incoming one, both in
/// `Operator::ALL` order: `+ - * / ^ ( )`.
const TABLE: [[Precedence; 7]; 7] = [[H, H, L, L, L, L, H],
                                     [H, H, L, L, L, L, H],
                                     [H, H, H, H, L, L, H],
                                     [H, H, H, H, L, L, H],
                                     [H, H, H, H, L, L, H],
                                     [L, L, L, L, L, L, E],
                                     [H, H, H, H, H, H, H]];

#[test]
fn precedence_table_matches() {
    for (row, top) in Operator::ALL.into_iter().enumerate() {
        for (column, incoming) in Operator::ALL.into_iter().enumerate() {
            assert_eq!(top.precede(incoming),
                       TABLE[row][column],
                       "{top} against incoming {incoming}");
        }
    }
}

#[test]
fn only_matching_parentheses_are_equal() {
    let equal: Vec<_> = Operator::ALL.into_iter()
                                     .flat_map(|top| Operator::ALL.map(|incoming| (top, incoming)))
                                     .filter(|(top, incoming)| top.precede(*incoming) == E)
                                     .collect();

    assert_eq!(equal, vec![(Operator::Paren(Paren::Left), Operator::Paren(Paren::Right))]);
}

#[test]
fn symbols_round_trip() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        assert_eq!(op.to_string(), op.symbol().to_string());
    }
    assert_eq!(Operator::try_from('.'), Err('.'));
    assert_eq!(Operator::from_symbol(' '), None);
}

#[test]
fn only_plus_and_minus_are_signs() {
    let signs: Vec<_> = Operator::ALL.into_iter().filter(|op| op.is_sign()).collect();

    assert_eq!(signs,
               vec![Operator::from(BinaryOperator::Add), Operator::from(BinaryOperator::Sub)]);
}

#[test]
fn apply_computes_each_operator() {
    assert_eq!(BinaryOperator::Add.apply(2.0, 3.0), 5.0);
    assert_eq!(BinaryOperator::Sub.apply(2.0, 3.0), -1.0);
    assert_eq!(BinaryOperator::Mul.apply(2.0, 3.0), 6.0);
    assert_eq!(BinaryOperator::Div.apply(3.0, 2.0), 1.5);
    assert_eq!(BinaryOperator::Pow.apply(2.0, 3.0), 8.0);
    assert_eq!(BinaryOperator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
}
