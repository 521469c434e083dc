use super::Expr;

/// Any of the month terms holds.
///
/// A season predicate is a single disjunction with one operand per selected
/// month. The node is kept even for a single operand, which keeps every
/// rendered term parenthesized.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// Disjunction over `operands`. Nested disjunctions are spliced in
    /// place; no operands at all is the constant `false`.
    pub fn any<I>(operands: I) -> Expr
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        let mut flat = vec![];

        for operand in operands {
            match operand.into() {
                Expr::Or(nested) => flat.extend(nested.operands),
                operand => flat.push(operand),
            }
        }

        if flat.is_empty() {
            return Expr::r#false();
        }

        ExprOr { operands: flat }.into()
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let operands: [Expr; 2] = [lhs.into(), rhs.into()];
        Expr::any(operands)
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Expr::Or(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::stmt::{Expr, ExprOr};

    #[test]
    fn nested_disjunctions_flatten() {
        let expr = Expr::or(Expr::or(1u32, 2u32), Expr::any([3u32, 4u32]));

        let Expr::Or(ExprOr { operands }) = expr else {
            panic!("expected a disjunction");
        };
        assert_eq!(operands, [1u32, 2, 3, 4].map(Expr::from).to_vec());
    }

    #[test]
    fn single_operand_stays_a_disjunction() {
        let expr = Expr::any([true]);
        assert!(matches!(&expr, Expr::Or(or) if or.operands.len() == 1));
        assert_eq!(Expr::any(Vec::<Expr>::new()), Expr::r#false());
    }
}
