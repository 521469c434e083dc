use super::Expr;

/// Inverts a season disjunction, turning "in these seasons" into "in none
/// of them".
///
/// A null inner result stays null, so rows without a date are dropped by
/// the negated predicate as well.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(expr: impl Into<Self>) -> Self {
        ExprNot {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
