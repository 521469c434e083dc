use super::Expr;

/// `lhs = rhs`, one term of a season predicate: the month of the date
/// column compared with a month number.
///
/// Follows SQL: when either side is null the term is null, not `false`, so
/// a row without a date is neither in nor out of a season.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEq {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprEq {
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }
}

impl From<ExprEq> for Expr {
    fn from(value: ExprEq) -> Self {
        Self::Eq(value)
    }
}
