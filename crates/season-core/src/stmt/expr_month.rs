use super::Expr;

/// Extracts the month number, 1 through 12, from a date or timestamp.
///
/// Every SQL dialect spells this differently, so the serializer picks the
/// function at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMonth {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn month(expr: impl Into<Self>) -> Self {
        ExprMonth {
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprMonth> for Expr {
    fn from(value: ExprMonth) -> Self {
        Self::Month(value)
    }
}
