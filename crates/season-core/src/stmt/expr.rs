use super::*;

/// A boolean or scalar expression over a single row.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// References the date column the predicate filters on
    Column(ExprColumn),

    /// `lhs = rhs`
    Eq(ExprEq),

    /// Month number (1 through 12) of a date expression
    Month(ExprMonth),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR a set of boolean expressions
    Or(ExprOr),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    /// The constant `false` expression.
    pub fn r#false() -> Expr {
        Expr::Value(Value::Bool(false))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Value(value.into())
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Expr::Value(i64::from(value).into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Value(value.into())
    }
}
