use crate::{
    stmt::{ConstInput, Expr, Input, Value},
    Error, Result,
};
use std::mem;

impl Expr {
    /// Evaluates the expression against `input` using SQL semantics: a null
    /// operand makes comparisons null, and null propagates through `OR` and
    /// `NOT` unless another operand decides the result.
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    /// Evaluates the expression as a row filter would: only `true` matches,
    /// both `false` and null reject the row.
    pub fn eval_bool(&self, mut input: impl Input) -> Result<bool> {
        match self.eval_ref(&mut input)? {
            Value::Bool(value) => Ok(value),
            Value::Null => Ok(false),
            value => Err(Error::not_boolean("a row filter", value)),
        }
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(ConstInput::new())
    }

    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::Column(expr_column) => input
                .resolve_column(expr_column)
                .ok_or_else(|| Error::unbound_column(expr_column)),
            Expr::Eq(expr_eq) => {
                let lhs = expr_eq.lhs.eval_ref(input)?;
                let rhs = expr_eq.rhs.eval_ref(input)?;

                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Null);
                }

                if mem::discriminant(&lhs) != mem::discriminant(&rhs) {
                    return Err(Error::incomparable(lhs, rhs));
                }

                Ok((lhs == rhs).into())
            }
            Expr::Month(expr_month) => match expr_month.expr.eval_ref(input)? {
                Value::Null => Ok(Value::Null),
                value => match value.month() {
                    Some(month) => Ok(Value::I64(month.into())),
                    None => Err(Error::not_a_date(value)),
                },
            },
            Expr::Not(expr_not) => match expr_not.expr.eval_ref(input)? {
                Value::Bool(value) => Ok((!value).into()),
                Value::Null => Ok(Value::Null),
                value => Err(Error::not_boolean("NOT", value)),
            },
            Expr::Or(expr_or) => {
                let mut saw_null = false;

                for operand in &expr_or.operands {
                    match operand.eval_ref(input)? {
                        Value::Bool(true) => return Ok(true.into()),
                        Value::Bool(false) => {}
                        Value::Null => saw_null = true,
                        value => return Err(Error::not_boolean("OR", value)),
                    }
                }

                Ok(if saw_null { Value::Null } else { false.into() })
            }
            Expr::Value(value) => Ok(value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::stmt::{Expr, ExprColumn, Value};
    use chrono::NaiveDate;

    fn created() -> ExprColumn {
        ExprColumn::qualified("node", "created").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_equality() {
        let expr = Expr::eq(Expr::month(created()), 7u32);

        assert!(expr.eval_bool(date(2024, 7, 4)).unwrap());
        assert!(!expr.eval_bool(date(2024, 8, 4)).unwrap());
    }

    #[test]
    fn null_date_propagates() {
        let expr = Expr::not(Expr::or(
            Expr::eq(Expr::month(created()), 1u32),
            Expr::eq(Expr::month(created()), 2u32),
        ));

        assert_eq!(expr.eval(None::<NaiveDate>).unwrap(), Value::Null);
        assert!(!expr.eval_bool(None::<NaiveDate>).unwrap());
    }

    #[test]
    fn or_short_circuits_over_null() {
        let expr = Expr::or(Value::Null, true);
        assert_eq!(expr.eval_const().unwrap(), Value::Bool(true));

        let expr = Expr::or(Value::Null, false);
        assert_eq!(expr.eval_const().unwrap(), Value::Null);
    }

    #[test]
    fn unbound_column_fails() {
        let err = Expr::month(created()).eval_const().unwrap_err();
        assert!(err.is_expression_evaluation_failed());
        assert_eq!(
            err.to_string(),
            "expression evaluation failed: column `node.created` is not bound"
        );
    }

    #[test]
    fn month_of_non_date_fails() {
        let err = Expr::month(created()).eval(Value::I64(20240101)).unwrap_err();
        assert!(err.is_expression_evaluation_failed());
        assert_eq!(
            err.to_string(),
            "expression evaluation failed: cannot extract a month from I64(20240101)"
        );
    }

    #[test]
    fn equality_with_null_is_null() {
        let expr = Expr::eq(Expr::month(created()), Value::Null);
        assert_eq!(expr.eval(date(2024, 1, 1)).unwrap(), Value::Null);
        assert!(!expr.eval_bool(date(2024, 1, 1)).unwrap());
    }

    #[test]
    fn equality_across_types_fails() {
        let expr = Expr::eq(Expr::month(created()), true);
        let err = expr.eval(date(2024, 1, 1)).unwrap_err();
        assert!(err.is_expression_evaluation_failed());
    }

    #[test]
    fn timestamps_have_months() {
        let at = date(2024, 11, 30).and_hms_opt(23, 59, 0).unwrap();
        let expr = Expr::eq(Expr::month(created()), 11u32);
        assert!(expr.eval_bool(at).unwrap());
    }
}
