use super::{ExprColumn, Value};

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Supplies column values while evaluating an expression.
pub trait Input {
    fn resolve_column(&mut self, column: &ExprColumn) -> Option<Value> {
        let _ = column;
        None
    }
}

/// Input that binds no columns.
#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

impl<I: Input + ?Sized> Input for &mut I {
    fn resolve_column(&mut self, column: &ExprColumn) -> Option<Value> {
        (**self).resolve_column(column)
    }
}

/// A single value binds whatever column the expression reads. Predicates
/// built here only ever read one column.
impl Input for Value {
    fn resolve_column(&mut self, _: &ExprColumn) -> Option<Value> {
        Some(self.clone())
    }
}

impl Input for NaiveDate {
    fn resolve_column(&mut self, _: &ExprColumn) -> Option<Value> {
        Some(Value::Date(*self))
    }
}

impl Input for NaiveDateTime {
    fn resolve_column(&mut self, _: &ExprColumn) -> Option<Value> {
        Some(Value::DateTime(*self))
    }
}

impl Input for Option<NaiveDate> {
    fn resolve_column(&mut self, _: &ExprColumn) -> Option<Value> {
        Some((*self).into())
    }
}

/// A row keyed by the column's rendered name (`table.column`).
impl Input for HashMap<String, Value> {
    fn resolve_column(&mut self, column: &ExprColumn) -> Option<Value> {
        self.get(&column.to_string()).cloned()
    }
}
