use super::Error;
use crate::stmt::{ExprColumn, Value};

use std::fmt;

/// A predicate could not be evaluated against an in-memory row.
#[derive(Debug)]
pub(super) struct ExpressionEvaluationFailed {
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    /// The row has no value for the date column.
    Unbound(ExprColumn),

    /// Month extraction over a value that is neither a date nor a timestamp.
    NotADate(Value),

    /// A boolean context (`NOT`, `OR`, the row filter) received something else.
    NotBoolean(&'static str, Value),

    /// `=` between values of different types.
    Incomparable(Value, Value),
}

impl std::error::Error for ExpressionEvaluationFailed {}

impl fmt::Display for ExpressionEvaluationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expression evaluation failed: ")?;

        match &self.reason {
            Reason::Unbound(column) => write!(f, "column `{column}` is not bound"),
            Reason::NotADate(value) => write!(f, "cannot extract a month from {value:?}"),
            Reason::NotBoolean(context, value) => {
                write!(f, "{context} expects a boolean, got {value:?}")
            }
            Reason::Incomparable(lhs, rhs) => write!(f, "cannot compare {lhs:?} with {rhs:?}"),
        }
    }
}

impl Error {
    /// The row being evaluated supplies no value for `column`.
    pub fn unbound_column(column: &ExprColumn) -> Error {
        Self::evaluation(Reason::Unbound(column.clone()))
    }

    /// A month was requested from a value that carries no date.
    pub fn not_a_date(value: Value) -> Error {
        Self::evaluation(Reason::NotADate(value))
    }

    /// `context` names where the boolean was expected, e.g. `"NOT"`.
    pub fn not_boolean(context: &'static str, value: Value) -> Error {
        Self::evaluation(Reason::NotBoolean(context, value))
    }

    pub fn incomparable(lhs: Value, rhs: Value) -> Error {
        Self::evaluation(Reason::Incomparable(lhs, rhs))
    }

    /// Returns `true` if this error is an expression evaluation failure.
    pub fn is_expression_evaluation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpressionEvaluationFailed(_))
    }

    fn evaluation(reason: Reason) -> Error {
        Error::from(super::ErrorKind::ExpressionEvaluationFailed(
            ExpressionEvaluationFailed { reason },
        ))
    }
}
