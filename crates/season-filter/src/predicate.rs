use season_core::{
    stmt::{Expr, Value},
    Result,
};
use season_sql::{Flavor, Serializer};

use std::fmt;

/// A boolean SQL fragment over a date column.
///
/// Produced by [`build_predicate`](crate::build_predicate) and
/// [`SeasonFilter::clause`](crate::SeasonFilter::clause). The caller splices
/// [`Predicate::sql`] into its `WHERE` clause; grouping with other filters
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    expr: Expr,
    flavor: Flavor,
}

impl Predicate {
    pub(crate) fn new(expr: Expr, flavor: Flavor) -> Predicate {
        Predicate { expr, flavor }
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// The fragment rendered for the predicate's flavor.
    pub fn sql(&self) -> String {
        self.sql_for(self.flavor)
    }

    /// The same predicate rendered for another flavor.
    pub fn sql_for(&self, flavor: Flavor) -> String {
        Serializer::new(flavor).serialize(&self.expr)
    }

    /// Evaluates the predicate against a single date the way the database
    /// would filter a row: a null date never matches.
    pub fn matches(&self, date: impl Into<Value>) -> Result<bool> {
        let date: Value = date.into();
        self.expr.eval_bool(date)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql())
    }
}
