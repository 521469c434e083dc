use super::Expr;
use crate::{Error, Result};

use std::fmt;

/// The date column a predicate reads.
///
/// Either a column name, optionally qualified by a table alias, or an opaque
/// SQL expression the caller has already resolved. Names are trimmed and
/// emitted without quoting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprColumn {
    Named {
        table: Option<Box<str>>,
        name: Box<str>,
    },
    Raw(Box<str>),
}

impl ExprColumn {
    /// An unqualified column.
    pub fn named(name: impl Into<String>) -> Result<ExprColumn> {
        let name = non_empty("column name", name.into())?;
        Ok(ExprColumn::Named { table: None, name })
    }

    /// A column qualified by a table or alias: `table.name`.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Result<ExprColumn> {
        let table = non_empty("table name", table.into())?;
        let name = non_empty("column name", name.into())?;
        Ok(ExprColumn::Named {
            table: Some(table),
            name,
        })
    }

    /// A raw SQL expression evaluating to a date.
    pub fn raw(sql: impl Into<String>) -> Result<ExprColumn> {
        Ok(ExprColumn::Raw(non_empty("expression", sql.into())?))
    }

    /// Parses `table.column` or `column`. Anything else containing
    /// characters beyond identifiers and a single period is taken as a raw
    /// expression.
    pub fn parse(s: &str) -> Result<ExprColumn> {
        let s = s.trim();
        let is_ident = |part: &str| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        };

        match s.split_once('.') {
            Some((table, name)) if is_ident(table) && is_ident(name) => {
                ExprColumn::qualified(table, name)
            }
            None if is_ident(s) => ExprColumn::named(s),
            _ => ExprColumn::raw(s),
        }
    }

    pub fn table(&self) -> Option<&str> {
        match self {
            ExprColumn::Named { table, .. } => table.as_deref(),
            ExprColumn::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ExprColumn::Raw(_))
    }
}

fn non_empty(what: &str, value: String) -> Result<Box<str>> {
    let value = value.trim();

    if value.is_empty() {
        return Err(Error::invalid_column(format!("{what} is empty")));
    }

    Ok(value.into())
}

impl fmt::Display for ExprColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprColumn::Named {
                table: Some(table),
                name,
            } => write!(f, "{table}.{name}"),
            ExprColumn::Named { table: None, name } => f.write_str(name),
            ExprColumn::Raw(sql) => f.write_str(sql),
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
