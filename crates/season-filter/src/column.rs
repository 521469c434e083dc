use season_core::{stmt::ExprColumn, Result};

use std::fmt;

/// Locates the date a season predicate reads.
///
/// The reference carries no dialect; the same column can be rendered for
/// any [`Flavor`](crate::Flavor).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateColumnRef(ExprColumn);

impl DateColumnRef {
    /// An unqualified column name.
    pub fn column(name: impl Into<String>) -> Result<DateColumnRef> {
        ExprColumn::named(name).map(DateColumnRef)
    }

    /// `table.name`, where `table` is usually the alias the query joined the
    /// table under.
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Result<DateColumnRef> {
        ExprColumn::qualified(table, name).map(DateColumnRef)
    }

    /// A SQL expression evaluating to a date, emitted without surrounding
    /// whitespace.
    pub fn raw(sql: impl Into<String>) -> Result<DateColumnRef> {
        ExprColumn::raw(sql).map(DateColumnRef)
    }

    /// Parses `table.column`, `column`, or falls back to a raw expression.
    pub fn parse(s: &str) -> Result<DateColumnRef> {
        ExprColumn::parse(s).map(DateColumnRef)
    }

    /// The value column of a date field in per-field storage: field
    /// `field_date_from` on `node` lives in
    /// `node__field_date_from.field_date_from_value`.
    pub fn field(entity_type: &str, field_name: &str) -> Result<DateColumnRef> {
        if entity_type.trim().is_empty() || field_name.trim().is_empty() {
            return Err(season_core::Error::invalid_column(format!(
                "field storage needs an entity type and a field name, got `{entity_type}` and `{field_name}`"
            )));
        }

        DateColumnRef::qualified(
            format!("{entity_type}__{field_name}"),
            format!("{field_name}_value"),
        )
    }

    pub fn as_expr_column(&self) -> &ExprColumn {
        &self.0
    }
}

impl fmt::Display for DateColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<DateColumnRef> for ExprColumn {
    fn from(value: DateColumnRef) -> Self {
        value.0
    }
}

impl From<ExprColumn> for DateColumnRef {
    fn from(value: ExprColumn) -> Self {
        DateColumnRef(value)
    }
}
