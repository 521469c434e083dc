use season_core::{Error, Hemisphere, Result};
use season_sql::Flavor;

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

/// Persisted configuration of a season filter.
///
/// Stored as JSON. Only `column` is required:
///
/// ```json
/// {
///   "column": "node__field_date_from.field_date_from_value",
///   "dialect": "mysql",
///   "hemisphere": "southern",
///   "seasons": ["winter", "summer"],
///   "operator": "not in",
///   "exposed": true,
///   "empty_selection": "match_all"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterOptions {
    /// `table.column`, `column`, or a raw SQL date expression.
    pub column: String,

    /// Driver name; unknown names render ANSI SQL.
    #[serde(default)]
    pub dialect: Flavor,

    #[serde(default)]
    pub hemisphere: Hemisphere,

    /// Season tokens. Kept as strings so stale or misspelled tokens load
    /// and are then ignored.
    #[serde(default)]
    pub seasons: Vec<String>,

    #[serde(default)]
    pub operator: Operator,

    /// Whether end users may replace `seasons` at query time.
    #[serde(default)]
    pub exposed: bool,

    /// What an empty selection resolves to. When unset the clause is
    /// omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_selection: Option<EmptySelectionPolicy>,
}

/// Whether rows must fall inside or outside the selected seasons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[default]
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

/// How a filter with no selected season resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySelectionPolicy {
    /// Reject every row.
    MatchNone,

    /// Treat the selection as all four seasons, matching every row with a
    /// date.
    MatchAll,
}

impl FilterOptions {
    pub fn new(column: impl Into<String>) -> FilterOptions {
        FilterOptions {
            column: column.into(),
            dialect: Flavor::default(),
            hemisphere: Hemisphere::default(),
            seasons: vec![],
            operator: Operator::default(),
            exposed: false,
            empty_selection: None,
        }
    }

    pub fn from_json(json: &str) -> Result<FilterOptions> {
        serde_json::from_str(json).map_err(|err| Error::invalid_options("<inline>", err))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<FilterOptions> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|err| Error::invalid_options(path.display().to_string(), err))?;

        serde_json::from_str(&json)
            .map_err(|err| Error::invalid_options(path.display().to_string(), err))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::invalid_options("<inline>", err))
    }
}

impl Operator {
    pub fn is_negated(self) -> bool {
        matches!(self, Operator::NotIn)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::In => "in",
            Operator::NotIn => "not in",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Operator> {
        match s.trim().to_ascii_lowercase().replace(['_', '-'], " ").as_str() {
            "in" => Ok(Operator::In),
            "not in" => Ok(Operator::NotIn),
            _ => season_core::bail!("unknown operator `{s}`"),
        }
    }
}

impl EmptySelectionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            EmptySelectionPolicy::MatchNone => "match_none",
            EmptySelectionPolicy::MatchAll => "match_all",
        }
    }
}

impl fmt::Display for EmptySelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptySelectionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<EmptySelectionPolicy> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "match_none" | "none" => Ok(EmptySelectionPolicy::MatchNone),
            "match_all" | "all" => Ok(EmptySelectionPolicy::MatchAll),
            _ => season_core::bail!("unknown empty selection policy `{s}`"),
        }
    }
}
