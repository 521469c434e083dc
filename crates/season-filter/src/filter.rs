use crate::{
    build_predicate, DateColumnRef, EmptySelectionPolicy, FilterOptions, Operator, Predicate,
    PredicateInput,
};

use season_core::{stmt::Expr, stmt::Value, Hemisphere, Result, Season, SeasonSelection};
use season_sql::Flavor;

/// What a filter contributes to the query.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// AND this predicate into the `WHERE` clause.
    Where(Predicate),

    /// Leave the query unrestricted.
    Omit,
}

/// A configured season filter, the query-layer face of the predicate
/// builder.
///
/// The filter resolves the builder's "no predicate" answer with its
/// [`EmptySelectionPolicy`] and, when exposed, takes the selection from end
/// user input.
#[derive(Debug, Clone)]
pub struct SeasonFilter {
    column: DateColumnRef,
    dialect: Flavor,
    hemisphere: Hemisphere,
    selection: SeasonSelection,
    operator: Operator,
    exposed: bool,
    empty_selection: Option<EmptySelectionPolicy>,
}

impl SeasonFilter {
    pub fn new(options: &FilterOptions) -> Result<SeasonFilter> {
        Ok(SeasonFilter {
            column: DateColumnRef::parse(&options.column)?,
            dialect: options.dialect,
            hemisphere: options.hemisphere,
            selection: SeasonSelection::from_tokens(&options.seasons),
            operator: options.operator,
            exposed: options.exposed,
            empty_selection: options.empty_selection,
        })
    }

    pub fn column(&self) -> &DateColumnRef {
        &self.column
    }

    pub fn dialect(&self) -> Flavor {
        self.dialect
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn selection(&self) -> SeasonSelection {
        self.selection
    }

    pub fn is_exposed(&self) -> bool {
        self.exposed
    }

    /// Replaces the selection with end-user tokens. Each token may itself be
    /// a comma separated list. Ignored, returning `false`, unless the
    /// filter is exposed.
    pub fn accept_exposed_input<I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if !self.exposed {
            log::debug!("filter on `{}` is not exposed; ignoring input", self.column);
            return false;
        }

        let tokens: Vec<String> = tokens
            .into_iter()
            .flat_map(|token| {
                token
                    .as_ref()
                    .split(',')
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|token| !token.trim().is_empty())
            .collect();

        self.selection = SeasonSelection::from_tokens(tokens);
        true
    }

    /// Builder input for the current selection.
    pub fn predicate_input(&self) -> PredicateInput {
        PredicateInput {
            date_column: self.column.clone(),
            dialect: self.dialect,
            hemisphere: self.hemisphere,
            seasons: self.selection,
            negate: self.operator.is_negated(),
        }
    }

    /// Resolves the filter into a clause.
    ///
    /// An empty selection ignores the operator: `match_all` keeps every
    /// dated row, `match_none` rejects every row, and no policy omits the
    /// clause.
    pub fn clause(&self) -> Clause {
        let clause = match build_predicate(&self.predicate_input()) {
            Some(predicate) => Clause::Where(predicate),
            None => match self.empty_selection {
                None => Clause::Omit,
                Some(EmptySelectionPolicy::MatchAll) => {
                    let input = PredicateInput {
                        seasons: SeasonSelection::all(),
                        negate: false,
                        ..self.predicate_input()
                    };

                    build_predicate(&input).map_or(Clause::Omit, Clause::Where)
                }
                Some(EmptySelectionPolicy::MatchNone) => {
                    Clause::Where(Predicate::new(Expr::r#false(), self.dialect))
                }
            },
        };

        match &clause {
            Clause::Where(predicate) => log::debug!("season filter clause: {predicate}"),
            Clause::Omit => log::debug!("season filter on `{}` omitted", self.column),
        }

        clause
    }

    /// The `WHERE` fragment, or `None` when the clause is omitted.
    pub fn where_clause(&self) -> Option<String> {
        match self.clause() {
            Clause::Where(predicate) => Some(predicate.sql()),
            Clause::Omit => None,
        }
    }

    /// Applies the filter to a single row's date in memory.
    pub fn matches(&self, date: impl Into<Value>) -> Result<bool> {
        match self.clause() {
            Clause::Where(predicate) => predicate.matches(date),
            Clause::Omit => Ok(true),
        }
    }

    /// Short description for listings of configured filters.
    pub fn admin_summary(&self) -> String {
        if self.selection.is_empty() {
            let resolution = match self.empty_selection {
                None => "no restriction",
                Some(EmptySelectionPolicy::MatchAll) => "all seasons",
                Some(EmptySelectionPolicy::MatchNone) => "no seasons",
            };

            return if self.exposed {
                format!("exposed ({resolution} until chosen)")
            } else {
                resolution.to_string()
            };
        }

        let labels: Vec<&str> = self.selection.iter().map(Season::label).collect();

        format!(
            "{} {} ({} hemisphere)",
            self.operator,
            labels.join(", "),
            self.hemisphere
        )
    }

    /// `(token, label)` pairs offered to users of an exposed filter.
    pub fn value_options() -> [(&'static str, &'static str); 4] {
        Season::ALL.map(|season| (season.as_str(), season.label()))
    }
}
