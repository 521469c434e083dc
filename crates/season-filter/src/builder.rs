use crate::{DateColumnRef, Predicate};

use season_core::{
    stmt::Expr,
    Hemisphere, SeasonSelection,
};
use season_sql::Flavor;

/// Everything [`build_predicate`] needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateInput {
    /// Column or expression holding the date.
    pub date_column: DateColumnRef,

    /// Dialect to render the month extraction for.
    pub dialect: Flavor,

    pub hemisphere: Hemisphere,

    pub seasons: SeasonSelection,

    /// Wrap the disjunction in `NOT (...)`.
    pub negate: bool,
}

/// Builds the season predicate for `input`.
///
/// Returns `None` when no season is selected. The caller decides what an
/// empty selection means; no always-true or always-false fragment is
/// produced here.
///
/// Terms follow the canonical season order, then each season's calendar
/// order: northern `{summer, winter}` yields months 12, 1, 2, 6, 7, 8.
pub fn build_predicate(input: &PredicateInput) -> Option<Predicate> {
    if input.seasons.is_empty() {
        return None;
    }

    let month = Expr::month(input.date_column.as_expr_column().clone());

    let mut expr = Expr::any(
        input
            .seasons
            .iter()
            .flat_map(|season| season.months(input.hemisphere).iter())
            .map(|m| Expr::eq(month.clone(), m)),
    );

    if input.negate {
        expr = Expr::not(expr);
    }

    Some(Predicate::new(expr, input.dialect))
}

/// Fluent construction of a [`PredicateInput`].
///
/// ```
/// use season_filter::{DateColumnRef, Hemisphere, Season, SeasonPredicateBuilder};
///
/// let predicate = SeasonPredicateBuilder::new(DateColumnRef::parse("n.created").unwrap())
///     .driver("mysql")
///     .hemisphere(Hemisphere::Southern)
///     .seasons([Season::Winter])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     predicate.sql(),
///     "(MONTH(n.created) = 6) OR (MONTH(n.created) = 7) OR (MONTH(n.created) = 8)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SeasonPredicateBuilder {
    input: PredicateInput,
}

impl SeasonPredicateBuilder {
    pub fn new(date_column: DateColumnRef) -> SeasonPredicateBuilder {
        SeasonPredicateBuilder {
            input: PredicateInput {
                date_column,
                dialect: Flavor::default(),
                hemisphere: Hemisphere::default(),
                seasons: SeasonSelection::empty(),
                negate: false,
            },
        }
    }

    pub fn dialect(mut self, dialect: Flavor) -> Self {
        self.input.dialect = dialect;
        self
    }

    /// Sets the dialect from a database driver name.
    pub fn driver(self, name: &str) -> Self {
        self.dialect(Flavor::from_driver(name))
    }

    pub fn hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.input.hemisphere = hemisphere;
        self
    }

    pub fn seasons(mut self, seasons: impl Into<SeasonSelection>) -> Self {
        self.input.seasons = seasons.into();
        self
    }

    /// Sets the selection from user tokens. Tokens that are not seasons are
    /// dropped.
    pub fn season_tokens<I>(self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.seasons(SeasonSelection::from_tokens(tokens))
    }

    pub fn negate(mut self, negate: bool) -> Self {
        self.input.negate = negate;
        self
    }

    pub fn input(&self) -> &PredicateInput {
        &self.input
    }

    pub fn build(&self) -> Option<Predicate> {
        build_predicate(&self.input)
    }
}

impl From<PredicateInput> for SeasonPredicateBuilder {
    fn from(input: PredicateInput) -> Self {
        SeasonPredicateBuilder { input }
    }
}
