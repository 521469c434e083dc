mod builder;
pub use builder::{build_predicate, PredicateInput, SeasonPredicateBuilder};

mod column;
pub use column::DateColumnRef;

mod filter;
pub use filter::{Clause, SeasonFilter};

mod options;
pub use options::{EmptySelectionPolicy, FilterOptions, Operator};

mod predicate;
pub use predicate::Predicate;

pub use season_core::{
    is_date_in_season, season_of_date, Error, Hemisphere, MonthSet, Result, Season,
    SeasonSelection,
};
pub use season_sql::Flavor;
