mod error;
pub use error::{Error, IntoError};

mod hemisphere;
pub use hemisphere::Hemisphere;

mod month_set;
pub use month_set::MonthSet;

pub mod season;
pub use season::{is_date_in_season, season_of_date, Season};

mod selection;
pub use selection::SeasonSelection;

pub mod stmt;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
