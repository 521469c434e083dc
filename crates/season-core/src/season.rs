//! The four meteorological seasons and the month table both hemispheres
//! read from.

use crate::{Error, Hemisphere, MonthSet, Result};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    #[serde(alias = "fall")]
    Autumn,
}

/// Northern hemisphere months, indexed by [`Season::index`]. The southern
/// hemisphere reads the same rows through [`Season::opposite`].
const NORTHERN: [MonthSet; 4] = [
    MonthSet::run(12, 3),
    MonthSet::run(3, 3),
    MonthSet::run(6, 3),
    MonthSet::run(9, 3),
];

impl Season {
    /// All seasons in canonical order.
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }

    /// Human readable name, as shown in option lists.
    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }

    /// Parses a user supplied token, returning `None` for anything that is
    /// not a season.
    pub fn from_token(token: &str) -> Option<Season> {
        match token.trim().to_ascii_lowercase().as_str() {
            "winter" => Some(Season::Winter),
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" | "fall" => Some(Season::Autumn),
            _ => None,
        }
    }

    /// The season two steps away, occupying the same months in the other
    /// hemisphere.
    pub fn opposite(self) -> Season {
        Season::ALL[(self.index() + 2) % 4]
    }

    /// The months making up this season in `hemisphere`.
    pub fn months(self, hemisphere: Hemisphere) -> MonthSet {
        match hemisphere {
            Hemisphere::Northern => NORTHERN[self.index()],
            Hemisphere::Southern => NORTHERN[self.opposite().index()],
        }
    }

    /// The season containing `month` (1 through 12), or `None` when the
    /// month is out of range.
    pub fn of_month(month: u32, hemisphere: Hemisphere) -> Option<Season> {
        Season::ALL
            .into_iter()
            .find(|season| season.months(hemisphere).contains(month))
    }

    /// The season containing `date`.
    pub fn of_date(date: &impl Datelike, hemisphere: Hemisphere) -> Season {
        match Season::of_month(date.month(), hemisphere) {
            Some(season) => season,
            None => unreachable!("month {} outside 1..=12", date.month()),
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Season> {
        match Season::from_token(s) {
            Some(season) => Ok(season),
            None => crate::bail!("unknown season `{s}`"),
        }
    }
}

/// Returns the season containing the calendar date `year-month-day`.
pub fn season_of_date(year: i32, month: u32, day: u32, hemisphere: Hemisphere) -> Result<Season> {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return Err(Error::invalid_date(year, month, day));
    };

    Ok(Season::of_date(&date, hemisphere))
}

/// Returns `true` if `date` falls within `season` in `hemisphere`.
pub fn is_date_in_season(date: &impl Datelike, season: Season, hemisphere: Hemisphere) -> bool {
    season.months(hemisphere).contains(date.month())
}
