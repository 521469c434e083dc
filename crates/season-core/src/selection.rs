use crate::{Hemisphere, MonthSet, Season};

use std::fmt;

/// A set of seasons picked by the caller.
///
/// Order and duplicates in the input do not matter; iteration always
/// follows [`Season::ALL`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeasonSelection {
    bits: u8,
}

impl SeasonSelection {
    pub const fn empty() -> SeasonSelection {
        SeasonSelection { bits: 0 }
    }

    pub const fn all() -> SeasonSelection {
        SeasonSelection { bits: 0b1111 }
    }

    /// Builds a selection from raw tokens, dropping any token that does not
    /// name a season.
    pub fn from_tokens<I>(tokens: I) -> SeasonSelection
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut selection = SeasonSelection::empty();

        for token in tokens {
            let token = token.as_ref();

            match Season::from_token(token) {
                Some(season) => selection.insert(season),
                None => log::debug!("ignoring unknown season token `{token}`"),
            }
        }

        selection
    }

    pub fn insert(&mut self, season: Season) {
        self.bits |= 1 << season.index();
    }

    pub fn remove(&mut self, season: Season) {
        self.bits &= !(1 << season.index());
    }

    pub fn contains(&self, season: Season) -> bool {
        self.bits & (1 << season.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Season> + '_ {
        Season::ALL
            .into_iter()
            .filter(move |season| self.contains(*season))
    }

    /// The union of the selected seasons' months.
    pub fn months(&self, hemisphere: Hemisphere) -> MonthSet {
        self.iter()
            .fold(MonthSet::EMPTY, |acc, season| acc.union(season.months(hemisphere)))
    }
}

impl FromIterator<Season> for SeasonSelection {
    fn from_iter<T: IntoIterator<Item = Season>>(iter: T) -> Self {
        let mut selection = SeasonSelection::empty();
        for season in iter {
            selection.insert(season);
        }
        selection
    }
}

impl<const N: usize> From<[Season; N]> for SeasonSelection {
    fn from(value: [Season; N]) -> Self {
        value.into_iter().collect()
    }
}

impl From<Season> for SeasonSelection {
    fn from(value: Season) -> Self {
        [value].into()
    }
}

impl fmt::Debug for SeasonSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
