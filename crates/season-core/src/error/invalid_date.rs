use super::Error;

/// Error when a (year, month, day) triple is not a calendar date.
#[derive(Debug)]
pub(super) struct InvalidDate {
    year: i32,
    month: u32,
    day: u32,
}

impl std::error::Error for InvalidDate {}

impl core::fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid date: {:04}-{:02}-{:02}",
            self.year, self.month, self.day
        )
    }
}

impl Error {
    /// Creates an invalid date error.
    pub fn invalid_date(year: i32, month: u32, day: u32) -> Error {
        Error::from(super::ErrorKind::InvalidDate(InvalidDate { year, month, day }))
    }

    /// Returns `true` if this error is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDate(_))
    }
}
