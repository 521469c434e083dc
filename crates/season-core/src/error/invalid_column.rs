use super::Error;

/// Error when a date column reference cannot address anything.
///
/// Raised when the reference is constructed, so a predicate is never built
/// over an empty column or table name.
#[derive(Debug)]
pub(super) struct InvalidColumn {
    message: Box<str>,
}

impl std::error::Error for InvalidColumn {}

impl core::fmt::Display for InvalidColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid column: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid column error.
    pub fn invalid_column(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidColumn(InvalidColumn {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid column error.
    pub fn is_invalid_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidColumn(_))
    }
}
