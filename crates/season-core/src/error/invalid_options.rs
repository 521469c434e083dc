use super::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error when persisted filter options cannot be read.
#[derive(Debug)]
pub(super) struct InvalidOptions {
    origin: Box<str>,
    source: BoxError,
}

impl std::error::Error for InvalidOptions {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl core::fmt::Display for InvalidOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid filter options in {}: {}",
            self.origin, self.source
        )
    }
}

impl Error {
    /// Creates an invalid options error.
    ///
    /// `origin` names where the options came from (a file path, `<inline>`).
    pub fn invalid_options(
        origin: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::InvalidOptions(InvalidOptions {
            origin: origin.into().into(),
            source: Box::new(source),
        }))
    }

    /// Returns `true` if this error is an invalid options error.
    pub fn is_invalid_options(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidOptions(_))
    }
}
