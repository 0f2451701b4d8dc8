use thiserror::Error;

/// Main error type for the restaurant hours crate.
/// Aggregates errors from the standard library and from every internal module.
#[derive(Error, Debug)]
pub enum HoursError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    // Helper module errors
    #[error("{0}")]
    ReaderError(#[from] crate::helpers::reader::ReaderError),

    // Core module errors
    #[error("{0}")]
    ScheduleError(#[from] crate::schedule::ScheduleError),

    #[error("{0}")]
    RankingError(#[from] crate::ranking::RankingError),

    #[error("{0}")]
    PresenterError(#[from] crate::presenter::PresenterError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, HoursError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| HoursError::WithContextError(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix() {
        let result: Result<(), HoursError> = Err(std::io::Error::other("boom").into());
        let error = result.with_prefix("Read 'ravintolat.csv' failed").unwrap_err();
        assert_eq!(error.to_string(), "Read 'ravintolat.csv' failed: boom");
    }
}
