use thiserror::Error;

/// Everything that can go wrong while producing a report.
///
/// Only [`ReportError::NotFound`] is shown to users as such; every other
/// variant collapses to [`FailureOutcome::ServiceUnavailable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The provider answered 404 for the queried city.
    #[error("city not found by provider")]
    NotFound,

    /// Transport failure or a non-404 error status.
    #[error("weather service unavailable: {0}")]
    Unavailable(String),

    /// A required JSON field is missing or has the wrong shape.
    #[error("failed to parse provider payload: {0}")]
    Parse(String),

    /// A forecast timestamp did not match `YYYY-MM-DD HH:MM:SS`.
    #[error("failed to format timestamp: {0}")]
    Format(String),

    /// The HTTP client could not be built.
    #[error("failed to initialize HTTP client: {0}")]
    Client(String),
}

impl ReportError {
    pub fn outcome(&self) -> FailureOutcome {
        match self {
            ReportError::NotFound => FailureOutcome::CityNotFound,
            _ => FailureOutcome::ServiceUnavailable,
        }
    }
}

/// The two failures a caller can ever observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    CityNotFound,
    ServiceUnavailable,
}

impl FailureOutcome {
    /// User-facing text for this outcome. `city` is interpolated verbatim.
    pub fn message(&self, city: &str) -> String {
        match self {
            FailureOutcome::CityNotFound => format!("Can't find \"{city}\" city"),
            FailureOutcome::ServiceUnavailable => {
                "The service is not available, please try later".to_string()
            }
        }
    }
}
