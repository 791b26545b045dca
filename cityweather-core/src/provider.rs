use crate::{error::ReportError, model::ReportKind};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherSource;

/// Fetches raw provider payloads for a city.
///
/// Implementations return the response body untouched. A 404 from the
/// provider must surface as [`ReportError::NotFound`]; every other transport
/// problem as [`ReportError::Unavailable`]. No retries.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch(&self, city: &str, kind: ReportKind) -> Result<String, ReportError>;
}
