//! Fetch → parse → format → compose for one city.

use tracing::{error, info, instrument};

use crate::{
    compose::compose_report,
    error::{FailureOutcome, ReportError},
    format::parse_timestamp,
    model::{ConditionSnapshot, ForecastPoint, ForecastReport, RawForecastEntry, ReportKind},
    parser::{parse_current, parse_forecast_list},
    provider::WeatherSource,
};

/// Produces report text for a city from a [`WeatherSource`].
///
/// Holds no state besides the source, so one reporter can serve any number
/// of queries, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Reporter<S> {
    source: S,
}

impl<S: WeatherSource> Reporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Report text, or one of the two fixed failure messages. Never fails.
    #[instrument(skip(self))]
    pub async fn report(&self, city: &str) -> String {
        match self.try_report(city).await {
            Ok(text) => text,
            Err(err) => {
                let outcome = err.outcome();
                match outcome {
                    FailureOutcome::CityNotFound => info!("Provider does not know this city"),
                    FailureOutcome::ServiceUnavailable => {
                        error!(error = %err, "Failed to produce weather report")
                    }
                }
                outcome.message(city)
            }
        }
    }

    /// Same pipeline as [`Reporter::report`] with the cause kept.
    pub async fn try_report(&self, city: &str) -> Result<String, ReportError> {
        let (forecast, current) = tokio::join!(
            self.source.fetch(city, ReportKind::Forecast),
            self.source.fetch(city, ReportKind::Current),
        );
        let (forecast_raw, current_raw) = join_fetches(forecast, current)?;

        let entries = parse_forecast_list(&forecast_raw)?;
        let current = parse_current(&current_raw)?;
        let points = build_points(entries)?;

        Ok(compose_report(&ForecastReport::new(city, current, points)))
    }
}

/// A 404 from either endpoint wins over any other outcome.
fn join_fetches(
    forecast: Result<String, ReportError>,
    current: Result<String, ReportError>,
) -> Result<(String, String), ReportError> {
    match (forecast, current) {
        (Ok(forecast), Ok(current)) => Ok((forecast, current)),
        (Err(ReportError::NotFound), _) | (_, Err(ReportError::NotFound)) => {
            Err(ReportError::NotFound)
        }
        (Err(err), _) | (_, Err(err)) => Err(err),
    }
}

/// One point per condition, in provider order. A single bad timestamp
/// fails the whole report.
fn build_points(entries: Vec<RawForecastEntry>) -> Result<Vec<ForecastPoint>, ReportError> {
    let mut points = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.descriptions.is_empty() {
            continue;
        }
        let timestamp = parse_timestamp(&entry.timestamp)?;
        for description in entry.descriptions {
            points.push(ForecastPoint {
                timestamp,
                snapshot: ConditionSnapshot {
                    description,
                    temperature_c: entry.temperature_c,
                },
            });
        }
    }
    Ok(points)
}
