use chrono::NaiveDateTime;

/// Maximum number of forecast points kept in a report.
pub const MAX_FORECAST_POINTS: usize = 8;

/// Which provider endpoint to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Current,
    Forecast,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Current => "current",
            ReportKind::Forecast => "forecast",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single weather condition and temperature reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSnapshot {
    pub description: String,
    pub temperature_c: f64,
}

/// One forecast entry as extracted from the provider, before formatting.
///
/// `timestamp` and every entry of `descriptions` are raw provider text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastEntry {
    pub timestamp: String,
    pub temperature_c: f64,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub snapshot: ConditionSnapshot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub city: String,
    pub current: ConditionSnapshot,
    pub points: Vec<ForecastPoint>,
}

impl ForecastReport {
    /// Builds a report, keeping only the first [`MAX_FORECAST_POINTS`] points.
    pub fn new(
        city: impl Into<String>,
        current: ConditionSnapshot,
        mut points: Vec<ForecastPoint>,
    ) -> Self {
        points.truncate(MAX_FORECAST_POINTS);
        Self {
            city: city.into(),
            current,
            points,
        }
    }
}
