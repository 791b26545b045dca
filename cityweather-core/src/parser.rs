//! Extraction of the handful of fields a report needs from OpenWeather JSON.
//!
//! Textual values are passed through as-is; quote stripping and timestamp
//! parsing belong to [`crate::format`].

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::{
    error::ReportError,
    model::{ConditionSnapshot, MAX_FORECAST_POINTS, RawForecastEntry},
};

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    main: Value,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwCondition>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    main: Option<Value>,
    weather: Option<Vec<OwCondition>>,
    dt_txt: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<Value>,
}

/// Parse the `/weather` payload: `main.temp` and `weather[0].main`.
pub fn parse_current(raw: &str) -> Result<ConditionSnapshot, ReportError> {
    let parsed: OwCurrentResponse = serde_json::from_str(raw)
        .map_err(|e| ReportError::Parse(format!("current weather JSON: {e}")))?;

    let condition = parsed
        .weather
        .first()
        .ok_or_else(|| ReportError::Parse("current weather has no conditions".to_string()))?;

    Ok(ConditionSnapshot {
        description: raw_text(&condition.main),
        temperature_c: parsed.main.temp,
    })
}

/// Parse the `/forecast` payload, looking at the first
/// [`MAX_FORECAST_POINTS`] elements of `list` only.
///
/// Elements without conditions (no `weather`, `null` or `[]`) are skipped
/// without looking at anything else. Elements that do have conditions must
/// carry `main.temp` and `dt_txt`, otherwise the whole parse fails.
pub fn parse_forecast_list(raw: &str) -> Result<Vec<RawForecastEntry>, ReportError> {
    let parsed: OwForecastResponse = serde_json::from_str(raw)
        .map_err(|e| ReportError::Parse(format!("forecast JSON: {e}")))?;

    let mut entries = Vec::with_capacity(MAX_FORECAST_POINTS);

    for (idx, element) in parsed.list.into_iter().take(MAX_FORECAST_POINTS).enumerate() {
        let entry: OwForecastEntry = serde_json::from_value(element)
            .map_err(|e| ReportError::Parse(format!("forecast entry {idx}: {e}")))?;

        let conditions = entry.weather.unwrap_or_default();
        if conditions.is_empty() {
            warn!(idx, "Forecast entry has no weather conditions, skipping");
            continue;
        }

        let main: OwMain = entry
            .main
            .ok_or_else(|| ReportError::Parse(format!("forecast entry {idx}: missing main")))
            .and_then(|main| {
                serde_json::from_value(main)
                    .map_err(|e| ReportError::Parse(format!("forecast entry {idx} main: {e}")))
            })?;
        let timestamp = entry
            .dt_txt
            .as_ref()
            .map(raw_text)
            .ok_or_else(|| ReportError::Parse(format!("forecast entry {idx}: missing dt_txt")))?;

        entries.push(RawForecastEntry {
            timestamp,
            temperature_c: main.temp,
            descriptions: conditions.iter().map(|c| raw_text(&c.main)).collect(),
        });
    }

    Ok(entries)
}

/// Strings come back as their content, anything else as its JSON text.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
