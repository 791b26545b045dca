use crate::{
    format::{display_timestamp, format_temperature, strip_description_quotes},
    model::{ConditionSnapshot, ForecastPoint, ForecastReport},
};

/// `"+11 Clouds\n"`
pub fn compose_current_line(snapshot: &ConditionSnapshot) -> String {
    format!(
        "{} {}\n",
        format_temperature(snapshot.temperature_c),
        strip_description_quotes(&snapshot.description)
    )
}

/// `"Jan-01 00:00   -3 Rain\n"`
pub fn compose_forecast_line(point: &ForecastPoint) -> String {
    format!(
        "{}   {} {}\n",
        display_timestamp(&point.timestamp),
        format_temperature(point.snapshot.temperature_c),
        strip_description_quotes(&point.snapshot.description)
    )
}

/// Full report text. The current line already ends in a line break, and
/// forecast lines follow it directly; with no points the text ends there.
pub fn compose_report(report: &ForecastReport) -> String {
    let mut out = format!(
        "{}:\nCurrent weather: {}",
        report.city,
        compose_current_line(&report.current)
    );
    for point in &report.points {
        out.push_str(&compose_forecast_line(point));
    }
    out
}
