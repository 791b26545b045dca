use chrono::{NaiveDateTime, Timelike};

use crate::error::ReportError;

const INPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const OUTPUT_TIMESTAMP_FORMAT: &str = "%b-%d %H:%M";

/// Round half away from zero; only strictly positive values get a `+`.
/// Zero is rendered as `0`, not `+0`.
pub fn format_temperature(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded > 0 {
        format!("+{rounded}")
    } else {
        rounded.to_string()
    }
}

/// Parse a provider timestamp such as `"2024-06-01 15:00:00"`, quotes allowed.
/// Field widths are fixed and leap seconds are rejected.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ReportError> {
    let cleaned = strip_description_quotes(raw);
    if !has_input_shape(&cleaned) {
        return Err(ReportError::Format(format!(
            "invalid timestamp {raw:?}: expected YYYY-MM-DD HH:MM:SS"
        )));
    }

    let ts = NaiveDateTime::parse_from_str(&cleaned, INPUT_TIMESTAMP_FORMAT)
        .map_err(|e| ReportError::Format(format!("invalid timestamp {raw:?}: {e}")))?;
    if ts.nanosecond() != 0 {
        return Err(ReportError::Format(format!("invalid timestamp {raw:?}: leap second")));
    }
    Ok(ts)
}

/// `DDDD-DD-DD DD:DD:DD`, digits only where digits belong.
fn has_input_shape(text: &str) -> bool {
    const SHAPE: &[u8; 19] = b"0000-00-00 00:00:00";
    text.len() == SHAPE.len()
        && text.bytes().zip(SHAPE.iter()).all(|(b, &s)| match s {
            b'0' => b.is_ascii_digit(),
            sep => b == sep,
        })
}

/// `Jun-01 15:00` style, English month abbreviations.
pub fn display_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(OUTPUT_TIMESTAMP_FORMAT).to_string()
}

pub fn format_timestamp(raw: &str) -> Result<String, ReportError> {
    parse_timestamp(raw).map(|ts| display_timestamp(&ts))
}

pub fn strip_description_quotes(text: &str) -> String {
    text.replace('"', "")
}
