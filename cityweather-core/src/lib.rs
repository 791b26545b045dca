//! Core library for the `cityweather` tool.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetcher behind the [`WeatherSource`] trait
//! - Payload parsing, value formatting and report composition
//! - [`Reporter`], the single entry point turning a city name into text
//!
//! It is used by `cityweather-cli`, but any chat front end can call
//! [`Reporter::report`] directly: it always returns text, never an error.

pub mod compose;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod provider;
pub mod report;

pub use config::{Config, SourceConfig};
pub use error::{FailureOutcome, ReportError};
pub use model::{ConditionSnapshot, ForecastPoint, ForecastReport, ReportKind};
pub use provider::{OpenWeatherSource, WeatherSource};
pub use report::Reporter;
