//! Core library for the `weather` forecast dashboard.
//!
//! This crate defines:
//! - Forecast aggregation (one noon-closest sample per day, five days max)
//! - Condition classification for theming
//! - Unit conversion, clothing advice, chart series and UV risk
//! - The OpenWeather provider and on-disk configuration
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod aggregate;
pub mod chart;
pub mod classify;
pub mod clothing;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod search;
pub mod units;
pub mod uv;

pub use aggregate::daily_summaries;
pub use classify::{Category, classify};
pub use config::Config;
pub use error::ForecastError;
pub use model::{City, Condition, DailySummary, Dashboard, Forecast, RawSample};
pub use provider::{ForecastProvider, provider_from_config};
pub use search::{SearchResult, search};
pub use units::{TemperatureUnit, celsius_to_fahrenheit, fahrenheit_to_celsius};
