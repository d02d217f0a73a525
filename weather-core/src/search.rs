//! City search: fetch, aggregate, classify and assemble the dashboard.

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::{
    aggregate::daily_summaries,
    chart::{daily_series, hourly_series},
    classify::classify,
    clothing::recommend,
    error::ForecastError,
    model::{Dashboard, Metrics},
    provider::ForecastProvider,
};

/// Outcome handed to the presentation layer. Failures carry a user-facing message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResult {
    Found(Box<Dashboard>),
    Failed { message: String },
}

impl SearchResult {
    pub fn failed(message: impl Into<String>) -> Self {
        SearchResult::Failed { message: message.into() }
    }
}

/// Search for `city`. Never returns an error; failures are logged and mapped
/// to [`SearchResult::Failed`].
#[instrument(skip(provider))]
pub async fn search(provider: &dyn ForecastProvider, city: &str) -> SearchResult {
    let city = city.trim();
    if city.is_empty() {
        return SearchResult::failed("Please enter a city name.");
    }

    match build_dashboard(provider, city).await {
        Ok(dashboard) => SearchResult::Found(Box::new(dashboard)),
        Err(err) => {
            match &err {
                ForecastError::NotFound { .. } => info!(%err, "City lookup returned no match"),
                _ => error!(%err, "Error fetching weather data"),
            }
            SearchResult::failed(err.user_message())
        }
    }
}

/// Build the dashboard, propagating fetch errors.
///
/// An empty forecast list is reported as malformed data since there is no
/// first day to classify.
pub async fn build_dashboard(
    provider: &dyn ForecastProvider,
    city: &str,
) -> Result<Dashboard, ForecastError> {
    let forecast = provider.fetch_forecast(city).await?;

    let daily = daily_summaries(&forecast.samples);
    let today = daily
        .first()
        .ok_or_else(|| ForecastError::MalformedData("forecast contained no entries".into()))?;

    let category = classify(&today.condition.main);
    let recommendation = recommend(today.temperature_c, &today.condition.main);

    let uv = match forecast.city.coord {
        Some(coord) => match provider.fetch_uv(coord).await {
            Ok(reading) => Some(reading),
            Err(err) => {
                warn!(%err, "UV index not available");
                None
            }
        },
        None => None,
    };

    Ok(Dashboard {
        metrics: Metrics::from_samples(&forecast.samples),
        hourly_chart: hourly_series(&forecast.samples),
        daily_chart: daily_series(&daily),
        city: forecast.city,
        category,
        recommendation,
        uv,
        daily,
    })
}
