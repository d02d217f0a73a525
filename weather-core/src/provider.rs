use crate::{
    Config,
    error::ForecastError,
    model::{Coord, Forecast},
    provider::openweather::OpenWeatherProvider,
    uv::UvReading,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

/// Source of raw forecast data.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Multi-day forecast in 3-hour steps for a city name.
    async fn fetch_forecast(&self, city: &str) -> Result<Forecast, ForecastError>;

    /// Current UV index at a coordinate.
    async fn fetch_uv(&self, coord: Coord) -> Result<UvReading, ForecastError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.resolve_api_key()?;

    let provider = OpenWeatherProvider::new(
        api_key,
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )?;

    Ok(Box::new(provider))
}
