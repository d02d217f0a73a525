use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    error::{ForecastError, SampleError},
    model::{City, Condition, Coord, Forecast, RawSample},
    uv::UvReading,
};

use super::ForecastProvider;

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForecastError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// GET `{base_url}/{endpoint}` and return the status with the body text.
    async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, String), ForecastError> {
        let url = format!("{}/{endpoint}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                ForecastError::Transport(format!(
                    "Failed to send request to OpenWeather ({endpoint}): {e}"
                ))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            ForecastError::Transport(format!(
                "Failed to read OpenWeather {endpoint} response body: {e}"
            ))
        })?;

        debug!(%status, bytes = body.len(), "OpenWeather {endpoint} response");
        Ok((status, body))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    humidity: Option<u8>,
    pressure: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
    coord: Option<OwCoord>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: Option<i64>,
    dt_txt: Option<String>,
    main: Option<OwMain>,
    weather: Option<Vec<OwWeather>>,
    wind: Option<OwWind>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    #[serde(default)]
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwUvResponse {
    value: f64,
}

impl TryFrom<OwForecastEntry> for RawSample {
    type Error = SampleError;

    fn try_from(entry: OwForecastEntry) -> Result<Self, Self::Error> {
        let timestamp = entry.dt.ok_or(SampleError::MissingField("dt"))?;

        // dt_txt carries the wall-clock time; fall back to the UTC time of dt.
        let local_time = match entry.dt_txt {
            Some(text) => NaiveDateTime::parse_from_str(&text, DT_TXT_FORMAT)
                .map_err(|_| SampleError::InvalidLocalTime(text))?,
            None => DateTime::from_timestamp(timestamp, 0)
                .map(|utc| utc.naive_utc())
                .ok_or(SampleError::InvalidTimestamp(timestamp))?,
        };

        let main = entry.main.ok_or(SampleError::MissingField("main"))?;
        let temperature_c = main.temp.ok_or(SampleError::MissingField("main.temp"))?;
        let humidity_pct = main.humidity.ok_or(SampleError::MissingField("main.humidity"))?;

        // Only the first condition is consulted.
        let weather = entry
            .weather
            .and_then(|list| list.into_iter().next())
            .ok_or(SampleError::NoCondition)?;
        let condition = Condition {
            main: weather.main.ok_or(SampleError::MissingField("weather[0].main"))?,
            description: weather
                .description
                .ok_or(SampleError::MissingField("weather[0].description"))?,
            icon: weather.icon.ok_or(SampleError::MissingField("weather[0].icon"))?,
        };

        Ok(RawSample {
            timestamp,
            local_time,
            temperature_c,
            humidity_pct,
            condition,
            pressure_hpa: main.pressure,
            wind_speed_mps: entry.wind.and_then(|w| w.speed),
        })
    }
}

impl OwForecastResponse {
    /// Skip malformed entries; fail only if a non-empty list yields nothing usable.
    fn into_forecast(self) -> Result<Forecast, ForecastError> {
        let total = self.list.len();
        let mut samples = Vec::with_capacity(total);

        for (index, entry) in self.list.into_iter().enumerate() {
            match RawSample::try_from(entry) {
                Ok(sample) => samples.push(sample),
                Err(error) => warn!(index, %error, "Skipping malformed forecast entry"),
            }
        }

        if total > 0 && samples.is_empty() {
            return Err(ForecastError::MalformedData(format!(
                "none of the {total} forecast entries were usable"
            )));
        }

        let city = City {
            name: self.city.name,
            country: self.city.country,
            coord: self.city.coord.map(|c| Coord { lat: c.lat, lon: c.lon }),
        };

        Ok(Forecast { city, samples })
    }
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn fetch_forecast(&self, city: &str) -> Result<Forecast, ForecastError> {
        let (status, body) = self
            .get("forecast", &[("q", city), ("units", "metric")])
            .await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ForecastError::NotFound { city: city.to_string() });
        }

        if !status.is_success() {
            return Err(ForecastError::Transport(format!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body).map_err(|e| {
            ForecastError::MalformedData(format!("Failed to parse OpenWeather forecast JSON: {e}"))
        })?;

        parsed.into_forecast()
    }

    #[instrument(skip(self))]
    async fn fetch_uv(&self, coord: Coord) -> Result<UvReading, ForecastError> {
        let lat = coord.lat.to_string();
        let lon = coord.lon.to_string();

        let (status, body) = self
            .get("uvi", &[("lat", lat.as_str()), ("lon", lon.as_str())])
            .await?;

        if !status.is_success() {
            return Err(ForecastError::Transport(format!(
                "OpenWeather UV request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwUvResponse = serde_json::from_str(&body).map_err(|e| {
            ForecastError::MalformedData(format!("Failed to parse OpenWeather UV JSON: {e}"))
        })?;

        Ok(UvReading::new(parsed.value))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
