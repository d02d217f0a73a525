use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{chart::ChartPoint, classify::Category, clothing::Recommendation, uv::UvReading};

/// Primary weather condition of a forecast reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Category label as reported by the data source, e.g. "Rain".
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// One 3-hour forecast reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Wall-clock date and time used for day bucketing and noon proximity.
    pub local_time: NaiveDateTime,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: Condition,
    pub pressure_hpa: Option<f64>,
    pub wind_speed_mps: Option<f64>,
}

impl RawSample {
    /// Calendar date this sample is bucketed under.
    pub fn date(&self) -> NaiveDate {
        self.local_time.date()
    }
}

/// One representative reading per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub timestamp: i64,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: Condition,
}

impl DailySummary {
    /// Date key in `YYYY-MM-DD` form.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl From<&RawSample> for DailySummary {
    fn from(sample: &RawSample) -> Self {
        Self {
            date: sample.date(),
            timestamp: sample.timestamp,
            temperature_c: sample.temperature_c,
            humidity_pct: sample.humidity_pct,
            condition: sample.condition.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country: String,
    pub coord: Option<Coord>,
}

impl City {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

/// A validated forecast as returned by a [`crate::ForecastProvider`].
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub city: City,
    /// Time-ordered samples, malformed entries already removed.
    pub samples: Vec<RawSample>,
}

/// Current conditions shown in the metrics panel, taken from the first sample.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Metrics {
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}

impl Metrics {
    pub fn from_samples(samples: &[RawSample]) -> Self {
        samples
            .first()
            .map(|s| Self {
                wind_speed_mps: s.wind_speed_mps.unwrap_or_default(),
                pressure_hpa: s.pressure_hpa.unwrap_or_default(),
            })
            .unwrap_or_default()
    }
}

/// Everything the presentation layer renders for one search.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub city: City,
    pub daily: Vec<DailySummary>,
    /// Theme category of the first day.
    pub category: Category,
    pub recommendation: Recommendation,
    pub metrics: Metrics,
    pub hourly_chart: Vec<ChartPoint>,
    pub daily_chart: Vec<ChartPoint>,
    pub uv: Option<UvReading>,
}
