//! Series backing the temperature chart.

use serde::Serialize;

use crate::{
    model::{DailySummary, RawSample},
    units::TemperatureUnit,
};

/// Samples shown in the hourly view (24 hours of 3-hour steps).
pub const HOURLY_POINTS: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub temperature_c: f64,
    pub description: String,
    pub humidity_pct: u8,
}

impl ChartPoint {
    pub fn temperature(&self, unit: TemperatureUnit) -> i64 {
        unit.whole_degrees(self.temperature_c)
    }
}

/// The first [`HOURLY_POINTS`] samples, labelled `HH:MM (Mon D)`.
pub fn hourly_series(samples: &[RawSample]) -> Vec<ChartPoint> {
    samples
        .iter()
        .take(HOURLY_POINTS)
        .map(|s| ChartPoint {
            label: s.local_time.format("%H:%M (%b %-d)").to_string(),
            temperature_c: s.temperature_c,
            description: s.condition.description.clone(),
            humidity_pct: s.humidity_pct,
        })
        .collect()
}

/// One point per day, labelled `Mon D`.
pub fn daily_series(days: &[DailySummary]) -> Vec<ChartPoint> {
    days.iter()
        .map(|d| ChartPoint {
            label: d.date.format("%b %-d").to_string(),
            temperature_c: d.temperature_c,
            description: d.condition.description.clone(),
            humidity_pct: d.humidity_pct,
        })
        .collect()
}
