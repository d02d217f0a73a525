//! Plain-text rendering of a [`Dashboard`].

use std::fmt;

use chrono::DateTime;
use weather_core::{DailySummary, Dashboard, TemperatureUnit, chart::ChartPoint};

use crate::cli::ChartView;

const BAR_WIDTH: usize = 30;

/// Text dashboard: header, clothing advice, chart, metrics and the 5-day rows.
pub struct DashboardView<'a> {
    pub dashboard: &'a Dashboard,
    pub unit: TemperatureUnit,
    pub chart: ChartView,
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.dashboard;
        let accent = dashboard.category.ansi_color();

        writeln!(
            f,
            "\x1b[1;{accent}m{}\x1b[0m  [{}]",
            dashboard.city.display_name(),
            dashboard.category.scene()
        )?;
        writeln!(f)?;

        let rec = &dashboard.recommendation;
        writeln!(f, "What to wear today?")?;
        writeln!(f, "  {} {}", rec.icon, rec.title)?;
        writeln!(f, "     {}", rec.description)?;
        writeln!(f)?;

        let (title, points) = match self.chart {
            ChartView::Hourly => ("Temperature (next 24h)", &dashboard.hourly_chart),
            ChartView::Daily => ("Temperature (daily)", &dashboard.daily_chart),
        };
        writeln!(f, "{title}")?;
        write!(f, "{}", Chart { points, unit: self.unit })?;
        writeln!(f)?;

        let metrics = &dashboard.metrics;
        writeln!(f, "Weather metrics")?;
        writeln!(f, "  Wind speed: {} m/s", metrics.wind_speed_mps)?;
        writeln!(f, "  Pressure:   {} hPa", metrics.pressure_hpa)?;
        match dashboard.uv {
            Some(uv) => writeln!(f, "  UV index:   {uv}")?,
            None => writeln!(f, "  UV index:   Not available")?,
        }
        writeln!(f)?;

        writeln!(f, "5-day forecast")?;
        for day in &dashboard.daily {
            day_row(f, day, self.unit)?;
        }

        Ok(())
    }
}

fn day_row(f: &mut fmt::Formatter<'_>, day: &DailySummary, unit: TemperatureUnit) -> fmt::Result {
    let label = DateTime::from_timestamp(day.timestamp, 0)
        .map(|dt| dt.format("%a, %b %-d").to_string())
        .unwrap_or_else(|| day.date_key());

    writeln!(
        f,
        "  {label:<12} {:>6}  {:<20} humidity {}%",
        unit.format(day.temperature_c),
        day.condition.description,
        day.humidity_pct
    )
}

/// Horizontal bar per point, scaled between the series min and max.
struct Chart<'a> {
    points: &'a [ChartPoint],
    unit: TemperatureUnit,
}

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let temps: Vec<i64> = self.points.iter().map(|p| p.temperature(self.unit)).collect();
        let (Some(min), Some(max)) = (temps.iter().min(), temps.iter().max()) else {
            return writeln!(f, "  (no data)");
        };
        let span = (max - min).max(1);

        for (point, temp) in self.points.iter().zip(&temps) {
            let len = 1 + ((temp - min) as usize * (BAR_WIDTH - 1)) / span as usize;
            writeln!(
                f,
                "  {:<16} {:>5}{} {}",
                point.label,
                temp,
                self.unit.symbol(),
                "█".repeat(len)
            )?;
        }

        Ok(())
    }
}
