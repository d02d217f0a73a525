use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode, Select};
use tracing::debug;
use weather_core::{Config, SearchResult, TemperatureUnit, provider_from_config, search};

use crate::render::DashboardView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "5-day weather forecast dashboard")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and preferred unit.
    Configure,

    /// Show the 5-day forecast for a city.
    Show {
        /// City name, e.g. "London" or "Bangkok".
        city: String,

        /// Display temperatures in Fahrenheit instead of the configured unit.
        #[arg(long)]
        fahrenheit: bool,

        /// Temperature chart view.
        #[arg(long, value_enum, default_value_t = ChartView::Hourly)]
        chart: ChartView,

        /// Print the dashboard as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartView {
    Hourly,
    Daily,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { city, fahrenheit, chart, json } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;

                let unit = if fahrenheit { TemperatureUnit::Fahrenheit } else { config.unit };
                debug!(%city, ?unit, ?chart, base_url = %config.base_url, "Searching forecast");
                let result = search(provider.as_ref(), &city).await;

                if json {
                    let out = serde_json::to_string_pretty(&result)
                        .context("Failed to serialize dashboard to JSON")?;
                    println!("{out}");
                    return Ok(());
                }

                match result {
                    SearchResult::Found(dashboard) => {
                        print!("{}", DashboardView { dashboard: &dashboard, unit, chart });
                    }
                    SearchResult::Failed { message } => anyhow::bail!(message),
                }
            }
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://openweathermap.org/api")
        .prompt()
        .context("API key prompt was cancelled")?;

    let units = vec![TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];
    let start = units.iter().position(|u| *u == config.unit).unwrap_or_default();
    let unit = Select::new("Default temperature unit:", units)
        .with_starting_cursor(start)
        .prompt()
        .context("Unit prompt was cancelled")?;

    config.set_api_key(api_key);
    config.unit = unit;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}
