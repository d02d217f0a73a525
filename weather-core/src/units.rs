use serde::{Deserialize, Serialize};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Display unit for temperatures. Readings are always stored in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    /// Convert a Celsius reading into this unit, unrounded.
    pub fn convert(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    /// Rounded to the nearest whole degree.
    pub fn whole_degrees(self, celsius: f64) -> i64 {
        self.convert(celsius).round() as i64
    }

    /// e.g. `21°C`.
    pub fn format(self, celsius: f64) -> String {
        format!("{}{}", self.whole_degrees(celsius), self.symbol())
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Celsius => write!(f, "Celsius ({})", self.symbol()),
            TemperatureUnit::Fahrenheit => write!(f, "Fahrenheit ({})", self.symbol()),
        }
    }
}
