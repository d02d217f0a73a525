use serde::{Deserialize, Serialize};

/// Semantic weather category used for theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Atmosphere,
    #[default]
    Default,
}

/// Evaluated top to bottom, first match wins. Matching is case-sensitive.
const CATEGORY_TABLE: &[(&[&str], Category)] = &[
    (&["Clear"], Category::Clear),
    (&["Cloud"], Category::Clouds),
    (&["Rain"], Category::Rain),
    (&["Snow"], Category::Snow),
    (&["Thunderstorm"], Category::Thunderstorm),
    (&["Drizzle"], Category::Drizzle),
    (
        &["Mist", "Smoke", "Haze", "Dust", "Fog", "Sand", "Ash"],
        Category::Atmosphere,
    ),
];

/// Map a condition label such as "Rain" or "Haze" to its [`Category`].
pub fn classify(label: &str) -> Category {
    CATEGORY_TABLE
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| label.contains(needle)))
        .map(|(_, category)| *category)
        .unwrap_or_default()
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clear => "Clear",
            Category::Clouds => "Clouds",
            Category::Rain => "Rain",
            Category::Snow => "Snow",
            Category::Thunderstorm => "Thunderstorm",
            Category::Drizzle => "Drizzle",
            Category::Atmosphere => "Atmosphere",
            Category::Default => "Default",
        }
    }

    /// Background scene used to theme the dashboard.
    pub fn scene(&self) -> &'static str {
        match self {
            Category::Clear => "sunny sky",
            Category::Clouds => "cloudy sky",
            Category::Rain => "rainy weather",
            Category::Drizzle => "light rain",
            Category::Snow => "snow landscape",
            Category::Thunderstorm => "thunderstorm",
            Category::Atmosphere => "foggy landscape",
            Category::Default => "nature landscape",
        }
    }

    /// ANSI SGR colour code for terminal accents.
    pub fn ansi_color(&self) -> u8 {
        match self {
            Category::Clear => 33,
            Category::Clouds => 37,
            Category::Rain | Category::Drizzle => 34,
            Category::Snow => 96,
            Category::Thunderstorm => 35,
            Category::Atmosphere => 90,
            Category::Default => 36,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
