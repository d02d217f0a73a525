use serde::Serialize;

/// What to wear for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn rec(icon: &'static str, title: &'static str, description: &'static str) -> Recommendation {
    Recommendation { icon, title, description }
}

/// Upper bound (exclusive, °C) of each band with its dry and wet advice.
/// Anything at or above the last bound falls through to [`HOT`].
const BANDS: &[(f64, Recommendation, Recommendation)] = &[
    (
        0.0,
        rec(
            "🧥",
            "Heavy Winter Clothing",
            "Wear a heavy coat, scarf, gloves, hat, and insulated boots. Layer up with thermal underwear.",
        ),
        rec(
            "🧥",
            "Heavy Winter Clothing",
            "Wear a heavy coat, scarf, gloves, hat, and insulated boots. Layer up with thermal underwear.",
        ),
    ),
    (
        10.0,
        rec(
            "🧣",
            "Winter Outfit",
            "Wear a winter coat, sweater, long pants, and warm shoes. Consider a scarf and gloves.",
        ),
        rec(
            "☔",
            "Cold & Rainy Outfit",
            "Wear a waterproof coat, sweater, long pants, and waterproof boots. Don't forget an umbrella!",
        ),
    ),
    (
        18.0,
        rec(
            "🧥",
            "Light Layers",
            "Wear a light jacket or sweater with long pants. A long-sleeve shirt is recommended.",
        ),
        rec(
            "🌂",
            "Cool & Rainy Outfit",
            "Wear a light jacket or coat, long sleeves, and water-resistant shoes. Bring an umbrella.",
        ),
    ),
    (
        25.0,
        rec(
            "👕",
            "Comfortable Clothing",
            "Wear a t-shirt or light long sleeve with pants or a casual dress/skirt. Bring a light jacket if needed.",
        ),
        rec(
            "🌦️",
            "Mild & Rainy Outfit",
            "Wear a light water-resistant jacket with casual clothes. Bring an umbrella just in case.",
        ),
    ),
    (
        30.0,
        rec(
            "😎",
            "Summer Clothing",
            "Wear short sleeves, shorts or light pants/skirts. Don't forget sunscreen and sunglasses if it's sunny!",
        ),
        rec(
            "🌦️",
            "Warm & Rainy Outfit",
            "Wear light, breathable clothes with a light rain jacket. Quick-drying fabrics are ideal.",
        ),
    ),
];

const HOT: (Recommendation, Recommendation) = (
    rec(
        "🩳",
        "Very Light Clothing",
        "Wear the lightest, most breathable clothing possible. Protect yourself from the sun with a hat, sunglasses, and sunscreen.",
    ),
    rec(
        "☂️",
        "Hot & Rainy Outfit",
        "Wear very light, breathable clothing. Consider a small umbrella or a light rain poncho.",
    ),
);

fn is_wet(condition: &str) -> bool {
    let lower = condition.to_lowercase();
    lower.contains("rain") || lower.contains("drizzle")
}

/// Recommend clothing for a Celsius temperature and a condition label.
///
/// Unlike classification, the rain check is case-insensitive.
pub fn recommend(temperature_c: f64, condition: &str) -> Recommendation {
    let wet = is_wet(condition);
    let (dry, rainy) = BANDS
        .iter()
        .find(|(upper, _, _)| temperature_c < *upper)
        .map(|(_, dry, rainy)| (*dry, *rainy))
        .unwrap_or(HOT);

    if wet { rainy } else { dry }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_ignores_rain() {
        assert_eq!(recommend(-5.0, "Clear").title, "Heavy Winter Clothing");
        assert_eq!(recommend(-0.1, "Rain").title, "Heavy Winter Clothing");
    }

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(recommend(0.0, "Clear").title, "Winter Outfit");
        assert_eq!(recommend(10.0, "Clear").title, "Light Layers");
        assert_eq!(recommend(18.0, "Clear").title, "Comfortable Clothing");
        assert_eq!(recommend(25.0, "Clear").title, "Summer Clothing");
        assert_eq!(recommend(30.0, "Clear").title, "Very Light Clothing");
    }

    #[test]
    fn rainy_variants() {
        assert_eq!(recommend(5.0, "Rain").title, "Cold & Rainy Outfit");
        assert_eq!(recommend(12.0, "Drizzle").title, "Cool & Rainy Outfit");
        assert_eq!(recommend(20.0, "light rain").title, "Mild & Rainy Outfit");
        assert_eq!(recommend(27.0, "RAIN").title, "Warm & Rainy Outfit");
        assert_eq!(recommend(35.0, "Rain").title, "Hot & Rainy Outfit");
    }

    #[test]
    fn thunderstorm_is_not_treated_as_rain() {
        assert_eq!(recommend(20.0, "Thunderstorm").title, "Comfortable Clothing");
    }
}
