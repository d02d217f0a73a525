use thiserror::Error;

/// Failures of the forecast fetch step.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The data source has no location matching the search term.
    #[error("No forecast found for '{city}'")]
    NotFound { city: String },

    /// Network or HTTP failure other than "not found".
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The response did not contain the expected fields.
    #[error("Malformed forecast data: {0}")]
    MalformedData(String),
}

impl ForecastError {
    /// Message safe to show to the user. Root causes stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            ForecastError::NotFound { .. } => {
                "City not found. Please try a different search term."
            }
            ForecastError::Transport(_) | ForecastError::MalformedData(_) => {
                "An error occurred while fetching weather data."
            }
        }
    }
}

/// Why a single forecast entry was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("missing or empty weather condition list")]
    NoCondition,

    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("unparseable dt_txt '{0}'")]
    InvalidLocalTime(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_asks_for_another_term() {
        let err = ForecastError::NotFound { city: "Atlantis".into() };
        assert!(err.user_message().contains("different search term"));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn transport_hides_root_cause() {
        let err = ForecastError::Transport("connection reset".into());
        assert!(!err.user_message().contains("connection reset"));
        assert!(err.to_string().contains("connection reset"));
    }
}
