use reqwest::StatusCode;
use std::fmt;

/// Which network call of the pipeline failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocoding,
    Forecast,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Geocoding => "location",
            Stage::Forecast => "weather",
        })
    }
}

/// Failure of one fetch attempt. The `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Please enter a city name")]
    Validation,

    #[error("City not found. Please check the spelling and try again.")]
    NotFound,

    #[error("Failed to fetch {stage} data. Please try again later.")]
    Network { stage: Stage, status: StatusCode },

    #[error("An unexpected error occurred")]
    Unexpected(#[source] anyhow::Error),
}

impl WeatherError {
    pub fn unexpected(err: impl Into<anyhow::Error>) -> Self {
        WeatherError::Unexpected(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_message_names_the_stage() {
        let err = WeatherError::Network { stage: Stage::Geocoding, status: StatusCode::BAD_GATEWAY };
        assert_eq!(err.to_string(), "Failed to fetch location data. Please try again later.");

        let err = WeatherError::Network { stage: Stage::Forecast, status: StatusCode::NOT_FOUND };
        assert_eq!(err.to_string(), "Failed to fetch weather data. Please try again later.");
    }

    #[test]
    fn unexpected_hides_detail_but_keeps_source() {
        let err = WeatherError::unexpected(anyhow::anyhow!("socket closed"));
        assert_eq!(err.to_string(), "An unexpected error occurred");

        let source = std::error::Error::source(&err).expect("source kept");
        assert_eq!(source.to_string(), "socket closed");
    }

    #[test]
    fn not_found_mentions_not_found() {
        assert!(WeatherError::NotFound.to_string().contains("not found"));
    }
}
