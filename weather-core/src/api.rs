//! Open-Meteo wire shapes.
//!
//! The forecast payload is a set of parallel arrays per block; it is turned
//! into records by [`crate::transform`].

use serde::Deserialize;

use crate::codes::WeatherCode;

pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,pressure_msl,weather_code,wind_speed_10m,uv_index";
pub const HOURLY_FIELDS: &str = "temperature_2m,weather_code,precipitation_probability";
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset,precipitation_probability_max,uv_index_max";
pub const FORECAST_DAYS: u8 = 7;

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    /// Missing entirely when nothing matched.
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentBlock,
    pub hourly: HourlyBlock,
    pub daily: DailyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub pressure_msl: f64,
    pub weather_code: WeatherCode,
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub uv_index: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<WeatherCode>,
    pub precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    pub weather_code: Vec<WeatherCode>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub precipitation_probability_max: Vec<Option<f64>>,
    pub uv_index_max: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_without_results_key() {
        let parsed: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms":0.4}"#).expect("parse");
        assert!(parsed.results.is_none());
    }

    #[test]
    fn geocoding_result_without_country() {
        let parsed: GeocodingResponse = serde_json::from_str(
            r#"{"results":[{"id":1,"name":"Atlantis","latitude":1.5,"longitude":-2.0}]}"#,
        )
        .expect("parse");
        let first = &parsed.results.expect("results")[0];
        assert_eq!(first.name, "Atlantis");
        assert!(first.country.is_empty());
    }

    #[test]
    fn null_probabilities_are_accepted() {
        let hourly: HourlyBlock = serde_json::from_str(
            r#"{"time":["2024-06-01T00:00"],"temperature_2m":[12.5],"weather_code":[3],"precipitation_probability":[null]}"#,
        )
        .expect("parse");
        assert_eq!(hourly.precipitation_probability, vec![None]);
        assert_eq!(hourly.weather_code, vec![WeatherCode(3)]);
    }
}
