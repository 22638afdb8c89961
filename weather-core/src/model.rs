use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::codes::{Condition, WeatherCategory, WeatherCode};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A resolved location: the output of the geocoding stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub coordinates: Coordinates,
    pub name: String,
    pub country: String,
}

impl Place {
    /// "London, GB", or just the name when no country is known.
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Current conditions. Temperatures in °C, wind in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub wind_speed_kmh: f64,
    pub uv_index: f64,
    pub weather_code: WeatherCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature_c: f64,
    pub weather_code: WeatherCode,
    pub precipitation_probability: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: WeatherCode,
    pub temperature_max_c: f64,
    pub temperature_min_c: f64,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub precipitation_probability: u8,
    pub uv_index_max: f64,
}

/// Everything one successful fetch produces. Replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub place: Place,
    pub current: CurrentConditions,
    /// Next 24 hours, source order.
    pub hourly: Vec<HourlyEntry>,
    /// One entry per day; index 0 is today.
    pub daily: Vec<DailyEntry>,
}

impl WeatherReport {
    pub fn condition(&self) -> Condition {
        self.current.weather_code.describe()
    }

    pub fn category(&self) -> WeatherCategory {
        self.current.weather_code.category()
    }

    pub fn today(&self) -> Option<&DailyEntry> {
        self.daily.first()
    }
}
