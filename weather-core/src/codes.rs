//! WMO weather code lookups.
//!
//! Two lookups live side by side here: an exact-match description table and a
//! coarse range-based category used for theming. Icons use their own ranges.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw WMO weather code as reported by Open-Meteo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i32);

/// Coarse weather grouping used for theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCategory {
    Clear,
    Clouds,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

/// Icon selector; the rendering layer maps each variant to a concrete glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
    Rain,
    Snow,
    Fog,
    Lightning,
}

/// Everything the view layer needs to know about a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub category: WeatherCategory,
    pub description: &'static str,
    pub icon: WeatherIcon,
}

impl WeatherCode {
    /// Codes Open-Meteo documents.
    pub const KNOWN: [i32; 28] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82,
        85, 86, 95, 96, 99,
    ];

    pub fn describe(self) -> Condition {
        Condition {
            category: self.category(),
            description: self.description(),
            icon: self.icon(),
        }
    }

    pub fn category(self) -> WeatherCategory {
        match self.0 {
            0 | 1 => WeatherCategory::Clear,
            2 | 3 => WeatherCategory::Clouds,
            45..=48 => WeatherCategory::Fog,
            51..=67 => WeatherCategory::Rain,
            71..=77 => WeatherCategory::Snow,
            80..=82 => WeatherCategory::Rain,
            85 | 86 => WeatherCategory::Snow,
            95.. => WeatherCategory::Thunderstorm,
            _ => WeatherCategory::Unknown,
        }
    }

    pub fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Foggy",
            48 => "Rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow",
            73 => "Moderate snow",
            75 => "Heavy snow",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with hail",
            99 => "Severe thunderstorm",
            _ => "Unknown",
        }
    }

    pub fn icon(self) -> WeatherIcon {
        match self.0 {
            0 | 1 => WeatherIcon::Sun,
            2 | 3 => WeatherIcon::Cloud,
            45..=48 => WeatherIcon::Fog,
            // drizzle, including freezing drizzle
            51..=57 => WeatherIcon::Rain,
            61..=67 => WeatherIcon::Rain,
            71..=77 => WeatherIcon::Snow,
            80..=82 => WeatherIcon::Rain,
            85 | 86 => WeatherIcon::Snow,
            95.. => WeatherIcon::Lightning,
            _ => WeatherIcon::Cloud,
        }
    }
}

impl From<i32> for WeatherCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl WeatherCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "Clear",
            WeatherCategory::Clouds => "Clouds",
            WeatherCategory::Fog => "Fog",
            WeatherCategory::Rain => "Rain",
            WeatherCategory::Snow => "Snow",
            WeatherCategory::Thunderstorm => "Thunderstorm",
            WeatherCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Sun => "sun",
            WeatherIcon::Cloud => "cloud",
            WeatherIcon::Rain => "rain",
            WeatherIcon::Snow => "snow",
            WeatherIcon::Fog => "fog",
            WeatherIcon::Lightning => "lightning",
        }
    }
}
