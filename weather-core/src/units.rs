//! Display unit selection and conversion.
//!
//! Fetched values are always stored in Celsius and km/h; conversion only
//! ever goes from that canonical unit to the selected display unit.

use serde::{Deserialize, Serialize};

const MPH_PER_KMH: f64 = 0.621371;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "kmh")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl TemperatureUnit {
    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

impl SpeedUnit {
    pub fn toggled(self) -> Self {
        match self {
            SpeedUnit::KilometersPerHour => SpeedUnit::MilesPerHour,
            SpeedUnit::MilesPerHour => SpeedUnit::KilometersPerHour,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
        }
    }
}

/// Convert a Celsius reading to `unit`. Unrounded.
pub fn to_display_temperature(celsius: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Inverse of [`to_display_temperature`].
pub fn from_display_temperature(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// Convert a km/h reading to `unit`. Unrounded.
pub fn to_display_speed(kmh: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometersPerHour => kmh,
        SpeedUnit::MilesPerHour => kmh * MPH_PER_KMH,
    }
}

/// Inverse of [`to_display_speed`].
pub fn from_display_speed(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::KilometersPerHour => value,
        SpeedUnit::MilesPerHour => value / MPH_PER_KMH,
    }
}

/// Session-scoped unit selection handed to whatever renders a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnitsPreference {
    pub temperature: TemperatureUnit,
    pub speed: SpeedUnit,
}

impl UnitsPreference {
    pub fn toggle_temperature(&mut self) {
        self.temperature = self.temperature.toggled();
    }

    pub fn toggle_speed(&mut self) {
        self.speed = self.speed.toggled();
    }

    pub fn temperature(&self, celsius: f64) -> f64 {
        to_display_temperature(celsius, self.temperature)
    }

    pub fn speed(&self, kmh: f64) -> f64 {
        to_display_speed(kmh, self.speed)
    }

    /// Rounded temperature with its unit symbol, e.g. `59°F`.
    pub fn format_temperature(&self, celsius: f64) -> String {
        format!("{}{}", round_for_display(self.temperature(celsius)), self.temperature.symbol())
    }

    /// Rounded temperature with a bare degree sign, e.g. `59°`.
    pub fn format_degrees(&self, celsius: f64) -> String {
        format!("{}°", round_for_display(self.temperature(celsius)))
    }

    /// Rounded speed with its unit symbol, e.g. `12 km/h`.
    pub fn format_speed(&self, kmh: f64) -> String {
        format!("{} {}", round_for_display(self.speed(kmh)), self.speed.symbol())
    }
}

// Casting avoids printing "-0" for small negative values.
fn round_for_display(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn celsius_is_identity() {
        assert_eq!(to_display_temperature(0.0, TemperatureUnit::Celsius), 0.0);
        assert_eq!(to_display_temperature(-12.34, TemperatureUnit::Celsius), -12.34);
    }

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(to_display_temperature(0.0, TemperatureUnit::Fahrenheit), 32.0);
        assert_eq!(to_display_temperature(100.0, TemperatureUnit::Fahrenheit), 212.0);
        assert_eq!(to_display_temperature(-40.0, TemperatureUnit::Fahrenheit), -40.0);
    }

    #[test]
    fn speed_conversion() {
        assert_eq!(to_display_speed(10.0, SpeedUnit::KilometersPerHour), 10.0);
        assert!((to_display_speed(10.0, SpeedUnit::MilesPerHour) - 6.21371).abs() < EPS);
    }

    #[test]
    fn round_trips_stay_within_tolerance() {
        for value in [-273.15, -40.0, 0.0, 0.1, 15.0, 36.6, 1234.5678] {
            for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
                let back = from_display_temperature(to_display_temperature(value, unit), unit);
                assert!((back - value).abs() < EPS, "{value} via {unit:?} came back as {back}");
            }
            for unit in [SpeedUnit::KilometersPerHour, SpeedUnit::MilesPerHour] {
                let back = from_display_speed(to_display_speed(value, unit), unit);
                assert!((back - value).abs() < EPS, "{value} via {unit:?} came back as {back}");
            }
        }
    }

    #[test]
    fn preference_defaults_and_toggles() {
        let mut units = UnitsPreference::default();
        assert_eq!(units.temperature, TemperatureUnit::Celsius);
        assert_eq!(units.speed, SpeedUnit::KilometersPerHour);

        units.toggle_temperature();
        units.toggle_speed();
        assert_eq!(units.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(units.speed, SpeedUnit::MilesPerHour);

        units.toggle_temperature();
        assert_eq!(units.temperature, TemperatureUnit::Celsius);
    }

    #[test]
    fn formatting_rounds_only_at_display() {
        let mut units = UnitsPreference::default();
        assert_eq!(units.format_temperature(15.0), "15°C");
        assert_eq!(units.format_speed(12.6), "13 km/h");
        assert_eq!(units.format_temperature(-0.4), "0°C");

        units.toggle_temperature();
        units.toggle_speed();
        assert_eq!(units.format_temperature(15.0), "59°F");
        assert_eq!(units.format_degrees(15.0), "59°");
        assert_eq!(units.format_speed(10.0), "6 mph");
        // the converted value itself keeps full precision
        assert!((units.temperature(15.3) - 59.54).abs() < EPS);
    }
}
