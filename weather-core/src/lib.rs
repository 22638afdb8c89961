//! Core library for the `weather` dashboard.
//!
//! This crate defines:
//! - WMO code lookups (category, description, icon) and background gradients
//! - Display unit conversion
//! - The Open-Meteo transport and the payload → report transform
//! - The [`Dashboard`] state machine tying the pipeline together
//! - Configuration handling
//!
//! It is used by `weather-cli`, but can also be reused by other front-ends.

pub mod api;
pub mod codes;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gradient;
pub mod model;
pub mod provider;
pub mod transform;
pub mod units;

pub use codes::{Condition, WeatherCategory, WeatherCode, WeatherIcon};
pub use config::{Config, Endpoints};
pub use dashboard::{Dashboard, FetchState, Notification, NotificationKind, Notifier};
pub use error::{Stage, WeatherError};
pub use gradient::{GradientDescriptor, Theme};
pub use model::{Coordinates, CurrentConditions, DailyEntry, HourlyEntry, Place, WeatherReport};
pub use provider::{OpenMeteoProvider, WeatherProvider};
pub use units::{SpeedUnit, TemperatureUnit, UnitsPreference};
