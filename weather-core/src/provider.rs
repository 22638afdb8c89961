use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    api::ForecastPayload,
    error::WeatherError,
    model::{Coordinates, Place},
};

pub mod openmeteo;

pub use openmeteo::OpenMeteoProvider;

/// Transport for the two-stage pipeline: place lookup, then forecast.
///
/// Each stage is its own call so it can be exercised with a mocked transport.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a city name to its best match.
    ///
    /// Returns [`WeatherError::NotFound`] when nothing matches.
    async fn geocode(&self, city: &str) -> Result<Place, WeatherError>;

    /// Best-effort display name for a coordinate pair; `Ok(None)` when the
    /// lookup yields nothing.
    async fn reverse_geocode(&self, coordinates: Coordinates) -> Result<Option<String>, WeatherError>;

    /// Current, hourly and daily data for a coordinate pair, still column-oriented.
    async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastPayload, WeatherError>;
}
