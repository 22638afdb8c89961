//! Search → geocode → forecast → report, with user-facing state and notifications.
//!
//! All failures are absorbed here: callers only ever see a [`FetchState`].

use crate::{
    codes::WeatherCategory,
    error::WeatherError,
    gradient::{self, Theme},
    model::{Coordinates, Place, WeatherReport},
    provider::WeatherProvider,
    transform,
};

pub const CURRENT_LOCATION: &str = "Current Location";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Box<WeatherReport>),
    Error(String),
}

impl FetchState {
    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            FetchState::Success(report) => Some(report.as_ref()),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient message for the user (a toast, a status line...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

/// Receives notifications and state changes from a [`Dashboard`].
pub trait Notifier {
    fn notify(&self, notification: &Notification);

    fn state_changed(&self, _state: &FetchState) {}
}

#[derive(Debug)]
pub struct Dashboard<P, N> {
    provider: P,
    notifier: N,
    theme: Theme,
    state: FetchState,
    background: &'static str,
}

impl<P: WeatherProvider, N: Notifier> Dashboard<P, N> {
    pub fn new(provider: P, notifier: N, theme: Theme) -> Self {
        Self {
            provider,
            notifier,
            theme,
            state: FetchState::Idle,
            background: gradient::select(WeatherCategory::Clear, theme.is_dark()),
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Background gradient for the last successful report, or Clear before any.
    pub fn background(&self) -> &'static str {
        self.background
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Switch theme and recompute the background without refetching.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let category = self.state.report().map_or(WeatherCategory::Clear, |r| r.category());
        self.background = gradient::select(category, theme.is_dark());
    }

    /// Look up `city` and load its weather. Blank input is rejected without any request.
    pub async fn search(&mut self, city: &str) -> &FetchState {
        let city = city.trim();
        if city.is_empty() {
            self.notifier.notify(&Notification::error(WeatherError::Validation.to_string()));
            return &self.state;
        }

        self.set_state(FetchState::Loading);
        tracing::debug!(city, "searching");

        let outcome = match self.provider.geocode(city).await {
            Ok(place) => self.load(place).await,
            Err(err) => Err(err),
        };
        self.settle(outcome)
    }

    /// Load weather for a coordinate pair obtained from a location service.
    pub async fn locate(&mut self, coordinates: Coordinates) -> &FetchState {
        self.set_state(FetchState::Loading);
        tracing::debug!(?coordinates, "locating");

        let name = match self.provider.reverse_geocode(coordinates).await {
            Ok(Some(name)) => name,
            Ok(None) => CURRENT_LOCATION.to_string(),
            Err(err) => {
                tracing::debug!(error = %err, "reverse geocoding failed, using fallback name");
                CURRENT_LOCATION.to_string()
            }
        };

        let place = Place { coordinates, name, country: String::new() };
        let outcome = self.load(place).await;
        self.settle(outcome)
    }

    async fn load(&self, place: Place) -> Result<WeatherReport, WeatherError> {
        let payload = self.provider.forecast(place.coordinates).await?;
        transform::build_report(place, payload)
    }

    fn settle(&mut self, outcome: Result<WeatherReport, WeatherError>) -> &FetchState {
        match outcome {
            Ok(report) => {
                tracing::info!(place = %report.place.label(), category = %report.category(), "weather loaded");
                self.background = gradient::select(report.category(), self.theme.is_dark());
                let message = format!("Weather data loaded for {}", report.place.name);
                self.set_state(FetchState::Success(Box::new(report)));
                self.notifier.notify(&Notification::success(message));
            }
            Err(err) => {
                match &err {
                    WeatherError::Unexpected(source) => tracing::warn!("fetch failed: {source:#}"),
                    other => tracing::warn!("fetch failed: {other}"),
                }
                let message = err.to_string();
                self.set_state(FetchState::Error(message.clone()));
                self.notifier.notify(&Notification::error(message));
            }
        }
        &self.state
    }

    fn set_state(&mut self, state: FetchState) {
        self.state = state;
        self.notifier.state_changed(&self.state);
    }
}
