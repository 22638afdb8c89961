use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use inquire::{CustomType, Select, Text};
use weather_core::{
    Config, Coordinates, Dashboard, FetchState, OpenMeteoProvider, Theme, UnitsPreference,
};

use crate::{notify::ConsoleNotifier, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively choose theme, endpoints and request timeout.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name, e.g. "London" or "New York".
        city: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Show weather for a coordinate pair, e.g. from a GPS fix.
    Here {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print the WMO weather code reference table.
    Codes,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct DisplayArgs {
    /// Show temperatures in °F instead of °C.
    #[arg(long)]
    pub fahrenheit: bool,

    /// Show wind speed in mph instead of km/h.
    #[arg(long)]
    pub mph: bool,

    /// Override the configured theme for this run.
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl DisplayArgs {
    pub fn units(&self) -> UnitsPreference {
        let mut units = UnitsPreference::default();
        if self.fahrenheit {
            units.toggle_temperature();
        }
        if self.mph {
            units.toggle_speed();
        }
        units
    }

    pub fn theme(&self, config: &Config) -> Theme {
        self.theme.map(Theme::from).unwrap_or(config.theme)
    }
}

#[derive(Debug)]
enum Target {
    City(String),
    Here(Coordinates),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => {
                configure()?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, display } => show(Target::City(city), display).await,
            Command::Here { lat, lon, display } => show(Target::Here(coordinates(lat, lon)?), display).await,
            Command::Codes => {
                print!("{}", render::render_codes());
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

/// Rejects out-of-range and NaN input before anything hits the network.
fn coordinates(lat: f64, lon: f64) -> anyhow::Result<Coordinates> {
    anyhow::ensure!((-90.0..=90.0).contains(&lat), "Latitude must be within -90..=90");
    anyhow::ensure!((-180.0..=180.0).contains(&lon), "Longitude must be within -180..=180");
    Ok(Coordinates { latitude: lat, longitude: lon })
}

/// Anything short of a report exits with 1; the notifier has already said why.
fn exit_code(state: &FetchState) -> ExitCode {
    match state {
        FetchState::Success(_) => ExitCode::SUCCESS,
        FetchState::Error(_) | FetchState::Idle | FetchState::Loading => ExitCode::FAILURE,
    }
}

async fn show(target: Target, display: DisplayArgs) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    let provider = OpenMeteoProvider::from_config(&config)?;
    let theme = display.theme(&config);
    tracing::debug!(?target, %theme, "fetching weather");
    let mut dashboard = Dashboard::new(provider, ConsoleNotifier, theme);

    match target {
        Target::City(city) => dashboard.search(&city).await,
        Target::Here(coordinates) => dashboard.locate(coordinates).await,
    };

    if let Some(report) = dashboard.state().report() {
        print!("{}", render::render_report(report, display.units(), dashboard.background()));
    }
    Ok(exit_code(dashboard.state()))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let themes = Theme::all().to_vec();
    let start = themes.iter().position(|t| *t == config.theme).unwrap_or(0);
    config.theme = Select::new("Theme:", themes)
        .with_starting_cursor(start)
        .prompt()
        .context("Theme selection aborted")?;

    config.endpoints.geocoding_url = Text::new("Geocoding API base URL:")
        .with_default(&config.endpoints.geocoding_url)
        .prompt()
        .context("Geocoding URL prompt aborted")?;

    config.endpoints.forecast_url = Text::new("Forecast API base URL:")
        .with_default(&config.endpoints.forecast_url)
        .prompt()
        .context("Forecast URL prompt aborted")?;

    config.request_timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.request_timeout_secs)
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Timeout prompt aborted")?;

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}
