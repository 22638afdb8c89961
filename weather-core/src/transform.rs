//! Turn the column-oriented forecast payload into row records.
//!
//! Parallel arrays are zipped index-wise. Open-Meteo returns them with equal
//! lengths; if it ever doesn't, the zip simply stops at the shortest column.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    api::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock},
    error::WeatherError,
    model::{CurrentConditions, DailyEntry, HourlyEntry, Place, WeatherReport},
};

pub const HOURS_SHOWN: usize = 24;

// timezone=auto yields local times without offset or seconds.
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn build_report(place: Place, payload: ForecastPayload) -> Result<WeatherReport, WeatherError> {
    let ForecastPayload { current, hourly, daily } = payload;

    Ok(WeatherReport {
        place,
        current: current_conditions(current),
        hourly: hourly_entries(hourly).map_err(WeatherError::unexpected)?,
        daily: daily_entries(daily).map_err(WeatherError::unexpected)?,
    })
}

fn current_conditions(block: CurrentBlock) -> CurrentConditions {
    CurrentConditions {
        temperature_c: block.temperature_2m,
        apparent_temperature_c: block.apparent_temperature,
        humidity_pct: percent(Some(block.relative_humidity_2m)),
        pressure_hpa: block.pressure_msl,
        wind_speed_kmh: block.wind_speed_10m,
        uv_index: block.uv_index.unwrap_or_default(),
        weather_code: block.weather_code,
    }
}

fn hourly_entries(block: HourlyBlock) -> anyhow::Result<Vec<HourlyEntry>> {
    block
        .time
        .iter()
        .zip(block.temperature_2m)
        .zip(block.weather_code)
        .zip(block.precipitation_probability)
        .take(HOURS_SHOWN)
        .map(|(((time, temperature_c), weather_code), probability)| -> anyhow::Result<HourlyEntry> {
            Ok(HourlyEntry {
                time: parse_local_time(time)?,
                temperature_c,
                weather_code,
                precipitation_probability: percent(probability),
            })
        })
        .collect()
}

fn daily_entries(block: DailyBlock) -> anyhow::Result<Vec<DailyEntry>> {
    let DailyBlock {
        time,
        weather_code,
        temperature_2m_max,
        temperature_2m_min,
        sunrise,
        sunset,
        precipitation_probability_max,
        uv_index_max,
    } = block;

    time.iter()
        .zip(weather_code)
        .zip(temperature_2m_max.into_iter().zip(temperature_2m_min))
        .zip(sunrise.iter().zip(sunset.iter()))
        .zip(precipitation_probability_max.into_iter().zip(uv_index_max))
        .map(|((((date, weather_code), (max, min)), (sunrise, sunset)), (probability, uv))| -> anyhow::Result<DailyEntry> {
            Ok(DailyEntry {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .with_context(|| format!("Invalid daily date '{date}'"))?,
                weather_code,
                temperature_max_c: max,
                temperature_min_c: min,
                sunrise: parse_local_time(sunrise)?,
                sunset: parse_local_time(sunset)?,
                precipitation_probability: percent(probability),
                uv_index_max: uv.unwrap_or_default(),
            })
        })
        .collect()
}

fn parse_local_time(value: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, LOCAL_TIME_FORMAT)
        .with_context(|| format!("Invalid local timestamp '{value}'"))
}

fn percent(value: Option<f64>) -> u8 {
    value.map(|v| v.round().clamp(0.0, 100.0) as u8).unwrap_or(0)
}
