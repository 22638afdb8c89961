use std::fmt::{self, Write};

use weather_core::{UnitsPreference, WeatherCode, WeatherIcon, WeatherReport};

pub fn icon_glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Sun => "☀",
        WeatherIcon::Cloud => "☁",
        WeatherIcon::Rain => "🌧",
        WeatherIcon::Snow => "❄",
        WeatherIcon::Fog => "🌫",
        WeatherIcon::Lightning => "⚡",
    }
}

/// Full dashboard: current conditions, the next 24 hours and the week.
pub fn write_report(
    out: &mut impl Write,
    report: &WeatherReport,
    units: UnitsPreference,
    background: &str,
) -> fmt::Result {
    let condition = report.condition();
    let current = &report.current;

    writeln!(out, "{}  {}", icon_glyph(condition.icon), report.place.label())?;
    writeln!(out, "   {}", condition.description)?;
    writeln!(out)?;
    writeln!(
        out,
        "   {}   feels like {}",
        units.format_temperature(current.temperature_c),
        units.format_temperature(current.apparent_temperature_c),
    )?;
    writeln!(out)?;
    writeln!(out, "   {:<12}{}%", "Humidity", current.humidity_pct)?;
    writeln!(out, "   {:<12}{}", "Wind", units.format_speed(current.wind_speed_kmh))?;
    writeln!(out, "   {:<12}{:.0} hPa", "Pressure", current.pressure_hpa)?;
    writeln!(out, "   {:<12}{:.1}", "UV index", current.uv_index)?;
    if let Some(today) = report.today() {
        writeln!(out, "   {:<12}{}", "Sunrise", today.sunrise.format("%H:%M"))?;
        writeln!(out, "   {:<12}{}", "Sunset", today.sunset.format("%H:%M"))?;
    }

    if !report.hourly.is_empty() {
        writeln!(out)?;
        writeln!(out, "24-Hour Forecast")?;
        for hour in &report.hourly {
            writeln!(
                out,
                "   {:>4}  {} {:>6}  {:>3}%",
                hour.time.format("%-I%p").to_string(),
                icon_glyph(hour.weather_code.icon()),
                units.format_temperature(hour.temperature_c),
                hour.precipitation_probability,
            )?;
        }
    }

    if !report.daily.is_empty() {
        writeln!(out)?;
        writeln!(out, "7-Day Forecast")?;
        for (index, day) in report.daily.iter().enumerate() {
            let label = if index == 0 { "Today".to_string() } else { day.date.format("%a").to_string() };
            let mut line = format!(
                "   {:<6}{}  {:<24}{:>5} / {:<5}",
                label,
                icon_glyph(day.weather_code.icon()),
                day.weather_code.description(),
                units.format_degrees(day.temperature_max_c),
                units.format_degrees(day.temperature_min_c),
            );
            if day.precipitation_probability > 0 {
                write!(line, " {}%", day.precipitation_probability)?;
            }
            writeln!(out, "{}", line.trim_end())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Background: {background}")
}

pub fn render_report(report: &WeatherReport, units: UnitsPreference, background: &str) -> String {
    let mut out = String::new();
    write_report(&mut out, report, units, background).ok();
    out
}

/// Reference table of every documented WMO code.
pub fn write_codes(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{:>4}  {:<13}{:<10}Description", "Code", "Category", "Icon")?;
    for code in WeatherCode::KNOWN.map(WeatherCode) {
        let condition = code.describe();
        writeln!(
            out,
            "{:>4}  {:<13}{:<10}{}",
            code,
            condition.category,
            condition.icon.as_str(),
            condition.description,
        )?;
    }
    Ok(())
}

pub fn render_codes() -> String {
    let mut out = String::new();
    write_codes(&mut out).ok();
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use weather_core::{
        Coordinates, CurrentConditions, DailyEntry, HourlyEntry, Place, WeatherCategory, gradient,
    };

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    pub(crate) fn report() -> WeatherReport {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        WeatherReport {
            place: Place {
                coordinates: Coordinates { latitude: 51.5, longitude: -0.12 },
                name: "London".into(),
                country: "GB".into(),
            },
            current: CurrentConditions {
                temperature_c: 15.0,
                apparent_temperature_c: 13.6,
                humidity_pct: 72,
                pressure_hpa: 1016.4,
                wind_speed_kmh: 10.0,
                uv_index: 5.1,
                weather_code: WeatherCode(0),
            },
            hourly: vec![HourlyEntry {
                time: at(day, 15, 0),
                temperature_c: 16.0,
                weather_code: WeatherCode(61),
                precipitation_probability: 40,
            }],
            daily: vec![
                DailyEntry {
                    date: day,
                    weather_code: WeatherCode(0),
                    temperature_max_c: 19.2,
                    temperature_min_c: 11.1,
                    sunrise: at(day, 4, 44),
                    sunset: at(day, 21, 12),
                    precipitation_probability: 0,
                    uv_index_max: 6.3,
                },
                DailyEntry {
                    date: day.succ_opt().unwrap(),
                    weather_code: WeatherCode(95),
                    temperature_max_c: 22.0,
                    temperature_min_c: 14.0,
                    sunrise: at(day, 4, 43),
                    sunset: at(day, 21, 13),
                    precipitation_probability: 80,
                    uv_index_max: 2.0,
                },
            ],
        }
    }

    #[test]
    fn celsius_dashboard() {
        let background = gradient::select(WeatherCategory::Clear, false);
        let text = render_report(&report(), UnitsPreference::default(), background);

        assert!(text.starts_with("☀  London, GB\n   Clear sky\n"));
        assert!(text.contains("15°C   feels like 14°C"));
        assert!(text.contains("Wind        10 km/h"));
        assert!(text.contains("Pressure    1016 hPa"));
        assert!(text.contains("Sunrise     04:44"));
        assert!(text.contains("3PM"));
        assert!(text.contains("Today"));
        // June 2nd 2024 was a Sunday
        assert!(text.contains("Sun   ⚡  Thunderstorm"));
        assert!(text.contains("80%"));
        assert!(text.ends_with(&format!("Background: {background}\n")));
    }

    #[test]
    fn imperial_dashboard() {
        let mut units = UnitsPreference::default();
        units.toggle_temperature();
        units.toggle_speed();

        let text = render_report(&report(), units, "bg");
        assert!(text.contains("59°F   feels like 56°F"));
        assert!(text.contains("6 mph"));
        assert!(text.contains("67° / 52°"));
    }

    #[test]
    fn dry_days_hide_precipitation() {
        let text = render_report(&report(), UnitsPreference::default(), "bg");
        let today = text.lines().find(|l| l.contains("Today")).unwrap();
        assert!(!today.contains('%'), "{today}");
    }

    #[test]
    fn codes_table_lists_every_known_code() {
        let text = render_codes();
        assert_eq!(text.lines().count(), WeatherCode::KNOWN.len() + 1);
        assert!(text.contains("  48  Fog          fog       Rime fog"));
        assert!(text.contains("  99  Thunderstorm lightning Severe thunderstorm"));
    }

    struct FullSink;

    impl Write for FullSink {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn writer_errors_propagate() {
        assert!(write_report(&mut FullSink, &report(), UnitsPreference::default(), "bg").is_err());
        assert!(write_codes(&mut FullSink).is_err());
    }
}
