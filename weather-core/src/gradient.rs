//! Background gradients keyed by weather category and theme.

use serde::{Deserialize, Serialize};

use crate::codes::WeatherCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub const fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A light and a dark CSS gradient for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientDescriptor {
    pub light: &'static str,
    pub dark: &'static str,
}

impl GradientDescriptor {
    pub fn variant(&self, is_dark: bool) -> &'static str {
        if is_dark { self.dark } else { self.light }
    }
}

const CLEAR: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(210 100% 50%) 0%, hsl(45 100% 60%) 100%)",
    dark: "linear-gradient(135deg, hsl(215 28% 17%) 0%, hsl(220 26% 25%) 100%)",
};

const CLOUDS: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(200 20% 70%) 0%, hsl(210 20% 85%) 100%)",
    dark: "linear-gradient(135deg, hsl(215 25% 20%) 0%, hsl(215 20% 30%) 100%)",
};

const RAIN: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(200 50% 50%) 0%, hsl(210 50% 60%) 100%)",
    dark: "linear-gradient(135deg, hsl(210 30% 15%) 0%, hsl(215 30% 22%) 100%)",
};

const SNOW: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(200 30% 85%) 0%, hsl(210 30% 95%) 100%)",
    dark: "linear-gradient(135deg, hsl(210 20% 25%) 0%, hsl(215 20% 35%) 100%)",
};

const THUNDERSTORM: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(220 30% 40%) 0%, hsl(230 30% 50%) 100%)",
    dark: "linear-gradient(135deg, hsl(220 40% 10%) 0%, hsl(230 40% 18%) 100%)",
};

const FOG: GradientDescriptor = GradientDescriptor {
    light: "linear-gradient(135deg, hsl(210 15% 75%) 0%, hsl(200 15% 85%) 100%)",
    dark: "linear-gradient(135deg, hsl(215 20% 22%) 0%, hsl(210 20% 28%) 100%)",
};

/// Gradient pair for a category; anything without its own entry gets Clear.
pub fn descriptor(category: WeatherCategory) -> &'static GradientDescriptor {
    match category {
        WeatherCategory::Clear => &CLEAR,
        WeatherCategory::Clouds => &CLOUDS,
        WeatherCategory::Rain => &RAIN,
        WeatherCategory::Snow => &SNOW,
        WeatherCategory::Thunderstorm => &THUNDERSTORM,
        WeatherCategory::Fog => &FOG,
        WeatherCategory::Unknown => &CLEAR,
    }
}

pub fn select(category: WeatherCategory, is_dark: bool) -> &'static str {
    descriptor(category).variant(is_dark)
}
