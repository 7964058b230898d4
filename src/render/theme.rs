//! Display themes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme of the report page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

const LIGHT_PALETTE: &[(&str, &str)] = &[
    ("--background-color", "#eff1f5"),
    ("--panel-color", "#e6e9ef"),
    ("--text-color", "#4c4f69"),
    ("--subtext-color", "#6c6f85"),
    ("--data-color", "#7287fd"),
];

const DARK_PALETTE: &[(&str, &str)] = &[
    ("--background-color", "#1e1e2e"),
    ("--panel-color", "#181825"),
    ("--text-color", "#cdd6f4"),
    ("--subtext-color", "#a6adc8"),
    ("--data-color", "#cba6f7"),
];

impl Theme {
    /// The theme a toggle switches to
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS custom properties for this theme
    pub fn palette(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Light => LIGHT_PALETTE,
            Theme::Dark => DARK_PALETTE,
        }
    }

    /// Label of the toggle control: the icon of the theme it leads to
    pub fn toggle_icon(self) -> &'static str {
        match self.next() {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}
