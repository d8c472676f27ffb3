//! Cosmetic themes. Purely presentational, no interaction with game logic.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Available color themes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Dark marks on a light background.
    #[default]
    Light,
    /// Light marks on a dark background.
    Dark,
    /// Saturated marks on black.
    Neon,
}

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Grid lines and muted chrome.
    pub grid: Color,
    /// X marks.
    pub x_mark: Color,
    /// O marks.
    pub o_mark: Color,
    /// Title text.
    pub title: Color,
    /// Status line text.
    pub status: Color,
    /// Background of cells on a winning line.
    pub win: Color,
    /// Background of the cursor cell.
    pub cursor: Color,
}

impl Theme {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::Neon => "Neon",
        }
    }

    /// The key that selects this theme in the footer hints.
    pub fn key_hint(self) -> char {
        match self {
            Theme::Light => 'l',
            Theme::Dark => 'd',
            Theme::Neon => 'n',
        }
    }

    /// Resolves the color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::White,
                grid: Color::Gray,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                title: Color::Black,
                status: Color::DarkGray,
                win: Color::LightGreen,
                cursor: Color::LightYellow,
            },
            Theme::Dark => Palette {
                background: Color::Black,
                grid: Color::DarkGray,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                title: Color::White,
                status: Color::Gray,
                win: Color::Green,
                cursor: Color::Yellow,
            },
            Theme::Neon => Palette {
                background: Color::Black,
                grid: Color::Magenta,
                x_mark: Color::LightCyan,
                o_mark: Color::LightMagenta,
                title: Color::LightGreen,
                status: Color::LightGreen,
                win: Color::LightGreen,
                cursor: Color::Cyan,
            },
        }
    }
}
