// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Visual themes understood by the card endpoints.
//!
//! The set is closed: every card service accepts the same twelve theme names.
//! [`Theme::Default`] is the sentinel that the URL builder never writes into a
//! query string.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Theme preset applied to every generated card.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Service default palette. Omitted from generated URLs.
    #[default]
    Default,
    Dark,
    Radical,
    Merko,
    Gruvbox,
    Tokyonight,
    Onedark,
    Cobalt,
    Synthwave,
    Highcontrast,
    Dracula,
    Nord
}

impl Theme {
    /// Every supported theme in presentation order.
    pub const ALL: [Theme; 12] = [
        Theme::Default,
        Theme::Dark,
        Theme::Radical,
        Theme::Merko,
        Theme::Gruvbox,
        Theme::Tokyonight,
        Theme::Onedark,
        Theme::Cobalt,
        Theme::Synthwave,
        Theme::Highcontrast,
        Theme::Dracula,
        Theme::Nord
    ];

    /// Returns the query-string value for the theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Dark => "dark",
            Theme::Radical => "radical",
            Theme::Merko => "merko",
            Theme::Gruvbox => "gruvbox",
            Theme::Tokyonight => "tokyonight",
            Theme::Onedark => "onedark",
            Theme::Cobalt => "cobalt",
            Theme::Synthwave => "synthwave",
            Theme::Highcontrast => "highcontrast",
            Theme::Dracula => "dracula",
            Theme::Nord => "nord"
        }
    }

    /// Returns `true` for the sentinel that must not appear in URLs.
    pub const fn is_default(self) -> bool {
        matches!(self, Theme::Default)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    /// Parses a theme name, ignoring surrounding whitespace and ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghcards::Theme;
    ///
    /// let theme: Theme = " Dracula ".parse()?;
    /// assert_eq!(theme, Theme::Dracula);
    /// # Ok::<(), ghcards::Error>(())
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::validation(format!("unknown theme '{trimmed}'")))
    }
}
