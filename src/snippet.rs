// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embeddable snippet formats derived from a card URL.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Alt text used by every snippet regardless of the card kind.
pub const ALT_LABEL: &str = "GitHub Stats";

/// Shape of the string handed to the copy actions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetFormat {
    /// Markdown image: `![GitHub Stats](url)`.
    #[default]
    Markdown,
    /// HTML image tag with the URL in `src`.
    Html,
    /// The URL itself.
    Url
}

impl SnippetFormat {
    pub const ALL: [SnippetFormat; 3] =
        [SnippetFormat::Markdown, SnippetFormat::Html, SnippetFormat::Url];

    pub const fn as_str(self) -> &'static str {
        match self {
            SnippetFormat::Markdown => "markdown",
            SnippetFormat::Html => "html",
            SnippetFormat::Url => "url"
        }
    }
}

impl fmt::Display for SnippetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(SnippetFormat::Markdown),
            "html" | "img" => Ok(SnippetFormat::Html),
            "url" | "link" => Ok(SnippetFormat::Url),
            other => Err(Error::validation(format!("unknown snippet format '{other}'")))
        }
    }
}

/// Wraps `url` in the requested snippet format.
///
/// The URL is embedded exactly as given. Builder output is percent-encoded,
/// so it never contains quotes or angle brackets.
///
/// # Examples
///
/// ```
/// use ghcards::{SnippetFormat, render_snippet};
///
/// let url = "https://example.com/card?u=a&b=c";
/// assert_eq!(render_snippet(url, SnippetFormat::Markdown), "![GitHub Stats](https://example.com/card?u=a&b=c)");
/// assert_eq!(render_snippet(url, SnippetFormat::Url), url);
/// ```
pub fn render_snippet(url: &str, format: SnippetFormat) -> String {
    match format {
        SnippetFormat::Markdown => format!("![{ALT_LABEL}]({url})"),
        SnippetFormat::Html => format!("<img src=\"{url}\" alt=\"{ALT_LABEL}\" />"),
        SnippetFormat::Url => url.to_owned()
    }
}
