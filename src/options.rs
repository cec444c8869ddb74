// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Options record driving every generated card URL.

use std::sync::LazyLock;

use regex::Regex;

use crate::{locale::Locale, theme::Theme};

/// GitHub login shape: alphanumeric runs joined by single hyphens, at most 39
/// characters.
static GITHUB_LOGIN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9]){0,38}$").ok());

/// User-selected values shared by the stats, top-languages and streak cards.
///
/// The record is a plain value: session edits replace individual fields or the
/// whole record, and the URL builder only ever reads it.
///
/// # Examples
///
/// ```
/// use ghcards::{CardOptions, Locale, Theme};
///
/// let options = CardOptions::new("octocat").with_theme(Theme::Dracula);
/// assert_eq!(options.identifier, "octocat");
/// assert_eq!(options.locale, Locale::ENGLISH);
/// assert!(!options.hide_border);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardOptions {
    /// Profile handle placed in the primary query parameter. Inserted as
    /// given apart from percent-encoding.
    pub identifier:          String,
    /// Theme preset, omitted from URLs when it is the default.
    pub theme:               Theme,
    /// Locale tag, omitted from URLs when it is `en`.
    pub locale:              Locale,
    /// Requests a card without the outer border.
    pub hide_border:         bool,
    /// Counts commits from every year instead of the current one. Only the
    /// stats card honors it.
    pub include_all_commits: bool
}

impl CardOptions {
    /// Creates options for `identifier` with every other field at its default.
    pub fn new<I>(identifier: I) -> Self
    where
        I: Into<String>
    {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_hide_border(mut self, hide_border: bool) -> Self {
        self.hide_border = hide_border;
        self
    }

    pub fn with_include_all_commits(mut self, include_all_commits: bool) -> Self {
        self.include_all_commits = include_all_commits;
        self
    }

    /// Identifier with surrounding whitespace removed, used by the
    /// presentation gate.
    pub fn trimmed_identifier(&self) -> &str {
        self.identifier.trim()
    }

    /// Returns `true` when there is an identifier worth rendering.
    ///
    /// Callers gate previews and copy actions on this; the URL builder itself
    /// produces a URL either way.
    pub fn has_identifier(&self) -> bool {
        !self.trimmed_identifier().is_empty()
    }

    /// Returns `true` when the identifier has the shape of a GitHub login.
    ///
    /// This is a hint for the presentation layer only. Whether the account
    /// exists is never checked.
    pub fn identifier_looks_like_login(&self) -> bool {
        GITHUB_LOGIN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(self.trimmed_identifier()))
    }
}
