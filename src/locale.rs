// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Locale tags forwarded to the card endpoints.
//!
//! Eleven tags are known to the services. Anything else is passed through
//! untouched, since the endpoints fall back to English on their own.
//!
//! The representation is private: every [`Locale`] goes through
//! [`Locale::from_tag`], so `en` in any case or spacing, and blank input,
//! always resolve to the English sentinel.

use std::{borrow::Cow, convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// Tags the card services ship translations for, `en` first.
pub const KNOWN_LOCALES: [&str; 11] =
    ["en", "cn", "de", "es", "fr", "it", "ja", "kr", "pt-br", "ru", "tr"];

/// Locale selected for the rendered card text.
///
/// # Examples
///
/// ```
/// use ghcards::Locale;
///
/// assert_eq!(Locale::from_tag(" EN "), Locale::ENGLISH);
/// assert!(Locale::from_tag("").is_default());
/// assert_eq!(Locale::from_tag("PT-BR").as_str(), "pt-br");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Locale(Repr);

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
enum Repr {
    #[default]
    English,
    Known(&'static str),
    Custom(String)
}

impl Locale {
    /// English sentinel that is never written into URLs.
    pub const ENGLISH: Locale = Locale(Repr::English);

    /// Resolves a raw tag into a locale.
    ///
    /// Blank input maps to [`Locale::ENGLISH`]. Known tags are matched without
    /// regard to ASCII case; unknown tags are trimmed and kept as given.
    pub fn from_tag(tag: &str) -> Self {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Locale::ENGLISH;
        }

        match KNOWN_LOCALES
            .iter()
            .find(|known| known.eq_ignore_ascii_case(trimmed))
        {
            Some(&"en") => Locale::ENGLISH,
            Some(known) => Locale(Repr::Known(*known)),
            None => Locale(Repr::Custom(trimmed.to_owned()))
        }
    }

    /// Returns the tag written into query strings.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Repr::English => "en",
            Repr::Known(tag) => tag,
            Repr::Custom(tag) => tag.as_str()
        }
    }

    /// Returns `true` when the locale is the `en` sentinel.
    pub fn is_default(&self) -> bool {
        matches!(self.0, Repr::English)
    }

    /// Returns `true` when the tag is one the services ship translations for.
    pub fn is_known(&self) -> bool {
        !matches!(self.0, Repr::Custom(_))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from_tag(value))
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>
    {
        let raw: Cow<'de, str> = Cow::deserialize(deserializer)?;
        Ok(Locale::from_tag(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::{KNOWN_LOCALES, Locale};

    #[test]
    fn default_is_english() {
        let locale = Locale::default();
        assert!(locale.is_default());
        assert_eq!(locale, Locale::ENGLISH);
        assert_eq!(locale.as_str(), "en");
    }

    #[test]
    fn english_in_any_spelling_is_the_sentinel() {
        for tag in ["en", "EN", "En", " en ", "\ten\n", "", "   "] {
            let locale = Locale::from_tag(tag);
            assert!(locale.is_default(), "{tag:?} should resolve to english");
            assert_eq!(locale, Locale::ENGLISH);
        }
    }

    #[test]
    fn known_tags_resolve_case_insensitively() {
        let locale = Locale::from_tag("PT-BR");
        assert_eq!(locale.as_str(), "pt-br");
        assert!(locale.is_known());
        assert!(!locale.is_default());
    }

    #[test]
    fn every_known_tag_is_recognized() {
        for tag in KNOWN_LOCALES {
            let locale = Locale::from_tag(tag);
            assert!(locale.is_known(), "{tag} should be known");
            assert_eq!(locale.as_str(), tag);
        }
    }

    #[test]
    fn unknown_tags_pass_through_trimmed() {
        let locale = Locale::from_tag(" sv-SE ");
        assert_eq!(locale.as_str(), "sv-SE");
        assert!(!locale.is_known());
        assert!(!locale.is_default());
    }

    #[test]
    fn parse_matches_from_tag() {
        let parsed: Locale = "Ja".parse().expect("infallible");
        assert_eq!(parsed, Locale::from_tag("ja"));
    }

    #[test]
    fn deserialize_goes_through_from_tag() {
        let locale: Locale = serde_yaml::from_str("ja").expect("deserialize");
        assert_eq!(locale.as_str(), "ja");

        let english: Locale = serde_yaml::from_str("\"EN\"").expect("deserialize");
        assert!(english.is_default());
    }
}
