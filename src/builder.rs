// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Pure URL construction for the card endpoints.
//!
//! The builder concatenates the base address of a view with the identifier
//! parameter and then appends optional parameters in a fixed order: `theme`,
//! `locale`, `hide_border`, `include_all_commits`. Values equal to their
//! defaults are left out entirely. Every value is percent-encoded as a URL
//! component so that unusual identifiers cannot break the query string. The
//! identifier is otherwise inserted exactly as given, surrounding whitespace
//! included.

use std::borrow::Cow;

use serde::Serialize;

use crate::{options::CardOptions, view::ViewKind};

/// Builds the card URL for `view` from `options`.
///
/// The function never fails. An empty identifier still yields a well-formed
/// URL with an empty primary value; callers decide whether to show it.
///
/// # Examples
///
/// ```
/// use ghcards::{CardOptions, Theme, ViewKind, build_url};
///
/// let options = CardOptions::new("octocat").with_theme(Theme::Dracula).with_hide_border(true);
/// assert_eq!(
///     build_url(&options, ViewKind::Stats),
///     "https://github-readme-stats.vercel.app/api?username=octocat&theme=dracula&hide_border=true"
/// );
/// ```
pub fn build_url(options: &CardOptions, view: ViewKind) -> String {
    let policy = view.policy();
    let identifier = encode(&options.identifier);

    let mut url = String::with_capacity(policy.base_url.len() + identifier.len() + 64);
    url.push_str(policy.base_url);
    url.push('?');
    url.push_str(policy.identifier_key);
    url.push('=');
    url.push_str(&identifier);

    if !options.theme.is_default() {
        push_param(&mut url, "theme", &encode(options.theme.as_str()));
    }
    if !options.locale.is_default() {
        push_param(&mut url, "locale", &encode(options.locale.as_str()));
    }
    if options.hide_border {
        push_param(&mut url, "hide_border", "true");
    }
    if options.include_all_commits && policy.include_all_commits {
        push_param(&mut url, "include_all_commits", "true");
    }

    url
}

fn push_param(url: &mut String, key: &str, value: &str) {
    url.push('&');
    url.push_str(key);
    url.push('=');
    url.push_str(value);
}

fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// URLs for all three cards computed from a single options value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLinks {
    pub stats:     String,
    pub languages: String,
    pub streak:    String
}

impl CardLinks {
    /// Builds every card URL for `options`.
    pub fn from_options(options: &CardOptions) -> Self {
        Self {
            stats:     build_url(options, ViewKind::Stats),
            languages: build_url(options, ViewKind::Languages),
            streak:    build_url(options, ViewKind::Streak)
        }
    }

    /// Returns the URL belonging to `view`.
    pub fn get(&self, view: ViewKind) -> &str {
        match view {
            ViewKind::Stats => &self.stats,
            ViewKind::Languages => &self.languages,
            ViewKind::Streak => &self.streak
        }
    }
}
