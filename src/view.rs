// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Card kinds and the fixed query-parameter policy of their endpoints.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// Card type a URL can be generated for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Overall profile statistics card.
    #[default]
    Stats,
    /// Most used languages card.
    Languages,
    /// Contribution streak card.
    Streak
}

impl ViewKind {
    /// Every view in tab order.
    pub const ALL: [ViewKind; 3] = [ViewKind::Stats, ViewKind::Languages, ViewKind::Streak];

    pub const fn as_str(self) -> &'static str {
        match self {
            ViewKind::Stats => "stats",
            ViewKind::Languages => "languages",
            ViewKind::Streak => "streak"
        }
    }

    /// Returns the endpoint policy used when building URLs for the view.
    pub const fn policy(self) -> &'static EndpointPolicy {
        match self {
            ViewKind::Stats => &STATS_POLICY,
            ViewKind::Languages => &LANGUAGES_POLICY,
            ViewKind::Streak => &STREAK_POLICY
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stats" => Ok(ViewKind::Stats),
            "languages" | "top-languages" | "top_languages" | "top-langs" => {
                Ok(ViewKind::Languages)
            }
            "streak" => Ok(ViewKind::Streak),
            other => Err(Error::validation(format!("unknown view '{other}'")))
        }
    }
}

/// Fixed description of what a card endpoint accepts.
///
/// Base addresses are compile-time constants; nothing about a policy is
/// configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPolicy {
    /// Absolute endpoint root the query string is appended to.
    pub base_url:            &'static str,
    /// Query key carrying the profile identifier. Always written first.
    pub identifier_key:      &'static str,
    /// Whether the endpoint understands `include_all_commits`.
    pub include_all_commits: bool
}

const STATS_POLICY: EndpointPolicy = EndpointPolicy {
    base_url:            "https://github-readme-stats.vercel.app/api",
    identifier_key:      "username",
    include_all_commits: true
};

const LANGUAGES_POLICY: EndpointPolicy = EndpointPolicy {
    base_url:            "https://github-readme-stats.vercel.app/api/top-langs/",
    identifier_key:      "username",
    include_all_commits: false
};

const STREAK_POLICY: EndpointPolicy = EndpointPolicy {
    base_url:            "https://streak-stats.demolab.com/",
    identifier_key:      "user",
    include_all_commits: false
};

#[cfg(test)]
mod tests {
    use super::ViewKind;

    #[test]
    fn default_view_is_stats() {
        assert_eq!(ViewKind::default(), ViewKind::Stats);
    }

    #[test]
    fn only_stats_accepts_include_all_commits() {
        assert!(ViewKind::Stats.policy().include_all_commits);
        assert!(!ViewKind::Languages.policy().include_all_commits);
        assert!(!ViewKind::Streak.policy().include_all_commits);
    }

    #[test]
    fn base_addresses_are_absolute_and_distinct() {
        let bases: Vec<&str> = ViewKind::ALL
            .iter()
            .map(|view| view.policy().base_url)
            .collect();
        assert!(bases.iter().all(|base| base.starts_with("https://")));
        assert_ne!(bases[0], bases[1]);
        assert_ne!(bases[1], bases[2]);
        assert_ne!(bases[0], bases[2]);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("top-languages".parse::<ViewKind>().ok(), Some(ViewKind::Languages));
        assert_eq!("Top-Langs".parse::<ViewKind>().ok(), Some(ViewKind::Languages));
        assert_eq!(" STREAK ".parse::<ViewKind>().ok(), Some(ViewKind::Streak));
    }

    #[test]
    fn parse_rejects_unknown_view() {
        let error = "graph".parse::<ViewKind>().expect_err("expected failure");
        assert!(error.to_string().contains("unknown view 'graph'"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for view in ViewKind::ALL {
            assert_eq!(view.to_string().parse::<ViewKind>().ok(), Some(view));
        }
    }
}
