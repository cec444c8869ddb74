// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Form session: the options being edited plus the active card view.
//!
//! A [`Session`] replaces the global form and tab state of an interactive
//! page with an explicit record driven by [`Event`]s. URLs are recomputed on
//! every read; nothing is cached between edits.

use tracing::{debug, warn};

use crate::{
    builder::build_url,
    clipboard::Clipboard,
    error::Error,
    locale::Locale,
    options::CardOptions,
    snippet::{SnippetFormat, render_snippet},
    theme::Theme,
    view::ViewKind
};

/// Loading priority for an image surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Loading {
    /// Active view, fetch immediately.
    Eager,
    /// Hidden view, fetch when shown.
    Lazy
}

/// Edit applied to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetIdentifier(String),
    SetTheme(Theme),
    SetLocale(Locale),
    SetHideBorder(bool),
    SetIncludeAllCommits(bool),
    /// Replaces the whole options record.
    ReplaceOptions(CardOptions),
    SwitchView(ViewKind)
}

/// What the preview surface should show for the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub view:    ViewKind,
    pub url:     String,
    pub loading: Loading
}

/// Options being edited together with the active view selector.
///
/// # Examples
///
/// ```
/// use ghcards::{Event, Loading, Session, SnippetFormat, ViewKind};
///
/// let mut session = Session::new();
/// assert!(session.preview().is_none());
///
/// session.apply(Event::SetIdentifier("octocat".to_owned()));
/// session.switch_view(ViewKind::Streak);
///
/// assert_eq!(session.loading_hint(ViewKind::Streak), Loading::Eager);
/// assert_eq!(session.snippet(SnippetFormat::Url), "https://streak-stats.demolab.com/?user=octocat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    options: CardOptions,
    active:  ViewKind,
    loading: [Loading; 3]
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with default options and the stats view active.
    pub fn new() -> Self {
        Self::with_options(CardOptions::default())
    }

    /// Creates a session seeded with `options` and the stats view active.
    pub fn with_options(options: CardOptions) -> Self {
        Self {
            options,
            active: ViewKind::default(),
            loading: loading_hints(ViewKind::default())
        }
    }

    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    pub fn active_view(&self) -> ViewKind {
        self.active
    }

    /// Makes `view` the active view and refreshes the loading hints.
    ///
    /// The options record is left untouched.
    pub fn switch_view(&mut self, view: ViewKind) {
        if self.active != view {
            debug!(from = %self.active, to = %view, "switching card view");
        }
        self.active = view;
        self.loading = loading_hints(view);
    }

    /// Loading hint for the image surface of `view`.
    pub fn loading_hint(&self, view: ViewKind) -> Loading {
        self.loading[view_index(view)]
    }

    /// Applies a single edit.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::SetIdentifier(identifier) => self.options.identifier = identifier,
            Event::SetTheme(theme) => self.options.theme = theme,
            Event::SetLocale(locale) => self.options.locale = locale,
            Event::SetHideBorder(hide_border) => self.options.hide_border = hide_border,
            Event::SetIncludeAllCommits(include) => self.options.include_all_commits = include,
            Event::ReplaceOptions(options) => self.options = options,
            Event::SwitchView(view) => self.switch_view(view)
        }
    }

    /// URL of the active view built from the current options.
    pub fn active_url(&self) -> String {
        build_url(&self.options, self.active)
    }

    /// Snippet of the active view in the requested format.
    pub fn snippet(&self, format: SnippetFormat) -> String {
        render_snippet(&self.active_url(), format)
    }

    /// Returns the preview for the active view, or `None` while the
    /// identifier is blank.
    pub fn preview(&self) -> Option<Preview> {
        if !self.options.has_identifier() {
            return None;
        }

        Some(Preview {
            view:    self.active,
            url:     self.active_url(),
            loading: self.loading_hint(self.active)
        })
    }

    /// Hands the active snippet to `clipboard`.
    ///
    /// The outcome is returned for the presentation layer to report; the
    /// session itself is unaffected either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] without touching the clipboard when the
    /// identifier is blank, and propagates [`Error::Clipboard`] from the
    /// collaborator.
    pub fn copy<C>(&self, format: SnippetFormat, clipboard: &mut C) -> Result<(), Error>
    where
        C: Clipboard + ?Sized
    {
        if !self.options.has_identifier() {
            return Err(Error::validation("an identifier is required before copying"));
        }

        let snippet = self.snippet(format);
        clipboard.write_text(&snippet).inspect_err(|error| {
            warn!(view = %self.active, %format, "clipboard write failed: {error}");
        })
    }
}

fn view_index(view: ViewKind) -> usize {
    match view {
        ViewKind::Stats => 0,
        ViewKind::Languages => 1,
        ViewKind::Streak => 2
    }
}

fn loading_hints(active: ViewKind) -> [Loading; 3] {
    ViewKind::ALL.map(|view| {
        if view == active {
            Loading::Eager
        } else {
            Loading::Lazy
        }
    })
}
