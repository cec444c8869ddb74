// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embed URL and snippet generation for GitHub profile cards.
//!
//! The library maps a small options record (profile identifier, theme,
//! locale, border and commit-scope toggles) onto the URLs of three hosted
//! card services: stats, top languages and streak. A [`Session`] tracks the
//! options being edited and the active card, exposes the gated preview, and
//! hands snippets to a [`Clipboard`] collaborator. No network calls are made;
//! only addresses are built.

mod builder;
mod clipboard;
mod config;
mod error;
mod locale;
mod options;
mod session;
mod snippet;
mod theme;
mod view;

pub use builder::{CardLinks, build_url};
pub use clipboard::{Clipboard, WriterClipboard};
pub use config::{CardsConfig, load_config, parse_config};
pub use error::{Error, io_error};
pub use locale::{KNOWN_LOCALES, Locale};
pub use options::CardOptions;
pub use session::{Event, Loading, Preview, Session};
pub use snippet::{ALT_LABEL, SnippetFormat, render_snippet};
pub use theme::Theme;
pub use view::{EndpointPolicy, ViewKind};
