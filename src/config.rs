//! Optional YAML document that seeds the card options.
//!
//! Every field may be omitted. Values given on the command line take
//! precedence over the document, which in turn takes precedence over the
//! built-in defaults.

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::{
    error::{self, Error},
    locale::Locale,
    options::CardOptions,
    theme::Theme,
    view::ViewKind,
};

/// Card preferences loaded from a YAML document.
///
/// # Examples
///
/// ```
/// use ghcards::{Theme, ViewKind, parse_config};
///
/// let config = parse_config("username: octocat\ntheme: dracula\nview: streak\n",)?;
/// assert_eq!(config.theme, Some(Theme::Dracula));
/// assert_eq!(config.view, Some(ViewKind::Streak));
/// # Ok::<(), ghcards::Error>(())
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize,)]
#[serde(deny_unknown_fields)]
pub struct CardsConfig
{
    /// Profile handle shared by all cards.
    #[serde(default, alias = "user", alias = "identifier")]
    pub username: Option<String,>,

    #[serde(default, deserialize_with = "deserialize_optional_theme")]
    pub theme: Option<Theme,>,

    #[serde(default)]
    pub locale: Option<Locale,>,

    #[serde(default, alias = "hide-border", alias = "hideBorder")]
    pub hide_border: Option<bool,>,

    #[serde(default, alias = "include-all-commits", alias = "includeAllCommits")]
    pub include_all_commits: Option<bool,>,

    /// Card selected when a session starts.
    #[serde(default, deserialize_with = "deserialize_optional_view")]
    pub view: Option<ViewKind,>,
}

impl CardsConfig
{
    /// Resolves the document into options, falling back to defaults for
    /// missing fields.
    pub fn to_options(&self,) -> CardOptions
    {
        CardOptions {
            identifier:          self.username.clone().unwrap_or_default(),
            theme:               self.theme.unwrap_or_default(),
            locale:              self.locale.clone().unwrap_or_default(),
            hide_border:         self.hide_border.unwrap_or(false,),
            include_all_commits: self.include_all_commits.unwrap_or(false,),
        }
    }

    /// View the document asks for, or the stats card.
    pub fn resolved_view(&self,) -> ViewKind
    {
        self.view.unwrap_or_default()
    }
}

/// Loads a configuration document from `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// propagates [`parse_config`] failures.
pub fn load_config(path: &Path,) -> Result<CardsConfig, Error,>
{
    info!("Reading card configuration from {}", path.display());
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_config(&contents,)
}

/// Parses a configuration document from a string.
///
/// An empty document yields [`CardsConfig::default`].
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the YAML is malformed, names an
/// unknown field, or uses an unknown theme or view.
pub fn parse_config(contents: &str,) -> Result<CardsConfig, Error,>
{
    if contents.trim().is_empty() {
        debug!("Configuration document is empty, using defaults");
        return Ok(CardsConfig::default(),);
    }

    let config: CardsConfig = serde_yaml::from_str(contents,)?;
    debug!(?config, "Parsed card configuration");
    Ok(config,)
}

fn deserialize_optional_theme<'de, D,>(deserializer: D,) -> Result<Option<Theme,>, D::Error,>
where
    D: Deserializer<'de,>,
{
    let value: Option<String,> = Option::deserialize(deserializer,)?;
    value
        .map(|name| name.parse::<Theme>().map_err(<D::Error as serde::de::Error>::custom,),)
        .transpose()
}

fn deserialize_optional_view<'de, D,>(deserializer: D,) -> Result<Option<ViewKind,>, D::Error,>
where
    D: Deserializer<'de,>,
{
    let value: Option<String,> = Option::deserialize(deserializer,)?;
    value
        .map(|name| name.parse::<ViewKind>().map_err(<D::Error as serde::de::Error>::custom,),)
        .transpose()
}
