//! Command-line interface for the ghcards binary.
//!
//! The CLI stands in for the interactive form: flags, environment variables
//! and an optional YAML file fill the options, and standard output plays the
//! clipboard for copied snippets.

use std::{
    io::{self, Write},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use ghcards::{
    CardLinks, CardsConfig, Error, Locale, Session, SnippetFormat, Theme, ViewKind,
    WriterClipboard, load_config,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Command line interface for generating GitHub card embeds.
#[derive(Debug, Parser,)]
#[command(name = "ghcards", version, about = "Build GitHub stats card URLs and snippets")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Print the URL of the selected card.
    Url(CardArgs,),
    /// Print an embeddable snippet for the selected card.
    Snippet(SnippetArgs,),
    /// Print the URLs of all three cards as JSON.
    All(AllArgs,),
}

/// Options shared by every subcommand.
#[derive(Debug, Args,)]
struct CardArgs
{
    /// GitHub username placed in the card URLs.
    #[arg(long = "username", short = 'u', value_name = "LOGIN", env = "GHCARDS_USERNAME")]
    username: Option<String,>,

    /// Theme preset (default, dark, radical, dracula, ...).
    #[arg(long = "theme", value_name = "THEME")]
    theme: Option<Theme,>,

    /// Locale tag forwarded to the card service.
    #[arg(long = "locale", value_name = "TAG")]
    locale: Option<Locale,>,

    /// Render the card without its border.
    #[arg(long = "hide-border", action = ArgAction::SetTrue, overrides_with = "no_hide_border")]
    hide_border: bool,

    /// Keep the card border even when the config file hides it.
    #[arg(long = "no-hide-border", action = ArgAction::SetTrue, overrides_with = "hide_border")]
    no_hide_border: bool,

    /// Count commits from all years on the stats card.
    #[arg(
        long = "include-all-commits",
        action = ArgAction::SetTrue,
        overrides_with = "no_include_all_commits"
    )]
    include_all_commits: bool,

    /// Count only the current year's commits even when the config file asks
    /// for all of them.
    #[arg(
        long = "no-include-all-commits",
        action = ArgAction::SetTrue,
        overrides_with = "include_all_commits"
    )]
    no_include_all_commits: bool,

    /// Card to target: stats, languages or streak.
    #[arg(long = "view", value_name = "VIEW")]
    view: Option<ViewKind,>,

    /// YAML file providing defaults for the options above.
    #[arg(long = "config", value_name = "PATH", env = "GHCARDS_CONFIG")]
    config: Option<PathBuf,>,
}

impl CardArgs
{
    fn hide_border_flag(&self,) -> Option<bool,>
    {
        toggle(self.hide_border, self.no_hide_border,)
    }

    fn include_all_commits_flag(&self,) -> Option<bool,>
    {
        toggle(self.include_all_commits, self.no_include_all_commits,)
    }
}

/// Collapses an `--x`/`--no-x` pair; `None` when neither was given.
fn toggle(on: bool, off: bool,) -> Option<bool,>
{
    match (on, off,) {
        (true, _,) => Some(true,),
        (false, true,) => Some(false,),
        (false, false,) => None,
    }
}

#[derive(Debug, Args,)]
struct SnippetArgs
{
    /// Snippet flavour: markdown, html or url.
    #[arg(long = "format", value_name = "FORMAT", default_value = "markdown")]
    format: SnippetFormat,

    #[command(flatten)]
    card: CardArgs,
}

#[derive(Debug, Args,)]
struct AllArgs
{
    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,

    #[command(flatten)]
    card: CardArgs,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    init_tracing();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter,)
        .with_writer(io::stderr,)
        .try_init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, validation and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Url(args,) => run_snippet(&args, SnippetFormat::Url, &mut handle,),
        Command::Snippet(args,) => run_snippet(&args.card, args.format, &mut handle,),
        Command::All(args,) => run_all(&args, &mut handle,),
    }
}

fn run_snippet<W: Write,>(args: &CardArgs, format: SnippetFormat, writer: W,) -> Result<(), Error,>
{
    let session = resolve_session(args,)?;
    ensure_identifier(&session,)?;

    let mut clipboard = WriterClipboard::new(writer,);
    session.copy(format, &mut clipboard,)
}

fn run_all<W: Write,>(args: &AllArgs, mut writer: W,) -> Result<(), Error,>
{
    let session = resolve_session(&args.card,)?;
    ensure_identifier(&session,)?;

    let links = CardLinks::from_options(session.options(),);
    let document = if args.pretty {
        serde_json::to_string_pretty(&links,)?
    } else {
        serde_json::to_string(&links,)?
    };
    writeln!(writer, "{document}").map_err(Error::output,)?;
    writer.flush().map_err(Error::output,)?;

    Ok((),)
}

/// Builds a session from the config file overlaid with command-line values.
///
/// The username is trimmed here, where form input enters the crate; the
/// builder encodes whatever identifier it is handed.
fn resolve_session(args: &CardArgs,) -> Result<Session, Error,>
{
    let config = match args.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => CardsConfig::default(),
    };

    let mut options = config.to_options();
    if let Some(username,) = args.username.as_ref() {
        options.identifier = username.clone();
    }
    options.identifier = options.identifier.trim().to_owned();
    if let Some(theme,) = args.theme {
        options.theme = theme;
    }
    if let Some(locale,) = args.locale.as_ref() {
        options.locale = locale.clone();
    }
    if let Some(hide_border,) = args.hide_border_flag() {
        options.hide_border = hide_border;
    }
    if let Some(include_all_commits,) = args.include_all_commits_flag() {
        options.include_all_commits = include_all_commits;
    }

    if !options.locale.is_known() {
        warn!(
            "locale '{}' is not one the card services translate; they will fall back to English",
            options.locale
        );
    }

    let view = args.view.unwrap_or_else(|| config.resolved_view(),);
    debug!(?options, %view, "Resolved card options");

    let mut session = Session::with_options(options,);
    session.switch_view(view,);
    Ok(session,)
}

/// Refuses to emit anything while the identifier is blank.
fn ensure_identifier(session: &Session,) -> Result<(), Error,>
{
    let options = session.options();
    if !options.has_identifier() {
        return Err(Error::validation(
            "missing username; pass --username or set it in the config file",
        ),);
    }
    if !options.identifier_looks_like_login() {
        warn!(
            "'{}' does not look like a GitHub login; the card may fail to render",
            options.trimmed_identifier()
        );
    }
    Ok((),)
}
