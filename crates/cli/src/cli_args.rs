//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Tokens that look like flags but are not known to the command are
//! taken as search terms, so `fav -la` searches for `-la`.

use std::ffi::OsString;

use clap::{Arg, Command, CommandFactory, Parser};
use fav_core::favorites::SearchMode;

const EXAMPLES: &str = "\
Examples:
  fav docker          # Search names for \"docker\"
  fav -d clean        # Search descriptions for \"clean\"
  fav -a git          # Search both fields for \"git\"";

/// Command-line arguments for the `fav` binary.
///
/// The mode flags override each other, so the last one given wins. Any number
/// of search terms may be given; the last one is used.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use fav_cli::cli_args::Args;
/// use fav_core::favorites::SearchMode;
///
/// let args = Args::parse_from(["fav", "-d", "clean"]);
/// assert_eq!(args.search_mode(), SearchMode::Description);
/// assert_eq!(args.search_term(), "clean");
///
/// let args = Args::parse_permissive_from(["fav", "-d", "-la"]);
/// assert_eq!(args.search_term(), "-la");
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "fav",
    about = "Fuzzy search your favorite shell commands and print the chosen one",
    after_help = EXAMPLES,
    args_override_self = true,
    term_width = 0
)]
pub struct Args {
    /// Search names only (default).
    #[arg(long, short = 'n', overrides_with_all = ["description", "all"])]
    pub name: bool,

    /// Search descriptions only.
    #[arg(long, short = 'd', overrides_with_all = ["name", "all"])]
    pub description: bool,

    /// Search both names and descriptions.
    #[arg(long, short = 'a', overrides_with_all = ["name", "description"])]
    pub all: bool,

    /// Path to the favorites JSON file.
    ///
    /// If not provided, defaults to `~/.config/personal_cfg/history_fav.json`.
    #[arg(long, short = 'c', allow_hyphen_values = true)]
    pub config_path: Option<String>,

    /// Fuzzy finder executable to run instead of `fzf`.
    #[arg(long, allow_hyphen_values = true)]
    pub finder: Option<String>,

    /// Initial query for the finder. If several are given the last one is used.
    #[arg(value_name = "SEARCH_TERM")]
    pub search_terms: Vec<String>,
}

/// How a single command-line token is treated.
enum Token {
    Flag { needs_value: bool },
    Term,
}

fn takes_value(arg: &Arg) -> bool {
    arg.get_action().takes_values()
}

fn classify(command: &Command, text: &str) -> Token {
    if let Some(long) = text.strip_prefix("--") {
        let (name, has_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false),
        };

        return match command.get_arguments().find(|arg| arg.get_long() == Some(name)) {
            Some(arg) => Token::Flag {
                needs_value: takes_value(arg) && !has_value,
            },
            None => Token::Term,
        };
    }

    let Some(shorts) = text.strip_prefix('-').filter(|shorts| !shorts.is_empty()) else {
        return Token::Term;
    };

    for (index, short) in shorts.char_indices() {
        match command.get_arguments().find(|arg| arg.get_short() == Some(short)) {
            // The rest of the cluster, if any, is the option's value
            Some(arg) if takes_value(arg) => {
                return Token::Flag {
                    needs_value: index + short.len_utf8() == shorts.len(),
                }
            }
            Some(_) => {}
            None => return Token::Term,
        }
    }

    Token::Flag { needs_value: false }
}

/// Moves every search term behind a `--` so clap never sees an unknown flag.
///
/// Known flags (and option values) keep their relative order, as do the
/// search terms.
fn separate_search_terms(raw: Vec<OsString>) -> Vec<OsString> {
    let mut command = Args::command();
    command.build();

    let mut raw = raw.into_iter();
    let mut flags: Vec<OsString> = raw.next().into_iter().collect();
    let mut terms = Vec::new();
    let mut expects_value = false;
    let mut escaped = false;

    for token in raw {
        if escaped {
            terms.push(token);
            continue;
        }

        if expects_value {
            flags.push(token);
            expects_value = false;
            continue;
        }

        let Some(text) = token.to_str() else {
            terms.push(token);
            continue;
        };

        if text == "--" {
            escaped = true;
            continue;
        }

        match classify(&command, text) {
            Token::Flag { needs_value } => {
                expects_value = needs_value;
                flags.push(token);
            }
            Token::Term => terms.push(token),
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(terms);
    flags
}

impl Args {
    /// Parses like [`Parser::parse_from`], except that unrecognised
    /// dash-prefixed tokens become search terms instead of usage errors.
    pub fn parse_permissive_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(separate_search_terms(
            itr.into_iter().map(Into::into).collect(),
        ))
    }

    /// [`Args::parse_permissive_from`] over the process arguments.
    pub fn parse_permissive() -> Self {
        Self::parse_permissive_from(std::env::args_os())
    }

    #[must_use]
    pub fn search_mode(&self) -> SearchMode {
        if self.all {
            SearchMode::All
        } else if self.description {
            SearchMode::Description
        } else {
            SearchMode::Name
        }
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search_terms.last().map_or("", String::as_str)
    }
}
