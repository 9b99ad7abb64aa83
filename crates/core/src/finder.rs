//! Invocation of the external fuzzy finder.
//!
//! The finder is anything implementing [`Finder`]. [`FzfFinder`] spawns a real
//! `fzf`; tests substitute their own implementations so that decoding and
//! exit status handling can be checked without a terminal.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use log::debug;

use crate::encoding::DELIMITER_PATTERN;
use crate::error::{Error, Result};

/// Exit code fzf uses when nothing matched the query.
pub const EXIT_NO_MATCH: i32 = 1;
/// Exit code fzf uses when interrupted with Ctrl-C or Esc.
pub const EXIT_INTERRUPTED: i32 = 130;

const PREVIEW_WINDOW: &str = "down:3:wrap:border";
const PROMPT: &str = "❯ ";
const HEIGHT: &str = "60%";
const COLORS: &str = "border:#586e75,header:#93a1a1,gutter:#002b36,prompt:#b58900,pointer:#cb4b16,marker:#dc322f,fg+:#eee8d5,bg+:#073642,hl+:#b58900";
const BINDINGS: &str =
    "ctrl-u:preview-page-up,ctrl-d:preview-page-down,ctrl-f:preview-page-down,ctrl-b:preview-page-up";
const HEADER: &str = "Enter: select • Ctrl+C: cancel • Ctrl+U/D: scroll preview";

/// Checks that `program` can be resolved on `PATH` (or is an existing path).
///
/// # Errors
///
/// Returns [`Error::DependencyMissing`] if it cannot be found.
pub fn ensure_available(program: &str) -> Result<PathBuf> {
    match which::which(program) {
        Ok(path) => {
            debug!("Found `{}` at `{}`", program, path.display());
            Ok(path)
        }
        Err(e) => {
            debug!("Could not resolve `{}`: {}", program, e);
            Err(Error::dependency_missing(program))
        }
    }
}

/// Arguments handed to the finder.
///
/// Records are read and printed NUL terminated. Fields are split on the
/// delimiter; everything before the last delimiter is shown and searched, and
/// the last field (the command) is echoed in the preview pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOptions {
    /// Regular expression matching the field delimiter.
    pub delimiter_pattern: String,
    /// Field range that is displayed and searched.
    pub with_nth: String,
    pub preview: String,
    /// Pre-filled query, omitted from the arguments when empty.
    pub query: String,
}

impl FinderOptions {
    pub fn new(query: &str) -> Self {
        Self {
            delimiter_pattern: DELIMITER_PATTERN.to_string(),
            with_nth: "..-2".to_string(),
            preview: "echo {-1}".to_string(),
            query: query.to_string(),
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--read0".to_string(),
            "--print0".to_string(),
            format!("--delimiter={}", self.delimiter_pattern),
            format!("--with-nth={}", self.with_nth),
            format!("--preview={}", self.preview),
            format!("--preview-window={PREVIEW_WINDOW}"),
            format!("--prompt={PROMPT}"),
            format!("--height={HEIGHT}"),
            "--layout=reverse".to_string(),
            "--border=rounded".to_string(),
            "--info=inline".to_string(),
            format!("--color={COLORS}"),
            format!("--bind={BINDINGS}"),
            format!("--header={HEADER}"),
            "--margin=1,2".to_string(),
        ];

        if !self.query.is_empty() {
            args.push(format!("--query={}", self.query));
        }

        args
    }
}

/// What the finder printed and how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderOutput {
    pub stdout: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

pub trait Finder {
    /// Feeds `input` to the finder and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    fn run(&self, input: &str, options: &FinderOptions) -> Result<FinderOutput>;
}

/// Runs an `fzf` compatible executable as a child process.
#[derive(Debug, Clone)]
pub struct FzfFinder {
    program: String,
}

impl FzfFinder {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Finder for FzfFinder {
    fn run(&self, input: &str, options: &FinderOptions) -> Result<FinderOutput> {
        let args = options.to_args();
        debug!("Running `{}` with arguments: {:?}", self.program, args);

        // fzf draws its interface on the tty, so stderr stays attached
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                // The finder may exit before reading everything, e.g. on an early Ctrl-C
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("Finder closed its input early");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output()?;
        debug!("Finder exited with {}", output.status);

        Ok(FinderOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code(),
        })
    }
}
