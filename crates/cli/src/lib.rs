//! Fav CLI Library
//!
//! This crate provides the command-line interface for fav. It parses the
//! arguments, checks that the fuzzy finder is installed, loads the favorites
//! and prints the selected command.
//!
//! # Output contract
//!
//! On a selection, exactly one line holding the command is written to stdout.
//! Nothing is written when the user cancels or nothing matches, and the exit
//! status is 0 in both cases. All diagnostics go to stderr with exit status 1.
//!
//! Putting the command into the shell's edit buffer is left to a wrapper,
//! for example in `~/.zshrc`:
//!
//! ```bash
//! fav() {
//!   local cmd=$(command fav "$@")
//!   if [[ -n "$cmd" ]]; then
//!     print -z "$cmd"
//!   fi
//! }
//! ```
//!
//! # Examples
//!
//! ```bash
//! # Search names (default)
//! fav docker
//!
//! # Search descriptions
//! fav -d clean
//!
//! # Search names and descriptions
//! fav -a git
//! ```

pub mod cli_args;
