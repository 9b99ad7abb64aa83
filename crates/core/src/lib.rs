//! Fav Core Library
//!
//! This crate provides the core functionality for fav, a small tool that lets
//! you fuzzy search a personal list of favorite shell commands with `fzf` and
//! prints the chosen command to stdout.
//!
//! # Key Features
//!
//! - **Favorites Store**: Load and validate the JSON favorites file
//! - **Line Encoding**: Pack each favorite into a `<display> |> <command>` line
//! - **Finder Invocation**: Run `fzf` (or a test double) over the encoded lines
//! - **Selection Decoding**: Recover the command from the selected line
//! - **Error Handling**: One error type covering every failure mode
//!
//! # Examples
//!
//! ```no_run
//! use fav_core::config::Config;
//! use fav_core::favorites::SearchMode;
//! use fav_core::file_handling::get_favorites;
//! use fav_core::finder::{ensure_available, FzfFinder};
//! use fav_core::selection::select_command;
//!
//! let config = Config::default();
//! ensure_available(&config.finder)?;
//! let favorites = get_favorites(&config.favorites_path)?;
//!
//! let finder = FzfFinder::new(&config.finder);
//! if let Some(command) = select_command(&finder, &favorites, SearchMode::Name, "docker")? {
//!     println!("{command}");
//! }
//! # Ok::<(), fav_core::error::Error>(())
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod favorites;
pub mod file_handling;
pub mod finder;
pub mod selection;
