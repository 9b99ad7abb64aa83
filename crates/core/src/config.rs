//! Configuration path utilities for fav.
//!
//! Everything environment-derived (the home directory, the finder executable)
//! is resolved once into a [`Config`] and handed to the loader and selector.

/// Default path for the favorites store
const DEFAULT_FAVORITES_PATH: &str = "~/.config/personal_cfg/history_fav.json";

/// Default fuzzy finder executable
pub const DEFAULT_FINDER: &str = "fzf";

/// Resolves the favorites file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// favorites path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use fav_core::config::get_favorites_path;
///
/// let default_path = get_favorites_path(&None);
/// assert!(default_path.ends_with(".config/personal_cfg/history_fav.json"));
///
/// let custom_path = get_favorites_path(&Some("/path/to/favorites.json".to_string()));
/// assert_eq!(custom_path, "/path/to/favorites.json");
/// ```
pub fn get_favorites_path(favorites_path_arg: &Option<String>) -> String {
    let favorites_path = match favorites_path_arg {
        Some(favorites_path) => favorites_path,
        None => DEFAULT_FAVORITES_PATH,
    };

    shellexpand::tilde(favorites_path).to_string()
}

/// Settings resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fully expanded path of the favorites JSON file.
    pub favorites_path: String,
    /// Name or path of the fuzzy finder executable.
    pub finder: String,
}

impl Config {
    pub fn new(favorites_path_arg: &Option<String>, finder_arg: &Option<String>) -> Self {
        Self {
            favorites_path: get_favorites_path(favorites_path_arg),
            finder: finder_arg
                .clone()
                .unwrap_or_else(|| DEFAULT_FINDER.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(&None, &None)
    }
}
