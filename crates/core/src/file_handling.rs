//! Loading and validation of the favorites store.

use std::fs::File;
use std::io::BufReader;

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::favorites::{FavoriteEntry, FavoritesStore};

fn get_reader(path: &str) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => Err(Error::store_unreadable(path, e)),
    }
}

fn validate_commands(path: &str, value: &Value) -> Result<()> {
    let Some(commands) = value.get("commands") else {
        return Err(Error::store_malformed(path, "missing `commands` array"));
    };

    let Some(commands) = commands.as_array() else {
        return Err(Error::store_malformed(path, "`commands` is not an array"));
    };

    if commands.is_empty() {
        return Err(Error::store_empty(path));
    }

    Ok(())
}

/// Loads the favorites from the JSON store at `favorites_path`.
///
/// Entries are returned exactly in file order.
///
/// # Errors
///
/// - [`Error::StoreUnreadable`] if the file cannot be opened or is not valid JSON
/// - [`Error::StoreMalformed`] if `commands` is missing, is not an array, or
///   holds an entry without string `name`, `description` and `command` fields
/// - [`Error::StoreEmpty`] if `commands` is an empty array
///
/// # Examples
///
/// ```no_run
/// use fav_core::file_handling::get_favorites;
///
/// let favorites = get_favorites("/home/me/.config/personal_cfg/history_fav.json")?;
/// println!("Loaded {} favorites", favorites.len());
/// # Ok::<(), fav_core::error::Error>(())
/// ```
pub fn get_favorites(favorites_path: &str) -> Result<Vec<FavoriteEntry>> {
    let value: Value = {
        let reader = get_reader(favorites_path)?;
        serde_json::from_reader(reader).map_err(|e| Error::store_unreadable(favorites_path, e))?
    };

    validate_commands(favorites_path, &value)?;

    let store: FavoritesStore =
        serde_json::from_value(value).map_err(|e| Error::store_malformed(favorites_path, e))?;

    debug!(
        "Loaded {} favorites from `{}`",
        store.commands.len(),
        favorites_path
    );

    Ok(store.commands)
}
