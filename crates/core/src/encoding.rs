//! Line format exchanged with the fuzzy finder.
//!
//! Every favorite becomes one record, `<display> |> <command>`, where the
//! display text depends on the [`SearchMode`]. Records are NUL terminated so
//! that names, descriptions and commands may span several lines. The finder
//! shows and searches the display part only and prints the whole selected
//! record back, from which [`decode_selection`] recovers the command.
//!
//! The delimiter is not escaped. A display text containing it still decodes
//! correctly because the split happens on its last occurrence, but a command
//! that itself contains ` |> ` will be cut short.

use crate::error::{Error, Result};
use crate::favorites::{FavoriteEntry, SearchMode};

/// Separates the display text from the command payload.
pub const DELIMITER: &str = " |> ";

/// [`DELIMITER`] as a regular expression for the finder's `--delimiter`.
pub const DELIMITER_PATTERN: &str = r" \|> ";

/// Terminates each record on the finder's input and output.
pub const RECORD_SEPARATOR: char = '\0';

/// Joins name and description in [`SearchMode::All`]. Purely cosmetic.
pub const ALL_SEPARATOR: &str = " • ";

pub fn display_text(entry: &FavoriteEntry, mode: SearchMode) -> String {
    match mode {
        SearchMode::Name => entry.name.clone(),
        SearchMode::Description => entry.description.clone(),
        SearchMode::All => format!("{}{}{}", entry.name, ALL_SEPARATOR, entry.description),
    }
}

pub fn encode_line(entry: &FavoriteEntry, mode: SearchMode) -> String {
    format!("{}{}{}", display_text(entry, mode), DELIMITER, entry.command)
}

/// Encodes all favorites into NUL terminated finder input, keeping store
/// order.
pub fn encode_entries(entries: &[FavoriteEntry], mode: SearchMode) -> String {
    entries
        .iter()
        .map(|entry| {
            let mut record = encode_line(entry, mode);
            record.push(RECORD_SEPARATOR);
            record
        })
        .collect()
}

/// Splits finder input or output back into records.
pub fn split_records(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator(RECORD_SEPARATOR)
}

/// Recovers the command from one record printed by the finder.
///
/// # Errors
///
/// Returns [`Error::DecodeFailed`] if the record holds no delimiter.
pub fn decode_selection(line: &str) -> Result<String> {
    match line.rsplit_once(DELIMITER) {
        Some((_, command)) => Ok(command.trim().to_string()),
        None => Err(Error::DecodeFailed(line.to_string())),
    }
}
