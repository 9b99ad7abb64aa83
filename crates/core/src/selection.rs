use log::{debug, info};

use crate::encoding::{decode_selection, encode_entries, split_records};
use crate::error::{Error, Result};
use crate::favorites::{FavoriteEntry, SearchMode};
use crate::finder::{Finder, FinderOptions, EXIT_INTERRUPTED, EXIT_NO_MATCH};

/// Lets the user pick one of `entries` through `finder` and returns its command.
///
/// `Ok(None)` means nothing was selected: the user cancelled, nothing matched,
/// or the finder printed nothing.
///
/// # Errors
///
/// - [`Error::SelectorFailed`] if the finder exits with any other non-zero status
/// - [`Error::DecodeFailed`] if the selected record cannot be decoded
/// - [`Error::SubProcess`] if the finder cannot be run at all
pub fn select_command(
    finder: &dyn Finder,
    entries: &[FavoriteEntry],
    mode: SearchMode,
    search_term: &str,
) -> Result<Option<String>> {
    let input = encode_entries(entries, mode);
    let options = FinderOptions::new(search_term);

    debug!(
        "Selecting from {} favorites in {} mode with query {:?}",
        entries.len(),
        mode,
        search_term
    );

    let output = finder.run(&input, &options)?;

    match output.exit_code {
        Some(0) => {}
        Some(EXIT_NO_MATCH) | Some(EXIT_INTERRUPTED) => {
            info!("Selection cancelled or nothing matched");
            return Ok(None);
        }
        Some(code) => {
            return Err(Error::SelectorFailed(format!(
                "finder exited with status {code}"
            )))
        }
        None => {
            return Err(Error::SelectorFailed(
                "finder was terminated by a signal".to_string(),
            ))
        }
    }

    let selection = split_records(&output.stdout)
        .next()
        .unwrap_or_default()
        .trim();
    if selection.is_empty() {
        info!("Finder returned an empty selection");
        return Ok(None);
    }

    decode_selection(selection).map(Some)
}
