use std::process::ExitCode;

use fav_cli::cli_args::Args;
use fav_core::config::Config;
use fav_core::error::Result;
use fav_core::finder::{ensure_available, FzfFinder};
use fav_core::{file_handling, selection};
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse_permissive();
    let config = Config::new(&args.config_path, &args.finder);
    debug!("Resolved configuration: {:?}", config);

    // Checked before touching the store so a missing finder is reported first
    ensure_available(&config.finder)?;

    let favorites = file_handling::get_favorites(&config.favorites_path)?;

    let finder = FzfFinder::new(&config.finder);
    let selected = selection::select_command(
        &finder,
        &favorites,
        args.search_mode(),
        args.search_term(),
    )?;

    if let Some(command) = selected {
        println!("{command}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
