use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error: `{}` is required but was not found on PATH", .program)]
    DependencyMissing { program: String },

    #[error("Error: Could not read favorites file at `{}`: {}", .path, .reason)]
    StoreUnreadable { path: String, reason: String },

    #[error("Error: Invalid favorites file at `{}`: {}", .path, .reason)]
    StoreMalformed { path: String, reason: String },

    #[error("No commands found in favorites file `{}`", .path)]
    StoreEmpty { path: String },

    #[error("Error running fuzzy finder: {}", .0)]
    SelectorFailed(String),

    #[error("Error: Invalid selection format: {:?}", .0)]
    DecodeFailed(String),

    #[error("Error with fuzzy finder process: {}", .0)]
    SubProcess(#[from] std::io::Error),
}

impl Error {
    pub fn dependency_missing(program: &str) -> Self {
        Self::DependencyMissing {
            program: program.to_string(),
        }
    }

    pub fn store_unreadable(path: &str, reason: impl std::fmt::Display) -> Self {
        Self::StoreUnreadable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn store_malformed(path: &str, reason: impl std::fmt::Display) -> Self {
        Self::StoreMalformed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn store_empty(path: &str) -> Self {
        Self::StoreEmpty {
            path: path.to_string(),
        }
    }
}
