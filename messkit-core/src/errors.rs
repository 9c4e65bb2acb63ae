use std::path::PathBuf;

use thiserror::Error;

/// Error type shared by the messkit generators.
#[derive(Error, Debug)]
pub enum MessError {
    /// The output directory is already there and overwriting was not requested.
    #[error("Output directory {0:?} already exists. Use --force to overwrite.")]
    OutputExists(PathBuf),

    /// A candidate list (organisms, orgs, techs, years) has no entries to draw from.
    #[error("No {0} were supplied to choose from")]
    EmptyCandidates(&'static str),

    #[error("Invalid chaos level: {0} (expected one of low, medium, high)")]
    InvalidChaosLevel(String),

    #[error("Can't parse config file: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for messkit operations.
pub type Result<T> = std::result::Result<T, MessError>;
