use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures, checked by the binaries before any work starts.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,
}

/// Failure modes of the load pipeline.
///
/// Currency cleaning is deliberately not represented here: unparseable
/// currency text coerces to `None` instead of failing (see `transform::clean`).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Parse(#[from] csv::Error),
}
