use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// Relative path the investor spreadsheet is expected at.
pub const DEFAULT_CSV_PATH: &str = "public/investors.csv";

/// Runtime configuration, resolved once by the binary and passed down.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub csv_path: PathBuf,
}

impl Config {
    /// Resolve configuration from `.env.local` / `.env` and the process
    /// environment. `DATABASE_URL` is required; the caller decides how to
    /// report its absence.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::from_filename(".env.local").ok();
        dotenv::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_database_url() {
        // Single test covers both branches; env mutation must stay serial.
        env::remove_var("DATABASE_URL");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingDatabaseUrl)
        ));

        env::set_var("DATABASE_URL", "postgresql://localhost:5432/postgres");
        let config = Config::from_env().expect("configured");
        assert_eq!(config.database_url, "postgresql://localhost:5432/postgres");
        assert_eq!(config.csv_path, PathBuf::from(DEFAULT_CSV_PATH));
        env::remove_var("DATABASE_URL");
    }
}
