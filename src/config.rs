use std::env;
use std::path::PathBuf;

use crate::error::SeedError;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "POSTGRES_URL";

/// Source file, resolved against the working directory.
pub const CSV_FILE_NAME: &str = "unicorns.csv";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub csv_path: PathBuf,
}

impl Config {
    /// Reads the connection string from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, SeedError> {
        let _ = dotenvy::dotenv();

        let database_url = env::var(DATABASE_URL_VAR)
            .map_err(|_| SeedError::Config(format!("{} must be set in .env or environment", DATABASE_URL_VAR)))?;
        if database_url.trim().is_empty() {
            return Err(SeedError::Config(format!("{} cannot be empty", DATABASE_URL_VAR)));
        }

        let csv_path = env::current_dir()
            .map_err(|e| SeedError::Config(format!("cannot resolve working directory: {}", e)))?
            .join(CSV_FILE_NAME);

        Ok(Config { database_url, csv_path })
    }
}
