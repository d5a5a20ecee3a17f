//! Seeds a PostgreSQL `unicorns` table from a `unicorns.csv` export.
//!
//! The run is one linear pass: connect, ensure the table, read the CSV, then
//! insert each row with `ON CONFLICT (company) DO NOTHING`, and disconnect.

pub mod config;
pub mod entities;
pub mod error;
pub mod jobs;
pub mod parse;
pub mod schema;
pub mod source;

pub use config::Config;
pub use error::SeedError;
pub use jobs::{run_seed_unicorns, LoadSummary};
