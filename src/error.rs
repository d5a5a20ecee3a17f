use sea_orm::{sqlx, DbErr, RuntimeErr};
use std::fmt;

#[derive(Debug)]
pub enum SeedError {
    Config(String),
    SourceRead(String),
    DateFormat(String),
    ValuationFormat(String),
    Connection(String),
    Statement(String),
}

impl SeedError {
    /// Prefixes the message with the 1-based source line of the offending row.
    pub fn at_line(self, line: u64) -> Self {
        match self {
            SeedError::Config(msg) => SeedError::Config(format!("line {}: {}", line, msg)),
            SeedError::SourceRead(msg) => SeedError::SourceRead(format!("line {}: {}", line, msg)),
            SeedError::DateFormat(msg) => SeedError::DateFormat(format!("line {}: {}", line, msg)),
            SeedError::ValuationFormat(msg) => SeedError::ValuationFormat(format!("line {}: {}", line, msg)),
            SeedError::Connection(msg) => SeedError::Connection(format!("line {}: {}", line, msg)),
            SeedError::Statement(msg) => SeedError::Statement(format!("line {}: {}", line, msg)),
        }
    }
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SeedError::SourceRead(msg) => write!(f, "Error reading CSV source: {}", msg),
            SeedError::DateFormat(msg) => write!(f, "Could not parse date: {}", msg),
            SeedError::ValuationFormat(msg) => write!(f, "Could not parse valuation: {}", msg),
            SeedError::Connection(msg) => write!(f, "Database connection error: {}", msg),
            SeedError::Statement(msg) => write!(f, "Database statement error: {}", msg),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<csv::Error> for SeedError {
    fn from(err: csv::Error) -> Self {
        SeedError::SourceRead(err.to_string())
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        SeedError::SourceRead(err.to_string())
    }
}

impl From<DbErr> for SeedError {
    fn from(err: DbErr) -> Self {
        if is_connection_failure(&err) {
            SeedError::Connection(err.to_string())
        } else {
            SeedError::Statement(err.to_string())
        }
    }
}

/// A connection that could not be opened, or one that dropped mid-run.
fn is_connection_failure(err: &DbErr) -> bool {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => matches!(
            e,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolClosed
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::WorkerCrashed
        ),
        _ => false,
    }
}
