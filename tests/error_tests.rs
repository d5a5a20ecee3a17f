use sea_orm::{sqlx, DbErr, RuntimeErr};
use unicorn_seed::error::SeedError;

// Test for SeedError Display implementation
#[test]
fn test_seed_error_display() {
    let error1 = SeedError::Config("POSTGRES_URL must be set".to_string());
    assert_eq!(error1.to_string(), "Configuration error: POSTGRES_URL must be set");

    let error2 = SeedError::SourceRead("unicorns.csv: No such file".to_string());
    assert_eq!(error2.to_string(), "Error reading CSV source: unicorns.csv: No such file");

    let error3 = SeedError::DateFormat("'badinput' is not in D/M/YYYY form".to_string());
    assert_eq!(error3.to_string(), "Could not parse date: 'badinput' is not in D/M/YYYY form");

    let error4 = SeedError::ValuationFormat("'n/a' has no numeric value".to_string());
    assert_eq!(error4.to_string(), "Could not parse valuation: 'n/a' has no numeric value");

    let error5 = SeedError::Connection("refused".to_string());
    assert_eq!(error5.to_string(), "Database connection error: refused");

    let error6 = SeedError::Statement("numeric field overflow".to_string());
    assert_eq!(error6.to_string(), "Database statement error: numeric field overflow");
}

#[test]
fn test_at_line_keeps_variant() {
    let err = SeedError::DateFormat("'x' is not in D/M/YYYY form".to_string()).at_line(6);
    match err {
        SeedError::DateFormat(msg) => assert_eq!(msg, "line 6: 'x' is not in D/M/YYYY form"),
        other => panic!("expected DateFormat, got {:?}", other),
    }
}

#[test]
fn test_db_errors_split_into_connection_and_statement() {
    let conn = SeedError::from(DbErr::Conn(RuntimeErr::Internal("refused".to_string())));
    assert!(matches!(conn, SeedError::Connection(_)));

    let exec = SeedError::from(DbErr::Exec(RuntimeErr::Internal("numeric field overflow".to_string())));
    assert!(matches!(exec, SeedError::Statement(_)));
}

#[test]
fn test_dropped_connection_mid_run_is_connection_error() {
    let reset = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
    let exec = SeedError::from(DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Io(reset))));
    assert!(matches!(exec, SeedError::Connection(_)));

    let query = SeedError::from(DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::PoolClosed)));
    assert!(matches!(query, SeedError::Connection(_)));

    let protocol = SeedError::from(DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Protocol(
        "unexpected message".to_string(),
    ))));
    assert!(matches!(protocol, SeedError::Statement(_)));
}

#[test]
fn test_io_errors_are_source_errors() {
    let io = SeedError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
    assert!(matches!(io, SeedError::SourceRead(_)));
}
