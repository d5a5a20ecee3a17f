use std::path::Path;

use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::entities::unicorns::{self, Entity as Unicorns};
use crate::error::SeedError;
use crate::parse::NewUnicorn;
use crate::schema::ensure_unicorns_table;
use crate::source::CsvSource;

/// Outcome of one load. `rows_read` is the reported "seeded" count and
/// includes rows the database ignored as duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_read: usize,
    pub rows_inserted: u64,
}

/// Connects using `config`, seeds the unicorns table from `config.csv_path`
/// and disconnects, whatever the outcome.
pub async fn run_seed_unicorns(config: &Config) -> Result<LoadSummary, SeedError> {
    let db = Database::connect(&config.database_url).await.map_err(|e| {
        error!(?e, "failed to connect to database");
        SeedError::Connection(e.to_string())
    })?;
    info!("Connected to database");

    seed_and_release(db, &config.csv_path).await
}

/// Runs [`seed_unicorns`] on an owned connection and closes it afterwards,
/// on success and on every error path alike.
pub async fn seed_and_release(
    db: DatabaseConnection,
    csv_path: &Path,
) -> Result<LoadSummary, SeedError> {
    let outcome = seed_unicorns(&db, csv_path).await;
    if let Err(e) = &outcome {
        error!("Error seeding database: {}", e);
    }

    match db.close().await {
        Ok(()) => info!("Disconnected from database"),
        Err(e) => warn!("Error while disconnecting from database: {}", e),
    }

    outcome
}

/// Ensures the table, reads the whole CSV, then inserts row by row in file order.
///
/// The first bad row or failed statement aborts the run. Rows inserted before
/// that point stay committed.
pub async fn seed_unicorns<C>(db: &C, csv_path: &Path) -> Result<LoadSummary, SeedError>
where
    C: ConnectionTrait,
{
    ensure_unicorns_table(db).await?;
    info!("\"unicorns\" table ready");

    let records = CsvSource::open(csv_path)?.read_all()?;
    debug!("Read {} rows from {}", records.len(), csv_path.display());

    let mut rows_inserted = 0;
    for record in &records {
        let unicorn = NewUnicorn::from_raw(record)?;
        let company = unicorn.company.clone();

        let affected = insert_or_ignore(db, unicorn)
            .await
            .map_err(|e| e.at_line(record.line))?;
        if affected == 0 {
            debug!("line {}: {} already present, ignored", record.line, company);
        } else {
            debug!("line {}: inserted {}", record.line, company);
        }
        rows_inserted += affected;
    }

    info!("Seeded {} unicorns", records.len());
    debug!(
        "Inserted: {}, Ignored (duplicates): {}",
        rows_inserted,
        (records.len() as u64).saturating_sub(rows_inserted)
    );

    Ok(LoadSummary {
        rows_read: records.len(),
        rows_inserted,
    })
}

/// `INSERT ... ON CONFLICT (company) DO NOTHING`. Returns 0 when the company already exists.
pub async fn insert_or_ignore<C>(db: &C, unicorn: NewUnicorn) -> Result<u64, SeedError>
where
    C: ConnectionTrait,
{
    let am = unicorn.into_active_model()?;

    let affected = Unicorns::insert(am)
        .on_conflict(
            OnConflict::column(unicorns::Column::Company)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;

    Ok(affected)
}
