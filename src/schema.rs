use sea_orm::sea_query::{ColumnDef, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DbErr};

use crate::entities::unicorns::{Column, Entity};

/// `CREATE TABLE IF NOT EXISTS unicorns (...)`
pub fn create_unicorns_table() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Id)
                .integer()
                .not_null()
                .auto_increment() // SERIAL on Postgres
                .primary_key(),
        )
        .col(ColumnDef::new(Column::Company).string_len(255).not_null().unique_key())
        .col(ColumnDef::new(Column::Valuation).decimal_len(10, 2).not_null())
        .col(ColumnDef::new(Column::DateJoined).date().null())
        .col(ColumnDef::new(Column::Country).string_len(255).not_null())
        .col(ColumnDef::new(Column::City).string_len(255).not_null())
        .col(ColumnDef::new(Column::Industry).string_len(255).not_null())
        .col(ColumnDef::new(Column::SelectInvestors).text().not_null())
        .to_owned()
}

/// Creates the `unicorns` table unless it already exists. Safe to run on every load.
pub async fn ensure_unicorns_table<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    db.execute(backend.build(&create_unicorns_table())).await?;
    Ok(())
}
