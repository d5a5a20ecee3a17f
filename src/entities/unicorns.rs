use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "unicorns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = true)]
    pub id: i32,                           // SERIAL
    #[sea_orm(unique)]
    pub company: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub valuation: Decimal,                // billions of dollars
    pub date_joined: Option<Date>,
    pub country: String,
    pub city: String,
    pub industry: String,
    #[sea_orm(column_type = "Text")]
    pub select_investors: String,          // comma-separated, stored as-is
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
