use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gas_safe_cache")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub licence_number: String,
    pub engineer_name: Option<String>,
    pub business_name: Option<String>,
    pub registration_status: String,
    pub is_valid: bool,
    pub registration_expires_at: Option<DateTimeUtc>,
    pub fetched_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
