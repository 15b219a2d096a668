use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_run")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub run_date: DateTimeUtc,
    pub status: String,
    pub total_invoices: i32,
    pub approved_count: i32,
    pub blocked_count: i32,
    pub approved_amount_pence: i64,
    pub blocked_amount_pence: i64,
    pub processed_by: i32,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_profile::Entity",
        from = "Column::ProcessedBy",
        to = "super::user_profile::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    UserProfile,
    #[sea_orm(has_many = "super::payment_run_item::Entity")]
    PaymentRunItem,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::payment_run_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentRunItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
