use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "invoice")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contractor_id: i32,
    pub invoice_number: String,
    pub amount_pence: i64,
    pub status: String,
    pub payment_block_reason: Option<String>,
    pub compliance_check_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contractor::Entity",
        from = "Column::ContractorId",
        to = "super::contractor::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Contractor,
    #[sea_orm(has_many = "super::payment_run_item::Entity")]
    PaymentRunItem,
}

impl Related<super::contractor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contractor.def()
    }
}

impl Related<super::payment_run_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentRunItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
