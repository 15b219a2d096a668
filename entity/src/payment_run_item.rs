use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_run_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub payment_run_id: i32,
    pub invoice_id: i32,
    pub amount_pence: i64,
    pub status: String,
    pub block_reason: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payment_run::Entity",
        from = "Column::PaymentRunId",
        to = "super::payment_run::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    PaymentRun,
    #[sea_orm(
        belongs_to = "super::invoice::Entity",
        from = "Column::InvoiceId",
        to = "super::invoice::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Invoice,
}

impl Related<super::payment_run::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentRun.def()
    }
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
