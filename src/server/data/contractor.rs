use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter,
};

pub struct ContractorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ContractorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::contractor::Model>, DbErr> {
        entity::prelude::Contractor::find_by_id(id).one(self.db).await
    }

    /// Gets contractors by ID. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::contractor::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Contractor::find()
            .filter(entity::contractor::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Contractor::find().count(self.db).await
    }

    /// Records the licence number the contractor was verified with.
    pub async fn set_gas_safe_number(&self, id: i32, licence_number: &str) -> Result<(), DbErr> {
        entity::prelude::Contractor::update_many()
            .col_expr(
                entity::contractor::Column::GasSafeNumber,
                Expr::value(licence_number),
            )
            .filter(entity::contractor::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
