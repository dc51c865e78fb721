use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
};

/// Typed CRUD accessor over the store, parametric over a SeaORM entity
/// with an `i32` identity.
///
/// Every operation is a direct pass-through: no caching, no batching, and
/// no transactions beyond what a single statement implies. Concurrent
/// writers to the same row are last-write-wins. The connection is injected
/// at construction; see [`crate::state::AppState::repo`].
pub struct Repository<E>
where
    E: EntityTrait,
{
    conn: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: FromQueryResult + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.conn).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.conn).await
    }

    pub async fn find(&self, condition: Condition) -> Result<Vec<E::Model>, DbErr> {
        E::find().filter(condition).all(&self.conn).await
    }

    /// Insert the entity; the store assigns the id.
    pub async fn add<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.conn).await
    }

    /// Update by primary key; fails with `DbErr::RecordNotUpdated` when
    /// the row is absent.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.conn).await
    }

    /// Delete by id; returns the number of affected rows (0 when absent).
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.conn).await?;
        Ok(result.rows_affected)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = E::find_by_id(id).count(&self.conn).await?;
        Ok(count > 0)
    }
}
