use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, PrimaryKeyTrait};

use crate::{mailer::Mailer, repository::Repository};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    /// `None` when SMTP is not configured; notification sends are skipped.
    pub mailer: Option<Mailer>,
}

impl AppState {
    /// Typed repository over the shared connection.
    pub fn repo<E>(&self) -> Repository<E>
    where
        E: EntityTrait,
        E::Model: FromQueryResult + Send + Sync,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        Repository::new(self.orm.clone())
    }
}
