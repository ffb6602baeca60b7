use async_trait::async_trait;
use models::{concept, Concept};
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder};

use crate::catalog::store::ConceptStore;
use crate::errors::ServiceError;

/// SeaORM-backed concept store over the `concept` table.
pub struct SeaOrmConceptStore {
    pub db: DatabaseConnection,
}

impl SeaOrmConceptStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ConceptStore for SeaOrmConceptStore {
    async fn list(&self) -> Result<Vec<Concept>, ServiceError> {
        let rows = concept::Entity::find()
            .order_by_asc(concept::Column::ConceptId)
            .all(&self.db)
            .await?;
        rows.into_iter()
            .map(|m| Concept::try_from(m).map_err(ServiceError::from))
            .collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Concept>, ServiceError> {
        let row = concept::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        Ok(row.map(Concept::try_from).transpose()?)
    }

    async fn upsert(&self, c: Concept) -> Result<Concept, ServiceError> {
        let am = concept::ActiveModel::try_from(&c)?;
        concept::Entity::insert(am)
            .on_conflict(
                OnConflict::column(concept::Column::ConceptId)
                    .update_columns([
                        concept::Column::DisplayName,
                        concept::Column::Description,
                        concept::Column::ParentIds,
                        concept::Column::ChildIds,
                        concept::Column::AlternateNames,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(c)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        let res = concept::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
