//! Create `concept` table.
//! One row per concept; edge lists are JSON array text columns.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Concept::Table)
                    .if_not_exists()
                    .col(string_len(Concept::ConceptId, 64).primary_key())
                    .col(string_len(Concept::DisplayName, 256).not_null())
                    .col(text(Concept::Description).not_null())
                    .col(text(Concept::ParentIds).not_null())
                    .col(text(Concept::ChildIds).not_null())
                    .col(string_len(Concept::AlternateNames, 512).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Concept::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Concept {
    Table,
    ConceptId,
    DisplayName,
    Description,
    ParentIds,
    ChildIds,
    AlternateNames,
}
