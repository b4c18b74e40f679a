//! Migration: education entries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Degree).string_len(255).not_null())
                    .col(ColumnDef::new(Educations::FieldOfStudy).string_len(255).null())
                    .col(ColumnDef::new(Educations::StartDate).date().not_null())
                    .col(ColumnDef::new(Educations::EndDate).date().null())
                    .col(ColumnDef::new(Educations::Description).text().null())
                    .col(
                        ColumnDef::new(Educations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Educations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // List endpoint orders by start date
        manager
            .create_index(
                Index::create()
                    .name("idx_educations_start_date")
                    .table(Educations::Table)
                    .col(Educations::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_educations_start_date")
                    .table(Educations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Educations {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
    CreatedAt,
    UpdatedAt,
}
