use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Degree::Table)
                    .if_not_exists()
                    .col(pk_auto(Degree::Id))
                    .col(string_uniq(Degree::Name))
                    .col(double(Degree::Coefficient))
                    .col(string(Degree::Specialization))
                    .col(date(Degree::IssueDate))
                    .col(timestamp_with_time_zone(Degree::CreatedAt))
                    .col(timestamp_with_time_zone(Degree::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Degree::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Degree {
    Table,
    Id,
    Name,
    Coefficient,
    Specialization,
    IssueDate,
    CreatedAt,
    UpdatedAt,
}
