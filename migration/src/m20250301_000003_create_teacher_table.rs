use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_department_table::Department,
    m20250301_000002_create_degree_table::Degree,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(pk_auto(Teacher::Id))
                    .col(string_uniq(Teacher::TeacherId))
                    .col(string(Teacher::FullName))
                    .col(date(Teacher::DateOfBirth))
                    .col(integer(Teacher::DepartmentId))
                    .col(integer(Teacher::DegreeId))
                    .col(string_uniq(Teacher::Email))
                    .col(string(Teacher::PhoneNumber))
                    .col(date(Teacher::JoinDate))
                    .col(timestamp_with_time_zone(Teacher::CreatedAt))
                    .col(timestamp_with_time_zone(Teacher::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_department_id")
                            .from(Teacher::Table, Teacher::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teacher_degree_id")
                            .from(Teacher::Table, Teacher::DegreeId)
                            .to(Degree::Table, Degree::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_department_id")
                    .table(Teacher::Table)
                    .col(Teacher::DepartmentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teacher_degree_id")
                    .table(Teacher::Table)
                    .col(Teacher::DegreeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    Table,
    Id,
    TeacherId,
    FullName,
    DateOfBirth,
    DepartmentId,
    DegreeId,
    Email,
    PhoneNumber,
    JoinDate,
    CreatedAt,
    UpdatedAt,
}
