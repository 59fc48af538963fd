use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::StudentCode))
                    .col(string(Student::FirstName))
                    .col(string(Student::LastName))
                    .col(string_uniq(Student::Email))
                    .col(string(Student::Major))
                    .col(double(Student::Gpa).default(0.0))
                    .col(string(Student::Status).default("active"))
                    .to_owned(),
            )
            .await?;

        // Listing filters on major and status
        manager
            .create_index(
                Index::create()
                    .name("idx_student_major_status")
                    .table(Student::Table)
                    .col(Student::Major)
                    .col(Student::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    StudentCode,
    FirstName,
    LastName,
    Email,
    Major,
    Gpa,
    Status,
}
