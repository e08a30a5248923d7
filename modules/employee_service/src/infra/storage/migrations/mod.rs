//! Database migrations for employee service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_employee::Migration)]
    }
}

mod m20250101_000001_create_employee {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Employee::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employee::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Employee::FirstName).string().not_null())
                        .col(ColumnDef::new(Employee::LastName).string().not_null())
                        .col(ColumnDef::new(Employee::Salary).integer().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_employee_salary")
                        .table(Employee::Table)
                        .col(Employee::Salary)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Employee::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Employee {
        Table,
        Id,
        FirstName,
        LastName,
        Salary,
    }
}
