//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

/// Employee table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    /// Generated identifier (auto increment)
    #[sea_orm(primary_key)]
    pub id: i32,

    pub first_name: String,

    pub last_name: String,

    pub salary: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Raw `(first_name, salary)` row decoded without the entity mapping
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SalaryRow {
    pub first_name: String,
    pub salary: i32,
}
