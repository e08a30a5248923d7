//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Employee, EmployeeSalary, NewEmployee};

impl From<entity::Model> for Employee {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            salary: entity.salary,
        }
    }
}

impl From<entity::SalaryRow> for EmployeeSalary {
    fn from(row: entity::SalaryRow) -> Self {
        Self {
            first_name: row.first_name,
            salary: row.salary,
        }
    }
}

/// The identifier stays `NotSet` so the storage engine assigns it.
impl From<&NewEmployee> for entity::ActiveModel {
    fn from(model: &NewEmployee) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            first_name: Set(model.first_name.clone()),
            last_name: Set(model.last_name.clone()),
            salary: Set(model.salary),
        }
    }
}

impl From<NewEmployee> for entity::ActiveModel {
    fn from(model: NewEmployee) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            first_name: Set(model.first_name),
            last_name: Set(model.last_name),
            salary: Set(model.salary),
        }
    }
}
