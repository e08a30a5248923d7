//! Native client trait for inter-module communication
//!
//! This trait defines the API that other crates use to interact with the employee service.
//! NO HTTP - direct function calls.

use super::{
    error::EmployeeError,
    model::{Employee, EmployeeSalary, NewEmployee},
};
use async_trait::async_trait;

/// Employee service API
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    // ===== CRUD =====

    /// Insert an employee and return the generated identifier
    async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        salary: i32,
    ) -> Result<i32, EmployeeError>;

    /// Load a single employee by identifier
    async fn get_employee(&self, id: i32) -> Result<Employee, EmployeeError>;

    /// List every employee via the mapped entity query
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError>;

    /// Set the salary of an existing employee
    async fn update_employee(&self, id: i32, salary: i32) -> Result<Employee, EmployeeError>;

    /// Remove an existing employee
    async fn delete_employee(&self, id: i32) -> Result<(), EmployeeError>;

    // ===== Queries =====

    /// Employees with salary strictly greater than `threshold`
    async fn list_employees_by_salary_above(
        &self,
        threshold: i32,
    ) -> Result<Vec<Employee>, EmployeeError>;

    /// Total number of employees
    async fn count_employees(&self) -> Result<u64, EmployeeError>;

    /// Sum of all salaries, zero for an empty table
    async fn total_salary(&self) -> Result<i64, EmployeeError>;

    /// First name and salary pairs read with a raw SQL projection
    async fn list_employees_scalar(&self) -> Result<Vec<EmployeeSalary>, EmployeeError>;

    /// Every employee read with raw SQL mapped onto the entity
    async fn list_employees_entity(&self) -> Result<Vec<Employee>, EmployeeError>;

    // ===== Bulk load =====

    /// Insert `count` numbered rows in one transaction, flushing every batch
    async fn add_employees_in_batches(&self, count: usize) -> Result<u64, EmployeeError>;

    /// Insert the given rows in one transaction, flushing every batch
    async fn add_employees_batched(&self, rows: Vec<NewEmployee>) -> Result<u64, EmployeeError>;
}
