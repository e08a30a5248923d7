//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Every method is one unit of work in its own transaction. A missing row
//! is reported as `None`/`false`, never as an error.

use crate::contract::{Employee, EmployeeSalary, NewEmployee};
use anyhow::Result;
use async_trait::async_trait;

/// Rows fed to the bulk insert path, consumed lazily
pub type EmployeeRows = Box<dyn Iterator<Item = NewEmployee> + Send>;

/// Repository for employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert an employee, returning the generated identifier
    async fn insert(&self, employee: &NewEmployee) -> Result<i32>;

    /// Find an employee by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>>;

    /// List all employees ordered by identifier
    async fn list_all(&self) -> Result<Vec<Employee>>;

    /// Update the salary, returning the stored row or `None` if absent
    async fn update_salary(&self, id: i32, salary: i32) -> Result<Option<Employee>>;

    /// Delete an employee, returning `false` if absent
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Employees with `salary > threshold`
    async fn find_by_salary_above(&self, threshold: i32) -> Result<Vec<Employee>>;

    /// Row count
    async fn count(&self) -> Result<u64>;

    /// Sum of salaries; zero when there are no rows
    async fn total_salary(&self) -> Result<i64>;

    /// `(first_name, salary)` projection via raw SQL
    async fn list_salaries_raw(&self) -> Result<Vec<EmployeeSalary>>;

    /// All employees via raw SQL mapped onto the entity
    async fn list_all_raw(&self) -> Result<Vec<Employee>>;

    /// Insert all rows in a single transaction, writing every `batch_size` rows
    async fn insert_batched(&self, rows: EmployeeRows, batch_size: usize) -> Result<u64>;
}
