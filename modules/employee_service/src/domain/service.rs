//! Domain service - employee operations orchestration

use super::repository::{EmployeeRepository, EmployeeRows};
use crate::contract::{Employee, EmployeeError, EmployeeSalary, NewEmployee};
use std::sync::Arc;

/// Domain service for employee management
pub struct Service {
    repo: Arc<dyn EmployeeRepository>,
    /// Rows written per multi-row insert on the bulk path
    batch_size: usize,
}

impl Service {
    /// Create a new service instance. A zero batch size is treated as one.
    pub fn new(repo: Arc<dyn EmployeeRepository>, batch_size: usize) -> Self {
        Self {
            repo,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    // ===== CRUD =====

    /// Insert an employee and return the generated identifier
    pub async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        salary: i32,
    ) -> Result<i32, EmployeeError> {
        let id = self
            .repo
            .insert(&NewEmployee::new(first_name, last_name, salary))
            .await
            .map_err(|e| storage_error("add_employee", e))?;

        tracing::debug!(id, first_name, last_name, salary, "Employee added");
        Ok(id)
    }

    /// Load a single employee
    pub async fn get_employee(&self, id: i32) -> Result<Employee, EmployeeError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| storage_error("get_employee", e))?
            .ok_or_else(|| EmployeeError::not_found(id))
    }

    /// List all employees
    pub async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repo
            .list_all()
            .await
            .map_err(|e| storage_error("list_employees", e))
    }

    /// Set the salary of an existing employee
    pub async fn update_employee(&self, id: i32, salary: i32) -> Result<Employee, EmployeeError> {
        let updated = self
            .repo
            .update_salary(id, salary)
            .await
            .map_err(|e| storage_error("update_employee", e))?
            .ok_or_else(|| EmployeeError::not_found(id))?;

        tracing::debug!(id, salary, "Employee salary updated");
        Ok(updated)
    }

    /// Remove an existing employee
    pub async fn delete_employee(&self, id: i32) -> Result<(), EmployeeError> {
        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| storage_error("delete_employee", e))?;

        if !deleted {
            return Err(EmployeeError::not_found(id));
        }

        tracing::debug!(id, "Employee deleted");
        Ok(())
    }

    // ===== Queries =====

    pub async fn list_employees_by_salary_above(
        &self,
        threshold: i32,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.repo
            .find_by_salary_above(threshold)
            .await
            .map_err(|e| storage_error("list_employees_by_salary_above", e))
    }

    pub async fn count_employees(&self) -> Result<u64, EmployeeError> {
        self.repo
            .count()
            .await
            .map_err(|e| storage_error("count_employees", e))
    }

    pub async fn total_salary(&self) -> Result<i64, EmployeeError> {
        self.repo
            .total_salary()
            .await
            .map_err(|e| storage_error("total_salary", e))
    }

    pub async fn list_employees_scalar(&self) -> Result<Vec<EmployeeSalary>, EmployeeError> {
        self.repo
            .list_salaries_raw()
            .await
            .map_err(|e| storage_error("list_employees_scalar", e))
    }

    pub async fn list_employees_entity(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.repo
            .list_all_raw()
            .await
            .map_err(|e| storage_error("list_employees_entity", e))
    }

    // ===== Bulk load =====

    /// Insert `count` numbered employees in one transaction
    pub async fn add_employees_in_batches(&self, count: usize) -> Result<u64, EmployeeError> {
        self.insert_rows(Box::new((0..count).map(NewEmployee::numbered)))
            .await
    }

    /// Insert the given employees in one transaction
    pub async fn add_employees_batched<I>(&self, rows: I) -> Result<u64, EmployeeError>
    where
        I: IntoIterator<Item = NewEmployee>,
        I::IntoIter: Send + 'static,
    {
        self.insert_rows(Box::new(rows.into_iter())).await
    }

    async fn insert_rows(&self, rows: EmployeeRows) -> Result<u64, EmployeeError> {
        let inserted = self
            .repo
            .insert_batched(rows, self.batch_size)
            .await
            .map_err(|e| storage_error("add_employees_in_batches", e))?;

        tracing::info!(inserted, batch_size = self.batch_size, "Bulk insert committed");
        Ok(inserted)
    }
}

fn storage_error(operation: &'static str, err: anyhow::Error) -> EmployeeError {
    tracing::error!(
        operation,
        error = %format!("{err:#}"),
        "Employee storage operation failed, transaction rolled back"
    );
    EmployeeError::storage(&err)
}
