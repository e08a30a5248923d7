//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Employee, EmployeeApi, EmployeeError, EmployeeSalary, NewEmployee};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmployeeApi for NativeClient {
    async fn add_employee(
        &self,
        first_name: &str,
        last_name: &str,
        salary: i32,
    ) -> Result<i32, EmployeeError> {
        self.service
            .add_employee(first_name, last_name, salary)
            .await
    }

    async fn get_employee(&self, id: i32) -> Result<Employee, EmployeeError> {
        self.service.get_employee(id).await
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.service.list_employees().await
    }

    async fn update_employee(&self, id: i32, salary: i32) -> Result<Employee, EmployeeError> {
        self.service.update_employee(id, salary).await
    }

    async fn delete_employee(&self, id: i32) -> Result<(), EmployeeError> {
        self.service.delete_employee(id).await
    }

    async fn list_employees_by_salary_above(
        &self,
        threshold: i32,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.service.list_employees_by_salary_above(threshold).await
    }

    async fn count_employees(&self) -> Result<u64, EmployeeError> {
        self.service.count_employees().await
    }

    async fn total_salary(&self) -> Result<i64, EmployeeError> {
        self.service.total_salary().await
    }

    async fn list_employees_scalar(&self) -> Result<Vec<EmployeeSalary>, EmployeeError> {
        self.service.list_employees_scalar().await
    }

    async fn list_employees_entity(&self) -> Result<Vec<Employee>, EmployeeError> {
        self.service.list_employees_entity().await
    }

    async fn add_employees_in_batches(&self, count: usize) -> Result<u64, EmployeeError> {
        self.service.add_employees_in_batches(count).await
    }

    async fn add_employees_batched(&self, rows: Vec<NewEmployee>) -> Result<u64, EmployeeError> {
        self.service.add_employees_batched(rows).await
    }
}
