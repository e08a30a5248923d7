//! Domain service tests against mock repositories

use employee_service::contract::*;
use employee_service::domain::repository::{EmployeeRepository, EmployeeRows};
use employee_service::domain::Service;
use std::sync::Arc;

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::RwLock;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Employee>,
        next_id: i32,
        batch_sizes: Vec<usize>,
    }

    #[derive(Clone, Default)]
    pub struct MockEmployeeRepo {
        state: Arc<RwLock<State>>,
    }

    impl MockEmployeeRepo {
        pub fn new() -> Self {
            Self::default()
        }

        /// Batch sizes the service passed to `insert_batched`
        pub fn batch_sizes(&self) -> Vec<usize> {
            self.state.read().batch_sizes.clone()
        }

        fn insert_row(state: &mut State, employee: NewEmployee) -> i32 {
            state.next_id += 1;
            let id = state.next_id;
            state.rows.insert(
                id,
                Employee {
                    id,
                    first_name: employee.first_name,
                    last_name: employee.last_name,
                    salary: employee.salary,
                },
            );
            id
        }
    }

    #[async_trait]
    impl EmployeeRepository for MockEmployeeRepo {
        async fn insert(&self, employee: &NewEmployee) -> anyhow::Result<i32> {
            Ok(Self::insert_row(&mut self.state.write(), employee.clone()))
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Employee>> {
            Ok(self.state.read().rows.get(&id).cloned())
        }

        async fn list_all(&self) -> anyhow::Result<Vec<Employee>> {
            Ok(self.state.read().rows.values().cloned().collect())
        }

        async fn update_salary(&self, id: i32, salary: i32) -> anyhow::Result<Option<Employee>> {
            let mut state = self.state.write();
            Ok(state.rows.get_mut(&id).map(|e| {
                e.salary = salary;
                e.clone()
            }))
        }

        async fn delete(&self, id: i32) -> anyhow::Result<bool> {
            Ok(self.state.write().rows.remove(&id).is_some())
        }

        async fn find_by_salary_above(&self, threshold: i32) -> anyhow::Result<Vec<Employee>> {
            Ok(self
                .state
                .read()
                .rows
                .values()
                .filter(|e| e.salary > threshold)
                .cloned()
                .collect())
        }

        async fn count(&self) -> anyhow::Result<u64> {
            Ok(self.state.read().rows.len() as u64)
        }

        async fn total_salary(&self) -> anyhow::Result<i64> {
            Ok(self
                .state
                .read()
                .rows
                .values()
                .map(|e| i64::from(e.salary))
                .sum())
        }

        async fn list_salaries_raw(&self) -> anyhow::Result<Vec<EmployeeSalary>> {
            Ok(self
                .state
                .read()
                .rows
                .values()
                .map(EmployeeSalary::from)
                .collect())
        }

        async fn list_all_raw(&self) -> anyhow::Result<Vec<Employee>> {
            self.list_all().await
        }

        async fn insert_batched(
            &self,
            rows: EmployeeRows,
            batch_size: usize,
        ) -> anyhow::Result<u64> {
            let mut state = self.state.write();
            state.batch_sizes.push(batch_size);
            let mut inserted = 0;
            for row in rows {
                Self::insert_row(&mut state, row);
                inserted += 1;
            }
            Ok(inserted)
        }
    }

    /// Repository whose every call fails like a lost connection
    pub struct FailingRepo;

    fn lost() -> anyhow::Error {
        anyhow::anyhow!("connection lost").context("employee storage")
    }

    #[async_trait]
    impl EmployeeRepository for FailingRepo {
        async fn insert(&self, _employee: &NewEmployee) -> anyhow::Result<i32> {
            Err(lost())
        }

        async fn find_by_id(&self, _id: i32) -> anyhow::Result<Option<Employee>> {
            Err(lost())
        }

        async fn list_all(&self) -> anyhow::Result<Vec<Employee>> {
            Err(lost())
        }

        async fn update_salary(&self, _id: i32, _salary: i32) -> anyhow::Result<Option<Employee>> {
            Err(lost())
        }

        async fn delete(&self, _id: i32) -> anyhow::Result<bool> {
            Err(lost())
        }

        async fn find_by_salary_above(&self, _threshold: i32) -> anyhow::Result<Vec<Employee>> {
            Err(lost())
        }

        async fn count(&self) -> anyhow::Result<u64> {
            Err(lost())
        }

        async fn total_salary(&self) -> anyhow::Result<i64> {
            Err(lost())
        }

        async fn list_salaries_raw(&self) -> anyhow::Result<Vec<EmployeeSalary>> {
            Err(lost())
        }

        async fn list_all_raw(&self) -> anyhow::Result<Vec<Employee>> {
            Err(lost())
        }

        async fn insert_batched(
            &self,
            _rows: EmployeeRows,
            _batch_size: usize,
        ) -> anyhow::Result<u64> {
            Err(lost())
        }
    }
}

use mocks::{FailingRepo, MockEmployeeRepo};

fn storage_error() -> EmployeeError {
    EmployeeError::Storage {
        message: "employee storage: connection lost".to_string(),
    }
}

#[tokio::test]
async fn missing_rows_map_to_not_found() {
    let service = Service::new(Arc::new(MockEmployeeRepo::new()), 50);

    assert_eq!(
        service.get_employee(9).await.unwrap_err(),
        EmployeeError::NotFound { id: 9 }
    );
    assert_eq!(
        service.update_employee(9, 100).await.unwrap_err(),
        EmployeeError::NotFound { id: 9 }
    );
    assert_eq!(
        service.delete_employee(9).await.unwrap_err(),
        EmployeeError::NotFound { id: 9 }
    );
}

#[tokio::test]
async fn storage_failures_are_returned_not_swallowed() {
    let service = Service::new(Arc::new(FailingRepo), 50);

    assert_eq!(
        service.add_employee("Zara", "Ali", 1000).await.unwrap_err(),
        storage_error()
    );
    assert_eq!(service.get_employee(1).await.unwrap_err(), storage_error());
    assert_eq!(service.list_employees().await.unwrap_err(), storage_error());
    assert_eq!(
        service.update_employee(1, 5).await.unwrap_err(),
        storage_error()
    );
    assert_eq!(service.delete_employee(1).await.unwrap_err(), storage_error());
    assert_eq!(
        service.list_employees_by_salary_above(0).await.unwrap_err(),
        storage_error()
    );
    assert_eq!(service.count_employees().await.unwrap_err(), storage_error());
    assert_eq!(service.total_salary().await.unwrap_err(), storage_error());
    assert_eq!(
        service.list_employees_scalar().await.unwrap_err(),
        storage_error()
    );
    assert_eq!(
        service.list_employees_entity().await.unwrap_err(),
        storage_error()
    );
    assert_eq!(
        service.add_employees_in_batches(10).await.unwrap_err(),
        storage_error()
    );
}

#[tokio::test]
async fn crud_round_trip_through_service() {
    let service = Service::new(Arc::new(MockEmployeeRepo::new()), 50);

    let id = service.add_employee("Zara", "Ali", 1000).await.unwrap();
    let updated = service.update_employee(id, 5000).await.unwrap();
    assert_eq!(updated.salary, 5000);
    assert_eq!(updated.first_name, "Zara");

    service.delete_employee(id).await.unwrap();
    assert!(service.get_employee(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn configured_batch_size_reaches_repository() {
    let repo = MockEmployeeRepo::new();
    let service = Service::new(Arc::new(repo.clone()), 25);

    assert_eq!(service.add_employees_in_batches(60).await.unwrap(), 60);
    assert_eq!(repo.batch_sizes(), vec![25]);
    assert_eq!(service.count_employees().await.unwrap(), 60);
}

#[tokio::test]
async fn zero_batch_size_is_clamped() {
    let repo = MockEmployeeRepo::new();
    let service = Service::new(Arc::new(repo.clone()), 0);
    assert_eq!(service.batch_size(), 1);

    service
        .add_employees_batched(vec![NewEmployee::new("John", "Paul", 10000)])
        .await
        .unwrap();
    assert_eq!(repo.batch_sizes(), vec![1]);
}
