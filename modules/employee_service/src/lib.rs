//! Employee Service Module
//!
//! CRUD, aggregate and bulk-insert operations over the `employee` table,
//! backed by SeaORM. Every operation runs in its own transaction.

// Public exports
pub mod contract;
pub use contract::{
    client::EmployeeApi, error::EmployeeError, Employee, EmployeeSalary, NewEmployee,
};

pub mod module;
pub use module::EmployeeServiceModule;

pub mod config;
pub use config::{Config, DatabaseConfig};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
