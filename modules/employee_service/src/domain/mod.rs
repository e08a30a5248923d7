//! Domain layer - business logic and services

pub mod repository;
pub mod service;

pub use repository::{EmployeeRepository, EmployeeRows};
pub use service::Service;
