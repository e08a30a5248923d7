//! Contract models for employee service
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

/// Persisted employee record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Storage-generated identifier, immutable after creation
    pub id: i32,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Salary, the only mutable field
    pub salary: i32,
}

/// Employee payload before the storage engine assigns an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub salary: i32,
}

impl NewEmployee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, salary: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
        }
    }

    /// Synthetic row used by bulk loads: `("First Name {i}", "Last Name {i}", i)`.
    ///
    /// Salaries saturate at `i32::MAX` for indexes beyond the column range.
    pub fn numbered(index: usize) -> Self {
        Self {
            first_name: format!("First Name {index}"),
            last_name: format!("Last Name {index}"),
            salary: i32::try_from(index).unwrap_or(i32::MAX),
        }
    }
}

/// Projection row returned by the scalar query (no entity mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSalary {
    pub first_name: String,
    pub salary: i32,
}

impl From<&Employee> for EmployeeSalary {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            salary: employee.salary,
        }
    }
}
