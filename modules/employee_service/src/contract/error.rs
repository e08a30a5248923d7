//! Contract error types for employee service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Employee service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeError {
    /// No employee row with the given identifier
    #[error("employee not found: {id}")]
    NotFound {
        /// Requested employee identifier
        id: i32,
    },
    /// Storage layer failure; the transaction has been rolled back
    #[error("storage error: {message}")]
    Storage {
        /// Error chain rendered by the storage layer
        message: String,
    },
}

impl EmployeeError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn storage(err: &anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{err:#}"),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
