//! # Registry Errors
//!
//! Error types for the voter registry.

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Voter registry errors
///
/// Lookups that find nothing are not errors; they return `None` / `false`.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Backing storage could not be accessed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RegistryError {
    pub(crate) fn lock_poisoned() -> Self {
        RegistryError::Storage("Lock poisoned".to_string())
    }
}
