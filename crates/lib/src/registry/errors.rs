//! Error types for the client registry

use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Client record not found by identifier.
    #[error("Client not found: {id}")]
    ClientNotFound {
        /// The identifier that matched no record
        id: String,
    },

    /// A required field was empty on creation.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// Name of the missing field
        field: &'static str,
    },
}

impl RegistryError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::ClientNotFound { .. })
    }

    /// Check if this error indicates missing or malformed input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, RegistryError::MissingRequiredField { .. })
    }
}

// Conversion from RegistryError to the main Error type
impl From<RegistryError> for crate::Error {
    fn from(err: RegistryError) -> Self {
        crate::Error::Registry(err)
    }
}
