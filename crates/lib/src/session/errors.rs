//! Error types for the session system
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("User not found: {email}")]
    UserNotFound { email: String },

    #[error("A user with email '{email}' already exists")]
    DuplicateEmail { email: String },

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Password verification failed")]
    PasswordVerificationFailed,

    #[error("Password hashing failed: {reason}")]
    HashingFailed { reason: String },

    #[error("Password is required")]
    MissingPassword,
}

impl SessionError {
    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::UserNotFound { .. })
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidPassword | SessionError::PasswordVerificationFailed
        )
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        matches!(self, SessionError::DuplicateEmail { .. })
    }

    /// Check if this error indicates missing or malformed input.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, SessionError::MissingPassword)
    }
}

// Conversion from SessionError to the main Error type
impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
