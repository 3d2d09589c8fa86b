//!
//! QRLink: a small client-record management core.
//!
//! This library provides the data layer behind a QR-link admin console:
//! client records with generated QR image URLs, a role-based login flow,
//! and route guards, all backed by a pluggable local key-value store.
//!
//! ## Core Concepts
//!
//! * **Storage (`store::Storage`)**: A pluggable key-value storage layer, the
//!   analog of browser local storage. The built-in `store::InMemory`
//!   implementation persists its state to a JSON file.
//! * **Sessions (`session::SessionStore`)**: Login, logout, and user account
//!   registration over the storage layer. Secrets are Argon2id-hashed and the
//!   persisted session copy is always credential-stripped.
//! * **Clients (`registry::ClientRegistry`)**: CRUD over client records, each
//!   carrying a custom link and a QR image URL derived from that link. The QR
//!   URL is regenerated whenever the link changes.
//! * **Guards (`guards`)**: Role-based access decisions over the console's
//!   route table.
//! * **QR derivation (`qr`)**: URL construction for a third-party QR image
//!   generation endpoint. No QR encoding happens locally.

pub mod constants;
pub mod defaults;
pub mod guards;
pub mod qr;
pub mod registry;
pub mod session;
pub mod store;

// Re-export the main entry points for easier access.
pub use registry::ClientRegistry;
pub use session::SessionStore;

/// Result type used throughout the QRLink library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the QRLink library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured storage errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured client registry errors from the registry module
    #[error(transparent)]
    Registry(registry::RegistryError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Store(_) => "store",
            Error::Session(_) => "session",
            Error::Registry(_) => "registry",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_not_found(),
            Error::Registry(registry_err) => registry_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error is validation-related (missing or malformed input).
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_validation_error(),
            Error::Registry(registry_err) => registry_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Store(store_err) => store_err.is_io_error(),
            _ => false,
        }
    }

    /// Check if this error is storage-related.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::Store(_))
    }
}
