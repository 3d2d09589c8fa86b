//! Storage layer for QRLink state.
//!
//! This module provides the core `Storage` trait and the built-in `InMemory`
//! implementation. The trait mirrors the browser local-storage surface the
//! console was designed around: named string slots with synchronous reads and
//! writes. This allows the session and client registry logic to be
//! independent of the specific storage mechanism, so it can later be swapped
//! for a real backend.

use std::any::Any;

use crate::Result;

mod errors;
mod in_memory;

pub use errors::StoreError;
pub use in_memory::InMemory;

/// Storage trait abstracting the underlying persistence mechanism.
///
/// Values are opaque strings; callers serialize structured data (JSON in
/// practice) before writing. All implementations must be `Send` and `Sync`
/// to allow sharing across threads, and implement `Any` to allow for
/// downcasting if needed.
///
/// There is no transactional guarantee: every operation is an independent
/// fire-and-forget write, matching the semantics of the local storage the
/// console originally ran against.
pub trait Storage: Send + Sync + Any {
    /// Retrieves the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes the value stored under `key`. Succeeds if the key is absent.
    fn remove(&self, key: &str) -> Result<()>;

    /// Returns a reference to the storage instance as a dynamic `Any` type.
    ///
    /// This allows for downcasting to a concrete implementation if necessary,
    /// enabling access to implementation-specific methods such as
    /// [`InMemory::save_to_file`].
    fn as_any(&self) -> &dyn Any;
}
