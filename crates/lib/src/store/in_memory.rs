use std::{
    any::Any,
    collections::HashMap,
    fs,
    path::Path,
    sync::RwLock,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Storage, StoreError};
use crate::Result;

/// A simple in-memory storage implementation using a `HashMap` of string
/// slots, guarded by a read-write lock for concurrent access.
///
/// This is the direct analog of browser local storage: synchronous reads and
/// writes of opaque string values under well-known keys. It provides basic
/// persistence capabilities via `save_to_file` and `load_from_file`,
/// serializing the slot map to JSON.
#[derive(Debug, Default)]
pub struct InMemory {
    /// Storage slots with read-write lock for concurrent access
    slots: RwLock<HashMap<String, String>>,
}

/// Serializable version of InMemory for persistence
#[derive(Serialize, Deserialize)]
struct SerializableStore {
    slots: HashMap<String, String>,
}

impl Serialize for InMemory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let slots = self
            .slots
            .read()
            .map_err(|_| serde::ser::Error::custom("storage lock poisoned"))?
            .clone();

        SerializableStore { slots }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InMemory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serializable = SerializableStore::deserialize(deserializer)?;

        Ok(InMemory {
            slots: RwLock::new(serializable.slots),
        })
    }
}

impl InMemory {
    /// Creates a new, empty `InMemory` store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the entire store state to a specified file as JSON.
    ///
    /// # Arguments
    /// * `path` - The path to the file where the state should be saved.
    ///
    /// # Returns
    /// A `Result` indicating success or an I/O or serialization error.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StoreError::SerializationFailed { source: e })?;
        fs::write(path, json).map_err(|e| StoreError::FileIo { source: e }.into())
    }

    /// Loads the store state from a specified JSON file.
    ///
    /// If the file does not exist, a new, empty `InMemory` store is returned.
    ///
    /// # Arguments
    /// * `path` - The path to the file from which to load the state.
    ///
    /// # Returns
    /// A `Result` containing the loaded `InMemory` store or an I/O or
    /// deserialization error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Self::new());
        }

        let json =
            fs::read_to_string(path).map_err(|e| StoreError::FileIo { source: e })?;
        let store: Self = serde_json::from_str(&json)
            .map_err(|e| StoreError::DeserializationFailed { source: e })?;

        Ok(store)
    }

    /// Returns a vector containing all keys currently stored.
    pub fn keys(&self) -> Result<Vec<String>> {
        let slots = self.read_slots("*")?;
        Ok(slots.keys().cloned().collect())
    }

    fn read_slots(
        &self,
        key: &str,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, String>>> {
        self.slots.read().map_err(|_| {
            StoreError::LockPoisoned {
                key: key.to_string(),
            }
            .into()
        })
    }

    fn write_slots(
        &self,
        key: &str,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, String>>> {
        self.slots.write().map_err(|_| {
            StoreError::LockPoisoned {
                key: key.to_string(),
            }
            .into()
        })
    }
}

impl Storage for InMemory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.read_slots(key)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        let mut slots = self.write_slots(key)?;
        slots.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.write_slots(key)?;
        slots.remove(key);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
