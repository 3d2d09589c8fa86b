//! Client registry for QRLink
//!
//! CRUD over client records, persisted under a single storage key. Each
//! record carries a QR image URL derived from its custom link; the registry
//! regenerates the QR URL whenever the link changes, and never otherwise.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{Result, constants::CLIENTS_KEY, defaults, qr, store::Storage};

pub mod errors;
pub mod types;

pub use errors::RegistryError;
pub use types::{Client, ClientUpdate, NewClient};

/// Client record registry over the storage layer.
///
/// All operations are synchronous reads and writes with no transactional
/// guarantee. A malformed or missing client list silently falls back to the
/// built-in sample set. The list is persisted after every mutation,
/// including when it becomes empty.
pub struct ClientRegistry {
    storage: Arc<dyn Storage>,
}

impl ClientRegistry {
    /// Create a client registry over the given storage layer.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Create a client record.
    ///
    /// Assigns a fresh UUID and a UTC creation timestamp, and derives the QR
    /// image URL from the supplied link. Returns the stored record.
    ///
    /// # Errors
    /// * `RegistryError::MissingRequiredField` if `name`, `email`, or
    ///   `custom_link` is empty
    pub fn add_client(&self, data: NewClient) -> Result<Client> {
        for (field, value) in [
            ("name", &data.name),
            ("email", &data.email),
            ("custom_link", &data.custom_link),
        ] {
            if value.trim().is_empty() {
                return Err(RegistryError::MissingRequiredField { field }.into());
            }
        }

        let client = Client {
            id: Uuid::new_v4().to_string(),
            qr_code: qr::image_url(&data.custom_link).to_string(),
            email: data.email,
            name: data.name,
            profile_picture: data.profile_picture,
            custom_link: data.custom_link,
            created_at: Utc::now(),
        };

        let mut clients = self.load_clients()?;
        clients.push(client.clone());
        self.save_clients(&clients)?;

        info!(id = %client.id, name = %client.name, "client added");
        Ok(client)
    }

    /// Merge a partial update into the record with the given identifier.
    ///
    /// Fields left as `None` are unchanged. When the update changes
    /// `custom_link`, the QR image URL is regenerated from the new link;
    /// updates that do not touch the link leave the QR URL alone.
    ///
    /// A silent no-op if no record matches the identifier.
    pub fn update_client(&self, id: &str, update: ClientUpdate) -> Result<()> {
        let mut clients = self.load_clients()?;

        let Some(client) = clients.iter_mut().find(|c| c.id == id) else {
            debug!(%id, "update for unknown client ignored");
            return Ok(());
        };

        if let Some(email) = update.email {
            client.email = email;
        }
        if let Some(name) = update.name {
            client.name = name;
        }
        if let Some(profile_picture) = update.profile_picture {
            client.profile_picture = Some(profile_picture);
        }
        if let Some(custom_link) = update.custom_link {
            if custom_link != client.custom_link {
                client.qr_code = qr::image_url(&custom_link).to_string();
                client.custom_link = custom_link;
            }
        }

        info!(%id, "client updated");
        self.save_clients(&clients)
    }

    /// Remove the record with the given identifier. Idempotent.
    pub fn delete_client(&self, id: &str) -> Result<()> {
        let mut clients = self.load_clients()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);

        if clients.len() < before {
            info!(%id, "client deleted");
        }
        self.save_clients(&clients)
    }

    /// Look up a record by identifier.
    ///
    /// # Errors
    /// * `RegistryError::ClientNotFound` if no record matches
    pub fn get_client(&self, id: &str) -> Result<Client> {
        let clients = self.load_clients()?;
        clients
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| RegistryError::ClientNotFound { id: id.to_string() }.into())
    }

    /// Return all client records.
    pub fn clients(&self) -> Result<Vec<Client>> {
        self.load_clients()
    }

    fn load_clients(&self) -> Result<Vec<Client>> {
        match self.storage.get(CLIENTS_KEY)? {
            Some(json) => match serde_json::from_str(&json) {
                Ok(clients) => Ok(clients),
                Err(e) => {
                    warn!("malformed client list, falling back to sample data: {e}");
                    Ok(defaults::default_clients())
                }
            },
            None => Ok(defaults::default_clients()),
        }
    }

    fn save_clients(&self, clients: &[Client]) -> Result<()> {
        self.storage
            .set(CLIENTS_KEY, serde_json::to_string(clients)?)
    }
}
