//! Session system for QRLink
//!
//! Provides the role-based login flow over the storage layer: a registry of
//! user credentials plus the currently authenticated user. Credential secrets
//! are Argon2id-hashed, and the persisted session entry is always
//! credential-stripped.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    Result,
    constants::{CURRENT_USER_KEY, DEFAULT_ADMIN_EMAIL, USERS_KEY},
    defaults,
    store::Storage,
};

pub mod crypto;
pub mod errors;
pub mod types;

pub use errors::SessionError;
pub use types::{NewUser, Role, User};

/// Session store: user credential registry plus the current session.
///
/// All operations are synchronous reads and writes against the storage
/// layer, with no transactional guarantee. A malformed or missing user list
/// silently falls back to the built-in default set.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Create a session store over the given storage layer.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Authenticate a user by email and password.
    ///
    /// The email lookup is case-insensitive. On success the authenticated
    /// user is persisted as the current session with its credential hash
    /// stripped, and the stripped copy is returned.
    ///
    /// # Errors
    /// * `SessionError::UserNotFound` if no account matches the email
    /// * `SessionError::InvalidPassword` if the password does not verify
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let users = self.load_users()?;

        let user = users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or_else(|| SessionError::UserNotFound {
                email: email.to_string(),
            })?;

        match &user.password_hash {
            Some(hash) => crypto::verify_password(password, hash)?,
            // Accounts without a stored hash can never authenticate.
            None => return Err(SessionError::InvalidPassword.into()),
        }

        let session_user = user.without_credentials();
        self.storage
            .set(CURRENT_USER_KEY, serde_json::to_string(&session_user)?)?;

        info!(email = %session_user.email, role = ?session_user.role, "user logged in");
        Ok(session_user)
    }

    /// Clear the current session. Succeeds if no session exists.
    pub fn logout(&self) -> Result<()> {
        self.storage.remove(CURRENT_USER_KEY)?;
        debug!("session cleared");
        Ok(())
    }

    /// Register a new user account.
    ///
    /// Assigns a fresh UUID, hashes the password, and appends the account to
    /// the stored user list. Returns a credential-stripped copy.
    ///
    /// # Errors
    /// * `SessionError::MissingPassword` if no password was supplied
    /// * `SessionError::DuplicateEmail` if the email is already registered
    ///   (case-insensitive)
    pub fn register_user(&self, data: NewUser) -> Result<User> {
        let password = match data.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(SessionError::MissingPassword.into()),
        };

        let mut users = self.load_users()?;

        if users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(SessionError::DuplicateEmail { email: data.email }.into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: data.email,
            role: data.role,
            name: data.name,
            profile_picture: data.profile_picture,
            custom_link: data.custom_link,
            qr_code: data.qr_code,
            password_hash: Some(crypto::hash_password(password)?),
        };

        users.push(user.clone());
        self.save_users(&users)?;

        info!(email = %user.email, role = ?user.role, "user account registered");
        Ok(user.without_credentials())
    }

    /// Return the currently authenticated user, if any.
    ///
    /// A malformed session entry is treated as no session.
    pub fn current_user(&self) -> Result<Option<User>> {
        let Some(json) = self.storage.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("malformed session entry, treating as logged out: {e}");
                Ok(None)
            }
        }
    }

    /// Check whether the current session belongs to an admin.
    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some_and(|u| u.is_admin()))
    }

    /// Check whether the current session belongs to a client.
    pub fn is_client(&self) -> Result<bool> {
        Ok(self.current_user()?.is_some_and(|u| u.is_client()))
    }

    /// Return all stored user accounts.
    ///
    /// Falls back to the built-in default set when the stored list is absent
    /// or malformed, and re-seeds the built-in admin account if a valid list
    /// is missing it.
    pub fn users(&self) -> Result<Vec<User>> {
        self.load_users()
    }

    fn load_users(&self) -> Result<Vec<User>> {
        let mut users = match self.storage.get(USERS_KEY)? {
            Some(json) => match serde_json::from_str::<Vec<User>>(&json) {
                Ok(users) => users,
                Err(e) => {
                    warn!("malformed user list, falling back to defaults: {e}");
                    return defaults::default_users();
                }
            },
            None => return defaults::default_users(),
        };

        // The built-in admin must always be present.
        if !users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(DEFAULT_ADMIN_EMAIL))
        {
            users.insert(0, defaults::default_admin()?);
        }

        Ok(users)
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        self.storage.set(USERS_KEY, serde_json::to_string(users)?)
    }
}
