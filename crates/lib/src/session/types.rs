//! Core data types for the session system

use serde::{Deserialize, Serialize};

/// Role attached to a user account.
///
/// Admins manage client records through the console; clients only see their
/// own dashboard.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
}

/// User account stored in the credential list.
///
/// Users are stored with generated UUID primary keys. The email field is
/// used for login and must be unique (case-insensitive).
///
/// The `password_hash` holds an Argon2id PHC string. It is `None` only on
/// credential-stripped copies, such as the persisted session entry; accounts
/// without a hash can never log in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Login identifier, unique case-insensitively
    pub email: String,

    /// Account role
    pub role: Role,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    /// Custom link, present on client accounts created through the console
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_link: Option<String>,

    /// QR image URL derived from the custom link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,

    /// Argon2id password hash (PHC format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl User {
    /// Returns a copy of this user with the credential hash stripped.
    ///
    /// This is the only form that is ever persisted as the current session.
    pub fn without_credentials(&self) -> Self {
        Self {
            password_hash: None,
            ..self.clone()
        }
    }

    /// Check whether this account carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check whether this account carries the client role.
    pub fn is_client(&self) -> bool {
        self.role == Role::Client
    }
}

/// Input for registering a new user account.
///
/// The identifier is generated on registration; the password is hashed and
/// never stored in plaintext.
#[derive(Clone, Debug)]
pub struct NewUser {
    /// Login identifier, unique case-insensitively
    pub email: String,

    /// Account role
    pub role: Role,

    /// Display name
    pub name: Option<String>,

    /// Avatar image URL
    pub profile_picture: Option<String>,

    /// Custom link, for client accounts
    pub custom_link: Option<String>,

    /// QR image URL, for client accounts
    pub qr_code: Option<String>,

    /// Plaintext password, required
    pub password: Option<String>,
}
