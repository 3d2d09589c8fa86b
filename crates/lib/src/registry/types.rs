//! Core data types for the client registry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A managed client record.
///
/// Every client carries a custom link and a QR image URL derived from that
/// link. Invariant: `qr_code` always encodes the current `custom_link`; the
/// registry regenerates it whenever the link changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Contact email
    pub email: String,

    /// Display name
    pub name: String,

    /// Avatar image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    /// The link the client's QR code resolves to
    pub custom_link: String,

    /// QR image URL derived from `custom_link`
    pub qr_code: String,

    /// Record creation timestamp (UTC)
    pub created_at: DateTime<Utc>,
}

/// Input for creating a client record.
///
/// The identifier, creation timestamp, and QR image URL are generated by the
/// registry.
#[derive(Clone, Debug)]
pub struct NewClient {
    /// Contact email
    pub email: String,

    /// Display name
    pub name: String,

    /// Avatar image URL
    pub profile_picture: Option<String>,

    /// The link the client's QR code should resolve to
    pub custom_link: String,
}

/// Partial update of a client record.
///
/// `None` fields are left unchanged. Setting `custom_link` triggers QR
/// regeneration.
#[derive(Clone, Debug, Default)]
pub struct ClientUpdate {
    /// New contact email
    pub email: Option<String>,

    /// New display name
    pub name: Option<String>,

    /// New avatar image URL
    pub profile_picture: Option<String>,

    /// New custom link
    pub custom_link: Option<String>,
}

impl ClientUpdate {
    /// An update that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }
}
