//! Constants used throughout the QRLink library.
//!
//! This module provides central definitions for storage keys and the
//! external QR generation endpoint.

/// Storage key holding the serialized user credential list.
pub const USERS_KEY: &str = "qrlink_users";

/// Storage key holding the serialized current session, if any.
pub const CURRENT_USER_KEY: &str = "qrlink_current_user";

/// Storage key holding the serialized client record list.
pub const CLIENTS_KEY: &str = "clients";

/// Email of the built-in admin account, re-seeded if missing on load.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@qrcode.com";

/// Third-party QR image generation endpoint.
pub const QR_API_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Pixel size requested for generated QR images (width x height).
pub const QR_IMAGE_SIZE: &str = "200x200";
