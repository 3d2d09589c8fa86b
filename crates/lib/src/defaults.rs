//! Built-in default data set.
//!
//! Used as the silent fallback whenever persisted data is absent or
//! malformed: one admin account and three sample client records. The admin
//! secret is hashed at seed time and never stored in plaintext.

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    Result,
    constants::DEFAULT_ADMIN_EMAIL,
    qr,
    registry::Client,
    session::{Role, User, crypto},
};

/// Initial secret of the built-in admin account.
///
/// Only the Argon2 hash of this value ever reaches storage.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin123!";

/// The built-in admin account, with a freshly hashed secret.
pub fn default_admin() -> Result<User> {
    Ok(User {
        id: "1".to_string(),
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        role: Role::Admin,
        name: Some("Administrateur".to_string()),
        profile_picture: None,
        custom_link: None,
        qr_code: None,
        password_hash: Some(crypto::hash_password(DEFAULT_ADMIN_PASSWORD)?),
    })
}

/// The default user list: just the built-in admin.
pub fn default_users() -> Result<Vec<User>> {
    Ok(vec![default_admin()?])
}

/// The built-in sample client records.
pub fn default_clients() -> Vec<Client> {
    [
        (
            "2",
            "client1@example.com",
            "John Smith",
            "https://source.unsplash.com/random/200x200/?person=1",
            "http://example.com/client/john",
            seed_date(2023, 1, 15),
        ),
        (
            "3",
            "client2@example.com",
            "Sarah Johnson",
            "https://source.unsplash.com/random/200x200/?person=2",
            "http://example.com/client/sarah",
            seed_date(2023, 2, 20),
        ),
        (
            "4",
            "client3@example.com",
            "Michael Brown",
            "https://source.unsplash.com/random/200x200/?person=3",
            "http://example.com/client/michael",
            seed_date(2023, 3, 10),
        ),
    ]
    .into_iter()
    .map(
        |(id, email, name, picture, link, created_at)| Client {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            profile_picture: Some(picture.to_string()),
            custom_link: link.to_string(),
            qr_code: qr::image_url(link).to_string(),
            created_at,
        },
    )
    .collect()
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}
