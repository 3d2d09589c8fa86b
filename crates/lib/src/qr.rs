//! QR image URL derivation.
//!
//! QR generation is delegated to a third-party public image endpoint; this
//! module only constructs the request URL. No QR encoding happens locally.

use url::Url;

use crate::constants::{QR_API_ENDPOINT, QR_IMAGE_SIZE};

/// Derive the QR image URL encoding the given link.
///
/// The link value is URL-encoded into the `data` query parameter of the
/// generation endpoint.
pub fn image_url(link: &str) -> Url {
    // The endpoint constant is a valid URL; parsing it cannot fail.
    Url::parse_with_params(QR_API_ENDPOINT, [("size", QR_IMAGE_SIZE), ("data", link)])
        .expect("QR endpoint constant must parse")
}
