//! QR image download command.
//!
//! The QR image itself is rendered by the third-party endpoint the record's
//! `qr_code` URL points at; this command just fetches the bytes.

use std::path::PathBuf;

use qrlink::ClientRegistry;

use crate::cli::QrArgs;
use crate::state::StateFile;

/// Run the `qr` command
pub async fn fetch(state: &StateFile, args: &QrArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store);

    let client = registry.get_client(&args.id)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}.png", client.id)));

    tracing::info!(url = %client.qr_code, "fetching QR image");
    let response = reqwest::get(&client.qr_code).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    std::fs::write(&output, &bytes)?;

    println!(
        "Saved QR image for {} ({} bytes) to {}",
        client.name,
        bytes.len(),
        output.display()
    );
    Ok(())
}
