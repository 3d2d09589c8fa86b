//! Output formatting helpers for human-readable and JSON output.

use qrlink::{registry::Client, session::User};

use crate::cli::Format;

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", render(&header_cells));
    for row in rows {
        println!("{}", render(row));
    }
}

/// Print a client record in the selected format.
pub fn print_client(client: &Client, format: Format) -> Result<(), serde_json::Error> {
    match format {
        Format::Human => {
            println!("ID:       {}", client.id);
            println!("Name:     {}", client.name);
            println!("Email:    {}", client.email);
            if let Some(picture) = &client.profile_picture {
                println!("Picture:  {picture}");
            }
            println!("Link:     {}", client.custom_link);
            println!("QR image: {}", client.qr_code);
            println!("Created:  {}", client.created_at.to_rfc3339());
        }
        Format::Json => println!("{}", serde_json::to_string(client)?),
    }
    Ok(())
}

/// Print a user account in the selected format.
///
/// Accounts are always printed credential-stripped.
pub fn print_user(user: &User, format: Format) -> Result<(), serde_json::Error> {
    let user = user.without_credentials();
    match format {
        Format::Human => {
            println!("ID:    {}", user.id);
            println!("Email: {}", user.email);
            println!("Role:  {:?}", user.role);
            if let Some(name) = &user.name {
                println!("Name:  {name}");
            }
            if let Some(link) = &user.custom_link {
                println!("Link:  {link}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string(&user)?),
    }
    Ok(())
}
