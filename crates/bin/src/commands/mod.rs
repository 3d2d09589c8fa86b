//! Command implementations for the QRLink CLI.

pub mod client;
pub mod qr;
pub mod route;
pub mod session;
