//! CLI argument definitions for the QRLink binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use qrlink::session::Role;

/// Output format selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Aligned, human-readable output
    Human,
    /// Machine-readable JSON
    Json,
}

/// Account role selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    Client,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Admin => Role::Admin,
            RoleArg::Client => Role::Client,
        }
    }
}

/// QRLink client-record console
#[derive(Parser, Debug)]
#[command(name = "qrlink")]
#[command(about = "QRLink: client records, QR links, and role-based sessions")]
#[command(version)]
pub struct Cli {
    /// State file holding the serialized store
    #[arg(
        short = 'f',
        long,
        default_value = "qrlink.json",
        env = "QRLINK_DATA_FILE",
        global = true
    )]
    pub data_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and persist the session
    Login(LoginArgs),
    /// Clear the current session
    Logout,
    /// Show the current session, if any
    Whoami,
    /// Register a new user account
    Register(RegisterArgs),
    /// Manage client records
    Client {
        #[command(subcommand)]
        command: ClientCommands,
    },
    /// Download the QR image for a client
    Qr(QrArgs),
    /// Check route access for the current session
    Route(RouteArgs),
}

/// Arguments for the login command
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Account email
    pub email: String,

    /// Account password
    #[arg(short, long, env = "QRLINK_PASSWORD")]
    pub password: String,
}

/// Arguments for the register command
#[derive(clap::Args, Debug)]
pub struct RegisterArgs {
    /// Account email (unique, case-insensitive)
    pub email: String,

    /// Account password
    #[arg(short, long, env = "QRLINK_PASSWORD")]
    pub password: String,

    /// Account role
    #[arg(short, long, value_enum, default_value = "client")]
    pub role: RoleArg,

    /// Display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub picture: Option<String>,

    /// Custom link, for client accounts
    #[arg(short, long)]
    pub link: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ClientCommands {
    /// Create a client record
    Add(ClientAddArgs),
    /// List all client records
    List,
    /// Show one client record
    Show {
        /// Record identifier
        id: String,
    },
    /// Update fields of a client record
    Update(ClientUpdateArgs),
    /// Delete a client record
    Delete {
        /// Record identifier
        id: String,
    },
}

/// Arguments for creating a client record
#[derive(clap::Args, Debug)]
pub struct ClientAddArgs {
    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Contact email
    #[arg(short, long)]
    pub email: String,

    /// The link the client's QR code should resolve to
    #[arg(short, long)]
    pub link: String,

    /// Avatar image URL
    #[arg(long)]
    pub picture: Option<String>,
}

/// Arguments for updating a client record
#[derive(clap::Args, Debug)]
pub struct ClientUpdateArgs {
    /// Record identifier
    pub id: String,

    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New contact email
    #[arg(short, long)]
    pub email: Option<String>,

    /// New custom link (regenerates the QR image URL)
    #[arg(short, long)]
    pub link: Option<String>,

    /// New avatar image URL
    #[arg(long)]
    pub picture: Option<String>,
}

/// Arguments for the qr command
#[derive(clap::Args, Debug)]
pub struct QrArgs {
    /// Client record identifier
    pub id: String,

    /// Where to write the image (defaults to <id>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the route command
#[derive(clap::Args, Debug)]
pub struct RouteArgs {
    /// Route path to check, e.g. /admin/dashboard
    pub path: String,
}
