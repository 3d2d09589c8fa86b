//! QRLink CLI entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;
mod state;

use cli::{Cli, ClientCommands, Commands};
use state::StateFile;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("qrlink=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let state = StateFile::new(&cli.data_file);
    let format = cli.format;

    match &cli.command {
        Commands::Login(args) => commands::session::login(&state, args, format),
        Commands::Logout => commands::session::logout(&state),
        Commands::Whoami => commands::session::whoami(&state, format),
        Commands::Register(args) => commands::session::register(&state, args, format),
        Commands::Client { command } => match command {
            ClientCommands::Add(args) => commands::client::add(&state, args, format),
            ClientCommands::List => commands::client::list(&state, format),
            ClientCommands::Show { id } => commands::client::show(&state, id, format),
            ClientCommands::Update(args) => commands::client::update(&state, args, format),
            ClientCommands::Delete { id } => commands::client::delete(&state, id),
        },
        Commands::Qr(args) => commands::qr::fetch(&state, args).await,
        Commands::Route(args) => commands::route::run(&state, args),
    }
}
