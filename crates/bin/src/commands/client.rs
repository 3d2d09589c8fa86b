//! Client record management commands.

use qrlink::{
    ClientRegistry,
    registry::{ClientUpdate, NewClient},
};

use crate::cli::{ClientAddArgs, ClientUpdateArgs, Format};
use crate::output::{print_client, print_table};
use crate::state::StateFile;

/// Run the `client add` command
pub fn add(
    state: &StateFile,
    args: &ClientAddArgs,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store.clone());

    let client = registry.add_client(NewClient {
        email: args.email.clone(),
        name: args.name.clone(),
        profile_picture: args.picture.clone(),
        custom_link: args.link.clone(),
    })?;
    state.save(&store)?;

    print_client(&client, format)?;
    Ok(())
}

/// Run the `client list` command
pub fn list(state: &StateFile, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store);

    let clients = registry.clients()?;

    match format {
        Format::Human => {
            if clients.is_empty() {
                println!("No clients found.");
                return Ok(());
            }

            let rows: Vec<Vec<String>> = clients
                .iter()
                .map(|c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.email.clone(),
                        c.custom_link.clone(),
                        c.created_at.format("%Y-%m-%d").to_string(),
                    ]
                })
                .collect();
            print_table(&["ID", "NAME", "EMAIL", "LINK", "CREATED"], &rows);
        }
        Format::Json => println!("{}", serde_json::to_string(&clients)?),
    }
    Ok(())
}

/// Run the `client show` command
pub fn show(state: &StateFile, id: &str, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store);

    let client = registry.get_client(id)?;
    print_client(&client, format)?;
    Ok(())
}

/// Run the `client update` command
pub fn update(
    state: &StateFile,
    args: &ClientUpdateArgs,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store.clone());

    registry.update_client(
        &args.id,
        ClientUpdate {
            email: args.email.clone(),
            name: args.name.clone(),
            profile_picture: args.picture.clone(),
            custom_link: args.link.clone(),
        },
    )?;
    state.save(&store)?;

    match registry.get_client(&args.id) {
        Ok(client) => print_client(&client, format)?,
        // Updates of unknown ids are silent no-ops in the registry
        Err(e) if e.is_not_found() => println!("No client with id {}.", args.id),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Run the `client delete` command
pub fn delete(state: &StateFile, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let registry = ClientRegistry::new(store.clone());

    registry.delete_client(id)?;
    state.save(&store)?;

    println!("Deleted {id}.");
    Ok(())
}
