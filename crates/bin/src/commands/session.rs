//! Session commands: login, logout, whoami, register.

use qrlink::{SessionStore, session::NewUser};

use crate::cli::{Format, LoginArgs, RegisterArgs};
use crate::output::print_user;
use crate::state::StateFile;

/// Run the `login` command
pub fn login(
    state: &StateFile,
    args: &LoginArgs,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let sessions = SessionStore::new(store.clone());

    let user = sessions.login(&args.email, &args.password)?;
    state.save(&store)?;

    print_user(&user, format)?;
    Ok(())
}

/// Run the `logout` command
pub fn logout(state: &StateFile) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let sessions = SessionStore::new(store.clone());

    sessions.logout()?;
    state.save(&store)?;

    println!("Logged out.");
    Ok(())
}

/// Run the `whoami` command
pub fn whoami(state: &StateFile, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let sessions = SessionStore::new(store);

    match sessions.current_user()? {
        Some(user) => print_user(&user, format)?,
        None => println!("No active session."),
    }
    Ok(())
}

/// Run the `register` command
pub fn register(
    state: &StateFile,
    args: &RegisterArgs,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let sessions = SessionStore::new(store.clone());

    let user = sessions.register_user(NewUser {
        email: args.email.clone(),
        role: args.role.into(),
        name: args.name.clone(),
        profile_picture: args.picture.clone(),
        custom_link: args.link.clone(),
        qr_code: args.link.as_deref().map(|l| qrlink::qr::image_url(l).to_string()),
        password: Some(args.password.clone()),
    })?;
    state.save(&store)?;

    print_user(&user, format)?;
    Ok(())
}
