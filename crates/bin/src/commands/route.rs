//! Route access check command.

use qrlink::{
    SessionStore,
    guards::{Access, Route, check},
};

use crate::cli::RouteArgs;
use crate::state::StateFile;

/// Run the `route` command
pub fn run(state: &StateFile, args: &RouteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.open();
    let sessions = SessionStore::new(store);

    let route = Route::parse(&args.path);
    let role = sessions.current_user()?.map(|u| u.role);

    match check(&route, role) {
        Access::Granted => println!("{}: granted ({route:?})", args.path),
        Access::Redirect(target) => {
            println!("{}: redirect to {}", args.path, target.path())
        }
    }
    Ok(())
}
