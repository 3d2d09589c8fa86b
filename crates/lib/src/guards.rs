//! Route guards for the console.
//!
//! Pure access decisions over the console's route table, independent of any
//! rendering layer. Admin routes require an admin session, the client
//! dashboard requires a client session, and everything else is public.
//! Denied routes redirect to the login page.

use crate::session::Role;

/// The console's route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    AdminDashboard,
    NewClient,
    ClientDetail(String),
    ClientDashboard,
    NotFound,
}

impl Route {
    /// Resolve a path to a route. Unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" => Route::Home,
            "/login" => Route::Login,
            "/admin/dashboard" => Route::AdminDashboard,
            "/admin/clients/new" => Route::NewClient,
            "/client/dashboard" => Route::ClientDashboard,
            other => match other.strip_prefix("/admin/clients/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::ClientDetail(id.to_string())
                }
                _ => Route::NotFound,
            },
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::NewClient => "/admin/clients/new".to_string(),
            Route::ClientDetail(id) => format!("/admin/clients/{id}"),
            Route::ClientDashboard => "/client/dashboard".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// The role required to access this route, if any.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AdminDashboard | Route::NewClient | Route::ClientDetail(_) => {
                Some(Role::Admin)
            }
            Route::ClientDashboard => Some(Role::Client),
            Route::Home | Route::Login | Route::NotFound => None,
        }
    }
}

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// The route may be rendered.
    Granted,
    /// The caller must be sent elsewhere (always the login page).
    Redirect(Route),
}

/// Decide whether a session with the given role may access a route.
///
/// `role` is `None` for anonymous visitors.
pub fn check(route: &Route, role: Option<Role>) -> Access {
    match route.required_role() {
        None => Access::Granted,
        Some(required) if role == Some(required) => Access::Granted,
        Some(_) => Access::Redirect(Route::Login),
    }
}
