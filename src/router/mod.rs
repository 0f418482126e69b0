//! Session routing
//!
//! On launch the router reads the persisted session, validates the stored
//! role, and decides which role view to enter. An invalid stored role is
//! self-healing: the session is torn down and the user lands on the login
//! route instead of proceeding with a role nobody recognizes. Storage
//! trouble fails safe to the login route.

use crate::core::{Role, StoredUser, User};
use crate::error::{Result, ShadowError};
use crate::session::{Session, SessionStore};

/// Where a session enters the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Admin(User),
    Technician(User),
    Standard(User),
}

impl Route {
    /// The user carried by this route, when there is one
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Login => None,
            Self::Admin(user) | Self::Technician(user) | Self::Standard(user) => Some(user),
        }
    }
}

fn route_for(user: User) -> Route {
    match user.role {
        Role::Administrator => Route::Admin(user),
        Role::Technician => Route::Technician(user),
        Role::Standard => Route::Standard(user),
    }
}

/// Decide the entry route for the current persisted session
///
/// The only state-mutating branch is the forced logout when a stored role
/// fails validation.
pub fn decide_entry_route(store: &dyn SessionStore) -> Route {
    let session = Session::read_from(store);
    if !session.logged_in {
        return Route::Login;
    }
    let Some(stored) = session.user else {
        return Route::Login;
    };
    match stored.resolve() {
        Ok(user) => route_for(user),
        Err(err) => {
            tracing::warn!(error = %err, "stored session has an invalid role, logging out");
            if let Err(clear_err) = store.clear() {
                tracing::warn!(error = %clear_err, "could not clear the invalid session");
            }
            Route::Login
        },
    }
}

/// Complete a login with freshly returned credentials
///
/// Runs the same role-resolution path as launch, before the session is
/// durably written. If resolution fails the credentials are discarded and an
/// error is returned; nothing is routed. A failed session write is logged
/// and does not fail the login; the session just will not survive a
/// restart.
pub fn complete_login(store: &dyn SessionStore, stored: StoredUser) -> Result<Route> {
    let user = match stored.resolve() {
        Ok(user) => user,
        Err(err) => {
            if let Err(clear_err) = store.clear() {
                tracing::warn!(error = %clear_err, "could not clear session after rejected login");
            }
            return Err(err);
        },
    };
    if let Err(err) = store.save(&stored) {
        tracing::warn!(error = %err, "session not persisted, login continues in-memory");
    }
    Ok(route_for(user))
}

/// The validated current user, for callers that require an active session
pub fn current_user(store: &dyn SessionStore) -> Result<User> {
    decide_entry_route(store)
        .user()
        .cloned()
        .ok_or(ShadowError::NotLoggedIn)
}

/// End the current session
pub fn logout(store: &dyn SessionStore) -> Result<()> {
    store.clear()
}
