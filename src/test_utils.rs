//! Test utilities for ticket-shadow
//!
//! Common fixtures shared by unit tests across the crate.

#![cfg(test)]

use crate::core::{Role, StoredUser, User, UserBuilder};

/// An administrator account
pub fn admin() -> User {
    UserBuilder::new()
        .id("1")
        .name("Root")
        .email("root@example.com")
        .role(Role::Administrator)
        .build()
}

/// A technician account with the given identifier
pub fn technician(id: &str) -> User {
    UserBuilder::new()
        .id(id)
        .name("Tech")
        .email("tech@example.com")
        .role(Role::Technician)
        .build()
}

/// A standard account with the given identifier
pub fn standard(id: &str) -> User {
    UserBuilder::new()
        .id(id)
        .name("User")
        .email("user@example.com")
        .role(Role::Standard)
        .build()
}

/// A stored session record with the given raw role label
pub fn stored_user(role_label: &str) -> StoredUser {
    StoredUser {
        id: "7".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        role_label: role_label.to_string(),
    }
}
