//! Users, roles, and role resolution
//!
//! The service reports a user's role as a free-form label. [`Role::resolve`]
//! is the single place where labels become canonical roles; anything it does
//! not recognize is invalid and forces a logout further up the stack.

use crate::error::{Result, ShadowError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical user role
///
/// Exactly three roles exist. The role gates which view a session enters and
/// which lifecycle transitions the user may invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Administrator,
    Technician,
    Standard,
}

impl Role {
    /// Resolve a raw role label into a canonical role
    ///
    /// Surrounding whitespace is trimmed and the label is lowercased before
    /// matching. Returns `None` for a missing, empty, or unrecognized label.
    /// Pure: no side effects, same input always yields the same output.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_lowercase().as_str() {
            "administrador" => Some(Self::Administrator),
            "tecnico" => Some(Self::Technician),
            "estandar" => Some(Self::Standard),
            _ => None,
        }
    }

    /// The label the service stores for this role
    #[must_use]
    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrador",
            Self::Technician => "Tecnico",
            Self::Standard => "Estandar",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ShadowError;

    /// Parse a role from CLI input; accepts English names and the service's
    /// own labels. Unlike [`Role::resolve`] this is a parser for operator
    /// convenience, not the wire validator.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "administrator" | "admin" | "administrador" => Ok(Self::Administrator),
            "technician" | "tech" | "tecnico" => Ok(Self::Technician),
            "standard" | "user" | "estandar" => Ok(Self::Standard),
            _ => Err(ShadowError::custom(format!(
                "Invalid role: {s}. Must be one of: administrator, technician, standard"
            ))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Administrator => "Administrator",
            Self::Technician => "Technician",
            Self::Standard => "Standard",
        };
        write!(f, "{name}")
    }
}

/// An authenticated user with a validated role
///
/// Held transiently for the duration of a session; constructed only through
/// [`StoredUser::resolve`], so a `User` always carries a canonical role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A user record as persisted in the session store
///
/// Keeps the raw role label instead of a canonical role so that a stale or
/// corrupted stored record is detected at launch rather than trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role_label: String,
}

impl StoredUser {
    /// Validate the stored role label and produce a usable [`User`]
    pub fn resolve(&self) -> Result<User> {
        let role = Role::resolve(Some(&self.role_label))
            .ok_or_else(|| ShadowError::InvalidRole(self.role_label.clone()))?;
        Ok(User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role,
        })
    }
}

impl From<&User> for StoredUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role_label: user.role.wire_label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_labels() {
        assert_eq!(
            Role::resolve(Some("administrador")),
            Some(Role::Administrator)
        );
        assert_eq!(Role::resolve(Some("tecnico")), Some(Role::Technician));
        assert_eq!(Role::resolve(Some("estandar")), Some(Role::Standard));
    }

    #[test]
    fn test_resolve_trims_and_case_folds() {
        assert_eq!(
            Role::resolve(Some(" Administrador ")),
            Some(Role::Administrator)
        );
        assert_eq!(Role::resolve(Some("TECNICO")), Some(Role::Technician));
    }

    #[test]
    fn test_resolve_rejects_unknown_empty_and_missing() {
        assert_eq!(Role::resolve(Some("invitado")), None);
        assert_eq!(Role::resolve(Some("")), None);
        assert_eq!(Role::resolve(Some("   ")), None);
        assert_eq!(Role::resolve(None), None);
    }

    #[test]
    fn test_stored_user_resolves_to_user() {
        let stored = StoredUser {
            id: "7".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role_label: "Tecnico".to_string(),
        };
        let user = stored.resolve().expect("valid role should resolve");
        assert_eq!(user.role, Role::Technician);
        assert_eq!(user.id, "7");
    }

    #[test]
    fn test_stored_user_with_bad_label_fails() {
        let stored = StoredUser {
            id: "7".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role_label: "superuser".to_string(),
        };
        assert!(matches!(
            stored.resolve(),
            Err(crate::error::ShadowError::InvalidRole(label)) if label == "superuser"
        ));
    }

    #[test]
    fn test_wire_label_round_trip() {
        for role in [Role::Administrator, Role::Technician, Role::Standard] {
            assert_eq!(Role::resolve(Some(role.wire_label())), Some(role));
        }
    }
}
