//! Error types for ticket-shadow
//!
//! Every failure in the client is funneled into [`ShadowError`] so that the
//! CLI boundary can render a single, human-readable message. Remote failures
//! are split into transport problems and service-reported rejections; the
//! lifecycle engine adds precondition failures; the session layer adds
//! storage failures.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShadowError>;

/// All errors that can occur in the ticket-shadow client
#[derive(Debug, Error)]
pub enum ShadowError {
    /// The remote call could not complete (network, timeout, bad URL)
    #[error("connection error: {0}")]
    Transport(String),

    /// The service responded but reported a failure
    #[error("service rejected the request: {0}")]
    ServiceRejected(String),

    /// A role label did not resolve to a canonical role
    #[error("unrecognized role label: {0:?}")]
    InvalidRole(String),

    /// A lifecycle transition was attempted against an incompatible state
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// The caller's role does not permit the requested operation
    #[error("role {role} is not allowed to {action}")]
    NotPermitted { role: String, action: String },

    /// Session storage could not be read or written
    #[error("session storage unavailable: {0}")]
    Storage(String),

    /// No authenticated session is present
    #[error("not logged in")]
    NotLoggedIn,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An interactive prompt could not be read
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Custom error with a plain message
    #[error("{0}")]
    Custom(String),
}

impl ShadowError {
    /// Create a custom error from any displayable value
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// User-facing message for this error
    ///
    /// Kept separate from the `Display` impl so the CLI can present failures
    /// without debug-ish prefixes.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(msg) => format!("Could not reach the helpdesk service: {msg}"),
            Self::ServiceRejected(msg) => msg.clone(),
            Self::InvalidRole(label) => {
                format!("Your account has an unrecognized role ({label}); you have been logged out")
            },
            Self::PreconditionFailed(msg) => format!("That action is not possible: {msg}"),
            Self::NotPermitted { role, action } => {
                format!("A {role} account cannot {action}")
            },
            Self::Storage(msg) => format!("Could not access the local session: {msg}"),
            Self::NotLoggedIn => "You are not logged in".to_string(),
            other => other.to_string(),
        }
    }

    /// Suggestions displayed under the error message, when any apply
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Transport(_) => vec![
                "Check that the helpdesk service is running and reachable".to_string(),
                "Verify the base URL with 'ticket-shadow config show'".to_string(),
            ],
            Self::InvalidRole(_) | Self::NotLoggedIn => {
                vec!["Log in again with 'ticket-shadow login'".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the error indicates a dead session that should be torn down
    #[must_use]
    pub const fn is_session_fatal(&self) -> bool {
        matches!(self, Self::InvalidRole(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_transport() {
        let err = ShadowError::Transport("timed out".to_string());
        assert!(err.user_message().contains("timed out"));
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn test_invalid_role_is_session_fatal() {
        assert!(ShadowError::InvalidRole("invitado".to_string()).is_session_fatal());
        assert!(!ShadowError::NotLoggedIn.is_session_fatal());
    }

    #[test]
    fn test_not_permitted_message_names_role_and_action() {
        let err = ShadowError::NotPermitted {
            role: "Standard".to_string(),
            action: "close tickets".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("Standard"));
        assert!(msg.contains("close tickets"));
    }
}
