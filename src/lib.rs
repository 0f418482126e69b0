//! ticket-shadow - A role-aware client for the Ticket Shadow Support helpdesk
//!
//! This crate provides the client-side core of a support-ticket helpdesk:
//! - Role resolution: raw role labels are validated into a closed enum
//! - A ticket lifecycle engine enforcing who may transition a ticket and when
//! - A session router that maps a persisted session to the correct role view
//! - A typed client for the remote ticket service, with all wire strings
//!   decoded into closed enums at the boundary
//!
//! The remote service is authoritative for all data; the client never patches
//! state optimistically. Every mutation is followed by a reload of the
//! affected collections.
//!
//! # Example
//!
//! ```rust,ignore
//! use ticket_shadow::api::ServiceClient;
//! use ticket_shadow::engine::Lifecycle;
//!
//! let client = ServiceClient::from_config(&config)?;
//! let lifecycle = Lifecycle::new(&client);
//!
//! // Technician accepts a pending ticket, then receives the reloaded lists
//! let reloaded = lifecycle.accept(&ticket, &technician).await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod router;
pub mod session;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, ShadowError};
