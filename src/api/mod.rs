//! Typed client for the remote helpdesk service
//!
//! The remote service is the single source of truth for tickets and users.
//! [`TicketService`] is the operation set the rest of the crate programs
//! against; [`ServiceClient`] is the HTTP-backed implementation. Tests and
//! the lifecycle engine never need to know which one they hold.

mod client;
mod transport;
pub mod wire;

pub use client::ServiceClient;
pub use transport::{ApiTransport, HttpTransport};

use crate::core::{Priority, Role, StoredUser, Ticket};
use crate::error::Result;
use async_trait::async_trait;

/// Operations offered by the remote ticket service
///
/// Every method resolves to either the decoded payload or a normalized
/// error: transport failures and service-reported rejections are both
/// surfaced as `ShadowError`, never as an ad-hoc response shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Authenticate and return the user record the service reports
    async fn login(&self, email: &str, password: &str) -> Result<StoredUser>;

    /// All tickets, in service order
    async fn list_all(&self) -> Result<Vec<Ticket>>;

    /// Tickets created by the given user
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Ticket>>;

    /// Tickets assigned to the given technician
    async fn list_assigned(&self, technician_id: &str) -> Result<Vec<Ticket>>;

    /// Create a new ticket on behalf of a user
    async fn create(&self, user_id: &str, title: &str, description: &str) -> Result<()>;

    /// Update a ticket's priority and/or assigned technician
    async fn update(
        &self,
        ticket_id: &str,
        priority: Option<Priority>,
        technician_id: Option<String>,
    ) -> Result<()>;

    /// Accept a pending ticket as the given technician
    async fn accept(&self, ticket_id: &str, technician_id: &str) -> Result<()>;

    /// Close an in-progress ticket
    async fn close(&self, ticket_id: &str) -> Result<()>;

    /// All user accounts
    async fn list_users(&self) -> Result<Vec<StoredUser>>;

    /// Accounts with the technician role
    async fn list_technicians(&self) -> Result<Vec<StoredUser>>;

    /// Create a user account
    async fn create_user(&self, name: &str, email: &str, password: &str, role: Role)
        -> Result<()>;

    /// Delete a user account
    async fn delete_user(&self, user_id: &str) -> Result<()>;
}
