//! Shared handler context
//!
//! Encapsulates the resources every command needs: configuration, the
//! session store, the service client, and the output formatter.

use crate::api::ServiceClient;
use crate::cli::output::OutputFormatter;
use crate::config::Config;
use crate::core::{Ticket, User};
use crate::engine::Lifecycle;
use crate::error::{Result, ShadowError};
use crate::router;
use crate::session::FileSessionStore;

/// Context for handler operations
pub struct HandlerContext {
    pub config: Config,
    pub store: FileSessionStore,
    pub client: ServiceClient,
    pub formatter: OutputFormatter,
}

impl HandlerContext {
    /// Load configuration and wire up the store and client
    pub fn new(formatter: OutputFormatter) -> Result<Self> {
        let config = Config::load_or_default()?;
        let store = FileSessionStore::new(config.session_dir()?);
        let client = ServiceClient::from_config(&config)?;
        Ok(Self {
            config,
            store,
            client,
            formatter,
        })
    }

    /// The validated current user, or `NotLoggedIn`
    pub fn current_user(&self) -> Result<User> {
        router::current_user(&self.store)
    }

    /// A lifecycle engine over this context's service client
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle<'_> {
        Lifecycle::new(&self.client)
    }

    /// Fetch the current snapshot of a ticket by identifier
    ///
    /// Transitions are validated against fresh state, so every mutating
    /// command starts here.
    pub async fn find_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        use crate::api::TicketService;
        let tickets = self.client.list_all().await?;
        tickets
            .into_iter()
            .find(|ticket| ticket.id.trim() == ticket_id.trim())
            .ok_or_else(|| ShadowError::custom(format!("Ticket not found: {ticket_id}")))
    }
}

/// Render one ticket as a display line
#[must_use]
pub fn ticket_line(ticket: &Ticket) -> String {
    let priority = ticket
        .priority
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let assignee = ticket
        .assignee
        .as_deref()
        .map_or_else(String::new, |id| format!(" -> tech {id}"));
    format!(
        "#{} [{}] [{}] {}{}",
        ticket.id, ticket.status, priority, ticket.title, assignee
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, Status, TicketBuilder};

    #[test]
    fn test_ticket_line_includes_status_and_priority() {
        let ticket = TicketBuilder::new()
            .id("12")
            .title("Printer down")
            .status(Status::InProgress)
            .priority(Priority::Critical)
            .assignee("7")
            .build();

        let line = ticket_line(&ticket);
        assert!(line.contains("#12"));
        assert!(line.contains("In progress"));
        assert!(line.contains("Critical"));
        assert!(line.contains("tech 7"));
    }

    #[test]
    fn test_ticket_line_dashes_missing_priority() {
        let ticket = TicketBuilder::new().id("1").title("x").build();
        assert!(ticket_line(&ticket).contains("[-]"));
    }
}
