use super::{Priority, Role, Status, Ticket, User};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    creator_id: Option<String>,
    assignee: Option<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the creator ID
    #[must_use]
    pub fn creator(mut self, creator_id: impl Into<String>) -> Self {
        self.creator_id = Some(creator_id.into());
        self
    }

    /// Set the assigned technician ID
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            priority: self.priority,
            creator_id: self.creator_id.unwrap_or_default(),
            assignee: self.assignee,
        }
    }
}

/// Builder for creating User instances
pub struct UserBuilder {
    id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    role: Role,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            email: None,
            role: Role::Standard,
        }
    }
}

impl UserBuilder {
    /// Create a new user builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the display name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the email address
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the canonical role
    #[must_use]
    pub const fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Build the user
    pub fn build(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .id("12")
            .title("Printer down")
            .description("No toner")
            .status(Status::InProgress)
            .priority(Priority::High)
            .creator("3")
            .assignee("7")
            .build();

        assert_eq!(ticket.id, "12");
        assert_eq!(ticket.title, "Printer down");
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.priority, Some(Priority::High));
        assert_eq!(ticket.assignee.as_deref(), Some("7"));
    }

    #[test]
    fn test_ticket_builder_defaults() {
        let ticket = TicketBuilder::new().build();
        assert_eq!(ticket.status, Status::Pending);
        assert!(ticket.priority.is_none());
        assert!(ticket.assignee.is_none());
    }

    #[test]
    fn test_user_builder() {
        let user = UserBuilder::new()
            .id("3")
            .name("Luis")
            .email("luis@example.com")
            .role(Role::Technician)
            .build();

        assert_eq!(user.id, "3");
        assert_eq!(user.role, Role::Technician);
    }
}
