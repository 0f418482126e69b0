//! The ticket lifecycle state machine
//!
//! Statuses move `Pending -> InProgress -> Completed` and never leave
//! `Completed`. The `check_*` functions are the pure transition table: they
//! validate a proposed transition against a ticket snapshot and the caller's
//! role without touching anything. [`Lifecycle`] applies them, delegates the
//! mutation to the remote service, and reloads the affected collections. The
//! service is the single source of truth, so no local state is patched.

use super::views::{self, AdminBoard, TechnicianBoard};
use crate::api::TicketService;
use crate::core::{Priority, Role, Status, Ticket, User};
use crate::error::{Result, ShadowError};

/// Validate accepting a ticket
///
/// Only a technician may accept, only while the ticket is still pending and
/// unassigned.
pub fn check_accept(ticket: &Ticket, caller: &User) -> Result<()> {
    if caller.role != Role::Technician {
        return Err(not_permitted(caller, "accept tickets"));
    }
    if ticket.status != Status::Pending {
        return Err(precondition(format!(
            "ticket {} is {}, only pending tickets can be accepted",
            ticket.id,
            ticket.status.to_string().to_lowercase()
        )));
    }
    if ticket.assignee.is_some() {
        return Err(precondition(format!(
            "ticket {} already has an assigned technician",
            ticket.id
        )));
    }
    Ok(())
}

/// Validate closing a ticket
///
/// The ticket must be in progress. The assigned technician may close it; an
/// administrator may close any in-progress ticket as an override. Status is
/// checked first so a double close always reads as a precondition failure.
pub fn check_close(ticket: &Ticket, caller: &User) -> Result<()> {
    match ticket.status {
        Status::Completed => {
            return Err(precondition(format!(
                "ticket {} is already completed",
                ticket.id
            )));
        },
        Status::Pending => {
            return Err(precondition(format!(
                "ticket {} has not been accepted yet",
                ticket.id
            )));
        },
        Status::InProgress => {},
    }
    match caller.role {
        Role::Administrator => Ok(()),
        Role::Technician if ticket.is_assigned_to(&caller.id) => Ok(()),
        Role::Technician => Err(not_permitted(caller, "close a ticket assigned to someone else")),
        Role::Standard => Err(not_permitted(caller, "close tickets")),
    }
}

/// Validate an administrative edit (reprioritize or assign)
///
/// Administrator-only. Permitted in any status, including `Completed`:
/// priority and assignment stay editable after closing, the status itself
/// does not.
pub fn check_edit(caller: &User, action: &'static str) -> Result<()> {
    if caller.role == Role::Administrator {
        Ok(())
    } else {
        Err(not_permitted(caller, action))
    }
}

/// Validate creating a ticket; tickets are opened by standard users
pub fn check_create(caller: &User) -> Result<()> {
    if caller.role == Role::Standard {
        Ok(())
    } else {
        Err(not_permitted(caller, "create tickets"))
    }
}

fn not_permitted(caller: &User, action: &str) -> ShadowError {
    ShadowError::NotPermitted {
        role: caller.role.to_string(),
        action: action.to_string(),
    }
}

fn precondition(message: String) -> ShadowError {
    ShadowError::PreconditionFailed(message)
}

/// Decision layer over the remote ticket service
///
/// Holds no state of its own; every operation validates, mutates remotely,
/// and returns freshly reloaded data.
pub struct Lifecycle<'a> {
    service: &'a dyn TicketService,
}

impl<'a> Lifecycle<'a> {
    /// Create an engine over the given service
    #[must_use]
    pub const fn new(service: &'a dyn TicketService) -> Self {
        Self { service }
    }

    /// Load the administrator view
    ///
    /// Tickets, users, and technicians are fetched concurrently. A failed
    /// technician fetch only degrades the assignment picker, so it is
    /// logged and swallowed.
    pub async fn admin_board(&self, caller: &User) -> Result<AdminBoard> {
        check_edit(caller, "view the administrator board")?;
        let (tickets, users, technicians) = tokio::join!(
            self.service.list_all(),
            self.service.list_users(),
            self.service.list_technicians(),
        );
        let technicians = technicians.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "technician list unavailable, continuing without it");
            Vec::new()
        });
        Ok(AdminBoard {
            tickets: tickets?,
            users: users?,
            technicians,
        })
    }

    /// Load the technician view: all tickets ranked by priority, and the
    /// caller's assigned tickets
    pub async fn technician_board(&self, caller: &User) -> Result<TechnicianBoard> {
        if caller.role != Role::Technician {
            return Err(not_permitted(caller, "view the technician board"));
        }
        let (all, mine) = tokio::join!(
            self.service.list_all(),
            self.service.list_assigned(&caller.id),
        );
        // Re-apply the assignment predicate so a server-side filter can never
        // disagree with what the ranked list shows.
        let mine = views::assigned_to(mine?, &caller.id);
        Ok(TechnicianBoard {
            all: views::rank_by_priority(all?),
            mine,
        })
    }

    /// Load the standard-user view: tickets the caller created
    pub async fn standard_board(&self, caller: &User) -> Result<Vec<Ticket>> {
        let tickets = self.service.list_for_user(&caller.id).await?;
        Ok(views::created_by(tickets, &caller.id))
    }

    /// Create a ticket, then reload the caller's own tickets
    pub async fn create(&self, caller: &User, title: &str, description: &str) -> Result<Vec<Ticket>> {
        check_create(caller)?;
        if title.trim().is_empty() {
            return Err(ShadowError::custom("Ticket title cannot be empty"));
        }
        self.service
            .create(&caller.id, title.trim(), description)
            .await?;
        self.standard_board(caller).await
    }

    /// Accept a pending ticket, then reload the technician board
    pub async fn accept(&self, ticket: &Ticket, caller: &User) -> Result<TechnicianBoard> {
        check_accept(ticket, caller)?;
        self.service.accept(&ticket.id, &caller.id).await?;
        self.technician_board(caller).await
    }

    /// Close an in-progress ticket, then reload the caller's view
    pub async fn close(&self, ticket: &Ticket, caller: &User) -> Result<TechnicianBoard> {
        check_close(ticket, caller)?;
        self.service.close(&ticket.id).await?;
        match caller.role {
            Role::Technician => self.technician_board(caller).await,
            // An administrator closing as an override gets the full list back.
            _ => Ok(TechnicianBoard {
                all: self.service.list_all().await?,
                mine: Vec::new(),
            }),
        }
    }

    /// Change a ticket's priority, then reload all tickets
    pub async fn reprioritize(
        &self,
        ticket: &Ticket,
        caller: &User,
        priority: Priority,
    ) -> Result<Vec<Ticket>> {
        check_edit(caller, "change ticket priority")?;
        self.service
            .update(&ticket.id, Some(priority), None)
            .await?;
        self.service.list_all().await
    }

    /// Assign a technician directly, then reload all tickets
    ///
    /// Administrative override of the accept step; replaces any current
    /// assignment.
    pub async fn assign(
        &self,
        ticket: &Ticket,
        caller: &User,
        technician_id: &str,
    ) -> Result<Vec<Ticket>> {
        check_edit(caller, "assign tickets")?;
        self.service
            .update(&ticket.id, None, Some(technician_id.to_string()))
            .await?;
        self.service.list_all().await
    }

    /// Change priority and assignment in one update, then reload all tickets
    pub async fn update(
        &self,
        ticket: &Ticket,
        caller: &User,
        priority: Option<Priority>,
        technician_id: Option<&str>,
    ) -> Result<Vec<Ticket>> {
        check_edit(caller, "edit tickets")?;
        if priority.is_none() && technician_id.is_none() {
            return Err(ShadowError::custom(
                "Nothing to update: provide a priority and/or a technician",
            ));
        }
        self.service
            .update(&ticket.id, priority, technician_id.map(str::to_string))
            .await?;
        self.service.list_all().await
    }
}
