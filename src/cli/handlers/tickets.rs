//! Ticket command handlers
//!
//! Each handler resolves the current user, lets the lifecycle engine decide
//! whether the action is allowed, and prints the reloaded state the engine
//! returns.

use super::common::{ticket_line, HandlerContext};
use crate::core::{Priority, Role, Ticket};
use crate::error::Result;

/// Handle `tickets list` for whichever role is logged in
pub async fn handle_tickets_list(ctx: &HandlerContext, mine: bool) -> Result<()> {
    let user = ctx.current_user()?;
    let lifecycle = ctx.lifecycle();

    let tickets: Vec<Ticket> = match user.role {
        Role::Administrator => {
            let board = lifecycle.admin_board(&user).await?;
            board.tickets
        },
        Role::Technician => {
            let board = lifecycle.technician_board(&user).await?;
            if mine {
                board.mine
            } else {
                board.all
            }
        },
        Role::Standard => lifecycle.standard_board(&user).await?,
    };

    print_tickets(ctx, &tickets, mine);
    Ok(())
}

/// Handle `tickets create` (standard users)
pub async fn handle_ticket_create(
    ctx: &HandlerContext,
    title: &str,
    description: &str,
) -> Result<()> {
    let user = ctx.current_user()?;
    let tickets = ctx.lifecycle().create(&user, title, description).await?;

    ctx.formatter
        .success(&format!("Created ticket '{}'", title.trim()));
    print_tickets(ctx, &tickets, false);
    Ok(())
}

/// Handle `tickets accept` (technicians)
pub async fn handle_ticket_accept(ctx: &HandlerContext, ticket_id: &str) -> Result<()> {
    let user = ctx.current_user()?;
    let ticket = ctx.find_ticket(ticket_id).await?;
    let board = ctx.lifecycle().accept(&ticket, &user).await?;

    ctx.formatter
        .success(&format!("Accepted ticket #{}", ticket.id));
    print_tickets(ctx, &board.mine, true);
    Ok(())
}

/// Handle `tickets close`
pub async fn handle_ticket_close(ctx: &HandlerContext, ticket_id: &str) -> Result<()> {
    let user = ctx.current_user()?;
    let ticket = ctx.find_ticket(ticket_id).await?;
    let board = ctx.lifecycle().close(&ticket, &user).await?;

    ctx.formatter
        .success(&format!("Closed ticket #{}", ticket.id));
    let remaining = match user.role {
        Role::Technician => &board.mine,
        _ => &board.all,
    };
    print_tickets(ctx, remaining, user.role == Role::Technician);
    Ok(())
}

/// Handle `tickets update` (administrators)
pub async fn handle_ticket_update(
    ctx: &HandlerContext,
    ticket_id: &str,
    priority: Option<Priority>,
    technician: Option<&str>,
) -> Result<()> {
    let user = ctx.current_user()?;
    let ticket = ctx.find_ticket(ticket_id).await?;
    let tickets = ctx
        .lifecycle()
        .update(&ticket, &user, priority, technician)
        .await?;

    ctx.formatter
        .success(&format!("Updated ticket #{}", ticket.id));
    print_tickets(ctx, &tickets, false);
    Ok(())
}

fn print_tickets(ctx: &HandlerContext, tickets: &[Ticket], mine: bool) {
    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&tickets);
        return;
    }
    if tickets.is_empty() {
        ctx.formatter.info(if mine {
            "No tickets assigned to you"
        } else {
            "No tickets available"
        });
        return;
    }
    for ticket in tickets {
        ctx.formatter.info(&ticket_line(ticket));
    }
}
