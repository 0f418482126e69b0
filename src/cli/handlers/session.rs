//! Session command handlers: login, logout, whoami

use super::common::HandlerContext;
use crate::api::TicketService;
use crate::error::Result;
use crate::router;
use dialoguer::{theme::ColorfulTheme, Input, Password};

/// Handle the `login` command
///
/// Prompts for missing credentials, authenticates against the service, and
/// runs the same role-resolution path the launch router uses before the
/// session is persisted. Credentials with an invalid role are discarded.
pub async fn handle_login(
    ctx: &HandlerContext,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    let email = match email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .interact()?,
    };

    let stored = ctx.client.login(&email, &password).await?;
    let route = router::complete_login(&ctx.store, stored)?;

    if let Some(user) = route.user() {
        ctx.formatter
            .success(&format!("Welcome, {}! ({})", user.name, user.role));
        ctx.formatter.print_json(user);
    }
    Ok(())
}

/// Handle the `logout` command
pub fn handle_logout(ctx: &HandlerContext) -> Result<()> {
    router::logout(&ctx.store)?;
    ctx.formatter.success("Logged out");
    Ok(())
}

/// Handle the `whoami` command
pub fn handle_whoami(ctx: &HandlerContext) -> Result<()> {
    match router::decide_entry_route(&ctx.store).user() {
        None => ctx.formatter.info("Not logged in"),
        Some(user) => {
            ctx.formatter
                .info(&format!("{} <{}> ({})", user.name, user.email, user.role));
            ctx.formatter.print_json(user);
        },
    }
    Ok(())
}
