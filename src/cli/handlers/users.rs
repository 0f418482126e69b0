//! User administration handlers (administrators only)

use super::common::HandlerContext;
use crate::api::TicketService;
use crate::core::Role;
use crate::engine::check_edit;
use crate::error::Result;
use dialoguer::{theme::ColorfulTheme, Password};

/// Handle `users list`
pub async fn handle_users_list(ctx: &HandlerContext) -> Result<()> {
    let user = ctx.current_user()?;
    check_edit(&user, "list user accounts")?;

    let users = ctx.client.list_users().await?;
    if ctx.formatter.is_json() {
        ctx.formatter.print_json(&users);
        return Ok(());
    }
    if users.is_empty() {
        ctx.formatter.info("No users available");
    }
    for account in &users {
        ctx.formatter.info(&format!(
            "#{} {} <{}> [{}]",
            account.id, account.name, account.email, account.role_label
        ));
    }
    Ok(())
}

/// Handle `users create`
pub async fn handle_user_create(
    ctx: &HandlerContext,
    name: &str,
    email: &str,
    role: Role,
    password: Option<String>,
) -> Result<()> {
    let user = ctx.current_user()?;
    check_edit(&user, "create user accounts")?;

    let password = match password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password for the new account")
            .interact()?,
    };

    ctx.client.create_user(name, email, &password, role).await?;
    ctx.formatter
        .success(&format!("Created {role} account for {name}"));
    Ok(())
}

/// Handle `users delete`
pub async fn handle_user_delete(ctx: &HandlerContext, user_id: &str) -> Result<()> {
    let user = ctx.current_user()?;
    check_edit(&user, "delete user accounts")?;

    ctx.client.delete_user(user_id).await?;
    ctx.formatter.success(&format!("Deleted user #{user_id}"));
    Ok(())
}
