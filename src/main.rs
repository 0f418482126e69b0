//! ticket-shadow - Role-aware helpdesk client
//!
//! Entry point for the ticket-shadow CLI. Parses arguments, sets up logging
//! and the handler context, and dispatches to the command handlers. Every
//! failure is rendered through the output formatter with suggestions where
//! they apply.

use clap::Parser;
use std::process;
use ticket_shadow::cli::{
    handlers, Cli, Commands, ConfigCommands, OutputFormatter, TicketCommands, UserCommands,
};
use ticket_shadow::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter).await {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI with the parsed arguments
async fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let ctx = handlers::HandlerContext::new(formatter.clone())?;

    match cli.command {
        Commands::Login { email, password } => handlers::handle_login(&ctx, email, password).await,
        Commands::Logout => handlers::handle_logout(&ctx),
        Commands::Whoami => handlers::handle_whoami(&ctx),
        Commands::Tickets(command) => dispatch_ticket_command(&ctx, command).await,
        Commands::Users(command) => dispatch_user_command(&ctx, command).await,
        Commands::Config(ConfigCommands::Show) => {
            if formatter.is_json() {
                formatter.print_json(&ctx.config);
            } else {
                formatter.info(&format!("base_url: {}", ctx.config.api.base_url));
                formatter.info(&format!("session_dir: {}", ctx.config.session_dir()?.display()));
            }
            Ok(())
        },
    }
}

async fn dispatch_ticket_command(
    ctx: &handlers::HandlerContext,
    command: TicketCommands,
) -> Result<()> {
    match command {
        TicketCommands::List { mine } => handlers::handle_tickets_list(ctx, mine).await,
        TicketCommands::Create { title, description } => {
            handlers::handle_ticket_create(ctx, &title, &description).await
        },
        TicketCommands::Accept { ticket } => handlers::handle_ticket_accept(ctx, &ticket).await,
        TicketCommands::Close { ticket } => handlers::handle_ticket_close(ctx, &ticket).await,
        TicketCommands::Update {
            ticket,
            priority,
            technician,
        } => handlers::handle_ticket_update(ctx, &ticket, priority, technician.as_deref()).await,
    }
}

async fn dispatch_user_command(
    ctx: &handlers::HandlerContext,
    command: UserCommands,
) -> Result<()> {
    match command {
        UserCommands::List => handlers::handle_users_list(ctx).await,
        UserCommands::Create {
            name,
            email,
            role,
            password,
        } => handlers::handle_user_create(ctx, &name, &email, role, password).await,
        UserCommands::Delete { user } => handlers::handle_user_delete(ctx, &user).await,
    }
}

/// Display an error and any suggestions to the user
fn handle_error(error: &ticket_shadow::error::ShadowError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }
}
