//! Command-line interface definitions
//!
//! The CLI is the presentation layer over the role-dispatched core: what a
//! command may do is decided by the lifecycle engine and the router, never
//! here.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use crate::core::{Priority, Role};
use clap::{Parser, Subcommand};

/// Role-aware client for the Ticket Shadow Support helpdesk
#[derive(Parser)]
#[command(name = "ticket-shadow", version, about)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in to the helpdesk service
    Login {
        /// Account email; prompted for when omitted
        #[arg(long)]
        email: Option<String>,

        /// Account password; prompted for (hidden) when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log out and clear the local session
    Logout,

    /// Show the current session and its role view
    Whoami,

    /// Ticket operations for the current role
    #[command(subcommand)]
    Tickets(TicketCommands),

    /// User administration (administrators only)
    #[command(subcommand)]
    Users(UserCommands),

    /// Configuration inspection
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Ticket subcommands
#[derive(Subcommand)]
pub enum TicketCommands {
    /// List tickets visible to the current role
    List {
        /// Technicians: show only tickets assigned to you
        #[arg(long)]
        mine: bool,
    },

    /// Create a new ticket (standard users)
    Create {
        /// Ticket title
        #[arg(long)]
        title: String,

        /// Ticket description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Accept a pending ticket (technicians)
    Accept {
        /// Ticket identifier
        ticket: String,
    },

    /// Close an in-progress ticket
    Close {
        /// Ticket identifier
        ticket: String,
    },

    /// Change a ticket's priority and/or assigned technician (administrators)
    Update {
        /// Ticket identifier
        ticket: String,

        /// New priority: low, medium, high, or critical
        #[arg(long)]
        priority: Option<Priority>,

        /// Technician identifier to assign
        #[arg(long)]
        technician: Option<String>,
    },
}

/// User administration subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List all user accounts
    List,

    /// Create a user account
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Role: administrator, technician, or standard
        #[arg(long)]
        role: Role,

        /// Password; prompted for (hidden) when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete a user account
    Delete {
        /// User identifier
        user: String,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}
