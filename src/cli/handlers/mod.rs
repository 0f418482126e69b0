//! Command handlers
//!
//! One module per command family, sharing the [`HandlerContext`].

mod common;
mod session;
mod tickets;
mod users;

pub use common::HandlerContext;
pub use session::{handle_login, handle_logout, handle_whoami};
pub use tickets::{
    handle_ticket_accept, handle_ticket_close, handle_ticket_create, handle_ticket_update,
    handle_tickets_list,
};
pub use users::{handle_user_create, handle_user_delete, handle_users_list};
