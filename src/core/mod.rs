//! Core domain types for ticket-shadow
//!
//! Everything that crosses the wire as a loosely-typed string (roles, ticket
//! statuses, priorities) lives here as a closed enum. Decoding happens once,
//! at the service-client boundary; the rest of the crate only ever sees these
//! types.

mod builders;
mod ticket;
mod user;

pub use builders::{TicketBuilder, UserBuilder};
pub use ticket::{Priority, Status, Ticket};
pub use user::{Role, StoredUser, User};
