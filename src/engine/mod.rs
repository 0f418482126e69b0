//! Ticket lifecycle engine
//!
//! The state machine governing valid ticket transitions, who may invoke
//! them, and how tickets are ranked and filtered per role. The engine is a
//! pure decision layer over data fetched fresh from the service; it holds no
//! persistent state.

mod lifecycle;
mod views;

pub use lifecycle::{check_accept, check_close, check_create, check_edit, Lifecycle};
pub use views::{assigned_to, created_by, rank_by_priority, AdminBoard, TechnicianBoard};
