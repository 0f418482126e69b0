//! Read-side view policies
//!
//! Ranking and filtering applied to ticket lists per role. These are pure
//! functions over freshly fetched data; nothing here caches or mutates.

use crate::core::{Priority, StoredUser, Ticket};

/// The administrator view: all tickets plus the user roster
///
/// Tickets keep the service order. The technician roster is best-effort and
/// may be empty when its fetch failed.
#[derive(Debug, Default)]
pub struct AdminBoard {
    pub tickets: Vec<Ticket>,
    pub users: Vec<StoredUser>,
    pub technicians: Vec<StoredUser>,
}

/// The technician view: every ticket ranked by priority, plus "my tickets"
#[derive(Debug, Default)]
pub struct TechnicianBoard {
    pub all: Vec<Ticket>,
    pub mine: Vec<Ticket>,
}

/// Order tickets by priority, highest first
///
/// Critical > High > Medium > Low; tickets without a priority sort last.
/// The sort is stable, so tickets with equal priority keep the order the
/// service returned them in.
#[must_use]
pub fn rank_by_priority(mut tickets: Vec<Ticket>) -> Vec<Ticket> {
    tickets.sort_by(|a, b| Priority::rank(b.priority).cmp(&Priority::rank(a.priority)));
    tickets
}

/// Tickets assigned to the given technician
#[must_use]
pub fn assigned_to(tickets: Vec<Ticket>, technician_id: &str) -> Vec<Ticket> {
    tickets
        .into_iter()
        .filter(|ticket| ticket.is_assigned_to(technician_id))
        .collect()
}

/// Tickets created by the given user
#[must_use]
pub fn created_by(tickets: Vec<Ticket>, user_id: &str) -> Vec<Ticket> {
    tickets
        .into_iter()
        .filter(|ticket| ticket.is_created_by(user_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    fn ticket(id: &str, priority: Option<Priority>) -> Ticket {
        let builder = TicketBuilder::new().id(id);
        match priority {
            Some(p) => builder.priority(p).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_rank_by_priority_descending_with_missing_last() {
        let tickets = vec![
            ticket("a", Some(Priority::Low)),
            ticket("b", Some(Priority::Critical)),
            ticket("c", Some(Priority::Medium)),
            ticket("d", Some(Priority::Critical)),
            ticket("e", None),
        ];

        let ranked = rank_by_priority(tickets);
        let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();

        // Both criticals first in input order, then medium, low, missing.
        assert_eq!(ids, vec!["b", "d", "c", "a", "e"]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_priorities() {
        let tickets = vec![
            ticket("first", Some(Priority::High)),
            ticket("second", Some(Priority::High)),
            ticket("third", Some(Priority::High)),
        ];

        let ranked = rank_by_priority(tickets);
        let ids: Vec<&str> = ranked.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_assigned_to_filters_by_normalized_id() {
        let tickets = vec![
            TicketBuilder::new().id("1").assignee(" 7 ").build(),
            TicketBuilder::new().id("2").assignee("8").build(),
            TicketBuilder::new().id("3").build(),
        ];

        let mine = assigned_to(tickets, "7");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "1");
    }

    #[test]
    fn test_created_by_filters_creator() {
        let tickets = vec![
            TicketBuilder::new().id("1").creator("3").build(),
            TicketBuilder::new().id("2").creator("4").build(),
        ];

        let own = created_by(tickets, "3");
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].id, "1");
    }
}
