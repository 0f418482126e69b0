//! Tickets, statuses, and priorities
//!
//! Statuses and priorities arrive from the service as Spanish display labels
//! (`"En proceso"`, `"Crítica"`, ...). They are decoded here into closed
//! enums; the lifecycle engine never sees a raw string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticket status
///
/// The lifecycle is `Pending -> InProgress -> Completed`; `Completed` is
/// terminal. An unknown wire status is displayed as `Pending` but must never
/// be produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl Status {
    /// Decode a wire status label, falling back to `Pending`
    ///
    /// The fallback mirrors the display rule for unknown statuses; it is a
    /// read-side decision only.
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Pendiente") => Self::Pending,
            Some("En proceso") => Self::InProgress,
            Some("Completado") => Self::Completed,
            Some(other) if !other.is_empty() => {
                tracing::warn!(status = other, "unknown ticket status, treating as pending");
                Self::Pending
            },
            _ => Self::Pending,
        }
    }

    /// The label the service uses for this status
    #[must_use]
    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::InProgress => "En proceso",
            Self::Completed => "Completado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        };
        write!(f, "{name}")
    }
}

/// Ticket priority with a fixed total order: Critical > High > Medium > Low
///
/// Derived `Ord` follows variant order, so `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Decode a wire priority label; unrecognized labels decode to `None`
    #[must_use]
    pub fn from_wire(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            Some("Baja") => Some(Self::Low),
            Some("Media") => Some(Self::Medium),
            Some("Alta") => Some(Self::High),
            Some("Crítica") => Some(Self::Critical),
            Some(other) if !other.is_empty() => {
                tracing::warn!(priority = other, "unknown ticket priority, ignoring");
                None
            },
            _ => None,
        }
    }

    /// Numeric rank used for ordering: Critical 4 ... Low 1, missing 0
    #[must_use]
    pub fn rank(priority: Option<Self>) -> u8 {
        priority.map_or(0, |p| match p {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        })
    }

    /// The label the service uses for this priority
    #[must_use]
    pub const fn wire_label(self) -> &'static str {
        match self {
            Self::Low => "Baja",
            Self::Medium => "Media",
            Self::High => "Alta",
            Self::Critical => "Crítica",
        }
    }
}

impl FromStr for Priority {
    type Err = crate::error::ShadowError;

    /// Parse a priority from CLI input; accepts both English names and the
    /// service's own labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baja" => Ok(Self::Low),
            "medium" | "media" => Ok(Self::Medium),
            "high" | "alta" => Ok(Self::High),
            "critical" | "critica" | "crítica" => Ok(Self::Critical),
            _ => Err(crate::error::ShadowError::custom(format!(
                "Invalid priority: {s}. Must be one of: low, medium, high, critical"
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        write!(f, "{name}")
    }
}

/// A support ticket as seen by the client
///
/// Invariant: `assignee` is present iff the ticket left `Pending` through a
/// technician's accept or an administrative assignment. Completed tickets
/// keep their last assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Option<Priority>,
    pub creator_id: String,
    pub assignee: Option<String>,
}

impl Ticket {
    /// Whether this ticket is assigned to the given caller
    ///
    /// Identifiers are compared as trimmed strings; the service is not
    /// consistent about numeric vs string ids.
    #[must_use]
    pub fn is_assigned_to(&self, caller_id: &str) -> bool {
        self.assignee
            .as_deref()
            .is_some_and(|assignee| assignee.trim() == caller_id.trim())
    }

    /// Whether this ticket was created by the given user
    #[must_use]
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.creator_id.trim() == user_id.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketBuilder;

    #[test]
    fn test_status_from_wire_labels() {
        assert_eq!(Status::from_wire(Some("Pendiente")), Status::Pending);
        assert_eq!(Status::from_wire(Some("En proceso")), Status::InProgress);
        assert_eq!(Status::from_wire(Some("Completado")), Status::Completed);
    }

    #[test]
    fn test_status_unknown_and_missing_default_to_pending() {
        assert_eq!(Status::from_wire(Some("Archivado")), Status::Pending);
        assert_eq!(Status::from_wire(Some("")), Status::Pending);
        assert_eq!(Status::from_wire(None), Status::Pending);
    }

    #[test]
    fn test_priority_total_order() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_rank_missing_is_lowest() {
        assert_eq!(Priority::rank(None), 0);
        assert_eq!(Priority::rank(Some(Priority::Low)), 1);
        assert_eq!(Priority::rank(Some(Priority::Critical)), 4);
    }

    #[test]
    fn test_priority_from_wire() {
        assert_eq!(Priority::from_wire(Some("Crítica")), Some(Priority::Critical));
        assert_eq!(Priority::from_wire(Some("Baja")), Some(Priority::Low));
        assert_eq!(Priority::from_wire(Some("urgente")), None);
        assert_eq!(Priority::from_wire(None), None);
    }

    #[test]
    fn test_priority_from_str_accepts_both_vocabularies() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Alta".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_is_assigned_to_normalizes_ids() {
        let ticket = TicketBuilder::new().id("1").assignee(" 42 ").build();
        assert!(ticket.is_assigned_to("42"));
        assert!(!ticket.is_assigned_to("7"));
    }

    #[test]
    fn test_unassigned_ticket_is_assigned_to_nobody() {
        let ticket = TicketBuilder::new().id("1").build();
        assert!(!ticket.is_assigned_to("42"));
    }
}
