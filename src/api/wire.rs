//! Wire-format records for the helpdesk service
//!
//! The service speaks a loosely-typed JSON dialect: Spanish field names,
//! numeric or string identifiers depending on the action, and status, role,
//! and priority carried as display labels. Everything is decoded into the
//! closed `core` types here, at the boundary, so nothing downstream handles a
//! raw string.

use crate::core::{Priority, Status, StoredUser, Ticket};
use serde::{Deserialize, Deserializer};

/// Response envelope shared by every service action
///
/// Exactly one of the payload fields is populated per action; `message` is
/// only meaningful when `success` is false.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub tickets: Option<Vec<RawTicket>>,
    #[serde(default)]
    pub users: Option<Vec<RawUser>>,
    #[serde(default)]
    pub technicians: Option<Vec<RawUser>>,
}

/// A user record as the service sends it
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    #[serde(rename = "ID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "Nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "Correo", default)]
    pub email: Option<String>,
    #[serde(rename = "Nombre_Rol", default)]
    pub role_label: Option<String>,
}

impl RawUser {
    /// Convert into the session-storable form; the role label stays raw and
    /// is validated by the role resolver, not here
    #[must_use]
    pub fn into_stored(self) -> StoredUser {
        StoredUser {
            id: self.id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role_label: self.role_label.unwrap_or_default(),
        }
    }
}

/// A ticket record as the service sends it
#[derive(Debug, Clone, Deserialize)]
pub struct RawTicket {
    #[serde(rename = "ID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "Titulo", default)]
    pub title: Option<String>,
    #[serde(rename = "Descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "Estado", default)]
    pub status: Option<String>,
    #[serde(rename = "Prioridad", default)]
    pub priority: Option<String>,
    #[serde(rename = "Usuario_ID", default, deserialize_with = "opt_id_string")]
    pub creator_id: Option<String>,
    #[serde(rename = "Tecnico_ID", default, deserialize_with = "opt_id_string")]
    pub technician_id: Option<String>,
}

impl RawTicket {
    /// Decode into the typed domain ticket
    #[must_use]
    pub fn decode(self) -> Ticket {
        Ticket {
            id: self.id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: Status::from_wire(self.status.as_deref()),
            priority: Priority::from_wire(self.priority.as_deref()),
            creator_id: self.creator_id.unwrap_or_default(),
            assignee: self.technician_id.filter(|id| !id.trim().is_empty()),
        }
    }
}

/// Identifier that may arrive as a JSON number or string
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    WireId::deserialize(deserializer).map(String::from)
}

fn opt_id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<WireId>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticket_decodes_spanish_labels() {
        let raw: RawTicket = serde_json::from_value(json!({
            "ID": 12,
            "Titulo": "Printer down",
            "Descripcion": "No toner",
            "Estado": "En proceso",
            "Prioridad": "Crítica",
            "Usuario_ID": "3",
            "Tecnico_ID": 7
        }))
        .unwrap();

        let ticket = raw.decode();
        assert_eq!(ticket.id, "12");
        assert_eq!(ticket.status, Status::InProgress);
        assert_eq!(ticket.priority, Some(Priority::Critical));
        assert_eq!(ticket.creator_id, "3");
        assert_eq!(ticket.assignee.as_deref(), Some("7"));
    }

    #[test]
    fn test_ticket_with_missing_fields_decodes_to_defaults() {
        let raw: RawTicket = serde_json::from_value(json!({ "ID": "9" })).unwrap();
        let ticket = raw.decode();
        assert_eq!(ticket.status, Status::Pending);
        assert!(ticket.priority.is_none());
        assert!(ticket.assignee.is_none());
        assert!(ticket.title.is_empty());
    }

    #[test]
    fn test_ticket_with_null_technician_is_unassigned() {
        let raw: RawTicket = serde_json::from_value(json!({
            "ID": 1,
            "Tecnico_ID": null
        }))
        .unwrap();
        assert!(raw.decode().assignee.is_none());
    }

    #[test]
    fn test_ticket_with_blank_technician_is_unassigned() {
        let raw: RawTicket = serde_json::from_value(json!({
            "ID": 1,
            "Tecnico_ID": ""
        }))
        .unwrap();
        assert!(raw.decode().assignee.is_none());
    }

    #[test]
    fn test_user_keeps_raw_role_label() {
        let raw: RawUser = serde_json::from_value(json!({
            "ID": 5,
            "Nombre": "Ana",
            "Correo": "ana@example.com",
            "Nombre_Rol": "Tecnico"
        }))
        .unwrap();

        let stored = raw.into_stored();
        assert_eq!(stored.id, "5");
        assert_eq!(stored.role_label, "Tecnico");
    }

    #[test]
    fn test_envelope_failure_shape() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": false,
            "message": "Credenciales inválidas"
        }))
        .unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Credenciales inválidas"));
        assert!(envelope.tickets.is_none());
    }

    #[test]
    fn test_envelope_defaults_when_fields_absent() {
        let envelope: Envelope = serde_json::from_value(json!({})).unwrap();
        assert!(!envelope.success);
        assert!(envelope.user.is_none());
    }
}
