//! HTTP-backed implementation of [`TicketService`]
//!
//! Every action is a GET against the single service endpoint with an
//! `action` query parameter; login is the one exception and is addressed by
//! its `correo`/`pass` parameters alone. Responses share the
//! `{success, ..., message}` envelope, which is normalized here into
//! `Result` values.

use super::transport::{ApiTransport, HttpTransport};
use super::wire::Envelope;
use super::TicketService;
use crate::config::Config;
use crate::core::{Priority, Role, StoredUser, Ticket};
use crate::error::{Result, ShadowError};
use async_trait::async_trait;
use std::sync::Arc;

/// Typed client for the helpdesk service
#[derive(Clone)]
pub struct ServiceClient {
    transport: Arc<dyn ApiTransport>,
}

impl ServiceClient {
    /// Build a client over any transport
    pub fn new(transport: impl ApiTransport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build an HTTP client from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config.api.base_url.clone())?))
    }

    async fn call(&self, params: &[(String, String)]) -> Result<Envelope> {
        let value = self.transport.get(params).await?;
        let envelope: Envelope = serde_json::from_value(value)
            .map_err(|err| ShadowError::Transport(format!("malformed service response: {err}")))?;
        Ok(envelope)
    }

    /// Call an action and require a reported success
    async fn call_expecting_success(&self, params: &[(String, String)]) -> Result<Envelope> {
        let envelope = self.call(params).await?;
        if envelope.success {
            Ok(envelope)
        } else {
            Err(ShadowError::ServiceRejected(
                envelope
                    .message
                    .unwrap_or_else(|| "the service reported a failure".to_string()),
            ))
        }
    }

    /// Fetch a ticket list for the given action, decoding at the boundary
    async fn fetch_tickets(&self, params: &[(String, String)]) -> Result<Vec<Ticket>> {
        let envelope = self.call_expecting_success(params).await?;
        Ok(envelope
            .tickets
            .unwrap_or_default()
            .into_iter()
            .map(super::wire::RawTicket::decode)
            .collect())
    }
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[async_trait]
impl TicketService for ServiceClient {
    async fn login(&self, email: &str, password: &str) -> Result<StoredUser> {
        // Login is the one action-less call the service accepts.
        let envelope = self
            .call_expecting_success(&params(&[("correo", email), ("pass", password)]))
            .await?;
        envelope
            .user
            .map(super::wire::RawUser::into_stored)
            .ok_or_else(|| {
                ShadowError::Transport("login response did not include a user".to_string())
            })
    }

    async fn list_all(&self) -> Result<Vec<Ticket>> {
        self.fetch_tickets(&params(&[("action", "get_tickets")]))
            .await
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Ticket>> {
        self.fetch_tickets(&params(&[
            ("action", "get_user_tickets"),
            ("user_id", user_id),
        ]))
        .await
    }

    async fn list_assigned(&self, technician_id: &str) -> Result<Vec<Ticket>> {
        self.fetch_tickets(&params(&[
            ("action", "get_assigned_tickets"),
            ("technician_id", technician_id),
        ]))
        .await
    }

    async fn create(&self, user_id: &str, title: &str, description: &str) -> Result<()> {
        self.call_expecting_success(&params(&[
            ("action", "create_ticket"),
            ("user_id", user_id),
            ("titulo", title),
            ("descripcion", description),
        ]))
        .await?;
        Ok(())
    }

    async fn update(
        &self,
        ticket_id: &str,
        priority: Option<Priority>,
        technician_id: Option<String>,
    ) -> Result<()> {
        let mut pairs = params(&[("action", "update_ticket"), ("ticket_id", ticket_id)]);
        if let Some(priority) = priority {
            pairs.push(("prioridad".to_string(), priority.wire_label().to_string()));
        }
        if let Some(technician_id) = technician_id {
            pairs.push(("tecnico_id".to_string(), technician_id));
        }
        self.call_expecting_success(&pairs).await?;
        Ok(())
    }

    async fn accept(&self, ticket_id: &str, technician_id: &str) -> Result<()> {
        self.call_expecting_success(&params(&[
            ("action", "accept_ticket"),
            ("ticket_id", ticket_id),
            ("technician_id", technician_id),
        ]))
        .await?;
        Ok(())
    }

    async fn close(&self, ticket_id: &str) -> Result<()> {
        self.call_expecting_success(&params(&[
            ("action", "close_ticket"),
            ("ticket_id", ticket_id),
        ]))
        .await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<StoredUser>> {
        let envelope = self
            .call_expecting_success(&params(&[("action", "get_users")]))
            .await?;
        Ok(envelope
            .users
            .unwrap_or_default()
            .into_iter()
            .map(super::wire::RawUser::into_stored)
            .collect())
    }

    async fn list_technicians(&self) -> Result<Vec<StoredUser>> {
        let envelope = self
            .call_expecting_success(&params(&[("action", "get_technicians")]))
            .await?;
        Ok(envelope
            .technicians
            .unwrap_or_default()
            .into_iter()
            .map(super::wire::RawUser::into_stored)
            .collect())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<()> {
        self.call_expecting_success(&params(&[
            ("action", "create_user"),
            ("nombre", name),
            ("correo", email),
            ("password", password),
            ("rol", role.wire_label()),
        ]))
        .await?;
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.call_expecting_success(&params(&[("action", "delete_user"), ("user_id", user_id)]))
            .await?;
        Ok(())
    }
}
