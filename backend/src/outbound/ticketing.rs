//! In-memory ticket gateway.
//!
//! The real ticketing subsystem lives elsewhere; this adapter answers the
//! one question admission control asks from an explicit set of ticket
//! holders, which tests and local setups seed directly.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::party::PartyId;
use crate::domain::ports::{TicketGateway, TicketGatewayError};
use crate::domain::user::UserId;

/// In-memory implementation of the ticket gateway port.
#[derive(Debug, Default)]
pub struct InMemoryTicketGateway {
    holders: RwLock<HashSet<(UserId, PartyId)>>,
}

impl InMemoryTicketGateway {
    /// Create a gateway without any ticket holders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the user uses a ticket for the party.
    pub fn issue_ticket(&self, user_id: UserId, party_id: PartyId) -> Result<(), TicketGatewayError> {
        let mut holders = self
            .holders
            .write()
            .map_err(|_| TicketGatewayError::unavailable("ticket store lock poisoned"))?;
        holders.insert((user_id, party_id));
        Ok(())
    }
}

#[async_trait]
impl TicketGateway for InMemoryTicketGateway {
    async fn uses_any_ticket_for_party(
        &self,
        user_id: UserId,
        party_id: &PartyId,
    ) -> Result<bool, TicketGatewayError> {
        let holders = self
            .holders
            .read()
            .map_err(|_| TicketGatewayError::unavailable("ticket store lock poisoned"))?;
        let uses_ticket = holders.contains(&(user_id, party_id.clone()));
        debug!(%user_id, %party_id, uses_ticket, "answered ticket usage query");
        Ok(uses_ticket)
    }
}
