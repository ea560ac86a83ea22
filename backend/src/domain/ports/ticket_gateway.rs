//! Port for the ticketing subsystem.
//!
//! Admission control needs one fact from ticketing: whether a user
//! currently uses any ticket for the party.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::party::PartyId;
use crate::domain::user::UserId;

/// Errors raised by ticket gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketGatewayError {
    /// The ticketing subsystem could not be reached.
    #[error("ticket gateway is unavailable: {message}")]
    Unavailable { message: String },
}

impl TicketGatewayError {
    /// Helper for gateway outages.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port answering ticket usage questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketGateway: Send + Sync {
    /// Whether the user currently uses any ticket for the party.
    async fn uses_any_ticket_for_party(
        &self,
        user_id: UserId,
        party_id: &PartyId,
    ) -> Result<bool, TicketGatewayError>;
}

/// Fixture gateway that treats every user as a ticket holder.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketGateway;

#[async_trait]
impl TicketGateway for FixtureTicketGateway {
    async fn uses_any_ticket_for_party(
        &self,
        _user_id: UserId,
        _party_id: &PartyId,
    ) -> Result<bool, TicketGatewayError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_ticket_usage() {
        let gateway = FixtureTicketGateway;
        let party_id = PartyId::new("lanfest-2026").expect("valid id");
        let uses_ticket = gateway
            .uses_any_ticket_for_party(UserId::random(), &party_id)
            .await
            .expect("fixture lookup succeeds");
        assert!(uses_ticket);
    }

    #[rstest]
    fn unavailable_error_formats_message() {
        let err = TicketGatewayError::unavailable("timeout");
        assert!(err.to_string().contains("timeout"));
    }
}
