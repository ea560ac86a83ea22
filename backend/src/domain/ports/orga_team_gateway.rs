//! Port for the organizer team subsystem.
//!
//! Organizers bypass the ticket and quantity rules; admission control asks
//! this port whether a user organizes the party.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::party::PartyId;
use crate::domain::user::UserId;

/// Errors raised by orga team gateway adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrgaTeamGatewayError {
    /// The orga team subsystem could not be reached.
    #[error("orga team gateway is unavailable: {message}")]
    Unavailable { message: String },
}

impl OrgaTeamGatewayError {
    /// Helper for gateway outages.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port answering organizer membership questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrgaTeamGateway: Send + Sync {
    /// Whether the user is an organizer of the party.
    async fn is_orga_for_party(
        &self,
        user_id: UserId,
        party_id: &PartyId,
    ) -> Result<bool, OrgaTeamGatewayError>;
}

/// Fixture gateway without any organizers.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureOrgaTeamGateway;

#[async_trait]
impl OrgaTeamGateway for FixtureOrgaTeamGateway {
    async fn is_orga_for_party(
        &self,
        _user_id: UserId,
        _party_id: &PartyId,
    ) -> Result<bool, OrgaTeamGatewayError> {
        Ok(false)
    }
}
