//! In-memory orga team gateway.
//!
//! Mirrors the organizer membership fact the real orga team subsystem
//! would provide.

use std::collections::HashSet;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::party::PartyId;
use crate::domain::ports::{OrgaTeamGateway, OrgaTeamGatewayError};
use crate::domain::user::UserId;

/// In-memory implementation of the orga team gateway port.
#[derive(Debug, Default)]
pub struct InMemoryOrgaTeamGateway {
    orgas: RwLock<HashSet<(UserId, PartyId)>>,
}

impl InMemoryOrgaTeamGateway {
    /// Create a gateway without any organizers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the user organizes the party.
    pub fn appoint_orga(
        &self,
        user_id: UserId,
        party_id: PartyId,
    ) -> Result<(), OrgaTeamGatewayError> {
        let mut orgas = self
            .orgas
            .write()
            .map_err(|_| OrgaTeamGatewayError::unavailable("orga store lock poisoned"))?;
        orgas.insert((user_id, party_id));
        Ok(())
    }
}

#[async_trait]
impl OrgaTeamGateway for InMemoryOrgaTeamGateway {
    async fn is_orga_for_party(
        &self,
        user_id: UserId,
        party_id: &PartyId,
    ) -> Result<bool, OrgaTeamGatewayError> {
        let orgas = self
            .orgas
            .read()
            .map_err(|_| OrgaTeamGatewayError::unavailable("orga store lock poisoned"))?;
        let is_orga = orgas.contains(&(user_id, party_id.clone()));
        debug!(%user_id, %party_id, is_orga, "answered orga membership query");
        Ok(is_orga)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn reports_membership_only_for_appointed_pairs() {
        let gateway = InMemoryOrgaTeamGateway::new();
        let party_id = PartyId::new("lanfest-2026").expect("valid id");
        let orga = UserId::random();

        gateway
            .appoint_orga(orga, party_id.clone())
            .expect("appointment succeeds");

        assert!(
            gateway
                .is_orga_for_party(orga, &party_id)
                .await
                .expect("lookup succeeds")
        );
        assert!(
            !gateway
                .is_orga_for_party(UserId::random(), &party_id)
                .await
                .expect("lookup succeeds")
        );
    }
}
