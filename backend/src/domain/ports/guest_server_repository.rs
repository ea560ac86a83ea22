//! Port for guest server persistence.
//!
//! Servers are stored as whole snapshots including their addresses; the
//! adapter round-trips the data model exactly and carries no business
//! logic.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::guest_server::{AddressId, Server, ServerId};
use crate::domain::party::PartyId;
use crate::domain::user::UserId;

/// Errors raised by guest server repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestServerRepositoryError {
    /// Repository connection could not be established.
    #[error("guest server repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("guest server repository query failed: {message}")]
    Query { message: String },
}

impl GuestServerRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for guest server snapshot persistence and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestServerRepository: Send + Sync {
    /// Persist a freshly registered server together with its addresses.
    async fn insert_server(&self, server: &Server) -> Result<(), GuestServerRepositoryError>;

    /// Replace a stored server with a newer snapshot.
    ///
    /// Returns `true` when a record was replaced and `false` when the
    /// server does not exist.
    async fn update_server(&self, server: &Server) -> Result<bool, GuestServerRepositoryError>;

    /// Find a server by its id.
    async fn find_server(
        &self,
        server_id: ServerId,
    ) -> Result<Option<Server>, GuestServerRepositoryError>;

    /// Find the server owning the given address.
    async fn find_server_for_address(
        &self,
        address_id: AddressId,
    ) -> Result<Option<Server>, GuestServerRepositoryError>;

    /// List all servers registered for the party, in registration order.
    async fn list_servers_for_party(
        &self,
        party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError>;

    /// List the servers a user owns for the party, in registration order.
    async fn list_servers_for_owner_and_party(
        &self,
        owner_id: UserId,
        party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError>;

    /// Count the servers a user owns for the party.
    async fn count_servers_for_owner_and_party(
        &self,
        owner_id: UserId,
        party_id: &PartyId,
    ) -> Result<usize, GuestServerRepositoryError>;

    /// Delete a server and its addresses.
    ///
    /// Returns `true` when a record was deleted and `false` when the
    /// server did not exist.
    async fn delete_server(&self, server_id: ServerId) -> Result<bool, GuestServerRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGuestServerRepository;

#[async_trait]
impl GuestServerRepository for FixtureGuestServerRepository {
    async fn insert_server(&self, _server: &Server) -> Result<(), GuestServerRepositoryError> {
        Ok(())
    }

    async fn update_server(&self, _server: &Server) -> Result<bool, GuestServerRepositoryError> {
        Ok(false)
    }

    async fn find_server(
        &self,
        _server_id: ServerId,
    ) -> Result<Option<Server>, GuestServerRepositoryError> {
        Ok(None)
    }

    async fn find_server_for_address(
        &self,
        _address_id: AddressId,
    ) -> Result<Option<Server>, GuestServerRepositoryError> {
        Ok(None)
    }

    async fn list_servers_for_party(
        &self,
        _party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_servers_for_owner_and_party(
        &self,
        _owner_id: UserId,
        _party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError> {
        Ok(Vec::new())
    }

    async fn count_servers_for_owner_and_party(
        &self,
        _owner_id: UserId,
        _party_id: &PartyId,
    ) -> Result<usize, GuestServerRepositoryError> {
        Ok(0)
    }

    async fn delete_server(
        &self,
        _server_id: ServerId,
    ) -> Result<bool, GuestServerRepositoryError> {
        Ok(false)
    }
}
