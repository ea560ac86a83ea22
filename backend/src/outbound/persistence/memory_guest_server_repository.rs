//! In-memory guest server repository.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::guest_server::{AddressId, Server, ServerId};
use crate::domain::party::PartyId;
use crate::domain::ports::{GuestServerRepository, GuestServerRepositoryError};
use crate::domain::user::UserId;

type ServerStore = HashMap<ServerId, Server>;

/// In-memory implementation of the guest server repository port.
///
/// Snapshots are stored whole, keyed by server id. Listings are ordered by
/// id; the identifiers are time-ordered, so that equals registration
/// order. A poisoned lock surfaces as the port's `Connection` error.
#[derive(Debug, Default)]
pub struct MemoryGuestServerRepository {
    servers: RwLock<ServerStore>,
}

impl MemoryGuestServerRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> Result<RwLockReadGuard<'_, ServerStore>, GuestServerRepositoryError> {
        self.servers.read().map_err(|_| {
            GuestServerRepositoryError::connection("guest server store lock poisoned")
        })
    }

    fn store_mut(&self) -> Result<RwLockWriteGuard<'_, ServerStore>, GuestServerRepositoryError> {
        self.servers.write().map_err(|_| {
            GuestServerRepositoryError::connection("guest server store lock poisoned")
        })
    }

    fn sorted(mut servers: Vec<Server>) -> Vec<Server> {
        servers.sort_by_key(Server::id);
        servers
    }
}

#[async_trait]
impl GuestServerRepository for MemoryGuestServerRepository {
    async fn insert_server(&self, server: &Server) -> Result<(), GuestServerRepositoryError> {
        let mut servers = self.store_mut()?;

        if servers.contains_key(&server.id()) {
            return Err(GuestServerRepositoryError::query(format!(
                "guest server {} is already stored",
                server.id()
            )));
        }

        debug!(server_id = %server.id(), party_id = %server.party_id(), "storing guest server");
        servers.insert(server.id(), server.clone());
        Ok(())
    }

    async fn update_server(&self, server: &Server) -> Result<bool, GuestServerRepositoryError> {
        let mut servers = self.store_mut()?;

        let Some(stored) = servers.get_mut(&server.id()) else {
            return Ok(false);
        };

        debug!(server_id = %server.id(), "replacing guest server snapshot");
        *stored = server.clone();
        Ok(true)
    }

    async fn find_server(
        &self,
        server_id: ServerId,
    ) -> Result<Option<Server>, GuestServerRepositoryError> {
        let servers = self.store()?;
        Ok(servers.get(&server_id).cloned())
    }

    async fn find_server_for_address(
        &self,
        address_id: AddressId,
    ) -> Result<Option<Server>, GuestServerRepositoryError> {
        let servers = self.store()?;
        let found = servers
            .values()
            .find(|server| {
                server
                    .addresses()
                    .iter()
                    .any(|address| address.id() == address_id)
            })
            .cloned();
        Ok(found)
    }

    async fn list_servers_for_party(
        &self,
        party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError> {
        let servers = self.store()?;
        let matching = servers
            .values()
            .filter(|server| server.party_id() == party_id)
            .cloned()
            .collect();
        Ok(Self::sorted(matching))
    }

    async fn list_servers_for_owner_and_party(
        &self,
        owner_id: UserId,
        party_id: &PartyId,
    ) -> Result<Vec<Server>, GuestServerRepositoryError> {
        let servers = self.store()?;
        let matching = servers
            .values()
            .filter(|server| server.owner_id() == owner_id && server.party_id() == party_id)
            .cloned()
            .collect();
        Ok(Self::sorted(matching))
    }

    async fn count_servers_for_owner_and_party(
        &self,
        owner_id: UserId,
        party_id: &PartyId,
    ) -> Result<usize, GuestServerRepositoryError> {
        let servers = self.store()?;
        let quantity = servers
            .values()
            .filter(|server| server.owner_id() == owner_id && server.party_id() == party_id)
            .count();
        Ok(quantity)
    }

    async fn delete_server(&self, server_id: ServerId) -> Result<bool, GuestServerRepositoryError> {
        let mut servers = self.store_mut()?;
        let removed = servers.remove(&server_id).is_some();
        if removed {
            debug!(server_id = %server_id, "deleted guest server");
        }
        Ok(removed)
    }
}
