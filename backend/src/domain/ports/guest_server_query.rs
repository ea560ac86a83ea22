//! Driving port for guest server reads.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::guest_server::{
    GuestServerSetting, Server, ServerId, ServerQuantitiesByStatus,
};
use crate::domain::party::PartyId;
use crate::domain::user::UserId;

use super::guest_server_repository::GuestServerRepositoryError;
use super::guest_server_setting_repository::GuestServerSettingRepositoryError;

/// Errors surfaced by guest server queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestServerQueryError {
    /// The server repository failed.
    #[error(transparent)]
    Repository(#[from] GuestServerRepositoryError),
    /// The setting repository failed.
    #[error(transparent)]
    Settings(#[from] GuestServerSettingRepositoryError),
}

/// Request to find a single server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindServerRequest {
    pub server_id: ServerId,
}

/// Response from finding a single server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindServerResponse {
    pub server: Option<Server>,
}

/// Request to list every server of a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListServersForPartyRequest {
    pub party_id: PartyId,
}

/// Response from listing every server of a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListServersForPartyResponse {
    pub servers: Vec<Server>,
}

/// Request to list the servers a user owns for a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListServersForOwnerRequest {
    pub owner_id: UserId,
    pub party_id: PartyId,
}

/// Response from listing the servers a user owns for a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListServersForOwnerResponse {
    pub servers: Vec<Server>,
}

/// Request to count the servers a user owns for a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountServersForOwnerRequest {
    pub owner_id: UserId,
    pub party_id: PartyId,
}

/// Response from counting the servers a user owns for a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountServersForOwnerResponse {
    pub quantity: usize,
}

/// Request to read a party's network defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSettingRequest {
    pub party_id: PartyId,
}

/// Response carrying a party's network defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSettingResponse {
    pub setting: GuestServerSetting,
}

/// Request for per-status server counts of a party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetServerQuantitiesRequest {
    pub party_id: PartyId,
}

/// Response carrying per-status server counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetServerQuantitiesResponse {
    pub quantities: ServerQuantitiesByStatus,
}

/// Driving port for guest server read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestServerQuery: Send + Sync {
    /// Find a server by its id, if present.
    async fn find_server(
        &self,
        request: FindServerRequest,
    ) -> Result<FindServerResponse, GuestServerQueryError>;

    /// List every server registered for the party.
    async fn get_all_servers_for_party(
        &self,
        request: ListServersForPartyRequest,
    ) -> Result<ListServersForPartyResponse, GuestServerQueryError>;

    /// List the servers a user owns for the party.
    async fn get_servers_for_owner_and_party(
        &self,
        request: ListServersForOwnerRequest,
    ) -> Result<ListServersForOwnerResponse, GuestServerQueryError>;

    /// Count the servers a user owns for the party.
    async fn count_servers_for_owner_and_party(
        &self,
        request: CountServersForOwnerRequest,
    ) -> Result<CountServersForOwnerResponse, GuestServerQueryError>;

    /// Read the party's network defaults, falling back to the all-`None`
    /// value without creating a record.
    async fn get_setting_for_party(
        &self,
        request: GetSettingRequest,
    ) -> Result<GetSettingResponse, GuestServerQueryError>;

    /// Count the party's servers per derived status.
    async fn get_server_quantities_by_status(
        &self,
        request: GetServerQuantitiesRequest,
    ) -> Result<GetServerQuantitiesResponse, GuestServerQueryError>;
}
