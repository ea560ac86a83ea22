//! Driving port for guest server mutations.
//!
//! Commands orchestrate the pure lifecycle functions with persistence and
//! fact gathering. Every expected business outcome is a distinct error
//! variant, so callers handle each case rather than matching on a message.

use std::net::IpAddr;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::guest_server::{
    Address, AddressData, AddressId, GuestServerSetting, Server, ServerId,
};
use crate::domain::guest_server_events::{
    GuestServerApprovedEvent, GuestServerCheckedInEvent, GuestServerCheckedOutEvent,
    GuestServerRegisteredEvent,
};
use crate::domain::guest_server_lifecycle::{
    ApproveServerError, CheckInServerError, CheckOutServerError, RegistrationDeniedError,
};
use crate::domain::party::{Party, PartyId};
use crate::domain::user::User;

use super::guest_server_repository::GuestServerRepositoryError;
use super::guest_server_setting_repository::GuestServerSettingRepositoryError;
use super::orga_team_gateway::OrgaTeamGatewayError;
use super::ticket_gateway::TicketGatewayError;

/// Errors surfaced by guest server commands.
///
/// Business rejections (`RegistrationDenied`, the transition variants) and
/// missing records are ordinary outcomes; the port failure variants wrap
/// the driven ports' errors unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestServerCommandError {
    /// No server exists for the given id.
    #[error("guest server {0} not found")]
    ServerNotFound(ServerId),
    /// No address exists for the given id.
    #[error("guest server address {0} not found")]
    AddressNotFound(AddressId),
    /// Admission control rejected the registration.
    #[error(transparent)]
    RegistrationDenied(#[from] RegistrationDeniedError),
    /// The approval transition was not applicable.
    #[error(transparent)]
    Approve(#[from] ApproveServerError),
    /// The check-in transition was not applicable.
    #[error(transparent)]
    CheckIn(#[from] CheckInServerError),
    /// The check-out transition was not applicable.
    #[error(transparent)]
    CheckOut(#[from] CheckOutServerError),
    /// The server repository failed.
    #[error(transparent)]
    Repository(#[from] GuestServerRepositoryError),
    /// The setting repository failed.
    #[error(transparent)]
    Settings(#[from] GuestServerSettingRepositoryError),
    /// The ticket gateway failed.
    #[error(transparent)]
    Tickets(#[from] TicketGatewayError),
    /// The orga team gateway failed.
    #[error(transparent)]
    OrgaTeams(#[from] OrgaTeamGatewayError),
}

/// Request to check whether a user may register another server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsureRegistrationRequest {
    pub party: Party,
    pub user: User,
}

/// Request to register a guest server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterServerRequest {
    pub party: Party,
    pub creator: User,
    pub owner: User,
    pub description: String,
    pub address_datas: Vec<AddressData>,
    pub notes_owner: Option<String>,
    pub notes_admin: Option<String>,
}

/// Response from registering a guest server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterServerResponse {
    pub server: Server,
    pub event: GuestServerRegisteredEvent,
}

/// Request to approve a guest server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveServerRequest {
    pub server_id: ServerId,
    pub initiator: User,
}

/// Response from approving a guest server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApproveServerResponse {
    pub server: Server,
    pub event: GuestServerApprovedEvent,
}

/// Request to check a guest server in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInServerRequest {
    pub server_id: ServerId,
    pub initiator: User,
}

/// Response from checking a guest server in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInServerResponse {
    pub server: Server,
    pub event: GuestServerCheckedInEvent,
}

/// Request to check a guest server out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutServerRequest {
    pub server_id: ServerId,
    pub initiator: User,
}

/// Response from checking a guest server out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutServerResponse {
    pub server: Server,
    pub event: GuestServerCheckedOutEvent,
}

/// Request to update a server's free-text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateServerRequest {
    pub server_id: ServerId,
    pub description: String,
    pub notes_admin: Option<String>,
}

/// Response from updating a server's free-text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateServerResponse {
    pub server: Server,
}

/// Request to append an address to a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAddressRequest {
    pub server_id: ServerId,
    pub address_data: AddressData,
}

/// Response from appending an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAddressResponse {
    pub server: Server,
    pub address: Address,
}

/// Request to update an existing address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAddressRequest {
    pub address_id: AddressId,
    pub address_data: AddressData,
}

/// Response from updating an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAddressResponse {
    pub server: Server,
    pub address: Address,
}

/// Request to replace the per-party network defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingRequest {
    pub party_id: PartyId,
    pub netmask: Option<IpAddr>,
    pub gateway: Option<IpAddr>,
    pub dns_server1: Option<IpAddr>,
    pub dns_server2: Option<IpAddr>,
    pub domain: Option<String>,
}

/// Response from replacing the per-party network defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSettingResponse {
    pub setting: GuestServerSetting,
}

/// Request to delete a guest server and its addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteServerRequest {
    pub server_id: ServerId,
}

/// Response from deleting a guest server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteServerResponse {
    pub server_id: ServerId,
}

/// Driving port for guest server write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestServerCommand: Send + Sync {
    /// Decide whether the user may register another server for the party.
    ///
    /// Gathers the ticket, orga, and quantity facts and runs the admission
    /// rules. Callers run this before [`GuestServerCommand::register_server`];
    /// registration itself stays mechanism-only so administrators can
    /// register on a user's behalf without the checks.
    async fn ensure_user_may_register_server(
        &self,
        request: EnsureRegistrationRequest,
    ) -> Result<(), GuestServerCommandError>;

    /// Register a guest server and return the snapshot plus its event.
    async fn register_server(
        &self,
        request: RegisterServerRequest,
    ) -> Result<RegisterServerResponse, GuestServerCommandError>;

    /// Approve a guest server.
    async fn approve_server(
        &self,
        request: ApproveServerRequest,
    ) -> Result<ApproveServerResponse, GuestServerCommandError>;

    /// Check a guest server in at the venue.
    async fn check_in_server(
        &self,
        request: CheckInServerRequest,
    ) -> Result<CheckInServerResponse, GuestServerCommandError>;

    /// Check a guest server out again.
    async fn check_out_server(
        &self,
        request: CheckOutServerRequest,
    ) -> Result<CheckOutServerResponse, GuestServerCommandError>;

    /// Update a server's description and admin notes.
    async fn update_server(
        &self,
        request: UpdateServerRequest,
    ) -> Result<UpdateServerResponse, GuestServerCommandError>;

    /// Append an address to a server.
    async fn create_address(
        &self,
        request: CreateAddressRequest,
    ) -> Result<CreateAddressResponse, GuestServerCommandError>;

    /// Update an existing address.
    async fn update_address(
        &self,
        request: UpdateAddressRequest,
    ) -> Result<UpdateAddressResponse, GuestServerCommandError>;

    /// Replace the per-party network defaults.
    async fn update_setting(
        &self,
        request: UpdateSettingRequest,
    ) -> Result<UpdateSettingResponse, GuestServerCommandError>;

    /// Delete a guest server and its addresses.
    async fn delete_server(
        &self,
        request: DeleteServerRequest,
    ) -> Result<DeleteServerResponse, GuestServerCommandError>;
}
