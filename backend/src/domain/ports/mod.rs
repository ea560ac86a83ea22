//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe how the guest-server domain expects to interact
//! with persistence and the neighbouring subsystems it consumes facts
//! from; driving ports describe the operations the web layer invokes.
//! Each trait exposes strongly typed errors so adapters map their
//! failures into predictable variants.

mod guest_server_command;
mod guest_server_query;
mod guest_server_repository;
mod guest_server_setting_repository;
mod orga_team_gateway;
mod ticket_gateway;

#[cfg(test)]
pub use guest_server_command::MockGuestServerCommand;
pub use guest_server_command::{
    ApproveServerRequest, ApproveServerResponse, CheckInServerRequest, CheckInServerResponse,
    CheckOutServerRequest, CheckOutServerResponse, CreateAddressRequest, CreateAddressResponse,
    DeleteServerRequest, DeleteServerResponse, EnsureRegistrationRequest, GuestServerCommand,
    GuestServerCommandError, RegisterServerRequest, RegisterServerResponse, UpdateAddressRequest,
    UpdateAddressResponse, UpdateServerRequest, UpdateServerResponse, UpdateSettingRequest,
    UpdateSettingResponse,
};
#[cfg(test)]
pub use guest_server_query::MockGuestServerQuery;
pub use guest_server_query::{
    CountServersForOwnerRequest, CountServersForOwnerResponse, FindServerRequest,
    FindServerResponse, GetServerQuantitiesRequest, GetServerQuantitiesResponse,
    GetSettingRequest, GetSettingResponse, GuestServerQuery, GuestServerQueryError,
    ListServersForOwnerRequest, ListServersForOwnerResponse, ListServersForPartyRequest,
    ListServersForPartyResponse,
};
#[cfg(test)]
pub use guest_server_repository::MockGuestServerRepository;
pub use guest_server_repository::{
    FixtureGuestServerRepository, GuestServerRepository, GuestServerRepositoryError,
};
#[cfg(test)]
pub use guest_server_setting_repository::MockGuestServerSettingRepository;
pub use guest_server_setting_repository::{
    FixtureGuestServerSettingRepository, GuestServerSettingRepository,
    GuestServerSettingRepositoryError,
};
#[cfg(test)]
pub use orga_team_gateway::MockOrgaTeamGateway;
pub use orga_team_gateway::{FixtureOrgaTeamGateway, OrgaTeamGateway, OrgaTeamGatewayError};
#[cfg(test)]
pub use ticket_gateway::MockTicketGateway;
pub use ticket_gateway::{FixtureTicketGateway, TicketGateway, TicketGatewayError};
