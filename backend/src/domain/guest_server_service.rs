//! Guest server application services.
//!
//! These services implement the guest server driving ports. They gather
//! facts through the driven ports, hand them to the pure lifecycle
//! functions, persist the returned snapshot, and pass the emitted event
//! back to the caller, which forwards it to its announcement dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;

use super::guest_server::GuestServerSetting;
use super::guest_server_lifecycle;
use super::ports::{
    ApproveServerRequest, ApproveServerResponse, CheckInServerRequest, CheckInServerResponse,
    CheckOutServerRequest, CheckOutServerResponse, CountServersForOwnerRequest,
    CountServersForOwnerResponse, CreateAddressRequest, CreateAddressResponse,
    DeleteServerRequest, DeleteServerResponse, EnsureRegistrationRequest, FindServerRequest,
    FindServerResponse, GetServerQuantitiesRequest, GetServerQuantitiesResponse,
    GetSettingRequest, GetSettingResponse, GuestServerCommand, GuestServerCommandError,
    GuestServerQuery, GuestServerQueryError, GuestServerRepository,
    GuestServerSettingRepository, ListServersForOwnerRequest, ListServersForOwnerResponse,
    ListServersForPartyRequest, ListServersForPartyResponse, OrgaTeamGateway,
    RegisterServerRequest, RegisterServerResponse, TicketGateway, UpdateAddressRequest,
    UpdateAddressResponse, UpdateServerRequest, UpdateServerResponse, UpdateSettingRequest,
    UpdateSettingResponse,
};

/// Guest server service implementing the command driving port.
///
/// Admission facts are read before the registration is written, so two
/// concurrent registrations by the same owner can both pass the quantity
/// check and overshoot the cap by one. This check-then-act window is a
/// known limitation; closing it needs a serializing constraint in the
/// persistence infrastructure, not in this layer.
#[derive(Clone)]
pub struct GuestServerCommandService<R, S, T, O> {
    server_repo: Arc<R>,
    setting_repo: Arc<S>,
    ticket_gateway: Arc<T>,
    orga_team_gateway: Arc<O>,
    clock: Arc<dyn Clock>,
}

impl<R, S, T, O> GuestServerCommandService<R, S, T, O> {
    /// Create a new command service from its driven ports and a clock.
    pub fn new(
        server_repo: Arc<R>,
        setting_repo: Arc<S>,
        ticket_gateway: Arc<T>,
        orga_team_gateway: Arc<O>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            server_repo,
            setting_repo,
            ticket_gateway,
            orga_team_gateway,
            clock,
        }
    }
}

#[async_trait]
impl<R, S, T, O> GuestServerCommand for GuestServerCommandService<R, S, T, O>
where
    R: GuestServerRepository,
    S: GuestServerSettingRepository,
    T: TicketGateway,
    O: OrgaTeamGateway,
{
    async fn ensure_user_may_register_server(
        &self,
        request: EnsureRegistrationRequest,
    ) -> Result<(), GuestServerCommandError> {
        let party_id = request.party.id();
        let user_id = request.user.id();

        let uses_ticket = self
            .ticket_gateway
            .uses_any_ticket_for_party(user_id, party_id)
            .await?;
        let is_orga = self
            .orga_team_gateway
            .is_orga_for_party(user_id, party_id)
            .await?;
        let quantity = self
            .server_repo
            .count_servers_for_owner_and_party(user_id, party_id)
            .await?;

        guest_server_lifecycle::ensure_user_may_register_server(
            &request.party,
            uses_ticket,
            is_orga,
            quantity,
        )?;

        Ok(())
    }

    async fn register_server(
        &self,
        request: RegisterServerRequest,
    ) -> Result<RegisterServerResponse, GuestServerCommandError> {
        let (server, event) = guest_server_lifecycle::register_server(
            guest_server_lifecycle::ServerRegistration {
                party: request.party,
                creator: request.creator,
                owner: request.owner,
                description: request.description,
                address_datas: request.address_datas,
                notes_owner: request.notes_owner,
                notes_admin: request.notes_admin,
            },
            self.clock.utc(),
        );

        self.server_repo.insert_server(&server).await?;

        Ok(RegisterServerResponse { server, event })
    }

    async fn approve_server(
        &self,
        request: ApproveServerRequest,
    ) -> Result<ApproveServerResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server(request.server_id)
            .await?
            .ok_or(GuestServerCommandError::ServerNotFound(request.server_id))?;

        let (approved, event) =
            guest_server_lifecycle::approve_server(&server, &request.initiator, self.clock.utc())?;

        if !self.server_repo.update_server(&approved).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(ApproveServerResponse {
            server: approved,
            event,
        })
    }

    async fn check_in_server(
        &self,
        request: CheckInServerRequest,
    ) -> Result<CheckInServerResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server(request.server_id)
            .await?
            .ok_or(GuestServerCommandError::ServerNotFound(request.server_id))?;

        let (checked_in, event) =
            guest_server_lifecycle::check_in_server(&server, &request.initiator, self.clock.utc())?;

        if !self.server_repo.update_server(&checked_in).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(CheckInServerResponse {
            server: checked_in,
            event,
        })
    }

    async fn check_out_server(
        &self,
        request: CheckOutServerRequest,
    ) -> Result<CheckOutServerResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server(request.server_id)
            .await?
            .ok_or(GuestServerCommandError::ServerNotFound(request.server_id))?;

        let (checked_out, event) = guest_server_lifecycle::check_out_server(
            &server,
            &request.initiator,
            self.clock.utc(),
        )?;

        if !self.server_repo.update_server(&checked_out).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(CheckOutServerResponse {
            server: checked_out,
            event,
        })
    }

    async fn update_server(
        &self,
        request: UpdateServerRequest,
    ) -> Result<UpdateServerResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server(request.server_id)
            .await?
            .ok_or(GuestServerCommandError::ServerNotFound(request.server_id))?;

        let mut updated = server;
        updated.description = request.description;
        updated.notes_admin = request.notes_admin;

        if !self.server_repo.update_server(&updated).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(UpdateServerResponse { server: updated })
    }

    async fn create_address(
        &self,
        request: CreateAddressRequest,
    ) -> Result<CreateAddressResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server(request.server_id)
            .await?
            .ok_or(GuestServerCommandError::ServerNotFound(request.server_id))?;

        let (updated, address) = guest_server_lifecycle::append_address(
            &server,
            request.address_data,
            self.clock.utc(),
        );

        if !self.server_repo.update_server(&updated).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(CreateAddressResponse {
            server: updated,
            address,
        })
    }

    async fn update_address(
        &self,
        request: UpdateAddressRequest,
    ) -> Result<UpdateAddressResponse, GuestServerCommandError> {
        let server = self
            .server_repo
            .find_server_for_address(request.address_id)
            .await?
            .ok_or(GuestServerCommandError::AddressNotFound(request.address_id))?;

        let (updated, address) = guest_server_lifecycle::replace_address(
            &server,
            request.address_id,
            request.address_data,
        )
        .ok_or(GuestServerCommandError::AddressNotFound(request.address_id))?;

        if !self.server_repo.update_server(&updated).await? {
            return Err(GuestServerCommandError::ServerNotFound(updated.id()));
        }

        Ok(UpdateAddressResponse {
            server: updated,
            address,
        })
    }

    async fn update_setting(
        &self,
        request: UpdateSettingRequest,
    ) -> Result<UpdateSettingResponse, GuestServerCommandError> {
        let setting = GuestServerSetting {
            party_id: request.party_id,
            netmask: request.netmask,
            gateway: request.gateway,
            dns_server1: request.dns_server1,
            dns_server2: request.dns_server2,
            domain: request.domain,
        };

        self.setting_repo.upsert(&setting).await?;

        Ok(UpdateSettingResponse { setting })
    }

    async fn delete_server(
        &self,
        request: DeleteServerRequest,
    ) -> Result<DeleteServerResponse, GuestServerCommandError> {
        if !self.server_repo.delete_server(request.server_id).await? {
            return Err(GuestServerCommandError::ServerNotFound(request.server_id));
        }

        Ok(DeleteServerResponse {
            server_id: request.server_id,
        })
    }
}

/// Guest server service implementing the query driving port.
#[derive(Clone)]
pub struct GuestServerQueryService<R, S> {
    server_repo: Arc<R>,
    setting_repo: Arc<S>,
}

impl<R, S> GuestServerQueryService<R, S> {
    /// Create a new query service from its repositories.
    pub fn new(server_repo: Arc<R>, setting_repo: Arc<S>) -> Self {
        Self {
            server_repo,
            setting_repo,
        }
    }
}

#[async_trait]
impl<R, S> GuestServerQuery for GuestServerQueryService<R, S>
where
    R: GuestServerRepository,
    S: GuestServerSettingRepository,
{
    async fn find_server(
        &self,
        request: FindServerRequest,
    ) -> Result<FindServerResponse, GuestServerQueryError> {
        let server = self.server_repo.find_server(request.server_id).await?;
        Ok(FindServerResponse { server })
    }

    async fn get_all_servers_for_party(
        &self,
        request: ListServersForPartyRequest,
    ) -> Result<ListServersForPartyResponse, GuestServerQueryError> {
        let servers = self
            .server_repo
            .list_servers_for_party(&request.party_id)
            .await?;
        Ok(ListServersForPartyResponse { servers })
    }

    async fn get_servers_for_owner_and_party(
        &self,
        request: ListServersForOwnerRequest,
    ) -> Result<ListServersForOwnerResponse, GuestServerQueryError> {
        let servers = self
            .server_repo
            .list_servers_for_owner_and_party(request.owner_id, &request.party_id)
            .await?;
        Ok(ListServersForOwnerResponse { servers })
    }

    async fn count_servers_for_owner_and_party(
        &self,
        request: CountServersForOwnerRequest,
    ) -> Result<CountServersForOwnerResponse, GuestServerQueryError> {
        let quantity = self
            .server_repo
            .count_servers_for_owner_and_party(request.owner_id, &request.party_id)
            .await?;
        Ok(CountServersForOwnerResponse { quantity })
    }

    async fn get_setting_for_party(
        &self,
        request: GetSettingRequest,
    ) -> Result<GetSettingResponse, GuestServerQueryError> {
        let setting = self
            .setting_repo
            .find_for_party(&request.party_id)
            .await?
            .unwrap_or_else(|| GuestServerSetting::empty(request.party_id));

        Ok(GetSettingResponse { setting })
    }

    async fn get_server_quantities_by_status(
        &self,
        request: GetServerQuantitiesRequest,
    ) -> Result<GetServerQuantitiesResponse, GuestServerQueryError> {
        let servers = self
            .server_repo
            .list_servers_for_party(&request.party_id)
            .await?;
        let quantities = guest_server_lifecycle::get_server_quantities_by_status(&servers);

        Ok(GetServerQuantitiesResponse { quantities })
    }
}

#[cfg(test)]
#[path = "guest_server_service_tests.rs"]
mod tests;
