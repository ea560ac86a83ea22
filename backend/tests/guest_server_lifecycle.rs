//! End-to-end guest server lifecycle scenarios.
//!
//! Drives the command and query services through the driving ports with
//! the in-memory adapters behind them, the way the web layer would.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};

use lanfest_backend::domain::ports::{
    ApproveServerRequest, CheckInServerRequest, CheckOutServerRequest,
    EnsureRegistrationRequest, GetServerQuantitiesRequest, GetSettingRequest, GuestServerCommand,
    GuestServerCommandError, GuestServerQuery, ListServersForOwnerRequest, RegisterServerRequest,
    UpdateSettingRequest,
};
use lanfest_backend::domain::{
    AddressData, CheckOutServerError, GuestServerCommandService, GuestServerQueryService,
    GuestServerSetting, Party, PartyId, RegistrationDeniedError, SERVER_LIMIT_PER_USER,
    ScreenName, Server, ServerStatus, User, UserId,
};
use lanfest_backend::outbound::orga_teams::InMemoryOrgaTeamGateway;
use lanfest_backend::outbound::persistence::{
    MemoryGuestServerRepository, MemoryGuestServerSettingRepository,
};
use lanfest_backend::outbound::ticketing::InMemoryTicketGateway;

type CommandService = GuestServerCommandService<
    MemoryGuestServerRepository,
    MemoryGuestServerSettingRepository,
    InMemoryTicketGateway,
    InMemoryOrgaTeamGateway,
>;
type QueryService =
    GuestServerQueryService<MemoryGuestServerRepository, MemoryGuestServerSettingRepository>;

struct TestApp {
    command: CommandService,
    query: QueryService,
    tickets: Arc<InMemoryTicketGateway>,
    orga_teams: Arc<InMemoryOrgaTeamGateway>,
}

impl TestApp {
    fn new() -> Self {
        let server_repo = Arc::new(MemoryGuestServerRepository::new());
        let setting_repo = Arc::new(MemoryGuestServerSettingRepository::new());
        let tickets = Arc::new(InMemoryTicketGateway::new());
        let orga_teams = Arc::new(InMemoryOrgaTeamGateway::new());

        let command = GuestServerCommandService::new(
            Arc::clone(&server_repo),
            Arc::clone(&setting_repo),
            Arc::clone(&tickets),
            Arc::clone(&orga_teams),
            Arc::new(DefaultClock),
        );
        let query = GuestServerQueryService::new(server_repo, setting_repo);

        Self {
            command,
            query,
            tickets,
            orga_teams,
        }
    }
}

fn named_user(name: &str) -> User {
    User::new(
        UserId::random(),
        Some(ScreenName::new(name).expect("valid name")),
    )
}

#[fixture]
fn party() -> Party {
    Party::new(
        PartyId::new("lanfest-2026").expect("valid id"),
        "Lanfest 2026",
        false,
    )
}

fn bluebox_registration(party: &Party, creator: &User, owner: &User) -> RegisterServerRequest {
    RegisterServerRequest {
        party: party.clone(),
        creator: creator.clone(),
        owner: owner.clone(),
        description: "tower under the desk".to_owned(),
        address_datas: vec![AddressData {
            ip_address: Some("10.0.100.104".parse().expect("valid ip")),
            hostname: Some("bluebox".to_owned()),
            netmask: Some("255.255.255.0".parse().expect("valid netmask")),
            gateway: Some("10.0.100.1".parse().expect("valid gateway")),
        }],
        notes_owner: None,
        notes_admin: None,
    }
}

async fn register_admitted_server(app: &TestApp, party: &Party, owner: &User) -> Server {
    app.tickets
        .issue_ticket(owner.id(), party.id().clone())
        .expect("issuing succeeds");

    app.command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party: party.clone(),
            user: owner.clone(),
        })
        .await
        .expect("admission succeeds");

    app.command
        .register_server(bluebox_registration(party, owner, owner))
        .await
        .expect("registration succeeds")
        .server
}

#[rstest]
#[tokio::test]
async fn ticket_holder_registers_a_pending_server(party: Party) {
    let app = TestApp::new();
    let owner = named_user("Owner");

    app.tickets
        .issue_ticket(owner.id(), party.id().clone())
        .expect("issuing succeeds");

    app.command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party: party.clone(),
            user: owner.clone(),
        })
        .await
        .expect("admission succeeds");

    let response = app
        .command
        .register_server(bluebox_registration(&party, &owner, &owner))
        .await
        .expect("registration succeeds");

    let server = &response.server;
    assert_eq!(server.status(), ServerStatus::Pending);
    assert!(!server.approved());

    let address = server.addresses().first().expect("one address");
    assert_eq!(
        address.ip_address(),
        Some("10.0.100.104".parse().expect("valid ip"))
    );
    assert_eq!(address.hostname(), Some("bluebox"));
    assert_eq!(address.created_at(), server.created_at());

    assert_eq!(response.event.owner.id, owner.id());
    assert_eq!(&response.event.party.id, party.id());

    let listed = app
        .query
        .get_servers_for_owner_and_party(ListServersForOwnerRequest {
            owner_id: owner.id(),
            party_id: party.id().clone(),
        })
        .await
        .expect("listing succeeds");
    assert_eq!(listed.servers.len(), 1);
}

#[rstest]
#[tokio::test]
async fn user_without_ticket_is_rejected(party: Party) {
    let app = TestApp::new();
    let visitor = named_user("Visitor");

    let result = app
        .command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party,
            user: visitor,
        })
        .await;

    assert_eq!(
        result,
        Err(GuestServerCommandError::RegistrationDenied(
            RegistrationDeniedError::UserUsesNoTicket
        ))
    );
}

#[rstest]
#[tokio::test]
async fn nothing_is_admitted_once_the_party_is_over() {
    let app = TestApp::new();
    let over = Party::new(
        PartyId::new("lanfest-2025").expect("valid id"),
        "Lanfest 2025",
        true,
    );
    let orga = named_user("Orga");
    app.orga_teams
        .appoint_orga(orga.id(), over.id().clone())
        .expect("appointment succeeds");

    let result = app
        .command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party: over,
            user: orga,
        })
        .await;

    assert_eq!(
        result,
        Err(GuestServerCommandError::RegistrationDenied(
            RegistrationDeniedError::PartyIsOver
        ))
    );
}

#[rstest]
#[tokio::test]
async fn the_sixth_registration_hits_the_quantity_cap(party: Party) {
    let app = TestApp::new();
    let owner = named_user("Owner");
    app.tickets
        .issue_ticket(owner.id(), party.id().clone())
        .expect("issuing succeeds");

    for _ in 0..SERVER_LIMIT_PER_USER {
        app.command
            .ensure_user_may_register_server(EnsureRegistrationRequest {
                party: party.clone(),
                user: owner.clone(),
            })
            .await
            .expect("admission succeeds");
        app.command
            .register_server(bluebox_registration(&party, &owner, &owner))
            .await
            .expect("registration succeeds");
    }

    let result = app
        .command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party: party.clone(),
            user: owner.clone(),
        })
        .await;
    assert_eq!(
        result,
        Err(GuestServerCommandError::RegistrationDenied(
            RegistrationDeniedError::QuantityLimitReached
        ))
    );

    // Organizers are exempt from the cap.
    app.orga_teams
        .appoint_orga(owner.id(), party.id().clone())
        .expect("appointment succeeds");
    app.command
        .ensure_user_may_register_server(EnsureRegistrationRequest {
            party,
            user: owner,
        })
        .await
        .expect("orga admission succeeds");
}

#[rstest]
#[tokio::test]
async fn a_server_walks_through_its_whole_lifecycle(party: Party) {
    let app = TestApp::new();
    let owner = named_user("Owner");
    let admin = named_user("Admin");

    let server = register_admitted_server(&app, &party, &owner).await;

    // Skipping check-in is not possible.
    let premature = app
        .command
        .check_out_server(CheckOutServerRequest {
            server_id: server.id(),
            initiator: admin.clone(),
        })
        .await;
    assert_eq!(
        premature,
        Err(GuestServerCommandError::CheckOut(
            CheckOutServerError::NotCheckedIn
        ))
    );

    let approved = app
        .command
        .approve_server(ApproveServerRequest {
            server_id: server.id(),
            initiator: admin.clone(),
        })
        .await
        .expect("approval succeeds");
    assert_eq!(approved.server.status(), ServerStatus::Approved);
    assert_eq!(approved.event.owner.id, owner.id());

    let checked_in = app
        .command
        .check_in_server(CheckInServerRequest {
            server_id: server.id(),
            initiator: admin.clone(),
        })
        .await
        .expect("check-in succeeds");
    assert_eq!(checked_in.server.status(), ServerStatus::CheckedIn);
    assert!(checked_in.server.checked_in_at().is_some());

    let checked_out = app
        .command
        .check_out_server(CheckOutServerRequest {
            server_id: server.id(),
            initiator: admin,
        })
        .await
        .expect("check-out succeeds");
    assert_eq!(checked_out.server.status(), ServerStatus::CheckedOut);
    assert!(checked_out.server.checked_out_at().is_some());

    let quantities = app
        .query
        .get_server_quantities_by_status(GetServerQuantitiesRequest {
            party_id: party.id().clone(),
        })
        .await
        .expect("quantities query succeeds");
    assert_eq!(quantities.quantities.checked_out, 1);
    assert_eq!(quantities.quantities.total(), 1);
}

#[rstest]
#[tokio::test]
async fn party_setting_defaults_until_replaced(party: Party) {
    let app = TestApp::new();

    let initial = app
        .query
        .get_setting_for_party(GetSettingRequest {
            party_id: party.id().clone(),
        })
        .await
        .expect("setting query succeeds");
    assert_eq!(
        initial.setting,
        GuestServerSetting::empty(party.id().clone())
    );

    app.command
        .update_setting(UpdateSettingRequest {
            party_id: party.id().clone(),
            netmask: Some("255.255.255.0".parse().expect("valid netmask")),
            gateway: Some("10.0.100.1".parse().expect("valid gateway")),
            dns_server1: Some("10.0.0.53".parse().expect("valid dns")),
            dns_server2: None,
            domain: Some("lan.example".to_owned()),
        })
        .await
        .expect("setting update succeeds");

    let stored = app
        .query
        .get_setting_for_party(GetSettingRequest {
            party_id: party.id().clone(),
        })
        .await
        .expect("setting query succeeds");
    assert_eq!(stored.setting.domain.as_deref(), Some("lan.example"));
    assert_eq!(
        stored.setting.gateway,
        Some("10.0.100.1".parse().expect("valid gateway"))
    );
    assert_eq!(stored.setting.dns_server2, None);
}

#[rstest]
#[tokio::test]
async fn mixed_fleet_counts_partition_by_status(party: Party) {
    let app = TestApp::new();
    let admin = named_user("Admin");

    let first_owner = named_user("First");
    let second_owner = named_user("Second");

    let first = register_admitted_server(&app, &party, &first_owner).await;
    let _second = register_admitted_server(&app, &party, &second_owner).await;

    app.command
        .approve_server(ApproveServerRequest {
            server_id: first.id(),
            initiator: admin,
        })
        .await
        .expect("approval succeeds");

    let response = app
        .query
        .get_server_quantities_by_status(GetServerQuantitiesRequest {
            party_id: party.id().clone(),
        })
        .await
        .expect("quantities query succeeds");

    assert_eq!(response.quantities.pending, 1);
    assert_eq!(response.quantities.approved, 1);
    assert_eq!(response.quantities.checked_in, 0);
    assert_eq!(response.quantities.checked_out, 0);
    assert_eq!(response.quantities.total(), 2);
}
