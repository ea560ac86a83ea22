//! Guest server domain: entities, pure lifecycle logic, and services.
//!
//! Purpose: Model guest servers brought to a party and the rules governing
//! their registration and lifecycle. Entities are immutable snapshots with
//! documented invariants; the lifecycle functions are pure and return
//! tagged error values for every expected business outcome; the services
//! orchestrate them behind the driving ports in [`ports`].
//!
//! Public surface:
//! - [`Server`], [`Address`], [`GuestServerSetting`] — the data model.
//! - [`guest_server_lifecycle`] — admission control and state transitions.
//! - [`GuestServerEvent`] and the per-transition event records.
//! - [`GuestServerCommandService`] / [`GuestServerQueryService`] — the
//!   driving port implementations.

pub mod guest_server;
pub mod guest_server_events;
pub mod guest_server_lifecycle;
pub mod guest_server_service;
pub mod party;
pub mod ports;
pub mod user;

pub use self::guest_server::{
    Address, AddressData, AddressId, GuestServerSetting, ParseServerStatusError, Server,
    ServerId, ServerQuantitiesByStatus, ServerStatus,
};
pub use self::guest_server_events::{
    EventParty, EventUser, GuestServerApprovedEvent, GuestServerCheckedInEvent,
    GuestServerCheckedOutEvent, GuestServerEvent, GuestServerRegisteredEvent,
};
pub use self::guest_server_lifecycle::{
    ApproveServerError, CheckInServerError, CheckOutServerError, RegistrationDeniedError,
    SERVER_LIMIT_PER_USER, ServerRegistration, append_address, approve_server, build_address,
    check_in_server, check_out_server, ensure_user_may_register_server,
    get_server_quantities_by_status, register_server, replace_address, sort_addresses,
};
pub use self::guest_server_service::{GuestServerCommandService, GuestServerQueryService};
pub use self::party::{PARTY_ID_MAX, Party, PartyId, PartyValidationError};
pub use self::user::{SCREEN_NAME_MAX, ScreenName, User, UserId, UserValidationError};
