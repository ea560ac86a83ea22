//! Pure guest server lifecycle logic.
//!
//! Everything in this module is a pure function over immutable snapshots:
//! admission control, registration, the approve/check-in/check-out state
//! machine, and the derived aggregations. Timestamps are passed in by the
//! caller, so no function here touches a clock or any other effect.
//!
//! Business-rule violations are ordinary values. Each enum variant below is
//! a zero-payload marker; the calling context decides how to present it.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::guest_server::{
    Address, AddressData, AddressId, Server, ServerId, ServerQuantitiesByStatus, ServerStatus,
};
use super::guest_server_events::{
    EventParty, EventUser, GuestServerApprovedEvent, GuestServerCheckedInEvent,
    GuestServerCheckedOutEvent, GuestServerRegisteredEvent,
};
use super::party::Party;
use super::user::User;

/// Maximum number of guest servers a user may register per party.
pub const SERVER_LIMIT_PER_USER: usize = 5;

/// Reasons a registration attempt is not admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationDeniedError {
    /// The party is over; nothing may be registered any more.
    #[error("the party is over")]
    PartyIsOver,
    /// The user does not use a ticket for the party.
    #[error("the user does not use a ticket for the party")]
    UserUsesNoTicket,
    /// The user has reached the per-party registration limit.
    #[error("the user has reached the guest server limit")]
    QuantityLimitReached,
}

/// Reasons an approval cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApproveServerError {
    /// The server is already approved.
    #[error("the server is already approved")]
    AlreadyApproved,
}

/// Reasons a check-in cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckInServerError {
    /// The server has not been approved.
    #[error("the server has not been approved")]
    NotApproved,
    /// The server is already checked in.
    #[error("the server is already checked in")]
    AlreadyCheckedIn,
    /// The server has already been checked out.
    #[error("the server has already been checked out")]
    AlreadyCheckedOut,
}

/// Reasons a check-out cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckOutServerError {
    /// The server has not been checked in.
    #[error("the server has not been checked in")]
    NotCheckedIn,
    /// The server has already been checked out.
    #[error("the server has already been checked out")]
    AlreadyCheckedOut,
}

/// Decide whether a user may register another guest server for a party.
///
/// The first matching rule wins, in this exact order: a party that is over
/// admits nobody, organizers bypass the remaining rules, non-ticket-holders
/// are rejected, and ticket holders are capped at
/// [`SERVER_LIMIT_PER_USER`] registrations.
///
/// # Examples
/// ```
/// use lanfest_backend::domain::{Party, PartyId, RegistrationDeniedError};
/// use lanfest_backend::domain::ensure_user_may_register_server;
///
/// let id = PartyId::new("lanfest-2026").expect("valid id");
/// let party = Party::new(id, "Lanfest 2026", false);
///
/// assert!(ensure_user_may_register_server(&party, true, false, 0).is_ok());
/// assert_eq!(
///     ensure_user_may_register_server(&party, true, false, 5),
///     Err(RegistrationDeniedError::QuantityLimitReached),
/// );
/// ```
pub fn ensure_user_may_register_server(
    party: &Party,
    user_uses_ticket_for_party: bool,
    user_is_orga_for_party: bool,
    already_registered_server_quantity: usize,
) -> Result<(), RegistrationDeniedError> {
    if party.is_over() {
        return Err(RegistrationDeniedError::PartyIsOver);
    }

    if user_is_orga_for_party {
        // Organizers are exempt from the ticket and quantity rules.
        return Ok(());
    }

    if !user_uses_ticket_for_party {
        return Err(RegistrationDeniedError::UserUsesNoTicket);
    }

    if already_registered_server_quantity >= SERVER_LIMIT_PER_USER {
        return Err(RegistrationDeniedError::QuantityLimitReached);
    }

    Ok(())
}

/// Input for [`register_server`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRegistration {
    pub party: Party,
    pub creator: User,
    pub owner: User,
    pub description: String,
    pub address_datas: Vec<AddressData>,
    pub notes_owner: Option<String>,
    pub notes_admin: Option<String>,
}

/// Register a guest server.
///
/// The server and every address supplied with it share one `created_at`
/// timestamp; addresses registered together with the machine are not
/// independently timestamped. The initial state is pending.
///
/// Registration never fails: admission control is the caller's
/// responsibility, keeping policy separate from mechanism.
pub fn register_server(
    registration: ServerRegistration,
    now: DateTime<Utc>,
) -> (Server, GuestServerRegisteredEvent) {
    let server_id = ServerId::generate();

    let addresses = registration
        .address_datas
        .into_iter()
        .map(|data| build_address(server_id, now, data))
        .collect();

    let server = Server {
        id: server_id,
        party_id: registration.party.id().clone(),
        created_at: now,
        creator_id: registration.creator.id(),
        owner: registration.owner.clone(),
        description: registration.description,
        notes_owner: registration.notes_owner,
        notes_admin: registration.notes_admin,
        approved: false,
        checked_in: false,
        checked_in_at: None,
        checked_out: false,
        checked_out_at: None,
        addresses,
    };

    let event = GuestServerRegisteredEvent {
        occurred_at: now,
        initiator: EventUser::from(&registration.creator),
        party: EventParty::from(&registration.party),
        owner: EventUser::from(&registration.owner),
        server_id,
    };

    (server, event)
}

/// Build a single address for a server.
pub fn build_address(server_id: ServerId, created_at: DateTime<Utc>, data: AddressData) -> Address {
    Address::new(AddressId::generate(), server_id, created_at, data)
}

/// Approve a guest server.
pub fn approve_server(
    server: &Server,
    initiator: &User,
    now: DateTime<Utc>,
) -> Result<(Server, GuestServerApprovedEvent), ApproveServerError> {
    if server.approved() {
        return Err(ApproveServerError::AlreadyApproved);
    }

    let mut approved = server.clone();
    approved.approved = true;

    let event = GuestServerApprovedEvent {
        occurred_at: now,
        initiator: EventUser::from(initiator),
        owner: EventUser::from(server.owner()),
        server_id: server.id(),
    };

    Ok((approved, event))
}

/// Check a guest server in at the venue.
///
/// The approval precondition is checked before the two check flags, so an
/// unapproved snapshot reports `NotApproved` whatever else is set.
pub fn check_in_server(
    server: &Server,
    initiator: &User,
    now: DateTime<Utc>,
) -> Result<(Server, GuestServerCheckedInEvent), CheckInServerError> {
    if !server.approved() {
        return Err(CheckInServerError::NotApproved);
    }
    if server.checked_in() {
        return Err(CheckInServerError::AlreadyCheckedIn);
    }
    if server.checked_out() {
        return Err(CheckInServerError::AlreadyCheckedOut);
    }

    let mut checked_in = server.clone();
    checked_in.checked_in = true;
    checked_in.checked_in_at = Some(now);

    let event = GuestServerCheckedInEvent {
        occurred_at: now,
        initiator: EventUser::from(initiator),
        owner: EventUser::from(server.owner()),
        server_id: server.id(),
    };

    Ok((checked_in, event))
}

/// Check a guest server out again.
pub fn check_out_server(
    server: &Server,
    initiator: &User,
    now: DateTime<Utc>,
) -> Result<(Server, GuestServerCheckedOutEvent), CheckOutServerError> {
    if !server.checked_in() {
        return Err(CheckOutServerError::NotCheckedIn);
    }
    if server.checked_out() {
        return Err(CheckOutServerError::AlreadyCheckedOut);
    }

    let mut checked_out = server.clone();
    checked_out.checked_out = true;
    checked_out.checked_out_at = Some(now);

    let event = GuestServerCheckedOutEvent {
        occurred_at: now,
        initiator: EventUser::from(initiator),
        owner: EventUser::from(server.owner()),
        server_id: server.id(),
    };

    Ok((checked_out, event))
}

/// Append an address to an existing server snapshot.
///
/// Unlike addresses supplied at registration time, an appended address
/// carries its own timestamp.
pub fn append_address(
    server: &Server,
    data: AddressData,
    now: DateTime<Utc>,
) -> (Server, Address) {
    let address = build_address(server.id(), now, data);

    let mut updated = server.clone();
    updated.addresses.push(address.clone());

    (updated, address)
}

/// Replace the data of an existing address, keeping its identity and
/// timestamp.
///
/// Returns `None` when the snapshot holds no address with the given id.
pub fn replace_address(
    server: &Server,
    address_id: AddressId,
    data: AddressData,
) -> Option<(Server, Address)> {
    let mut updated = server.clone();

    let address = updated
        .addresses
        .iter_mut()
        .find(|address| address.id() == address_id)?;

    *address = Address::new(address_id, address.server_id(), address.created_at(), data);
    let replaced = address.clone();

    Some((updated, replaced))
}

/// Count servers per derived status.
///
/// The four buckets partition the input, so their sum always equals its
/// length.
pub fn get_server_quantities_by_status(servers: &[Server]) -> ServerQuantitiesByStatus {
    let mut quantities = ServerQuantitiesByStatus::default();

    for server in servers {
        match server.status() {
            ServerStatus::Pending => quantities.pending += 1,
            ServerStatus::Approved => quantities.approved += 1,
            ServerStatus::CheckedIn => quantities.checked_in += 1,
            ServerStatus::CheckedOut => quantities.checked_out += 1,
        }
    }

    quantities
}

/// Sort addresses by IP address first and hostname second, with absent
/// values last in each key.
pub fn sort_addresses(addresses: &[Address]) -> Vec<Address> {
    let mut sorted = addresses.to_vec();
    sorted.sort_by(|a, b| {
        (
            a.ip_address().is_none(),
            a.ip_address(),
            a.hostname().is_none(),
            a.hostname(),
        )
            .cmp(&(
                b.ip_address().is_none(),
                b.ip_address(),
                b.hostname().is_none(),
                b.hostname(),
            ))
    });
    sorted
}

#[cfg(test)]
#[path = "guest_server_lifecycle_tests.rs"]
mod tests;
