//! Guest server data model.
//!
//! A guest server is a computer an attendee brings to a party and registers
//! for network access. The entity is modelled as an immutable snapshot: the
//! lifecycle functions in [`super::guest_server_lifecycle`] produce a new
//! snapshot for every transition instead of mutating in place.
//!
//! The lifecycle state (`status`) is derived from the persisted flags and is
//! never stored on its own.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::party::PartyId;
use super::user::{User, UserId};

/// Stable guest server identifier.
///
/// Identifiers are time-ordered (UUIDv7), so sorting by id equals sorting
/// by registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServerId(Uuid);

impl ServerId {
    /// Wrap an existing UUID.
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh time-ordered [`ServerId`].
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ServerId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable guest server address identifier, time-ordered like [`ServerId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(Uuid);

impl AddressId {
    /// Wrap an existing UUID.
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh time-ordered [`AddressId`].
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for AddressId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network identity input for a guest server address.
///
/// Every field is optional; owners often know the hostname before the
/// network team assigns the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressData {
    pub ip_address: Option<IpAddr>,
    pub hostname: Option<String>,
    pub netmask: Option<IpAddr>,
    pub gateway: Option<IpAddr>,
}

/// One network identity attached to a guest server.
///
/// Addresses are owned exclusively by their server and are never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub(crate) id: AddressId,
    pub(crate) server_id: ServerId,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) ip_address: Option<IpAddr>,
    pub(crate) hostname: Option<String>,
    pub(crate) netmask: Option<IpAddr>,
    pub(crate) gateway: Option<IpAddr>,
}

impl Address {
    /// Build a new [`Address`] from its components.
    pub fn new(
        id: AddressId,
        server_id: ServerId,
        created_at: DateTime<Utc>,
        data: AddressData,
    ) -> Self {
        Self {
            id,
            server_id,
            created_at,
            ip_address: data.ip_address,
            hostname: data.hostname,
            netmask: data.netmask,
            gateway: data.gateway,
        }
    }

    /// Stable address identifier.
    pub const fn id(&self) -> AddressId {
        self.id
    }

    /// Identifier of the owning server.
    pub const fn server_id(&self) -> ServerId {
        self.server_id
    }

    /// Creation timestamp.
    ///
    /// Addresses supplied at registration time share the server's
    /// `created_at`; addresses appended later carry their own.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Assigned IP address, if any.
    pub const fn ip_address(&self) -> Option<IpAddr> {
        self.ip_address
    }

    /// Hostname, if any.
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    /// Netmask, if any.
    pub const fn netmask(&self) -> Option<IpAddr> {
        self.netmask
    }

    /// Gateway, if any.
    pub const fn gateway(&self) -> Option<IpAddr> {
        self.gateway
    }
}

/// Lifecycle state derived from a server's persisted flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Pending,
    Approved,
    CheckedIn,
    CheckedOut,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse error for [`ServerStatus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseServerStatusError {
    pub input: String,
}

impl fmt::Display for ParseServerStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid server status: {}", self.input)
    }
}

impl std::error::Error for ParseServerStatusError {}

impl FromStr for ServerStatus {
    type Err = ParseServerStatusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            _ => Err(ParseServerStatusError {
                input: value.to_owned(),
            }),
        }
    }
}

/// Immutable snapshot of a guest server.
///
/// ## Invariants
/// - `checked_out` implies `checked_in` for every snapshot produced by the
///   lifecycle functions.
/// - Check-in requires `approved` at transition time; the stored flags do
///   not encode that dependency on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub(crate) id: ServerId,
    pub(crate) party_id: PartyId,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) creator_id: UserId,
    pub(crate) owner: User,
    pub(crate) description: String,
    pub(crate) notes_owner: Option<String>,
    pub(crate) notes_admin: Option<String>,
    pub(crate) approved: bool,
    pub(crate) checked_in: bool,
    pub(crate) checked_in_at: Option<DateTime<Utc>>,
    pub(crate) checked_out: bool,
    pub(crate) checked_out_at: Option<DateTime<Utc>>,
    pub(crate) addresses: Vec<Address>,
}

impl Server {
    /// Stable server identifier.
    pub const fn id(&self) -> ServerId {
        self.id
    }

    /// Party the server is registered for.
    pub const fn party_id(&self) -> &PartyId {
        &self.party_id
    }

    /// Registration timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// User who performed the registration; may differ from the owner.
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    /// User the registration benefits.
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Identifier of the owning user.
    pub const fn owner_id(&self) -> UserId {
        self.owner.id()
    }

    /// Free-text description of the machine.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Notes visible to the owner.
    pub fn notes_owner(&self) -> Option<&str> {
        self.notes_owner.as_deref()
    }

    /// Notes visible to administrators only.
    pub fn notes_admin(&self) -> Option<&str> {
        self.notes_admin.as_deref()
    }

    /// Whether an administrator has approved the server.
    pub const fn approved(&self) -> bool {
        self.approved
    }

    /// Whether the server has been checked in at the venue.
    pub const fn checked_in(&self) -> bool {
        self.checked_in
    }

    /// Check-in timestamp, if checked in.
    pub const fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.checked_in_at
    }

    /// Whether the server has been checked out again.
    pub const fn checked_out(&self) -> bool {
        self.checked_out
    }

    /// Check-out timestamp, if checked out.
    pub const fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    /// Network addresses attached to the server.
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// Derive the lifecycle state from the persisted flags.
    ///
    /// Later lifecycle stages take priority: a snapshot that is both
    /// approved and checked out reports `checked_out`.
    pub const fn status(&self) -> ServerStatus {
        if self.checked_out {
            ServerStatus::CheckedOut
        } else if self.checked_in {
            ServerStatus::CheckedIn
        } else if self.approved {
            ServerStatus::Approved
        } else {
            ServerStatus::Pending
        }
    }
}

/// Guest server counts per derived status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerQuantitiesByStatus {
    pub pending: usize,
    pub approved: usize,
    pub checked_in: usize,
    pub checked_out: usize,
}

impl ServerQuantitiesByStatus {
    /// Sum of all four buckets.
    pub const fn total(&self) -> usize {
        self.pending + self.approved + self.checked_in + self.checked_out
    }
}

/// Per-party network defaults for guest servers.
///
/// One setting per party; absent rows read as all-`None` defaults and
/// updates replace the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestServerSetting {
    pub party_id: PartyId,
    pub netmask: Option<IpAddr>,
    pub gateway: Option<IpAddr>,
    pub dns_server1: Option<IpAddr>,
    pub dns_server2: Option<IpAddr>,
    pub domain: Option<String>,
}

impl GuestServerSetting {
    /// The all-`None` default for a party without a stored setting.
    pub const fn empty(party_id: PartyId) -> Self {
        Self {
            party_id,
            netmask: None,
            gateway: None,
            dns_server1: None,
            dns_server2: None,
            domain: None,
        }
    }
}
