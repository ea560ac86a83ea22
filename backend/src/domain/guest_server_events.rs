//! Domain events emitted by guest server lifecycle transitions.
//!
//! Events are immutable records produced by the pure lifecycle functions
//! and handed to the caller, which forwards them to an announcement
//! dispatcher. They stay transport agnostic; the serde derives define the
//! payload announcers see.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::guest_server::ServerId;
use super::party::{Party, PartyId};
use super::user::{ScreenName, User, UserId};

/// User reference embedded in events.
///
/// Mirrors the identifier and screen name so announcers can render a
/// message without another lookup. Part of the public event contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUser {
    pub id: UserId,
    pub screen_name: Option<ScreenName>,
}

impl From<&User> for EventUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            screen_name: user.screen_name().cloned(),
        }
    }
}

/// Party reference embedded in events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParty {
    pub id: PartyId,
    pub title: String,
}

impl From<&Party> for EventParty {
    fn from(party: &Party) -> Self {
        Self {
            id: party.id().clone(),
            title: party.title().to_owned(),
        }
    }
}

/// A guest server has been registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestServerRegisteredEvent {
    pub occurred_at: DateTime<Utc>,
    pub initiator: EventUser,
    pub party: EventParty,
    pub owner: EventUser,
    pub server_id: ServerId,
}

/// A guest server has been approved by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestServerApprovedEvent {
    pub occurred_at: DateTime<Utc>,
    pub initiator: EventUser,
    pub owner: EventUser,
    pub server_id: ServerId,
}

/// A guest server has been checked in at the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestServerCheckedInEvent {
    pub occurred_at: DateTime<Utc>,
    pub initiator: EventUser,
    pub owner: EventUser,
    pub server_id: ServerId,
}

/// A guest server has been checked out again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestServerCheckedOutEvent {
    pub occurred_at: DateTime<Utc>,
    pub initiator: EventUser,
    pub owner: EventUser,
    pub server_id: ServerId,
}

/// Guest server lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum GuestServerEvent {
    /// A server has been registered.
    Registered(GuestServerRegisteredEvent),
    /// A server has been approved.
    Approved(GuestServerApprovedEvent),
    /// A server has been checked in.
    CheckedIn(GuestServerCheckedInEvent),
    /// A server has been checked out.
    CheckedOut(GuestServerCheckedOutEvent),
}

impl GuestServerEvent {
    /// When the transition happened.
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Registered(event) => event.occurred_at,
            Self::Approved(event) => event.occurred_at,
            Self::CheckedIn(event) => event.occurred_at,
            Self::CheckedOut(event) => event.occurred_at,
        }
    }

    /// Which server the event concerns.
    pub const fn server_id(&self) -> ServerId {
        match self {
            Self::Registered(event) => event.server_id,
            Self::Approved(event) => event.server_id,
            Self::CheckedIn(event) => event.server_id,
            Self::CheckedOut(event) => event.server_id,
        }
    }
}
