//! Party data model.
//!
//! Parties are managed by another subsystem; the guest-server domain only
//! reads the fields its admission rules and events depend on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`PartyId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyValidationError {
    EmptyId,
    IdContainsWhitespace,
    IdTooLong { max: usize },
}

impl fmt::Display for PartyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "party id must not be empty"),
            Self::IdContainsWhitespace => {
                write!(f, "party id must not contain whitespace")
            }
            Self::IdTooLong { max } => {
                write!(f, "party id must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for PartyValidationError {}

/// Maximum allowed length for a party identifier.
pub const PARTY_ID_MAX: usize = 40;

/// Stable party identifier stored as a short slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyId(String);

impl PartyId {
    /// Validate and construct a [`PartyId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use lanfest_backend::domain::PartyId;
    ///
    /// let id = PartyId::new("lanfest-2026").expect("valid id");
    /// assert_eq!(id.as_str(), "lanfest-2026");
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, PartyValidationError> {
        Self::from_owned(id.into())
    }

    fn from_owned(id: String) -> Result<Self, PartyValidationError> {
        if id.is_empty() {
            return Err(PartyValidationError::EmptyId);
        }
        if id.contains(char::is_whitespace) {
            return Err(PartyValidationError::IdContainsWhitespace);
        }
        if id.chars().count() > PARTY_ID_MAX {
            return Err(PartyValidationError::IdTooLong { max: PARTY_ID_MAX });
        }

        Ok(Self(id))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PartyId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<PartyId> for String {
    fn from(value: PartyId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PartyId {
    type Error = PartyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Party reference as seen by the guest-server domain.
///
/// ## Invariants
/// - `id` satisfies the [`PartyId`] validation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    id: PartyId,
    title: String,
    is_over: bool,
}

impl Party {
    /// Build a new [`Party`] from validated components.
    pub fn new(id: PartyId, title: impl Into<String>, is_over: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_over,
        }
    }

    /// Stable party identifier.
    pub fn id(&self) -> &PartyId {
        &self.id
    }

    /// Party title shown to attendees.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Whether the party has ended.
    ///
    /// Admission control rejects registrations for a party that is over,
    /// regardless of any other fact.
    pub fn is_over(&self) -> bool {
        self.is_over
    }
}

#[cfg(test)]
mod tests;
