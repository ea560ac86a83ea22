//! User data model.
//!
//! Users are managed by another subsystem. The guest-server domain keeps
//! the identifier and the screen name it mirrors into events; deleted
//! accounts retain their identifier but lose the name.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by [`ScreenName::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyScreenName,
    ScreenNamePadded,
    ScreenNameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScreenName => write!(f, "screen name must not be empty"),
            Self::ScreenNamePadded => {
                write!(f, "screen name must not contain surrounding whitespace")
            }
            Self::ScreenNameTooLong { max } => {
                write!(f, "screen name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Wrap an existing UUID.
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maximum allowed length for a screen name.
pub const SCREEN_NAME_MAX: usize = 24;

/// Name a user chose to be known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScreenName(String);

impl ScreenName {
    /// Validate and construct a [`ScreenName`] from owned input.
    pub fn new(screen_name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(screen_name.into())
    }

    fn from_owned(screen_name: String) -> Result<Self, UserValidationError> {
        if screen_name.is_empty() {
            return Err(UserValidationError::EmptyScreenName);
        }
        if screen_name.trim() != screen_name {
            return Err(UserValidationError::ScreenNamePadded);
        }
        if screen_name.chars().count() > SCREEN_NAME_MAX {
            return Err(UserValidationError::ScreenNameTooLong {
                max: SCREEN_NAME_MAX,
            });
        }

        Ok(Self(screen_name))
    }

    /// Borrow the screen name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ScreenName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ScreenName> for String {
    fn from(value: ScreenName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ScreenName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Platform user as seen by the guest-server domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    screen_name: Option<ScreenName>,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub const fn new(id: UserId, screen_name: Option<ScreenName>) -> Self {
        Self { id, screen_name }
    }

    /// Stable user identifier.
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Screen name, absent for deleted accounts.
    pub fn screen_name(&self) -> Option<&ScreenName> {
        self.screen_name.as_ref()
    }
}
