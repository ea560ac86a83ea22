//! Port for per-party guest server setting persistence.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::guest_server::GuestServerSetting;
use crate::domain::party::PartyId;

/// Errors raised by setting repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuestServerSettingRepositoryError {
    /// Repository connection could not be established.
    #[error("guest server setting repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("guest server setting repository query failed: {message}")]
    Query { message: String },
}

impl GuestServerSettingRepositoryError {
    /// Helper for connection related adapter errors.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for the one-setting-per-party store.
///
/// Absence is an ordinary state: parties without a stored setting read as
/// the all-`None` default at the query layer, without creating a record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestServerSettingRepository: Send + Sync {
    /// Find the stored setting for the party.
    async fn find_for_party(
        &self,
        party_id: &PartyId,
    ) -> Result<Option<GuestServerSetting>, GuestServerSettingRepositoryError>;

    /// Create or replace the setting for its party.
    async fn upsert(
        &self,
        setting: &GuestServerSetting,
    ) -> Result<(), GuestServerSettingRepositoryError>;
}

/// Fixture implementation for tests that do not exercise settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGuestServerSettingRepository;

#[async_trait]
impl GuestServerSettingRepository for FixtureGuestServerSettingRepository {
    async fn find_for_party(
        &self,
        _party_id: &PartyId,
    ) -> Result<Option<GuestServerSetting>, GuestServerSettingRepositoryError> {
        Ok(None)
    }

    async fn upsert(
        &self,
        _setting: &GuestServerSetting,
    ) -> Result<(), GuestServerSettingRepositoryError> {
        Ok(())
    }
}
