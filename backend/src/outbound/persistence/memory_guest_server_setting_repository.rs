//! In-memory guest server setting repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::guest_server::GuestServerSetting;
use crate::domain::party::PartyId;
use crate::domain::ports::{GuestServerSettingRepository, GuestServerSettingRepositoryError};

/// In-memory implementation of the setting repository port.
///
/// One value per party, replaced wholesale on upsert. Parties without a
/// stored value stay absent; the query service supplies the default.
#[derive(Debug, Default)]
pub struct MemoryGuestServerSettingRepository {
    settings: RwLock<HashMap<PartyId, GuestServerSetting>>,
}

impl MemoryGuestServerSettingRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GuestServerSettingRepository for MemoryGuestServerSettingRepository {
    async fn find_for_party(
        &self,
        party_id: &PartyId,
    ) -> Result<Option<GuestServerSetting>, GuestServerSettingRepositoryError> {
        let settings = self.settings.read().map_err(|_| {
            GuestServerSettingRepositoryError::connection("setting store lock poisoned")
        })?;
        Ok(settings.get(party_id).cloned())
    }

    async fn upsert(
        &self,
        setting: &GuestServerSetting,
    ) -> Result<(), GuestServerSettingRepositoryError> {
        let mut settings = self.settings.write().map_err(|_| {
            GuestServerSettingRepositoryError::connection("setting store lock poisoned")
        })?;

        debug!(party_id = %setting.party_id, "storing guest server setting");
        settings.insert(setting.party_id.clone(), setting.clone());
        Ok(())
    }
}
