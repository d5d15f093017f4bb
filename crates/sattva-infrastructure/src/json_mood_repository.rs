//! JSON-store-backed mood-entry repository.

use crate::dto::mood::{MoodLogDto, mood_log_chain};
use crate::envelope::{load_envelope, save_envelope};
use crate::migration::MigrationChain;
use crate::store::{JsonStore, keys};
use sattva_core::Result;
use sattva_core::mood::MoodEntry;
use sattva_core::repository::MoodRepository;

/// Stores the mood collection under the `moods` key.
#[derive(Debug)]
pub struct JsonMoodRepository {
    store: JsonStore,
    chain: MigrationChain,
}

impl JsonMoodRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            chain: mood_log_chain(),
        }
    }
}

impl MoodRepository for JsonMoodRepository {
    fn load_all(&self) -> Result<Option<Vec<MoodEntry>>> {
        let dto: Option<MoodLogDto> = load_envelope(&self.store, keys::MOODS, &self.chain)?;
        Ok(dto.map(MoodLogDto::into_entries))
    }

    fn save_all(&self, entries: &[MoodEntry]) -> Result<()> {
        save_envelope(&self.store, keys::MOODS, &MoodLogDto::from_entries(entries))
    }
}
