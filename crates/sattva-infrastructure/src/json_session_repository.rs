//! JSON-store-backed session-pointer repository.

use crate::dto::session::{SessionPointerV1, session_pointer_chain};
use crate::envelope::{load_envelope, save_envelope};
use crate::migration::MigrationChain;
use crate::store::{JsonStore, keys};
use sattva_core::Result;
use sattva_core::repository::SessionRepository;

/// Stores the current-user pointer under the `session` key.
#[derive(Debug)]
pub struct JsonSessionRepository {
    store: JsonStore,
    chain: MigrationChain,
}

impl JsonSessionRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            chain: session_pointer_chain(),
        }
    }
}

impl SessionRepository for JsonSessionRepository {
    fn load(&self) -> Result<Option<String>> {
        let dto: Option<SessionPointerV1> =
            load_envelope(&self.store, keys::SESSION, &self.chain)?;
        Ok(dto.map(|p| p.user_id))
    }

    fn save(&self, user_id: &str) -> Result<()> {
        save_envelope(&self.store, keys::SESSION, &SessionPointerV1::new(user_id))
    }

    fn clear(&self) -> Result<()> {
        self.store.remove(keys::SESSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository() -> (TempDir, JsonSessionRepository) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().to_path_buf());
        (dir, JsonSessionRepository::new(store))
    }

    #[test]
    fn test_absent_pointer() {
        let (_dir, repo) = repository();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let (_dir, repo) = repository();
        repo.save("u-42").unwrap();
        assert_eq!(repo.load().unwrap().as_deref(), Some("u-42"));

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_pointer_loads_as_no_session() {
        let (dir, repo) = repository();
        std::fs::write(dir.path().join("session.json"), "u-42").unwrap();
        // Valid JSON but not a pointer envelope.
        assert!(repo.load().unwrap().is_none());
    }
}
