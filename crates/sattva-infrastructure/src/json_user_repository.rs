//! JSON-store-backed user repository.

use crate::dto::user::{UserSetDto, user_set_chain};
use crate::envelope::{load_envelope, save_envelope};
use crate::migration::MigrationChain;
use crate::store::{JsonStore, keys};
use sattva_core::Result;
use sattva_core::repository::UserRepository;
use sattva_core::user::User;

/// Stores the user collection under the `users` key.
#[derive(Debug)]
pub struct JsonUserRepository {
    store: JsonStore,
    chain: MigrationChain,
}

impl JsonUserRepository {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            chain: user_set_chain(),
        }
    }
}

impl UserRepository for JsonUserRepository {
    fn load_all(&self) -> Result<Vec<User>> {
        let dto: Option<UserSetDto> = load_envelope(&self.store, keys::USERS, &self.chain)?;
        Ok(dto.map(UserSetDto::into_users).unwrap_or_default())
    }

    fn save_all(&self, users: &[User]) -> Result<()> {
        save_envelope(&self.store, keys::USERS, &UserSetDto::from_users(users))
    }
}
