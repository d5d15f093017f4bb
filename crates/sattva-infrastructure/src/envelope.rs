//! Envelope load/save helpers shared by the repositories.
//!
//! Loading runs the raw value through the entity's migration chain and
//! deserializes the latest DTO. Any unreadable state (parse failure,
//! unknown schema, failed migration) is logged and degrades to "key
//! absent" so corruption never ends the session; the repositories then
//! fall back to their defaults.

use crate::migration::MigrationChain;
use crate::store::JsonStore;
use sattva_core::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Loads and upgrades the envelope stored under `key`.
///
/// Returns `Ok(None)` when the key is absent or its contents are
/// unreadable in any way.
pub(crate) fn load_envelope<T: DeserializeOwned>(
    store: &JsonStore,
    key: &str,
    chain: &MigrationChain,
) -> Result<Option<T>> {
    let value = match store.get(key) {
        Ok(value) => value,
        Err(err) if err.is_serialization() => {
            tracing::warn!(key, %err, "stored value is unreadable; treating key as absent");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let Some(value) = value else {
        return Ok(None);
    };

    let upgraded = match chain.upgrade(value) {
        Ok(upgraded) => upgraded,
        Err(err) => {
            tracing::warn!(key, %err, "schema upgrade failed; treating key as absent");
            return Ok(None);
        }
    };

    match serde_json::from_value(upgraded) {
        Ok(dto) => Ok(Some(dto)),
        Err(err) => {
            tracing::warn!(key, %err, "envelope does not match latest schema; treating key as absent");
            Ok(None)
        }
    }
}

/// Serializes and writes the envelope under `key` (write-through).
pub(crate) fn save_envelope<T: Serialize>(store: &JsonStore, key: &str, dto: &T) -> Result<()> {
    let value = serde_json::to_value(dto).map_err(sattva_core::SattvaError::from)?;
    store.set(key, &value)
}
