pub mod disk;
pub mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Namespaced key holding the custom preset list.
pub const CUSTOM_CONFIGS_KEY: &str = "custom-configs";
/// Namespaced key holding the generation history.
pub const HISTORY_KEY: &str = "history";
/// Namespaced key holding the preset display-order map.
pub const CONFIG_ORDER_KEY: &str = "config-order";

/// Key-value persistence capability backing the preset, history, and order
/// stores. Each key maps to one JSON document; absent keys mean "empty".
///
/// The generator and the stores are written against this trait so tests can
/// substitute [`MemoryStore`] for the on-disk backend.
pub trait StateStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Load and deserialize the document under `key`, falling back to the
/// default value when the key is absent or the stored JSON is damaged.
/// Corruption is logged, not fatal: the affected store runs from its
/// in-memory default for the rest of the session.
pub fn load_or_default<T>(store: &dyn StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!(key, %err, "failed to read state store, using defaults");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, %err, "state store entry is corrupted, using defaults");
            T::default()
        }
    }
}

/// Serialize `value` and persist it under `key`.
pub fn save<T: Serialize>(store: &dyn StateStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw)
}
