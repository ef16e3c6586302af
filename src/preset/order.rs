use anyhow::Result;
use std::collections::HashMap;

use crate::store::{self, StateStore, CONFIG_ORDER_KEY};

use super::Preset;

/// Rank assigned to presets missing from the order map; they sort after
/// everything the user has explicitly arranged.
const UNRANKED: u32 = 999;

/// The persisted display-order map (preset id → rank).
pub fn load(store: &dyn StateStore) -> HashMap<String, u32> {
    store::load_or_default(store, CONFIG_ORDER_KEY)
}

/// Rewrite the order map from an explicit id sequence.
pub fn reorder(store: &dyn StateStore, ids: &[String]) -> Result<()> {
    let order: HashMap<String, u32> = ids
        .iter()
        .enumerate()
        .map(|(rank, id)| (id.clone(), rank as u32))
        .collect();

    store::save(store, CONFIG_ORDER_KEY, &order)
}

/// Sort presets by their persisted rank; ties and unranked entries keep
/// their incoming relative order.
pub fn sorted(store: &dyn StateStore, mut presets: Vec<Preset>) -> Vec<Preset> {
    let order = load(store);
    presets.sort_by_key(|p| order.get(&p.id).copied().unwrap_or(UNRANKED));
    presets
}
