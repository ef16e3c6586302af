use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::preset::Preset;
use crate::store::{self, StateStore, HISTORY_KEY};

/// One generation attempt, successful or not. Records are append-only:
/// after creation they are only ever deleted, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub config: Preset,
    pub config_id: String,
    /// Empty when the attempt failed.
    pub generated_code: String,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// The history log, most recent first.
pub fn list(store: &dyn StateStore) -> Vec<HistoryRecord> {
    store::load_or_default(store, HISTORY_KEY)
}

/// Record a generation attempt, evicting the oldest entries beyond
/// `limit`.
pub fn add(
    store: &dyn StateStore,
    limit: usize,
    config: &Preset,
    code: &str,
    success: bool,
    error_message: Option<String>,
) -> Result<HistoryRecord> {
    let now = Utc::now();
    let record = HistoryRecord {
        id: now.timestamp_millis().to_string(),
        config: config.clone(),
        config_id: config.id.clone(),
        generated_code: code.to_string(),
        timestamp: now,
        success,
        error_message,
        name: Some(config.display_name.clone()),
        icon: config.icon.clone(),
    };

    let mut records = list(store);
    records.insert(0, record.clone());
    records.truncate(limit);
    store::save(store, HISTORY_KEY, &records)?;

    Ok(record)
}

/// Delete a single record by id.
pub fn remove(store: &dyn StateStore, id: &str) -> Result<bool> {
    let mut records = list(store);
    let before = records.len();
    records.retain(|r| r.id != id);
    let removed = records.len() != before;

    if removed {
        store::save(store, HISTORY_KEY, &records)?;
    }

    Ok(removed)
}

/// Delete every record.
pub fn clear(store: &dyn StateStore) -> Result<()> {
    store::save(store, HISTORY_KEY, &Vec::<HistoryRecord>::new())
}
