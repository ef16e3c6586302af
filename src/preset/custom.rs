use anyhow::Result;
use chrono::Utc;

use crate::error::ConfigError;
use crate::store::{self, StateStore, CUSTOM_CONFIGS_KEY};

use super::{builtin, Preset, PresetDraft};

/// User-defined presets, persisted as an order-preserving JSON array.
pub fn list(store: &dyn StateStore) -> Vec<Preset> {
    store::load_or_default(store, CUSTOM_CONFIGS_KEY)
}

/// Create a new custom preset from a draft. The id is time-based, like
/// the history record ids.
pub fn add(store: &dyn StateStore, draft: &PresetDraft) -> Result<Preset> {
    let now = Utc::now();
    let base = Preset {
        id: format!("custom-{}", now.timestamp_millis()),
        display_name: draft
            .display_name
            .clone()
            .unwrap_or_else(|| "Custom preset".to_string()),
        source: draft.source.unwrap_or(super::Source::LocalStorage),
        key: None,
        icon: draft.icon.clone(),
        description: draft.description.clone(),
        is_custom: true,
        created_at: Some(now),
    };
    let preset = draft.apply_to(&base);
    preset.validate()?;

    let mut configs = list(store);
    configs.push(preset.clone());
    store::save(store, CUSTOM_CONFIGS_KEY, &configs)?;

    Ok(preset)
}

/// Edit a preset. Custom entries are updated in place; built-ins are
/// immutable, so editing one forks it into a new custom entry carrying
/// the changes.
pub fn edit(store: &dyn StateStore, id: &str, draft: &PresetDraft) -> Result<Preset> {
    if builtin::is_builtin(id) {
        let base = super::find(store, id)?;
        let forked = draft.apply_to(&base);
        let fork_draft = PresetDraft {
            display_name: Some(forked.display_name),
            source: Some(forked.source),
            key: forked.key,
            icon: forked.icon,
            description: forked.description,
        };
        return add(store, &fork_draft);
    }

    let mut configs = list(store);
    let entry = configs
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| ConfigError::UnknownPreset { id: id.to_string() })?;

    let updated = draft.apply_to(entry);
    updated.validate()?;
    *entry = updated.clone();

    store::save(store, CUSTOM_CONFIGS_KEY, &configs)?;

    Ok(updated)
}

/// Delete a custom preset. Built-ins cannot be deleted.
pub fn delete(store: &dyn StateStore, id: &str) -> Result<()> {
    if builtin::is_builtin(id) {
        return Err(ConfigError::BuiltinImmutable { id: id.to_string() }.into());
    }

    let mut configs = list(store);
    let before = configs.len();
    configs.retain(|p| p.id != id);

    if configs.len() == before {
        return Err(ConfigError::UnknownPreset { id: id.to_string() }.into());
    }

    store::save(store, CUSTOM_CONFIGS_KEY, &configs)?;

    Ok(())
}
