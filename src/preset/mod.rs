pub mod builtin;
pub mod custom;
pub mod order;

pub use builtin::builtins;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;
use crate::store::StateStore;

/// Which browser-side mechanism a preset captures from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "localStorage")]
    LocalStorage,
    #[serde(rename = "cookie")]
    Cookie,
    #[serde(rename = "all")]
    All,
    #[serde(rename = "custom")]
    Custom,
}

impl Source {
    /// `all` captures everything; every other source targets one key.
    pub fn requires_key(&self) -> bool {
        !matches!(self, Source::All)
    }

    /// The literal spliced into generated code. The generated script
    /// compares this against "localStorage" to pick its branch, so
    /// `custom` falls through to the cookie path at runtime.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::LocalStorage => "localStorage",
            Source::Cookie => "cookie",
            Source::All => "all",
            Source::Custom => "custom",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "localStorage" => Ok(Source::LocalStorage),
            "cookie" => Ok(Source::Cookie),
            "all" => Ok(Source::All),
            "custom" => Ok(Source::Custom),
            other => Err(format!(
                "unknown source '{}' (expected localStorage, cookie, all, or custom)",
                other
            )),
        }
    }
}

/// One unit of work for the generator: what to capture and how to show it.
/// Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub display_name: String,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Preset {
    /// Enforce the key invariant: `all` never carries a key, everything
    /// else must carry a non-empty one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.source.requires_key() {
            return Ok(());
        }

        match self.key.as_deref() {
            None => Err(ConfigError::MissingKey {
                source: self.source.to_string(),
            }),
            Some(k) if k.trim().is_empty() => Err(ConfigError::EmptyKey {
                source: self.source.to_string(),
            }),
            Some(_) => Ok(()),
        }
    }

    /// The key this preset extracts, once validated.
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }
}

/// Fields a user supplies when creating or editing a preset; id and
/// bookkeeping fields are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct PresetDraft {
    pub display_name: Option<String>,
    pub source: Option<Source>,
    pub key: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl PresetDraft {
    /// Apply this draft on top of an existing preset. A source change to
    /// `all` drops the key, matching the invariant.
    pub fn apply_to(&self, base: &Preset) -> Preset {
        let mut next = base.clone();
        if let Some(name) = &self.display_name {
            next.display_name = name.clone();
        }
        if let Some(source) = self.source {
            next.source = source;
        }
        if let Some(key) = &self.key {
            next.key = Some(key.clone());
        }
        if let Some(icon) = &self.icon {
            next.icon = Some(icon.clone());
        }
        if let Some(description) = &self.description {
            next.description = Some(description.clone());
        }
        if next.source == Source::All {
            next.key = None;
        }
        next
    }
}

/// All presets visible to the user: built-ins first, then customs, then
/// sorted by the persisted display order.
pub fn catalog(store: &dyn StateStore) -> Vec<Preset> {
    let mut all: Vec<Preset> = builtins().to_vec();
    all.extend(custom::list(store));
    order::sorted(store, all)
}

/// Look a preset up by id across built-ins and customs.
pub fn find(store: &dyn StateStore, id: &str) -> Result<Preset, ConfigError> {
    catalog(store)
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ConfigError::UnknownPreset { id: id.to_string() })
}
