pub mod codegen;
pub mod error;
pub mod history;
pub mod preset;
pub mod session;
pub mod settings;
pub mod store;

use anyhow::Result;
use std::path::Path;

use history::HistoryRecord;
use preset::{Preset, PresetDraft};
use session::{BrowserState, Payload};
use settings::Settings;
use store::DiskStore;

/// Facade over the preset catalog, the generator, and the persisted
/// stores. The CLI is a thin layer over this type.
#[derive(Debug, Clone)]
pub struct Sessionhop {
    settings: Settings,
    store: DiskStore,
}

impl Sessionhop {
    /// Open against an explicit data directory, or the platform default.
    pub fn new(data_dir: Option<&Path>) -> Result<Self> {
        let store = match data_dir {
            Some(dir) => DiskStore::new(dir)?,
            None => DiskStore::open_default()?,
        };
        let settings = Settings::load_or_default(store.dir())?;

        Ok(Self { settings, store })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// The underlying state store, for callers that need raw access.
    pub fn store(&self) -> &DiskStore {
        &self.store
    }

    /// All presets, built-ins merged with customs, display-ordered.
    pub fn presets(&self) -> Vec<Preset> {
        preset::catalog(&self.store)
    }

    pub fn find_preset(&self, id: &str) -> Result<Preset> {
        Ok(preset::find(&self.store, id)?)
    }

    /// Generate code A for the preset with `id`. Every attempt lands in
    /// the history log; a refused configuration is recorded as a failed
    /// attempt with its message and an empty code.
    pub fn generate(&self, id: &str) -> Result<String> {
        let preset = preset::find(&self.store, id)?;
        let limit = self.settings.data.history.limit;

        match codegen::generate(&preset, &self.settings.data.codegen) {
            Ok(code) => {
                history::add(&self.store, limit, &preset, &code, true, None)?;
                Ok(code)
            }
            Err(err) => {
                history::add(&self.store, limit, &preset, "", false, Some(err.to_string()))?;
                Err(err.into())
            }
        }
    }

    /// Dry-run: capture from a simulated browser state and render the
    /// code B the real code A would build there.
    pub fn preview(&self, id: &str, state: &BrowserState) -> Result<(Payload, String)> {
        let preset = preset::find(&self.store, id)?;
        preset.validate()?;

        let payload = session::capture(&preset, state)?;
        let code_b = codegen::build_code_b(&payload, &self.settings.data.codegen);

        Ok((payload, code_b))
    }

    pub fn add_preset(&self, draft: &PresetDraft) -> Result<Preset> {
        preset::custom::add(&self.store, draft)
    }

    pub fn edit_preset(&self, id: &str, draft: &PresetDraft) -> Result<Preset> {
        preset::custom::edit(&self.store, id, draft)
    }

    pub fn delete_preset(&self, id: &str) -> Result<()> {
        preset::custom::delete(&self.store, id)
    }

    pub fn reorder_presets(&self, ids: &[String]) -> Result<()> {
        preset::order::reorder(&self.store, ids)
    }

    pub fn history(&self) -> Vec<HistoryRecord> {
        history::list(&self.store)
    }

    pub fn remove_history(&self, id: &str) -> Result<bool> {
        history::remove(&self.store, id)
    }

    pub fn clear_history(&self) -> Result<()> {
        history::clear(&self.store)
    }
}
