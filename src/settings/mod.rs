use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Tool settings persisted as `settings.toml` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub codegen: CodegenSettings,
    pub history: HistorySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenSettings {
    /// Lifetime stamped on every injected cookie, so replayed sessions
    /// expire instead of persisting indefinitely.
    pub cookie_max_age_secs: u64,
    /// Delay between injection and navigating back to the captured URL,
    /// letting the writes settle first.
    pub navigate_delay_ms: u64,
    /// Auto-dismiss timeout for the manual-copy overlay (delivery tier 3).
    pub overlay_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Maximum number of generation attempts kept in the history log.
    pub limit: usize,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self {
            codegen: CodegenSettings {
                cookie_max_age_secs: 86_400,
                navigate_delay_ms: 500,
                overlay_timeout_ms: 10_000,
            },
            history: HistorySettings { limit: 50 },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub data: SettingsData,
    pub path: PathBuf,
}

impl Settings {
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> Result<Self> {
        let path = data_dir.as_ref().join("settings.toml");

        let data = if path.exists() {
            let content =
                fs::read_to_string(&path).context("Failed to read settings file")?;
            toml::from_str(&content).context("Failed to parse settings file")?
        } else {
            SettingsData::default()
        };

        Ok(Self { data, path })
    }

    pub fn save(&self) -> Result<()> {
        let content =
            toml::to_string_pretty(&self.data).context("Failed to serialize settings")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }

        fs::write(&self.path, content).context("Failed to write settings file")?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "codegen.cookie_max_age_secs" => {
                self.data.codegen.cookie_max_age_secs =
                    value.parse().context("Invalid integer value")?;
            }
            "codegen.navigate_delay_ms" => {
                self.data.codegen.navigate_delay_ms =
                    value.parse().context("Invalid integer value")?;
            }
            "codegen.overlay_timeout_ms" => {
                self.data.codegen.overlay_timeout_ms =
                    value.parse().context("Invalid integer value")?;
            }
            "history.limit" => {
                self.data.history.limit = value.parse().context("Invalid integer value")?;
            }
            _ => anyhow::bail!("Unknown settings key: {}", key),
        }

        self.save()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "codegen.cookie_max_age_secs" => self.data.codegen.cookie_max_age_secs.to_string(),
            "codegen.navigate_delay_ms" => self.data.codegen.navigate_delay_ms.to_string(),
            "codegen.overlay_timeout_ms" => self.data.codegen.overlay_timeout_ms.to_string(),
            "history.limit" => self.data.history.limit.to_string(),
            _ => anyhow::bail!("Unknown settings key: {}", key),
        };

        Ok(value)
    }

    /// All known keys with their current values, for `settings list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "codegen.cookie_max_age_secs",
                self.data.codegen.cookie_max_age_secs.to_string(),
            ),
            (
                "codegen.navigate_delay_ms",
                self.data.codegen.navigate_delay_ms.to_string(),
            ),
            (
                "codegen.overlay_timeout_ms",
                self.data.codegen.overlay_timeout_ms.to_string(),
            ),
            ("history.limit", self.data.history.limit.to_string()),
        ]
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: SettingsData::default(),
            path: PathBuf::from("settings.toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data.codegen.cookie_max_age_secs, 86_400);
        assert_eq!(settings.data.codegen.navigate_delay_ms, 500);
        assert_eq!(settings.data.history.limit, 50);
    }

    #[test]
    fn test_set_and_reload() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut settings = Settings::load_or_default(temp_dir.path())?;

        settings.set("history.limit", "10")?;
        assert_eq!(settings.get("history.limit")?, "10");

        let reloaded = Settings::load_or_default(temp_dir.path())?;
        assert_eq!(reloaded.data.history.limit, 10);

        Ok(())
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut settings = Settings::default();
        assert!(settings.set("codegen.bogus", "1").is_err());
        assert!(settings.get("codegen.bogus").is_err());
    }
}
