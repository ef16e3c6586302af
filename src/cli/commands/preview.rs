use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use sessionhop::session::{BrowserState, Payload};
use sessionhop::Sessionhop;

/// On-disk description of a simulated source context.
#[derive(Debug, Deserialize)]
struct StateFile {
    url: String,
    #[serde(default, rename = "localStorage")]
    local_storage: BTreeMap<String, String>,
    #[serde(default)]
    cookies: BTreeMap<String, String>,
}

pub fn handle(app: &Sessionhop, id: &str, state_path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(state_path)
        .with_context(|| format!("Failed to read state file {}", state_path.display()))?;
    let file: StateFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse state file {}", state_path.display()))?;

    let mut state = BrowserState::new(file.url);
    for (key, value) in file.local_storage {
        state.local_set(key, value);
    }
    for (name, value) in file.cookies {
        state.set_cookie(name, value);
    }

    let (payload, code_b) = app.preview(id, &state)?;

    match &payload {
        Payload::All {
            local,
            cookies,
            url,
        } => {
            println!("{}", "Captured payload:".bright_blue().bold());
            println!(
                "  {} localStorage entries, {} cookies from {}",
                local.len(),
                cookies.len(),
                url
            );
        }
        Payload::Single { key, value, url, .. } => {
            println!("{}", "Captured payload:".bright_blue().bold());
            println!("  {} = {} from {}", key.bright_green(), value, url);
        }
    }

    println!("\n{}", "Code B this capture would produce:".bright_blue().bold());
    println!("{}", code_b);

    Ok(())
}
