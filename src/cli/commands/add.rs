use anyhow::Result;
use colored::Colorize;

use sessionhop::preset::{PresetDraft, Source};
use sessionhop::Sessionhop;

pub fn handle(
    app: &Sessionhop,
    name: String,
    source: Source,
    key: Option<String>,
    icon: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let draft = PresetDraft {
        display_name: Some(name),
        source: Some(source),
        key,
        icon,
        description,
    };

    let preset = app.add_preset(&draft)?;

    println!(
        "{} Created custom preset {} ({})",
        "✓".bright_green(),
        preset.id.bright_green(),
        preset.display_name
    );

    Ok(())
}
