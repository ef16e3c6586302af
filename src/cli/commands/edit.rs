use anyhow::Result;
use colored::Colorize;

use sessionhop::preset::{PresetDraft, Source};
use sessionhop::Sessionhop;

pub fn handle(
    app: &Sessionhop,
    id: &str,
    name: Option<String>,
    source: Option<Source>,
    key: Option<String>,
    icon: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let draft = PresetDraft {
        display_name: name,
        source,
        key,
        icon,
        description,
    };

    let updated = app.edit_preset(id, &draft)?;

    if updated.id != id {
        println!(
            "{} '{}' is built-in; forked your changes into {}",
            "✓".bright_green(),
            id,
            updated.id.bright_green()
        );
    } else {
        println!(
            "{} Updated {} ({})",
            "✓".bright_green(),
            updated.id.bright_green(),
            updated.display_name
        );
    }

    Ok(())
}
