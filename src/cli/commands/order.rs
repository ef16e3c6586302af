use anyhow::Result;
use colored::Colorize;

use sessionhop::Sessionhop;

pub fn handle(app: &Sessionhop, ids: Vec<String>) -> Result<()> {
    // Reject unknown ids up front so a typo doesn't silently rank nothing
    for id in &ids {
        app.find_preset(id)?;
    }

    app.reorder_presets(&ids)?;

    println!(
        "{} Display order saved ({} preset{})",
        "✓".bright_green(),
        ids.len(),
        if ids.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
