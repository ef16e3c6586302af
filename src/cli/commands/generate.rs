use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use sessionhop::Sessionhop;

pub fn handle(app: &Sessionhop, id: &str, output: Option<PathBuf>) -> Result<()> {
    let preset = app.find_preset(id)?;
    let code = app.generate(id)?;

    eprintln!(
        "{} Generated code A for {} ({})",
        "✓".bright_green(),
        preset.display_name.bright_green(),
        preset.source
    );
    eprintln!(
        "  {} Run it in the console of the logged-in page; code B lands in the clipboard",
        "└".bright_cyan()
    );

    match output {
        Some(path) => {
            std::fs::write(&path, &code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} Written to {}", "✓".bright_green(), path.display());
        }
        None => println!("{}", code),
    }

    Ok(())
}
