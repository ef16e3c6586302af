use anyhow::Result;
use colored::Colorize;

use sessionhop::Sessionhop;

pub fn handle(app: &Sessionhop, id: &str) -> Result<()> {
    app.delete_preset(id)?;

    println!("{} Deleted preset {}", "✓".bright_green(), id);

    Ok(())
}
