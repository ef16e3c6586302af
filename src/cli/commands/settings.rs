use anyhow::Result;
use colored::Colorize;

use crate::cli::SettingsAction;
use sessionhop::Sessionhop;

pub fn handle(app: &mut Sessionhop, action: SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Set { key, value } => {
            app.settings_mut().set(&key, &value)?;
            println!("{} {} = {}", "✓".bright_green(), key, value);
        }
        SettingsAction::Get { key } => {
            println!("{}", app.settings().get(&key)?);
        }
        SettingsAction::List => {
            println!("{}", "Settings:".bright_blue().bold());
            for (key, value) in app.settings().entries() {
                println!("  {} = {}", key.bright_green(), value);
            }
        }
    }

    Ok(())
}
