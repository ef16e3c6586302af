use anyhow::{bail, Result};
use colored::Colorize;

use crate::cli::HistoryAction;
use sessionhop::Sessionhop;

pub fn handle(app: &Sessionhop, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => list(app),
        HistoryAction::Show { id } => show(app, &id),
        HistoryAction::Remove { id } => remove(app, &id),
        HistoryAction::Clear => clear(app),
    }
}

fn list(app: &Sessionhop) -> Result<()> {
    let records = app.history();

    if records.is_empty() {
        println!("No generation attempts recorded yet");
        return Ok(());
    }

    println!("{}", "History (most recent first):".bright_blue().bold());
    for record in &records {
        let status = if record.success {
            "✓".bright_green()
        } else {
            "✗".bright_red()
        };
        let name = record.name.as_deref().unwrap_or(&record.config_id);

        println!(
            "  {} {} {} {}",
            status,
            record.id.bright_green(),
            name,
            record
                .timestamp
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .bright_black()
        );

        if let Some(message) = &record.error_message {
            println!("      {} {}", "└".bright_black(), message.bright_red());
        }
    }

    Ok(())
}

fn show(app: &Sessionhop, id: &str) -> Result<()> {
    let records = app.history();
    let Some(record) = records.iter().find(|r| r.id == id) else {
        bail!("No history record with id '{}'", id);
    };

    if !record.success {
        bail!(
            "Record {} is a failed attempt: {}",
            id,
            record.error_message.as_deref().unwrap_or("no message")
        );
    }

    println!("{}", record.generated_code);

    Ok(())
}

fn remove(app: &Sessionhop, id: &str) -> Result<()> {
    if app.remove_history(id)? {
        println!("{} Removed history record {}", "✓".bright_green(), id);
    } else {
        bail!("No history record with id '{}'", id);
    }

    Ok(())
}

fn clear(app: &Sessionhop) -> Result<()> {
    app.clear_history()?;
    println!("{} History cleared", "✓".bright_green());

    Ok(())
}
