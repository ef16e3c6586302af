use anyhow::Result;
use colored::Colorize;

use sessionhop::Sessionhop;

pub fn handle(app: &Sessionhop, verbose: bool) -> Result<()> {
    let presets = app.presets();

    println!("{}", "Presets:".bright_blue().bold());
    for preset in &presets {
        let icon = preset.icon.as_deref().unwrap_or("•");
        let kind = if preset.is_custom {
            "custom".bright_yellow()
        } else {
            "built-in".bright_black()
        };

        println!(
            "  {} {} {} ({})",
            icon,
            preset.id.bright_green(),
            preset.display_name,
            kind
        );

        if verbose {
            println!(
                "      {} source={} key={}",
                "└".bright_black(),
                preset.source,
                preset.key.as_deref().unwrap_or("-")
            );
            if let Some(description) = &preset.description {
                println!("        {}", description.bright_black());
            }
        }
    }

    println!(
        "\n{} preset{}",
        presets.len(),
        if presets.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
