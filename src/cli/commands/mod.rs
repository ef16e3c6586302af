pub mod add;
pub mod delete;
pub mod edit;
pub mod generate;
pub mod history;
pub mod list;
pub mod order;
pub mod preview;
pub mod settings;

use colored::Colorize;

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!(
        "\n{} {}",
        "✗".bright_red().bold(),
        "Operation failed".bright_red().bold()
    );
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    // Add helpful context based on error type
    let error_str = err.to_string();
    if error_str.contains("requires a key") {
        eprintln!(
            "  {} Pass {} when the source is localStorage or cookie",
            "└".bright_cyan(),
            "--key <KEY>".bright_yellow()
        );
    } else if error_str.contains("no preset with id") {
        eprintln!(
            "  {} Run {} to see available presets",
            "└".bright_cyan(),
            "sessionhop list".bright_yellow()
        );
    } else if error_str.contains("built-in preset") {
        eprintln!(
            "  {} Built-ins are immutable; {} forks one into a custom copy",
            "└".bright_cyan(),
            "sessionhop edit".bright_yellow()
        );
    } else {
        eprintln!(
            "  {} Set {} for more details",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        );
    }
}
