mod cli;

use anyhow::Result;
use clap::Parser;
use cli::commands;
use sessionhop::Sessionhop;

fn main() {
    // Setup tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = cli::Cli::parse();

    // Run the command and handle errors gracefully
    if let Err(err) = run_command(cli) {
        commands::display_error(&err);
        std::process::exit(1);
    }
}

fn run_command(cli: cli::Cli) -> Result<()> {
    use cli::Commands;

    let mut app = Sessionhop::new(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::List { verbose } => commands::list::handle(&app, verbose),
        Commands::Generate { id, output } => commands::generate::handle(&app, &id, output),
        Commands::Add {
            name,
            source,
            key,
            icon,
            description,
        } => commands::add::handle(&app, name, source, key, icon, description),
        Commands::Edit {
            id,
            name,
            source,
            key,
            icon,
            description,
        } => commands::edit::handle(&app, &id, name, source, key, icon, description),
        Commands::Delete { id } => commands::delete::handle(&app, &id),
        Commands::Order { ids } => commands::order::handle(&app, ids),
        Commands::History { action } => commands::history::handle(&app, action),
        Commands::Preview { id, state } => commands::preview::handle(&app, &id, &state),
        Commands::Settings { action } => commands::settings::handle(&mut app, action),
    }
}
