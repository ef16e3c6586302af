pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sessionhop::preset::Source;

#[derive(Parser)]
#[command(name = "sessionhop")]
#[command(about = "Generate bookmarklet pairs that carry a web session between browsers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SESSIONHOP_DATA_DIR",
        help = "Override the data directory holding presets, history, and settings"
    )]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List all presets in display order")]
    List {
        #[arg(short, long, help = "Show sources and keys")]
        verbose: bool,
    },

    #[command(about = "Generate extraction code (code A) for a preset")]
    Generate {
        #[arg(help = "Preset id")]
        id: String,
        #[arg(short, long, help = "Write the code to a file instead of stdout")]
        output: Option<PathBuf>,
    },

    #[command(about = "Create a custom preset")]
    Add {
        #[arg(short, long, help = "Display name")]
        name: String,
        #[arg(short, long, help = "Source: localStorage, cookie, or all")]
        source: Source,
        #[arg(short, long, help = "Storage key or cookie name (not used with 'all')")]
        key: Option<String>,
        #[arg(long, help = "Icon shown in listings")]
        icon: Option<String>,
        #[arg(short, long, help = "Description")]
        description: Option<String>,
    },

    #[command(about = "Edit a preset (editing a built-in forks it into a custom copy)")]
    Edit {
        #[arg(help = "Preset id")]
        id: String,
        #[arg(short, long, help = "Display name")]
        name: Option<String>,
        #[arg(short, long, help = "Source: localStorage, cookie, or all")]
        source: Option<Source>,
        #[arg(short, long, help = "Storage key or cookie name")]
        key: Option<String>,
        #[arg(long, help = "Icon shown in listings")]
        icon: Option<String>,
        #[arg(short, long, help = "Description")]
        description: Option<String>,
    },

    #[command(about = "Delete a custom preset")]
    Delete {
        #[arg(help = "Preset id")]
        id: String,
    },

    #[command(about = "Set the display order of presets")]
    Order {
        #[arg(help = "Preset ids, first to last", required = true)]
        ids: Vec<String>,
    },

    #[command(about = "Inspect or prune the generation history")]
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    #[command(about = "Dry-run a preset against a simulated browser state")]
    Preview {
        #[arg(help = "Preset id")]
        id: String,
        #[arg(
            short,
            long,
            help = "JSON file with url, localStorage, and cookies of the source context"
        )]
        state: PathBuf,
    },

    #[command(about = "Configure sessionhop settings")]
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    #[command(about = "List recorded generation attempts, most recent first")]
    List,
    #[command(about = "Print the generated code of one record")]
    Show { id: String },
    #[command(about = "Delete one record")]
    Remove { id: String },
    #[command(about = "Delete all records")]
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    #[command(about = "Set a settings value")]
    Set { key: String, value: String },
    #[command(about = "Get a settings value")]
    Get { key: String },
    #[command(about = "List all settings values")]
    List,
}
