use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fixtures-cli")]
#[command(about = "Browse upcoming football fixtures and export them as CSV")]
#[command(version)]
pub struct Cli {
    /// Optional JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:5000
    #[arg(long)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive fixtures screen (default)
    Tui,

    /// Fetch once and print the listing
    List {
        /// Only show this competition
        #[arg(short, long)]
        league: Option<String>,

        /// Print CSV instead of cards
        #[arg(long)]
        csv: bool,
    },

    /// Download the server CSV once
    Export {
        /// Directory to save into (defaults to the configured download dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}
