//! CLI frontend for the Tarokka reading engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tk_reading::TomeDescription;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tarokka",
    about = "Tarokka: reproducible card readings for Curse of Strahd",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform a full five-card reading
    Read {
        /// Seed for a reproducible reading (default: current time)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,

        /// Description shown on the tome slot: holy-symbol or tome
        #[arg(long, default_value = "holy-symbol")]
        tome_description: TomeDescription,

        /// Directory containing tarokka-deck.json and reading-config.json
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Show a single card by id
    Card {
        /// Card id (e.g. high_deck_raven)
        id: String,

        /// Print the card as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing tarokka-deck.json and reading-config.json
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Resolve one category for one card
    Resolve {
        /// Category: sunsword, holySymbol, tome, ally, enemy
        category: String,

        /// Card id
        card_id: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Directory containing tarokka-deck.json and reading-config.json
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// List every card in deck order
    Deck {
        /// Directory containing tarokka-deck.json and reading-config.json
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Validate the deck and reading configuration
    Check {
        /// Directory containing tarokka-deck.json and reading-config.json
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Read {
            seed,
            json,
            tome_description,
            data,
        } => commands::read::run(data.as_deref(), seed, json, tome_description),
        Commands::Card { id, json, data } => commands::card::run(data.as_deref(), &id, json),
        Commands::Resolve {
            category,
            card_id,
            json,
            data,
        } => commands::resolve::run(data.as_deref(), &category, &card_id, json),
        Commands::Deck { data } => commands::deck::run(data.as_deref()),
        Commands::Check { data } => commands::check::run(data.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
