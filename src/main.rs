//! Word Scramble - CLI
//!
//! Build words from the letters of a root word, in a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{find_hints, game_rules, run_simple},
    config::{GameConfig, ListSource},
    interactive::{App, run_tui},
    output::{print_hints, print_rules},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a file with one word per line
    #[arg(long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for root word selection (reproducible sessions)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Play this root word every round
    #[arg(short, long, global = true)]
    root: Option<String>,

    /// Log filter, e.g. 'info' or 'word_scramble=debug' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// List every scoring word for a root word
    Hints {
        /// Root word to find words in
        word: String,
    },

    /// Show how words are scored
    Rules,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            start_words: ListSource::from_arg(&self.start_words),
            dictionary: ListSource::from_arg(&self.dictionary),
            seed: self.seed,
            root_word: self.root.clone(),
            ..GameConfig::default()
        }
    }
}

/// Log to stderr, quiet unless asked
fn init_tracing(level: Option<&str>) {
    let filter = level
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = cli.game_config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let engine = config.build_engine().context("failed to set up game")?;
            run_tui(App::new(engine))
        }
        Commands::Simple => {
            let mut engine = config.build_engine().context("failed to set up game")?;
            run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Hints { word } => {
            let dictionary = config
                .load_dictionary()
                .context("failed to load dictionary")?;
            let result = find_hints(&word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_hints(&result);
            Ok(())
        }
        Commands::Rules => {
            print_rules(&game_rules());
            Ok(())
        }
    }
}
