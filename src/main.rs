//! Cham Cham Cham - Main Binary
//!
//! Menu-driven play in the terminal, plus read-only views of the stored data

use cham_cham_rs::{
    arcade::Arcade,
    cli::{profiles_text, scoreboard_text, stats_text, Menu, Prompter},
    config::GameConfig,
    game::VerbosityLevel,
    Result,
};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cham")]
#[command(about = "Cham Cham Cham - guess-the-direction game", long_about = None)]
struct Cli {
    /// Directory holding profiles, scoreboard and game stats
    #[arg(long, value_name = "DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Seed for the computer's moves (for reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Game output verbosity (silent/0, minimal/1, normal/2, verbose/3)
    #[arg(long, short = 'v', default_value = "normal")]
    verbosity: VerbosityLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,
    /// Print the ranked scoreboard
    Scoreboard,
    /// Print the full game history
    Stats,
    /// List player profiles
    Profiles,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cham_cham_rs=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::new(&cli.data_dir).with_verbosity(cli.verbosity);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut arcade = Arcade::open(config)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let opponent = Box::new(arcade.opponent());
            let prompter = Prompter::new(io::stdin().lock(), io::stdout());
            Menu::new(&mut arcade, prompter, opponent).run()?;
        }
        Commands::Scoreboard => println!("{}", scoreboard_text(&arcade)),
        Commands::Stats => println!("{}", stats_text(&arcade)?),
        Commands::Profiles => println!("{}", profiles_text(&arcade)),
    }

    Ok(())
}
