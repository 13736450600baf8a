//! Tic-Tac-Toe CLI - play against the minimax solver or query it directly

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe with an unbeatable opponent", long_about = None)]
struct Cli {
    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Print the minimax move for a board
    Solve(noughts::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    noughts::cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Solve(args) => noughts::cli::commands::solve::execute(args),
    }
}
