//! Solve command - Report the minimax move for a position

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::parse_token,
        output::{print_kv, write_board},
    },
    tictactoe::{Board, MinimaxSolver, OutcomeEvaluator, Position, Token},
};

#[derive(Parser, Debug)]
#[command(about = "Find the minimax move for a board")]
pub struct SolveArgs {
    /// Board as 9 cells in row-major order, e.g. `XX.OO....`
    pub board: String,

    /// Token to move (`x` or `o`); inferred from piece counts when omitted
    #[arg(long, short = 't')]
    pub to_move: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// What the solver found for a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveSummary {
    pub board: String,
    pub to_move: Token,
    pub best_move: Option<Position>,
    /// From the point of view of the player to move
    pub score: Option<i32>,
    pub nodes: u64,
}

/// Run the solver for `to_move` on a parsed board
pub fn solve(board: &Board, to_move: Option<Token>) -> Result<SolveSummary> {
    let to_move = match to_move {
        Some(token) => token,
        None => board.inferred_turn().ok_or_else(|| {
            anyhow!(
                "Cannot tell whose turn it is (X={}, O={}); pass --to-move",
                board.count(Token::X),
                board.count(Token::O)
            )
        })?,
    };

    let report = MinimaxSolver::search(board, to_move, to_move, to_move.opponent());
    Ok(SolveSummary {
        board: board.all_cells().iter().map(|c| c.mark().to_char()).collect(),
        to_move,
        best_move: report.best.map(|best| best.position),
        score: report.best.map(|best| best.score),
        nodes: report.nodes,
    })
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let to_move = args
        .to_move
        .as_deref()
        .map(|value| parse_token(value, "--to-move"))
        .transpose()?;

    let summary = solve(&board, to_move)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    write_board(&mut std::io::stdout().lock(), &board)?;
    println!();
    print_kv("To move", &summary.to_move.to_string());
    match (summary.best_move, summary.score) {
        (Some(position), Some(score)) => {
            print_kv("Best move", &position.to_string());
            print_kv("Score", &score.to_string());
        }
        _ => {
            let status = if OutcomeEvaluator::is_draw(&board) {
                "drawn"
            } else {
                "won"
            };
            print_kv("Best move", &format!("none (game already {status})"));
        }
    }
    print_kv("Nodes", &summary.nodes.to_string());

    Ok(())
}
