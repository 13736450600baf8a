//! Tic-Tac-Toe engine with an automated minimax opponent
//!
//! This crate provides:
//! - A 3x3 board model with typed marks and positions
//! - Win and draw detection over the eight fixed lines
//! - A turn-taking game session that rejects illegal moves without side effects
//! - An exhaustive minimax solver used to play one side automatically
//! - A small command-line host for playing and solving positions

pub mod cli;
pub mod config;
pub mod error;
pub mod tictactoe;

pub use config::SessionConfig;
pub use error::{Error, IllegalMoveReason, Result};
pub use tictactoe::{
    Board, Cell, GameSession, Mark, MinimaxSolver, Outcome, OutcomeEvaluator, Player, Position,
    ScoredMove, Token, WinningLine, create_session,
};
