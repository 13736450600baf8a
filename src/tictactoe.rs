//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod player;

pub use board::{Board, CELL_COUNT, Cell, Mark, Position, SIZE, Token};
pub use game::{GameSession, Outcome, create_session};
pub use lines::{OutcomeEvaluator, Verdict, WINNING_LINES, WinningLine};
pub use minimax::{
    DRAW_SCORE, LOSS_SCORE, MinimaxSolver, ScoredMove, SearchReport, WIN_SCORE,
};
pub use player::Player;
