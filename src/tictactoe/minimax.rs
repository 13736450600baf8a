//! Exhaustive minimax search for the automated player
//!
//! The search walks the full game tree below a position with no pruning and
//! no depth discount: a win scores [`WIN_SCORE`] however deep it is found, so
//! the solver is indifferent between winning now and winning later (and
//! between losing now and losing later). Ties are broken by row-major order,
//! which makes every answer reproducible.

use serde::Serialize;
use tracing::{debug, instrument};

use super::{Board, Mark, OutcomeEvaluator, Position, Token};

/// Score of a position the maximizer has won
pub const WIN_SCORE: i32 = 10;

/// Score of a position the minimizer has won
pub const LOSS_SCORE: i32 = -10;

/// Score of a full board with no line
pub const DRAW_SCORE: i32 = 0;

/// A candidate move with its minimax value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

/// Result of a search, including how much of the tree was visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` when the position was already terminal
    pub best: Option<ScoredMove>,
    /// Positions scored below the root
    pub nodes: u64,
}

/// Optimal move selection by full-depth minimax
pub struct MinimaxSolver;

impl MinimaxSolver {
    /// Pick the optimal move for `to_move`.
    ///
    /// Scores are from `maximizer`'s point of view; `minimizer` is the other
    /// token. The caller's board is never modified.
    ///
    /// # Panics
    ///
    /// Panics if `maximizer` and `minimizer` are the same token.
    pub fn best_move(
        board: &Board,
        to_move: Token,
        maximizer: Token,
        minimizer: Token,
    ) -> Option<ScoredMove> {
        Self::search(board, to_move, maximizer, minimizer).best
    }

    /// Like [`best_move`](Self::best_move), also reporting search statistics.
    ///
    /// # Panics
    ///
    /// Panics if `maximizer` and `minimizer` are the same token.
    #[instrument(level = "debug", skip(board), fields(occupied = board.occupied_count()))]
    pub fn search(
        board: &Board,
        to_move: Token,
        maximizer: Token,
        minimizer: Token,
    ) -> SearchReport {
        assert_ne!(maximizer, minimizer, "search needs two distinct sides");

        let mut scratch = *board;
        let mut search = Search {
            maximizer,
            minimizer,
            nodes: 0,
        };

        let best = if search.terminal_score(&scratch).is_some() {
            None
        } else {
            search.choose(&mut scratch, to_move)
        };

        debug!(nodes = search.nodes, ?best, "minimax search finished");
        SearchReport {
            best,
            nodes: search.nodes,
        }
    }
}

struct Search {
    maximizer: Token,
    minimizer: Token,
    nodes: u64,
}

impl Search {
    /// Minimizer's line first, then maximizer's line, then a full board
    fn terminal_score(&self, board: &Board) -> Option<i32> {
        if OutcomeEvaluator::has_winning_line(board, self.minimizer) {
            Some(LOSS_SCORE)
        } else if OutcomeEvaluator::has_winning_line(board, self.maximizer) {
            Some(WIN_SCORE)
        } else if board.is_full() {
            Some(DRAW_SCORE)
        } else {
            None
        }
    }

    fn score(&mut self, board: &mut Board, to_move: Token) -> i32 {
        self.nodes += 1;
        if let Some(score) = self.terminal_score(board) {
            return score;
        }
        // A non-terminal board always has an empty cell
        self.choose(board, to_move)
            .map_or(DRAW_SCORE, |candidate| candidate.score)
    }

    /// Try every empty cell in row-major order, restoring it afterwards.
    fn choose(&mut self, board: &mut Board, to_move: Token) -> Option<ScoredMove> {
        let maximizing = to_move == self.maximizer;
        let mut best: Option<ScoredMove> = None;

        for position in Position::all() {
            let index = position.index();
            if !board.get(index).is_empty() {
                continue;
            }

            board.set(index, to_move.to_mark());
            let score = self.score(board, to_move.opponent());
            board.set(index, Mark::Empty);

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove { position, score });
            }
        }

        best
    }
}
