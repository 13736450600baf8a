//! Winning line detection for Tic-Tac-Toe

use serde::Serialize;

use super::{Board, Cell, Position, Token};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The three cells of a completed line, in the order listed in [`WINNING_LINES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    cells: [Cell; 3],
}

impl WinningLine {
    pub fn cells(&self) -> &[Cell; 3] {
        &self.cells
    }

    pub fn positions(&self) -> [Position; 3] {
        self.cells.map(|cell| cell.position())
    }

    /// Whether the line runs through a position
    pub fn contains(&self, position: Position) -> bool {
        self.cells.iter().any(|cell| cell.position() == position)
    }
}

/// How a move left the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Win(WinningLine),
    Draw,
}

/// Stateless checks for wins and draws
pub struct OutcomeEvaluator;

impl OutcomeEvaluator {
    /// Find the first completed line of `token`'s mark
    pub fn winning_line(board: &Board, token: Token) -> Option<WinningLine> {
        let target = token.to_mark();
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&idx| board.get(idx) == target))
            .map(|line| WinningLine {
                cells: line.map(|idx| board.all_cells()[idx]),
            })
    }

    /// Check if a token occupies any complete line
    pub fn has_winning_line(board: &Board, token: Token) -> bool {
        let target = token.to_mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| board.get(idx) == target))
    }

    /// Full board with no line for either side
    pub fn is_draw(board: &Board) -> bool {
        board.is_full()
            && !Self::has_winning_line(board, Token::X)
            && !Self::has_winning_line(board, Token::O)
    }

    /// Judge the board right after `mover` placed a mark.
    ///
    /// Only the mover can have completed a line, so the opponent is not
    /// checked. A move that fills the board and completes a line is a win.
    pub fn verdict_after_move(board: &Board, mover: Token) -> Option<Verdict> {
        if let Some(line) = Self::winning_line(board, mover) {
            Some(Verdict::Win(line))
        } else if board.is_full() {
            Some(Verdict::Draw)
        } else {
            None
        }
    }
}
