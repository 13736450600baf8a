//! Shared helpers for the integration tests.
//!
//! The oracle here is a memoized negamax written against the public board
//! API only, so solver results can be checked against an independent
//! computation of the game-theoretic value.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use noughts::{Board, OutcomeEvaluator, Position, Token};

/// Game value for the side to move: 1 win, 0 draw, -1 loss under perfect play.
pub fn game_value(board: &Board, to_move: Token, memo: &mut HashMap<String, i32>) -> i32 {
    let key = format!("{}_{}", board, to_move);
    if let Some(&value) = memo.get(&key) {
        return value;
    }

    let value = if OutcomeEvaluator::has_winning_line(board, to_move.opponent()) {
        -1
    } else if OutcomeEvaluator::has_winning_line(board, to_move) {
        1
    } else if board.is_full() {
        0
    } else {
        board
            .empty_positions()
            .into_iter()
            .map(|position| -game_value(&play(board, position, to_move), to_move.opponent(), memo))
            .max()
            .unwrap_or(0)
    };

    memo.insert(key, value);
    value
}

/// Copy of `board` with `token` placed at `position`
pub fn play(board: &Board, position: Position, token: Token) -> Board {
    let mut next = *board;
    next.place_mark(position.row(), position.column(), token.to_mark())
        .unwrap();
    next
}

pub fn is_terminal(board: &Board) -> bool {
    OutcomeEvaluator::has_winning_line(board, Token::X)
        || OutcomeEvaluator::has_winning_line(board, Token::O)
        || board.is_full()
}

/// Every non-terminal position reachable from the empty board with X opening.
pub fn reachable_positions() -> Vec<(Board, Token)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Token::X)];
    let mut positions = Vec::new();

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert(board.to_string()) || is_terminal(&board) {
            continue;
        }
        positions.push((board, to_move));
        for position in board.empty_positions() {
            stack.push((play(&board, position, to_move), to_move.opponent()));
        }
    }

    positions
}

/// Parse a row-major board literal
pub fn board(cells: &str) -> Board {
    Board::from_string(cells).unwrap()
}

pub fn at(row: usize, column: usize) -> Position {
    Position::new(row, column).unwrap()
}
