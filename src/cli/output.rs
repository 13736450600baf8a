//! Text rendering for the CLI

use std::io::{self, Write};

use crate::tictactoe::{Board, GameSession, Outcome};

/// Write the board as a grid with row and column labels
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out, "    0   1   2")?;
    for row in 0..3 {
        let marks: Vec<String> = (0..3)
            .map(|column| {
                board
                    .cell_at(row, column)
                    .map(|cell| cell.mark().to_char().to_string())
                    .unwrap_or_default()
            })
            .collect();
        writeln!(out, "{row}   {}", marks.join(" | "))?;
        if row < 2 {
            writeln!(out, "   ---+---+---")?;
        }
    }
    Ok(())
}

/// One-line description of where the session stands
pub fn describe_outcome(session: &GameSession) -> String {
    match session.outcome() {
        Outcome::InProgress => format!("{} to move", session.active_player()),
        Outcome::Won { winner, line } => {
            let cells: Vec<String> = line.positions().iter().map(|p| p.to_string()).collect();
            format!("{winner} wins on {}", cells.join(" "))
        }
        Outcome::Draw => "Draw".to_string(),
    }
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:12} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_board() {
        let board = Board::from_string("X...O...X").unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("0   X | . | ."));
        assert!(text.contains("1   . | O | ."));
        assert!(text.contains("2   . | . | X"));
    }

    #[test]
    fn test_describe_win() {
        let mut session = crate::create_session("Ada", "Grace", None).unwrap();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            session.apply_move(row, column).unwrap();
        }
        assert_eq!(
            describe_outcome(&session),
            "Ada (X) wins on (0, 0) (0, 1) (0, 2)"
        );
    }
}
