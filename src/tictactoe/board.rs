//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of rows (and columns) on the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    /// Player one's token
    X,
    /// Player two's token
    O,
}

impl Mark {
    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' | '0' => Some(Mark::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// The token that owns this mark, if any
    pub fn token(self) -> Option<Token> {
        match self {
            Mark::X => Some(Token::X),
            Mark::O => Some(Token::O),
            Mark::Empty => None,
        }
    }
}

/// A mark a player can own. Unlike [`Mark`] this can never be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    X,
    O,
}

impl Token {
    /// Get the opposing token
    pub fn opponent(self) -> Token {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }

    /// Convert token to the mark it leaves on the board
    pub fn to_mark(self) -> Mark {
        match self {
            Token::X => Mark::X,
            Token::O => Mark::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_mark().to_char()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A (row, column) coordinate that is known to be on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Create a position, rejecting coordinates outside 0-2
    pub fn new(row: usize, column: usize) -> Result<Self> {
        if row >= SIZE || column >= SIZE {
            return Err(Error::OutOfRange { row, column });
        }
        Ok(Position { row, column })
    }

    /// Position for a row-major index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Position {
            row: index / SIZE,
            column: index % SIZE,
        })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Row-major index (0-8)
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// All nine positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Position {
            row: index / SIZE,
            column: index % SIZE,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A square on the board: a fixed position plus whatever mark it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    position: Position,
    mark: Mark,
}

impl Cell {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_empty(&self) -> bool {
        self.mark.is_empty()
    }
}

/// The 3x3 grid. Cells are created once, in row-major order, and only their
/// marks ever change.
///
/// This type implements `Copy`; the search takes a scratch copy instead of
/// touching the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: std::array::from_fn(|index| Cell {
                position: Position {
                    row: index / SIZE,
                    column: index % SIZE,
                },
                mark: Mark::Empty,
            }),
        }
    }

    /// Create a board from a string of 9 cells.
    ///
    /// Whitespace is ignored, `.` and `_` are empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if there are not exactly 9 cells or a character is not a
    /// valid cell.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (index, &c) in chars.iter().enumerate() {
            let mark = Mark::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: index,
                context: s.to_string(),
            })?;
            board.set(index, mark);
        }
        Ok(board)
    }

    /// Get the cell at (row, column)
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell> {
        let position = Position::new(row, column)?;
        Ok(self.cells[position.index()])
    }

    /// Get the mark at a position
    pub fn mark_at(&self, position: Position) -> Mark {
        self.cells[position.index()].mark
    }

    /// Overwrite the mark at (row, column) and return the one it replaced.
    ///
    /// No turn or occupancy rules are applied here; that is the session's job.
    pub fn place_mark(&mut self, row: usize, column: usize, mark: Mark) -> Result<Mark> {
        let position = Position::new(row, column)?;
        let previous = self.cells[position.index()].mark;
        self.set(position.index(), mark);
        Ok(previous)
    }

    pub(crate) fn get(&self, index: usize) -> Mark {
        self.cells[index].mark
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index].mark = mark;
    }

    /// All nine cells in row-major order
    pub fn all_cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Whether every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.mark = Mark::Empty;
        }
    }

    /// Get all empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.position)
            .collect()
    }

    /// Count the number of occupied cells, i.e. moves played so far
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Count the cells holding a token's mark
    pub fn count(&self, token: Token) -> usize {
        let mark = token.to_mark();
        self.cells.iter().filter(|cell| cell.mark == mark).count()
    }

    /// Whose turn it is according to the piece counts, assuming X opened.
    ///
    /// Returns `None` when the counts cannot come from alternating play.
    pub fn inferred_turn(&self) -> Option<Token> {
        let x = self.count(Token::X);
        let o = self.count(Token::O);
        if x == o {
            Some(Token::X)
        } else if x == o + 1 {
            Some(Token::O)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.mark.to_char())?;
            if (i + 1).is_multiple_of(SIZE) && i < CELL_COUNT - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
