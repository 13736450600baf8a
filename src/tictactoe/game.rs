//! Turn-taking and outcome tracking for a single game session

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{
    Board, CELL_COUNT, Cell, MinimaxSolver, OutcomeEvaluator, Player, Position, Token, Verdict,
    WinningLine,
};
use crate::{Error, IllegalMoveReason, Result, SessionConfig};

/// Where a session stands
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    InProgress,
    Won { winner: Player, line: WinningLine },
    Draw,
}

impl Outcome {
    /// Win or draw
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Create a session for two players, optionally automating one of them.
///
/// Player one plays X and moves first.
///
/// # Errors
///
/// Returns error if a name is blank or `automated` is not 0 or 1.
pub fn create_session(
    player_one: impl Into<String>,
    player_two: impl Into<String>,
    automated: Option<usize>,
) -> Result<GameSession> {
    GameSession::from_config(&SessionConfig::new(player_one, player_two).with_automated(automated))
}

/// A game between two fixed players.
///
/// All mutation goes through [`apply_move`](Self::apply_move),
/// [`play_automated_turn`](Self::play_automated_turn) and
/// [`restart`](Self::restart). A failed call leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: usize,
    automated: Option<usize>,
    outcome: Outcome,
}

impl GameSession {
    /// Create a session from a validated configuration
    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(GameSession {
            board: Board::new(),
            players: [
                Player::new(config.player_one.as_str(), Token::X),
                Player::new(config.player_two.as_str(), Token::O),
            ],
            active: 0,
            automated: config.automated,
            outcome: Outcome::InProgress,
        })
    }

    /// Place the active player's mark at (row, column).
    ///
    /// If the game goes on and the next player is automated, its reply is
    /// searched and played before returning, so one call can add two marks.
    ///
    /// The mark always goes to the active player, even when that player is
    /// the automated one; hosts must not forward input on the automated
    /// player's turn and call [`play_automated_turn`](Self::play_automated_turn)
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the game is over, the coordinates are
    /// off the board or the cell is taken.
    #[instrument(skip(self), fields(player = %self.players[self.active]))]
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<Outcome> {
        let position = self.check_move(row, column)?;
        self.place(position);

        if self.is_automated_turn() {
            self.play_reply();
        }

        Ok(self.outcome.clone())
    }

    /// Let the automated player move when it is its turn.
    ///
    /// Only needed when player one is automated: after creation or a restart
    /// nothing else will make the opening move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAutomatedTurn`] if the game is over or the active
    /// player is not automated.
    #[instrument(skip(self))]
    pub fn play_automated_turn(&mut self) -> Result<Outcome> {
        if self.is_terminal() {
            return Err(Error::NoAutomatedTurn {
                reason: IllegalMoveReason::GameOver,
            });
        }
        if !self.is_automated_turn() {
            return Err(Error::NoAutomatedTurn {
                reason: IllegalMoveReason::NotAutomatedTurn,
            });
        }

        self.play_reply();
        Ok(self.outcome.clone())
    }

    /// Clear the board and hand the first move back to player one.
    ///
    /// The players (and which of them is automated) stay the same.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.active = 0;
        self.outcome = Outcome::InProgress;
        debug!("session restarted");
    }

    fn check_move(&self, row: usize, column: usize) -> Result<Position> {
        let illegal = |reason| Error::IllegalMove {
            row,
            column,
            reason,
        };

        if self.is_terminal() {
            return Err(illegal(IllegalMoveReason::GameOver));
        }
        let position =
            Position::new(row, column).map_err(|_| illegal(IllegalMoveReason::OutOfRange))?;
        let mark = self.board.mark_at(position);
        if !mark.is_empty() {
            return Err(illegal(IllegalMoveReason::Occupied(mark)));
        }

        Ok(position)
    }

    /// Put the active token on an empty cell, then settle the outcome or pass the turn.
    fn place(&mut self, position: Position) {
        let mover = self.players[self.active].token();
        self.board.set(position.index(), mover.to_mark());
        debug!(%position, token = %mover, "move applied");

        match OutcomeEvaluator::verdict_after_move(&self.board, mover) {
            Some(Verdict::Win(line)) => {
                let winner = self.players[self.active].clone();
                info!(winner = %winner, "game won");
                self.outcome = Outcome::Won { winner, line };
            }
            Some(Verdict::Draw) => {
                info!("game drawn");
                self.outcome = Outcome::Draw;
            }
            None => self.active = 1 - self.active,
        }
    }

    fn play_reply(&mut self) {
        let token = self.players[self.active].token();
        if let Some(reply) = MinimaxSolver::best_move(&self.board, token, token, token.opponent()) {
            debug!(position = %reply.position, score = reply.score, "automated reply");
            self.place(reply.position);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of the nine cells in row-major order
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        *self.board.all_cells()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose mark the next move places (the mover of the final
    /// move once the game is over)
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn automated_player(&self) -> Option<&Player> {
        self.automated.map(|index| &self.players[index])
    }

    /// Whether the game is live and waiting on the automated player
    pub fn is_automated_turn(&self) -> bool {
        !self.is_terminal() && self.automated == Some(self.active)
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn winner(&self) -> Option<&Player> {
        self.outcome.winner()
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.outcome.winning_line()
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }
}
