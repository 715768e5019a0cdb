use crate::error::MoveError;

use super::board::CELLS;
use super::{Board, Player};

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The game state machine: board, whose turn it is, and the outcome once the
/// game has ended. The outcome is monotonic, it never reverts to ongoing
/// except through an explicit [`reset`](GameState::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game: empty board, X to move, no outcome.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game can still accept moves
    pub fn is_ongoing(&self) -> bool {
        self.outcome.is_none()
    }

    /// Indices of cells a move may target; empty once the game has ended
    pub fn legal_actions(&self) -> Vec<usize> {
        if !self.is_ongoing() {
            return Vec::new();
        }
        self.board.free_cells()
    }

    /// Claim a cell for the acting player.
    ///
    /// On success the cell is marked, the turn flips, and termination is
    /// evaluated: first a win check for the acting player against the 8 win
    /// lines, then a draw check on a full board. A winning move on the final
    /// free cell is therefore a win, not a draw.
    pub fn occupy(&mut self, cell: usize, acting_player: Player) -> Result<(), MoveError> {
        if !self.is_ongoing() {
            return Err(MoveError::GameOver);
        }
        if cell >= CELLS {
            return Err(MoveError::OutOfRange(cell));
        }
        if acting_player != self.current_player {
            return Err(MoveError::WrongTurn(acting_player));
        }

        self.board.place(cell, acting_player.mark())?;
        self.current_player = self.current_player.other();

        if self.board.has_win(acting_player.mark()) {
            self.outcome = Some(GameOutcome::Winner(acting_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        Ok(())
    }

    /// Clear the board and return to the initial state (X to move, ongoing)
    /// without creating a new instance.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
